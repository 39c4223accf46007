//! CLI command implementations

pub mod blur;
pub mod brightness;
pub mod combine;
pub mod contrast;
pub mod edges;
pub mod kernel;

use crate::Cli;
use anyhow::{Context as _, Result};
use pixfx_core::PixelBuffer;
use pixfx_io::{ImageStore, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved settings shared by every command.
pub struct Context {
    pub store: ImageStore,
    pub parallel: bool,
    pub verbose: bool,
}

impl Context {
    /// Builds the pipeline config: defaults, then `--config`, then flags.
    ///
    /// Without a config file, relative paths resolve against the working
    /// directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => PipelineConfig::default()
                .with_input_dir(".")
                .with_output_dir("."),
        };
        if let Some(gamma) = cli.gamma {
            config = config.with_gamma(gamma);
        }
        if let Some(dir) = &cli.input_dir {
            config = config.with_input_dir(dir);
        }
        if let Some(dir) = &cli.output_dir {
            config = config.with_output_dir(dir);
        }
        debug!(?config, parallel = cli.parallel, "Resolved pipeline config");

        Ok(Self {
            store: ImageStore::new(config).context("Invalid pipeline config")?,
            parallel: cli.parallel,
            verbose: cli.verbose,
        })
    }

    /// Load image as linear light
    pub fn load(&self, path: &Path) -> Result<PixelBuffer> {
        self.store
            .load(path)
            .with_context(|| format!("Failed to load: {}", self.store.input_path(path).display()))
    }

    /// Save linear image
    pub fn save(&self, path: &Path, image: &PixelBuffer) -> Result<PathBuf> {
        let written = self
            .store
            .save(path, image)
            .with_context(|| format!("Failed to save: {}", self.store.output_path(path).display()))?;
        if self.verbose {
            println!("Wrote {}", written.display());
        }
        Ok(written)
    }
}
