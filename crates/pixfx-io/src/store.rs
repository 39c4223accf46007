//! Linear-light load/save on top of [`png`](crate::png).
//!
//! Load: PNG -> normalized floats -> gamma decode -> [`PixelBuffer`].
//! Save: [`PixelBuffer`] -> clamp + gamma encode -> x255 -> PNG.

use crate::{png, IoResult, PipelineConfig};
use pixfx_core::PixelBuffer;
use pixfx_transfer::GammaCodec;
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads a PNG and converts it to linear light.
pub fn load_linear<P: AsRef<Path>>(path: P, codec: &GammaCodec) -> IoResult<PixelBuffer> {
    let decoded = png::read(path)?;
    Ok(codec.decode_buffer(&decoded.into_buffer()?))
}

/// Gamma-encodes a linear buffer and writes it as an 8-bit PNG.
pub fn save_linear<P: AsRef<Path>>(
    path: P,
    buffer: &PixelBuffer,
    codec: &GammaCodec,
) -> IoResult<()> {
    let encoded = codec.encode_buffer(buffer);
    let (width, height, channels) = encoded.shape();
    png::write(path, width, height, channels, encoded.data())
}

/// Loads from and saves to configured directories.
///
/// Relative names resolve against [`PipelineConfig::input_dir`] and
/// [`PipelineConfig::output_dir`]; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct ImageStore {
    config: PipelineConfig,
    codec: GammaCodec,
}

impl ImageStore {
    /// Validates `config` and builds the codec it describes.
    pub fn new(config: PipelineConfig) -> IoResult<Self> {
        config.validate()?;
        let codec = GammaCodec::new(config.gamma)?;
        Ok(Self { config, codec })
    }

    /// The configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The gamma codec in use.
    pub fn codec(&self) -> &GammaCodec {
        &self.codec
    }

    /// Resolves an input name.
    pub fn input_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.config.input_dir.join(name)
    }

    /// Resolves an output name.
    pub fn output_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.config.output_dir.join(name)
    }

    /// Loads `name` from the input directory as linear light.
    pub fn load(&self, name: impl AsRef<Path>) -> IoResult<PixelBuffer> {
        let path = self.input_path(name);
        debug!(path = %path.display(), gamma = self.codec.gamma(), "Loading image");
        load_linear(&path, &self.codec)
    }

    /// Saves `buffer` to the output directory, creating it if missing.
    ///
    /// Returns the path written.
    pub fn save(&self, name: impl AsRef<Path>, buffer: &PixelBuffer) -> IoResult<PathBuf> {
        let path = self.output_path(name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), shape = ?buffer.shape(), "Saving image");
        save_linear(&path, buffer, &self.codec)?;
        Ok(path)
    }
}
