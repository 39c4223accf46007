//! Pipeline configuration.
//!
//! Gamma and directories are passed around explicitly as a
//! [`PipelineConfig`]; nothing is read from module-level state.
//!
//! # YAML
//!
//! ```yaml
//! gamma: 2.4
//! input_dir: shots/in
//! output_dir: shots/out
//! ```
//!
//! Missing keys fall back to [`PipelineConfig::default`].

use crate::{IoError, IoResult};
use pixfx_transfer::DEFAULT_GAMMA;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Gamma and I/O roots for one processing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Exponent for decode (`v^gamma`) and encode (`v^(1/gamma)`).
    pub gamma: f32,
    /// Directory relative input names are resolved against.
    pub input_dir: PathBuf,
    /// Directory relative output names are resolved against.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl PipelineConfig {
    /// Parses a YAML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_io::PipelineConfig;
    ///
    /// let cfg = PipelineConfig::from_yaml_str("gamma: 2.4\n").unwrap();
    /// assert_eq!(cfg.gamma, 2.4);
    /// assert_eq!(cfg.output_dir, PipelineConfig::default().output_dir);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> IoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading pipeline config");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> IoResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Rejects a gamma that is not finite and positive.
    pub fn validate(&self) -> IoResult<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(IoError::Config(format!(
                "gamma must be finite and > 0, got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    /// Sets the gamma.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the input directory.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.gamma, 2.2);
        assert_eq!(cfg.input_dir, PathBuf::from("input"));
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_yaml_full() {
        let cfg = PipelineConfig::from_yaml_str(
            "gamma: 1.8\ninput_dir: /data/in\noutput_dir: /data/out\n",
        )
        .unwrap();
        assert_eq!(cfg.gamma, 1.8);
        assert_eq!(cfg.input_dir, PathBuf::from("/data/in"));
        assert_eq!(cfg.output_dir, PathBuf::from("/data/out"));
    }

    #[test]
    fn test_yaml_rejects_bad_gamma() {
        assert!(matches!(
            PipelineConfig::from_yaml_str("gamma: -1.0\n").unwrap_err(),
            IoError::Config(_)
        ));
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(matches!(
            PipelineConfig::from_yaml_str("gama: 2.0\n").unwrap_err(),
            IoError::Yaml(_)
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let cfg = PipelineConfig::default()
            .with_gamma(2.6)
            .with_input_dir("a")
            .with_output_dir("b");
        let text = cfg.to_yaml_string().unwrap();
        assert_eq!(PipelineConfig::from_yaml_str(&text).unwrap(), cfg);
    }
}
