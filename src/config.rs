//! Engine configuration.
//!
//! [`EngineConfig`] is a plain serde struct; every field has a default so a JSON document only
//! needs to name what it changes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{CompositeError, CompositeResult};

/// Clamp policy applied to the dodge/burn/light family on float formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatClamp {
    /// Results stay in `[0, 1]`.
    #[default]
    Sdr,
    /// Results may exceed `1.0`.
    Hdr,
}

/// Parameter wrapper used by the `alphadarken` mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaDarkenStyle {
    /// Opacity and flow act independently.
    #[default]
    Creamy,
    /// Flow scales opacity.
    Hard,
}

/// Settings shared by every compositor a registry creates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Run fixed-format compositors on batches of lanes. `false` keeps every pixel scalar.
    pub vectorize: bool,
    /// Clamp policy for 32-bit float formats.
    pub float_clamp: FloatClamp,
    /// AlphaDarken parameter wrapper.
    pub alpha_darken: AlphaDarkenStyle,
    /// Worker threads for the parallel strip driver. `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Rows per strip for the parallel strip driver.
    pub strip_rows: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vectorize: true,
            float_clamp: FloatClamp::Sdr,
            alpha_darken: AlphaDarkenStyle::Creamy,
            threads: None,
            strip_rows: 64,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> CompositeResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CompositeError::config(format!("parse engine config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CompositeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CompositeError::config(format!("parse engine config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CompositeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CompositeError::config(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric fields.
    pub fn validate(&self) -> CompositeResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(CompositeError::config("'threads' must be >= 1 when set"));
        }
        if self.strip_rows == 0 {
            return Err(CompositeError::config("'strip_rows' must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
