//! Project manifest (pgen.yaml) parsing.
//!
//! The manifest pins the glyph tile directory and the output directory so
//! they need not be repeated on every invocation. CLI flags override
//! manifest values, which override the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PgenError, Result};

/// Default manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "pgen.yaml";

/// Project manifest loaded from pgen.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory containing the glyph tile PNGs.
    #[serde(default = "default_glyphs")]
    pub glyphs: PathBuf,

    /// Output directory for generated patterns.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_glyphs() -> PathBuf {
    PathBuf::from("glyphs")
}

fn default_output() -> PathBuf {
    PathBuf::from("patterns")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a pgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PgenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pgen.yaml syntax".to_string()),
        })
    }

    /// Load the manifest from the working directory when present,
    /// defaults otherwise.
    pub fn discover() -> Result<Self> {
        let path = Path::new(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
