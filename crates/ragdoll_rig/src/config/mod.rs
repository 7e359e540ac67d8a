//! Configuration system

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Suffix appended to a bone's name to form the name of its rotator node
pub const DEFAULT_ROTATOR_SUFFIX: &str = "_ColliderRotator";

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match format {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for the ragdoll collider helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Suffix naming a bone's rotator child (`<bone><suffix>`)
    pub rotator_suffix: String,

    /// Largest world-space drift of a collider center tolerated after a
    /// position-preserving rotation before a warning is logged
    pub position_tolerance: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            rotator_suffix: DEFAULT_ROTATOR_SUFFIX.to_string(),
            position_tolerance: 1e-4,
        }
    }
}

impl Config for RigConfig {}

impl RigConfig {
    /// Name of the rotator node belonging to `bone_name`
    pub fn rotator_name(&self, bone_name: &str) -> String {
        format!("{bone_name}{}", self.rotator_suffix)
    }
}
