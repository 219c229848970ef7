use crate::error::{ForwardError, Result};
use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "succ-forward.toml";
pub const ENV_PREFIX: &str = "SUCC_FORWARD";

const DEFAULT_JAVA: &str = "java";
const DEFAULT_JAR: &str = "SuperCC.jar";

/// How the level number is passed to SuperCC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelArgument {
    /// `LEVELSET N`, the legacy CCEdit form. Current SuperCC builds ignore
    /// the bare number and open level 1.
    #[default]
    Positional,
    /// `LEVELSET -l N`, required for current SuperCC builds to open level N.
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForwarderConfig {
    #[serde(default = "default_java")]
    pub java: String,

    #[serde(default = "default_jar")]
    pub jar: String,

    #[serde(default)]
    pub level_argument: LevelArgument,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            java: default_java(),
            jar: default_jar(),
            level_argument: LevelArgument::default(),
        }
    }
}

fn default_java() -> String {
    DEFAULT_JAVA.to_string()
}

fn default_jar() -> String {
    DEFAULT_JAR.to_string()
}

impl ForwarderConfig {
    /// Load configuration from `succ-forward.toml` in `dir` (if present),
    /// overridden by `SUCC_FORWARD_*` environment variables.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, None)
    }

    /// Same as [`ForwarderConfig::load`], reading overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(dir: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(env);

        let settings = Config::builder()
            .add_source(
                File::from(config_path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()
            .map_err(|e| {
                ForwardError::ConfigError(format!("Failed to read {CONFIG_FILE_NAME}: {e}"))
            })?;

        let config: ForwarderConfig = settings
            .try_deserialize()
            .map_err(|e| ForwardError::ConfigError(format!("Invalid configuration: {e}")))?;

        log::debug!("Resolved config: {config:?}");
        Ok(config)
    }
}
