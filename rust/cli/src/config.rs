use handsort_engine::cards::RankUniverse;
use handsort_engine::locate::ParenScope;
use handsort_engine::pipeline::PipelineConfig;
use handsort_service::settings::{DEFAULT_TRIGGER, ServiceSettings};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HANDSORT_CONFIG";
pub const UNIVERSE_ENV: &str = "HANDSORT_UNIVERSE";
pub const SCOPE_ENV: &str = "HANDSORT_SCOPE";
pub const TRIGGER_ENV: &str = "HANDSORT_TRIGGER";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub universe: RankUniverse,
    pub scope: ParenScope,
    pub trigger: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            universe: RankUniverse::default(),
            scope: ParenScope::default(),
            trigger: DEFAULT_TRIGGER.into(),
        }
    }
}

impl Config {
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig::new(self.universe, self.scope)
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            trigger: self.trigger.clone(),
            ..ServiceSettings::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub universe: ValueSource,
    pub scope: ValueSource,
    pub trigger: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            universe: ValueSource::Default,
            scope: ValueSource::Default,
            trigger: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Apply command line flags on top of the loaded layers.
    pub fn with_flags(mut self, universe: Option<RankUniverse>, scope: Option<ParenScope>) -> Self {
        if let Some(v) = universe {
            self.config.universe = v;
            self.sources.universe = ValueSource::Flag;
        }
        if let Some(v) = scope {
            self.config.scope = v;
            self.sources.scope = ValueSource::Flag;
        }
        self
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_flags(None, None)
}

/// Load every layer, then apply command line flags.
///
/// An environment value for a key the flags set is never parsed, so a bad
/// `HANDSORT_UNIVERSE` does not fail `--universe restricted`.
pub fn load_with_flags(
    universe_flag: Option<RankUniverse>,
    scope_flag: Option<ParenScope>,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.universe {
            cfg.universe = v;
            sources.universe = ValueSource::File;
        }
        if let Some(v) = f.scope {
            cfg.scope = v;
            sources.scope = ValueSource::File;
        }
        if let Some(v) = f.trigger {
            cfg.trigger = v;
            sources.trigger = ValueSource::File;
        }
        tracing::debug!(path = %path, "config file loaded");
    }

    if universe_flag.is_none()
        && let Ok(universe) = std::env::var(UNIVERSE_ENV)
        && !universe.is_empty()
    {
        cfg.universe = universe
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", UNIVERSE_ENV, e)))?;
        sources.universe = ValueSource::Env;
    }
    if scope_flag.is_none()
        && let Ok(scope) = std::env::var(SCOPE_ENV)
        && !scope.is_empty()
    {
        cfg.scope = scope
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", SCOPE_ENV, e)))?;
        sources.scope = ValueSource::Env;
    }
    if let Ok(trigger) = std::env::var(TRIGGER_ENV)
        && !trigger.is_empty()
    {
        cfg.trigger = trigger;
        sources.trigger = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    }
    .with_flags(universe_flag, scope_flag))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    universe: Option<RankUniverse>,
    #[serde(default)]
    scope: Option<ParenScope>,
    #[serde(default)]
    trigger: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.service_settings()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

/// Clears the config variables for one test and restores them on drop.
#[cfg(test)]
pub(crate) struct CleanEnv {
    saved: Vec<(&'static str, Option<String>)>,
}

#[cfg(test)]
impl CleanEnv {
    pub(crate) fn new() -> Self {
        let keys = [CONFIG_ENV, UNIVERSE_ENV, SCOPE_ENV, TRIGGER_ENV];
        let saved = keys.iter().map(|&k| (k, std::env::var(k).ok())).collect();
        for key in keys {
            unsafe {
                std::env::remove_var(key);
            }
        }
        Self { saved }
    }

    pub(crate) fn set(&self, key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

#[cfg(test)]
impl Drop for CleanEnv {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
