use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub default_bet: u32,
    pub value_limit: u32,
    pub dealer_stop: u32,
    pub packs: u32,
    pub reset_when_remaining: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub default_bet: ValueSource,
    pub value_limit: ValueSource,
    pub dealer_stop: ValueSource,
    pub packs: ValueSource,
    pub reset_when_remaining: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            default_bet: ValueSource::Default,
            value_limit: ValueSource::Default,
            dealer_stop: ValueSource::Default,
            packs: ValueSource::Default,
            reset_when_remaining: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: 1_000,
            default_bet: 5,
            value_limit: 21,
            dealer_stop: 17,
            packs: 10,
            reset_when_remaining: 1,
            seed: None,
        }
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLACKJACK_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.default_bet {
            cfg.default_bet = v;
            sources.default_bet = ValueSource::File;
        }
        if let Some(v) = f.value_limit {
            cfg.value_limit = v;
            sources.value_limit = ValueSource::File;
        }
        if let Some(v) = f.dealer_stop {
            cfg.dealer_stop = v;
            sources.dealer_stop = ValueSource::File;
        }
        if let Some(v) = f.packs {
            cfg.packs = v;
            sources.packs = ValueSource::File;
        }
        if let Some(v) = f.reset_when_remaining {
            cfg.reset_when_remaining = v;
            sources.reset_when_remaining = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("BLACKJACK_BET")
        && !bet.is_empty()
    {
        cfg.default_bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.default_bet = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    default_bet: Option<u32>,
    #[serde(default)]
    value_limit: Option<u32>,
    #[serde(default)]
    dealer_stop: Option<u32>,
    #[serde(default)]
    packs: Option<u32>,
    #[serde(default)]
    reset_when_remaining: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.default_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_bet must be >=1".into(),
        ));
    }
    if cfg.starting_balance < cfg.default_bet {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must cover default_bet".into(),
        ));
    }
    if cfg.packs == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: packs must be >=1".into(),
        ));
    }
    if cfg.dealer_stop > cfg.value_limit {
        return Err(ConfigError::Invalid(
            "Invalid configuration: dealer_stop must not exceed value_limit".into(),
        ));
    }
    Ok(())
}
