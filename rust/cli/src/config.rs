use serde::{Deserialize, Serialize};
use std::fs;

/// When a game stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Until {
    /// Keep calling words until every player has won
    All,
    /// Stop at the first bingo
    First,
}

impl Until {
    pub fn as_str(&self) -> &'static str {
        match self {
            Until::All => "all",
            Until::First => "first",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Until::All),
            "first" => Some(Until::First),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rows: usize,
    pub columns: usize,
    pub turn_delay_ms: u64,
    pub until: Until,
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
    pub seed: ValueSource,
    pub rows: ValueSource,
    pub columns: ValueSource,
    pub turn_delay_ms: ValueSource,
    pub until: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            rows: ValueSource::Default,
            columns: ValueSource::Default,
            turn_delay_ms: ValueSource::Default,
            until: ValueSource::Default,
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
            seed: None,
            rows: 4,
            columns: 4,
            turn_delay_ms: 3_500,
            until: Until::All,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BINGO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rows {
            cfg.rows = v;
            sources.rows = ValueSource::File;
        }
        if let Some(v) = f.columns {
            cfg.columns = v;
            sources.columns = ValueSource::File;
        }
        if let Some(v) = f.turn_delay_ms {
            cfg.turn_delay_ms = v;
            sources.turn_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.until {
            cfg.until = v;
            sources.until = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BINGO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rows) = std::env::var("BINGO_ROWS")
        && !rows.is_empty()
    {
        cfg.rows = rows
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rows".into()))?;
        sources.rows = ValueSource::Env;
    }
    if let Ok(columns) = std::env::var("BINGO_COLUMNS")
        && !columns.is_empty()
    {
        cfg.columns = columns
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid columns".into()))?;
        sources.columns = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("BINGO_TURN_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.turn_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid turn delay".into()))?;
        sources.turn_delay_ms = ValueSource::Env;
    }
    if let Ok(until) = std::env::var("BINGO_UNTIL")
        && !until.is_empty()
    {
        cfg.until = Until::parse(&until)
            .ok_or_else(|| ConfigError::Invalid("Invalid until (expected all or first)".into()))?;
        sources.until = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    columns: Option<usize>,
    #[serde(default)]
    turn_delay_ms: Option<u64>,
    #[serde(default)]
    until: Option<Until>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rows == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rows must be >=1".into(),
        ));
    }
    if cfg.columns == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: columns must be >=1".into(),
        ));
    }
    if cfg.rows.checked_mul(cfg.columns).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: a {}x{} card is too large",
            cfg.rows, cfg.columns
        )));
    }
    Ok(())
}
