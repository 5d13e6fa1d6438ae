use crate::{
    config::{
        cli_args::{
            Follow,
            Otterprobe,
        },
        error::ConfigError,
        system::DEFAULT_ERIGON_URL,
    },
    log_info,
};

use serde::Deserialize;
use url::Url;

use std::{
    fs,
    path::Path,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // `None` means nothing was configured at all, which the prober rejects.
    // `Some("")` means "use `default_url`".
    pub url: Option<String>,
    pub default_url: String,
    pub ttl: Duration,
    pub poll_interval: Duration,
    pub follow: Follow,
    pub genesis: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: None,
            default_url: DEFAULT_ERIGON_URL.to_string(),
            ttl: Duration::from_millis(10_000),
            poll_interval: Duration::from_millis(4_000),
            follow: Follow::Off,
            genesis: false,
        }
    }
}

// Layout of `config.toml`. Everything is optional so a file can
// override just the bits it cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    otterprobe: FileSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    url: Option<String>,
    default_url: Option<String>,
    ttl: Option<u64>,
    poll_interval: Option<u64>,
    follow: Option<Follow>,
    genesis: Option<bool>,
}

impl Settings {
    pub fn new(args: Otterprobe) -> Result<Settings, ConfigError> {
        let base = match &args.config {
            Some(path) => {
                log_info!("Using config file at {}", path.display());
                Settings::from_file(path)?
            }
            None => {
                log_info!("Using command line arguments for settings...");
                Settings::default()
            }
        };

        base.apply_args(args)
    }

    pub fn from_file(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
            config: path.to_path_buf(),
            err,
        })?;

        Settings::from_toml_str(&contents).map_err(|err| ConfigError::FailedDeserialization {
            config: path.to_path_buf(),
            err,
        })
    }

    fn from_toml_str(contents: &str) -> Result<Settings, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        let file = file.otterprobe;
        let defaults = Settings::default();

        Ok(Settings {
            url: file.url,
            default_url: file.default_url.unwrap_or(defaults.default_url),
            ttl: file.ttl.map(Duration::from_millis).unwrap_or(defaults.ttl),
            poll_interval: file
                .poll_interval
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            follow: file.follow.unwrap_or(defaults.follow),
            genesis: file.genesis.unwrap_or(defaults.genesis),
        })
    }

    // Command line always wins over whatever the file or defaults said
    fn apply_args(mut self, args: Otterprobe) -> Result<Settings, ConfigError> {
        if let Some(url) = args.url {
            self.url = Some(url);
        }
        if let Some(default_url) = args.default_url {
            self.default_url = default_url;
        }
        if let Some(ttl) = args.ttl {
            self.ttl = Duration::from_millis(ttl);
        }
        if let Some(poll_interval) = args.poll_interval {
            self.poll_interval = Duration::from_millis(poll_interval);
        }
        if let Some(follow) = args.follow {
            self.follow = follow;
        }
        if args.genesis {
            self.genesis = true;
        } else if args.no_genesis {
            self.genesis = false;
        }

        // `tokio::time::interval` panics on a zero period and a zero
        // timeout fails every request
        if self.ttl.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "ttl" });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "poll_interval",
            });
        }

        // The endpoint is left alone, a bad one gets classified by the prober.
        // The fallback has to parse though.
        if let Err(err) = Url::parse(&self.default_url) {
            return Err(ConfigError::InvalidUrl {
                field: "default_url",
                value: self.default_url,
                err,
            });
        }

        Ok(self)
    }
}
