use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

mod defaults;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Log verbosity: error, info or debug.
    #[serde(default = "defaults::log_level")]
    pub log_level: String,

    #[serde(default = "AuthConfig::default")]
    pub auth: AuthConfig,

    #[serde(default = "SessionConfig::default")]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Password for the seeded admin account.
    #[serde(default = "defaults::admin_password")]
    pub admin_password: String,

    /// Install the demonstration accounts (admin, teacher1, student1)
    /// at startup. Without them a fresh process has no users at all.
    #[serde(default = "defaults::enable")]
    pub seed_demo_users: bool,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    /// Inactivity window, in seconds, after which the host should deliver
    /// a timeout event to the session. Nothing in this process schedules
    /// the event automatically.
    #[serde(default = "defaults::session_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut cfg = Self::read(path)?;
        cfg.validate().context("validate config")?;
        Ok(cfg)
    }

    fn read(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(path) => {
                let path = shellexpand::full(path)
                    .with_context(|| format!("expand config path '{path}'"))?;
                PathBuf::from(path.as_ref())
            }
            None => PathBuf::from(shellexpand::tilde("~/.config/aula.toml").as_ref()),
        };

        match fs::read_to_string(&path) {
            Ok(toml_str) => {
                let cfg: Config = toml::from_str(&toml_str)
                    .with_context(|| format!("parse config file '{}' toml", path.display()))?;
                Ok(cfg)
            }

            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),

            Err(err) => Err(err).with_context(|| format!("read config file '{}'", path.display())),
        }
    }

    pub fn default() -> Self {
        Self {
            log_level: defaults::log_level(),
            auth: AuthConfig::default(),
            session: SessionConfig::default(),
        }
    }

    fn validate(&mut self) -> Result<()> {
        match self.log_level.as_str() {
            "error" | "info" | "debug" => {}
            _ => bail!(
                "config log_level should be one of [error, info, debug], found '{}'",
                self.log_level
            ),
        }

        if self.auth.admin_password.is_empty() {
            bail!("config auth.admin_password cannot be empty");
        }

        if self.session.timeout_secs < 60 || self.session.timeout_secs > 86400 {
            bail!(
                "config session.timeout_secs should be in range [60,86400], found {}",
                self.session.timeout_secs
            );
        }

        Ok(())
    }
}

impl AuthConfig {
    pub fn default() -> Self {
        Self {
            admin_password: defaults::admin_password(),
            seed_demo_users: defaults::enable(),
        }
    }

    pub fn has_default_admin_password(&self) -> bool {
        self.admin_password == defaults::admin_password()
    }
}

impl SessionConfig {
    pub fn default() -> Self {
        Self {
            timeout_secs: defaults::session_timeout_secs(),
        }
    }
}
