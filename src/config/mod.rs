use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_EMAIL: &str = "JIRA_EMAIL";
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const ENV_BASE_URL: &str = "JIRA_BASE_URL";

/// Optional on-disk configuration. Environment variables win over every field.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// The three values needed to talk to the tracker, all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
    pub base_url: String,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timesheet-worklogs")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load the YAML file at `path` (or the default location).
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_file(), false),
        };

        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse config file {}: {}", path.display(), e))
        })
    }

    /// Overlay non-empty `JIRA_*` environment variables on top of the file values.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: Option<String>| {
            lookup(key).filter(|v| !v.is_empty()).or(fallback)
        };
        Self {
            email: pick(ENV_EMAIL, self.email),
            api_token: pick(ENV_API_TOKEN, self.api_token),
            base_url: pick(ENV_BASE_URL, self.base_url),
        }
    }

    /// Fail unless all three credentials are present and non-empty.
    pub fn credentials(self) -> AppResult<Credentials> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        match (
            non_empty(self.email),
            non_empty(self.api_token),
            non_empty(self.base_url),
        ) {
            (Some(email), Some(api_token), Some(base_url)) => Ok(Credentials {
                email,
                api_token,
                base_url,
            }),
            _ => Err(AppError::Config(format!(
                "Set the {ENV_EMAIL}, {ENV_API_TOKEN} and {ENV_BASE_URL} environment variables"
            ))),
        }
    }
}
