use crate::errors::{AppError, AppResult};
use crate::models::color::Color;
use crate::models::day::Weekday;
use crate::models::options::{DEFAULT_TERM, parse_day_end};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name shown in the page header when the schedule file gives none.
    #[serde(default)]
    pub owner_label: String,
    #[serde(default = "default_term")]
    pub term: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
    #[serde(default = "default_days")]
    pub days: Vec<Weekday>,
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_term() -> String {
    DEFAULT_TERM.to_string()
}
fn default_day_end() -> String {
    "6 PM".to_string()
}
fn default_days() -> Vec<Weekday> {
    Weekday::ALL.to_vec()
}
fn default_color() -> String {
    "Blue".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_label: String::new(),
            term: default_term(),
            day_end: default_day_end(),
            days: default_days(),
            default_color: default_color(),
        }
    }
}

impl Config {
    /// Platform configuration directory, e.g. `~/.config/rschedule`.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rschedule")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rschedule.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, at generation time.
    pub fn validate(&self) -> AppResult<()> {
        parse_day_end(&self.day_end)
            .map_err(|e| AppError::Config(format!("day_end: {e}")))?;
        self.color()?;
        if self.days.is_empty() {
            return Err(AppError::Config("days: at least one day is required".into()));
        }
        Ok(())
    }

    pub fn color(&self) -> AppResult<Color> {
        Color::parse(&self.default_color).ok_or_else(|| {
            AppError::Config(format!(
                "default_color: invalid color '{}'",
                self.default_color
            ))
        })
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        fs::write(path, config.to_yaml()?)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
