use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::Course;

pub const DEFAULT_LOGO_URL: &str =
    "https://th.bing.com/th/id/OIP.VRt7CBwBYh7W98PTokvtJgHaFn?rs=1&pid=ImgDetMain";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置 {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置格式错误 {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 用户配置 (~/.config/chef-menu/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub logo_url: String,
    pub currency_symbol: String,
    pub default_course: Course,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Chef's Menu".to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            currency_symbol: "R".to_string(),
            default_course: Course::Starters,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("配置文件不存在，使用默认配置: {}", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_toml(&content, path)
}
