use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// 应用顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("无法获取用户目录: {0}")]
    NoDir(&'static str),
}
