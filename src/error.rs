use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("文件不存在或不可读: {}", .0.display())]
    NotFound(PathBuf),

    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    #[error("{format} 文档结构不完整: {reason}")]
    MalformedStructure { format: &'static str, reason: String },

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("压缩包错误: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type ExtractResult<T> = Result<T, ExtractError>;
