use std::path::Path;
use crate::error::{ExtractError, ExtractResult};
use crate::extract::{CeltxFilter, Extractor, FountainFilter, RtfFilter};
use crate::models::Conf;

/// 本 crate 能处理的来源格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Fountain,
    Rtf,
    Celtx,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "fountain" => Some(SourceFormat::Fountain),
            "rtf" => Some(SourceFormat::Rtf),
            "celtx" => Some(SourceFormat::Celtx),
            _ => None,
        }
    }
}

/// 打开剧本文件，按扩展名选择过滤器
pub fn open(path: impl AsRef<Path>, conf: &Conf) -> ExtractResult<Box<dyn Extractor + Send>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    check_extension(extension, conf)?;

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            ExtractError::NotFound(path.to_path_buf())
        }
        _ => ExtractError::Io(e),
    })?;
    log::info!("打开剧本文件: {} ({} 字节)", path.display(), bytes.len());

    from_bytes(extension, &bytes, conf)
}

/// 由调用方读好的内容，按扩展名选择过滤器
pub fn from_bytes(
    extension: &str,
    bytes: &[u8],
    conf: &Conf,
) -> ExtractResult<Box<dyn Extractor + Send>> {
    let format = check_extension(extension, conf)?;

    let extractor: Box<dyn Extractor + Send> = match format {
        SourceFormat::Fountain => {
            Box::new(FountainFilter::from_text(&String::from_utf8_lossy(bytes), conf))
        }
        SourceFormat::Rtf => Box::new(RtfFilter::from_text(&String::from_utf8_lossy(bytes), conf)),
        SourceFormat::Celtx => Box::new(CeltxFilter::from_bytes(bytes, conf)?),
    };
    Ok(extractor)
}

fn check_extension(extension: &str, conf: &Conf) -> ExtractResult<SourceFormat> {
    if !conf.is_allowed(extension) {
        log::warn!("扩展名不在允许列表中: {:?}", extension);
        return Err(ExtractError::UnsupportedFormat(extension.to_string()));
    }
    // fdx/astx/fadein/xml 虽然允许，但需要 XML 过滤器，本 crate 不提供
    SourceFormat::from_extension(extension)
        .ok_or_else(|| ExtractError::UnsupportedFormat(extension.to_string()))
}
