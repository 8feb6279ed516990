//! 桥接 API
//!
//! 给外部调用方(移动端桥接、服务)用的异步接口，返回简单结构体或 JSON 字符串

use std::path::Path;
use crate::error::ExtractResult;
use crate::extract::{self, Extractor, FountainFilter};
use crate::models::{Breakdown, Conf};
use crate::parser::FountainParser;

/// 简化的配置结构
#[derive(Debug, Clone)]
pub struct SimpleConf {
    pub exclude_characters_from_capitalized: bool,
    pub archive_entry_limit: u64,
}

impl Default for SimpleConf {
    fn default() -> Self {
        let conf = Conf::default();
        Self {
            exclude_characters_from_capitalized: conf.exclude_characters_from_capitalized,
            archive_entry_limit: conf.archive_entry_limit,
        }
    }
}

impl From<SimpleConf> for Conf {
    fn from(simple: SimpleConf) -> Self {
        let mut conf = Conf::default();
        conf.exclude_characters_from_capitalized = simple.exclude_characters_from_capitalized;
        conf.archive_entry_limit = simple.archive_entry_limit;
        conf
    }
}

/// 提取结果
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    pub success: bool,
    pub message: String,
    pub breakdown: Option<Breakdown>,
}

impl From<ExtractResult<Breakdown>> for BreakdownResult {
    fn from(result: ExtractResult<Breakdown>) -> Self {
        match result {
            Ok(breakdown) => BreakdownResult {
                success: true,
                message: "提取成功".to_string(),
                breakdown: Some(breakdown),
            },
            Err(e) => BreakdownResult {
                success: false,
                message: format!("提取失败: {}", e),
                breakdown: None,
            },
        }
    }
}

/// 解析Fountain文本，返回元素列表的JSON
pub async fn parse_fountain_text(text: String) -> String {
    let result = FountainParser::new().parse(&text);
    serde_json::to_string(&result.elements).unwrap_or_else(|_| "[]".to_string())
}

/// 从Fountain文本提取角色、场景和大写词
pub async fn extract_fountain_text(text: String, config: Option<SimpleConf>) -> BreakdownResult {
    let conf: Conf = config.unwrap_or_default().into();
    FountainFilter::from_text(&text, &conf).breakdown().into()
}

/// 从文件提取；读文件和解析放到阻塞线程执行
pub async fn extract_file(path: String, config: Option<SimpleConf>) -> BreakdownResult {
    let conf: Conf = config.unwrap_or_default().into();

    let task = tokio::task::spawn_blocking(move || {
        extract::open(Path::new(&path), &conf).and_then(|extractor| extractor.breakdown())
    });

    match task.await {
        Ok(result) => result.into(),
        Err(e) => BreakdownResult {
            success: false,
            message: format!("提取任务异常: {}", e),
            breakdown: None,
        },
    }
}

/// 从Base64编码的文件内容提取，格式由文件名的扩展名决定
pub async fn extract_base64(
    file_name: String,
    data: String,
    config: Option<SimpleConf>,
) -> BreakdownResult {
    let conf: Conf = config.unwrap_or_default().into();

    let bytes = match base64::decode(data.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            return BreakdownResult {
                success: false,
                message: format!("Base64解码失败: {}", e),
                breakdown: None,
            }
        }
    };

    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    extract::from_bytes(extension, &bytes, &conf)
        .and_then(|extractor| extractor.breakdown())
        .into()
}
