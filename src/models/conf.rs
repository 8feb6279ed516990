use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 允许打开的文件扩展名(小写)
    pub allowed_extensions: Vec<String>,
    /// 大写词列表是否排除角色名
    pub exclude_characters_from_capitalized: bool,
    /// 压缩包内单个条目最多读取的字节数
    pub archive_entry_limit: u64,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            allowed_extensions: ["astx", "celtx", "fadein", "fountain", "fdx", "rtf", "xml"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            exclude_characters_from_capitalized: true,
            archive_entry_limit: 1_000_000,
        }
    }
}

impl Conf {
    pub fn is_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
