pub mod fountain_constants;

pub use fountain_constants::FountainConstants;

/// 空行：为空或只含空白字符
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}

/// 统一换行符为 "\n"
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
