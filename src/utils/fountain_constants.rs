use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 整行匹配即视为转场的固定短语
    pub const TRANSITIONS: [&'static str; 5] = [
        "CUT TO:",
        "FADE OUT.",
        "SMASH CUT TO:",
        "CUT TO BLACK.",
        "MATCH CUT TO:",
    ];

    pub const COMMENT_OPEN: &'static str = "/*";
    pub const COMMENT_CLOSE: &'static str = "*/";

    pub fn is_transition(line: &str) -> bool {
        Self::TRANSITIONS.contains(&line.trim())
    }
}

lazy_static! {
    // 行级规则正则
    pub static ref COMMENT_END: Regex = Regex::new(r"\*/\s*$").unwrap();
    pub static ref PAGE_BREAK: Regex = Regex::new(r"^={3,}\s*$").unwrap();
    pub static ref SYNOPSIS: Regex = Regex::new(r"^\s*=(.*)").unwrap();
    pub static ref NOTE: Regex = Regex::new(r"^\s*\[{2}\s*([^\]\n])+\s*\]{2}\s*$").unwrap();
    pub static ref SECTION: Regex = Regex::new(r"^\s*(#+)\s*(.*)").unwrap();
    pub static ref FORCED_SCENE_HEADING: Regex = Regex::new(r"^\.[^.]").unwrap();
    pub static ref SCENE_HEADING: Regex = Regex::new(r"(?i)^(?:INT|EXT|EST|I/?E)[.\-\s]").unwrap();
    pub static ref SCENE_NUMBER: Regex = Regex::new(r"^(.*?)(?:\s*#([^\n#]*?)#\s*)?$").unwrap();
    pub static ref DUAL_DIALOGUE: Regex = Regex::new(r"\^\s*$").unwrap();
    pub static ref PARENTHETICAL: Regex = Regex::new(r"^\s*\(").unwrap();

    // 动作文本中的大写词(至少两个字符，大写字母/数字/空白)
    pub static ref UPPERCASE_RUN: Regex = Regex::new(r"\b([A-Z0-9\s]{2,})\b").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_match_whole_trimmed_line() {
        assert!(FountainConstants::is_transition("CUT TO:"));
        assert!(FountainConstants::is_transition("   SMASH CUT TO:  "));
        assert!(!FountainConstants::is_transition("cut to:"));
        assert!(!FountainConstants::is_transition("DISSOLVE TO:"));
    }

    #[test]
    fn scene_number_is_optional() {
        let caps = SCENE_NUMBER.captures(" HOUSE - DAY #12A#").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), " HOUSE - DAY");
        assert_eq!(caps.get(2).unwrap().as_str(), "12A");

        let caps = SCENE_NUMBER.captures(" HOUSE - DAY").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), " HOUSE - DAY");
        assert!(caps.get(2).is_none());
    }
}
