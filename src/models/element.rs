use serde::{Deserialize, Serialize};

/// 元素类型，解析过程中创建后即固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    SceneHeading,
    Character,
    Dialogue,
    Parenthetical,
    Action,
    Transition,
    SectionHeading,
    Synopsis,
    Comment,
    PageBreak,
    Boneyard,
}

impl ElementKind {
    pub const ALL: [ElementKind; 11] = [
        ElementKind::SceneHeading,
        ElementKind::Character,
        ElementKind::Dialogue,
        ElementKind::Parenthetical,
        ElementKind::Action,
        ElementKind::Transition,
        ElementKind::SectionHeading,
        ElementKind::Synopsis,
        ElementKind::Comment,
        ElementKind::PageBreak,
        ElementKind::Boneyard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::SceneHeading => "scene_heading",
            ElementKind::Character => "character",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Action => "action",
            ElementKind::Transition => "transition",
            ElementKind::SectionHeading => "section_heading",
            ElementKind::Synopsis => "synopsis",
            ElementKind::Comment => "comment",
            ElementKind::PageBreak => "page_break",
            ElementKind::Boneyard => "boneyard",
        }
    }
}

/// 每种元素各自的附加字段，只有场景标题、角色、章节带额外数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementDetail {
    SceneHeading {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scene_number: Option<String>,
    },
    Character {
        #[serde(default)]
        dual_dialogue: bool,
    },
    Dialogue,
    Parenthetical,
    Action,
    Transition,
    SectionHeading {
        depth: usize,
    },
    Synopsis,
    Comment,
    PageBreak,
    Boneyard,
}

impl ElementDetail {
    /// 不带额外数据的默认形态
    pub fn plain(kind: ElementKind) -> Self {
        match kind {
            ElementKind::SceneHeading => ElementDetail::SceneHeading { scene_number: None },
            ElementKind::Character => ElementDetail::Character { dual_dialogue: false },
            ElementKind::Dialogue => ElementDetail::Dialogue,
            ElementKind::Parenthetical => ElementDetail::Parenthetical,
            ElementKind::Action => ElementDetail::Action,
            ElementKind::Transition => ElementDetail::Transition,
            ElementKind::SectionHeading => ElementDetail::SectionHeading { depth: 1 },
            ElementKind::Synopsis => ElementDetail::Synopsis,
            ElementKind::Comment => ElementDetail::Comment,
            ElementKind::PageBreak => ElementDetail::PageBreak,
            ElementKind::Boneyard => ElementDetail::Boneyard,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementDetail::SceneHeading { .. } => ElementKind::SceneHeading,
            ElementDetail::Character { .. } => ElementKind::Character,
            ElementDetail::Dialogue => ElementKind::Dialogue,
            ElementDetail::Parenthetical => ElementKind::Parenthetical,
            ElementDetail::Action => ElementKind::Action,
            ElementDetail::Transition => ElementKind::Transition,
            ElementDetail::SectionHeading { .. } => ElementKind::SectionHeading,
            ElementDetail::Synopsis => ElementKind::Synopsis,
            ElementDetail::Comment => ElementKind::Comment,
            ElementDetail::PageBreak => ElementKind::PageBreak,
            ElementDetail::Boneyard => ElementKind::Boneyard,
        }
    }
}

/// 剧本结构元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub detail: ElementDetail,
    pub text: String,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Element {
            detail: ElementDetail::plain(kind),
            text: text.into(),
        }
    }

    pub fn with_detail(detail: ElementDetail, text: impl Into<String>) -> Self {
        Element {
            detail,
            text: text.into(),
        }
    }

    pub fn scene_heading(text: impl Into<String>, scene_number: Option<String>) -> Self {
        Self::with_detail(ElementDetail::SceneHeading { scene_number }, text)
    }

    pub fn character(text: impl Into<String>, dual_dialogue: bool) -> Self {
        Self::with_detail(ElementDetail::Character { dual_dialogue }, text)
    }

    pub fn section_heading(text: impl Into<String>, depth: usize) -> Self {
        Self::with_detail(ElementDetail::SectionHeading { depth }, text)
    }

    pub fn kind(&self) -> ElementKind {
        self.detail.kind()
    }

    pub fn scene_number(&self) -> Option<&str> {
        match &self.detail {
            ElementDetail::SceneHeading { scene_number } => scene_number.as_deref(),
            _ => None,
        }
    }

    pub fn depth(&self) -> Option<usize> {
        match self.detail {
            ElementDetail::SectionHeading { depth } => Some(depth),
            _ => None,
        }
    }

    pub fn is_dual_dialogue(&self) -> bool {
        matches!(self.detail, ElementDetail::Character { dual_dialogue: true })
    }

    /// 标记为双对话；非角色元素返回 false 且不做修改
    pub fn set_dual_dialogue(&mut self, value: bool) -> bool {
        match &mut self.detail {
            ElementDetail::Character { dual_dialogue } => {
                *dual_dialogue = value;
                true
            }
            _ => false,
        }
    }

    /// 续行：追加 "\n" + line
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

/// 提取器只关心 (类型, 文本) 两项，其它格式的过滤器也可以直接套用
pub trait ScreenplayElement {
    fn kind(&self) -> ElementKind;
    fn text(&self) -> &str;
}

impl ScreenplayElement for Element {
    fn kind(&self) -> ElementKind {
        self.detail.kind()
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl ScreenplayElement for (ElementKind, String) {
    fn kind(&self) -> ElementKind {
        self.0
    }

    fn text(&self) -> &str {
        &self.1
    }
}

impl ScreenplayElement for (ElementKind, &str) {
    fn kind(&self) -> ElementKind {
        self.0
    }

    fn text(&self) -> &str {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let element = Element::scene_heading("HOUSE - DAY", Some("1A".to_string()));
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "scene_heading");
        assert_eq!(value["text"], "HOUSE - DAY");
        assert_eq!(value["scene_number"], "1A");

        let back: Element = serde_json::from_value(value).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn dual_flag_only_applies_to_characters() {
        let mut action = Element::new(ElementKind::Action, "He runs.");
        assert!(!action.set_dual_dialogue(true));
        assert!(!action.is_dual_dialogue());

        let mut cue = Element::character("BRICK", false);
        assert!(cue.set_dual_dialogue(true));
        assert!(cue.is_dual_dialogue());
    }

    #[test]
    fn kind_names_match_serde() {
        for kind in ElementKind::ALL {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, kind.as_str());
        }
    }
}
