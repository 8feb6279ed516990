//! 行分类器
//!
//! 纯函数：给定当前行和少量上下文，按固定优先级返回该行的分类。
//! 每条规则都是独立的 `fn(&str, &LineContext) -> Option<LineClass>`，
//! `classify` 只负责按顺序尝试，第一条命中的规则生效。

use crate::utils::fountain_constants::{
    FountainConstants, COMMENT_END, DUAL_DIALOGUE, FORCED_SCENE_HEADING, NOTE, PAGE_BREAK,
    PARENTHETICAL, SCENE_HEADING, SCENE_NUMBER, SECTION, SYNOPSIS,
};
use crate::utils::is_blank_line;

/// 分类时可见的上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext<'a> {
    /// 当前行之前连续空行的数量
    pub blank_lines_before: usize,
    pub in_dialogue: bool,
    pub in_comment: bool,
    /// 仓库中是否已有元素
    pub has_elements: bool,
    /// 下一行原文，文档末尾为 None
    pub next_line: Option<&'a str>,
}

impl<'a> LineContext<'a> {
    fn after_blank(&self) -> bool {
        self.blank_lines_before > 0
    }
}

/// 一行的分类结果以及附带的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 空行，只参与空行计数
    Blank,
    /// 注释块中的一行；`opens`/`closes` 表示本行是否开启/关闭注释块
    Boneyard { opens: bool, closes: bool },
    PageBreak(String),
    Synopsis(String),
    /// `[[ ]]` 注解
    Comment(String),
    Section { depth: usize, text: String },
    SceneHeading { text: String, scene_number: Option<String> },
    Transition(String),
    Character { text: String, dual_dialogue: bool },
    Parenthetical(String),
    /// 对话块内的对白；是新建还是续写由状态机根据上一个元素决定
    Dialogue(String),
    /// 无空行间隔的续行，追加到最后一个元素
    Continuation(String),
    Action(String),
}

type Rule = for<'a> fn(&str, &LineContext<'a>) -> Option<LineClass>;

/// 规则优先级顺序
const RULES: [Rule; 13] = [
    boneyard,
    blank,
    page_break,
    synopsis,
    bracket_comment,
    section_heading,
    scene_heading,
    transition,
    forced_transition,
    character,
    parenthetical,
    dialogue,
    continuation,
];

/// 对一行进行分类，兜底为 Action
pub fn classify(line: &str, ctx: &LineContext<'_>) -> LineClass {
    RULES
        .iter()
        .find_map(|rule| rule(line, ctx))
        .unwrap_or_else(|| LineClass::Action(line.to_string()))
}

/// 注释块：已在块内、本行以 `/*` 开头或以 `*/` 结尾
///
/// 块外单独出现的 `*/` 也在这里吃掉，不会落到角色或动作里
pub fn boneyard(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    let opens = !ctx.in_comment && line.starts_with(FountainConstants::COMMENT_OPEN);
    let closes = COMMENT_END.is_match(line);
    if !ctx.in_comment && !opens && !closes {
        return None;
    }
    Some(LineClass::Boneyard { opens, closes })
}

pub fn blank(line: &str, _ctx: &LineContext<'_>) -> Option<LineClass> {
    is_blank_line(line).then_some(LineClass::Blank)
}

pub fn page_break(line: &str, _ctx: &LineContext<'_>) -> Option<LineClass> {
    PAGE_BREAK
        .is_match(line)
        .then(|| LineClass::PageBreak(line.to_string()))
}

pub fn synopsis(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if !ctx.after_blank() || !line.trim_start().starts_with('=') {
        return None;
    }
    let captures = SYNOPSIS.captures(line)?;
    Some(LineClass::Synopsis(captures[1].to_string()))
}

pub fn bracket_comment(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if !ctx.after_blank() || !NOTE.is_match(line) {
        return None;
    }
    let text = line.replace("[[", "").replace("]]", "");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(LineClass::Comment(text.to_string()))
}

pub fn section_heading(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if !ctx.after_blank() || !line.trim_start().starts_with('#') {
        return None;
    }
    let captures = SECTION.captures(line)?;
    Some(LineClass::Section {
        depth: captures[1].len(),
        text: captures[2].trim().to_string(),
    })
}

pub fn scene_heading(line: &str, _ctx: &LineContext<'_>) -> Option<LineClass> {
    let prefix_length = if FORCED_SCENE_HEADING.is_match(line) {
        1
    } else {
        SCENE_HEADING.find(line)?.end()
    };

    let remainder = &line[prefix_length..];
    let captures = SCENE_NUMBER.captures(remainder)?;
    let text = captures.get(1).map_or("", |m| m.as_str()).trim().to_string();
    let scene_number = captures
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .filter(|number| !number.is_empty());

    Some(LineClass::SceneHeading { text, scene_number })
}

pub fn transition(line: &str, _ctx: &LineContext<'_>) -> Option<LineClass> {
    FountainConstants::is_transition(line).then(|| LineClass::Transition(line.to_string()))
}

/// `>` 开头的强制转场；以 `<` 结尾的是居中文本，不在此处理
pub fn forced_transition(line: &str, _ctx: &LineContext<'_>) -> Option<LineClass> {
    let text = line.strip_prefix('>')?;
    if line.ends_with('<') {
        return None;
    }
    Some(LineClass::Transition(text.to_string()))
}

/// 角色名：前有空行、不含小写字母、下一行存在且非空
pub fn character(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if !ctx.after_blank() || line.chars().any(char::is_lowercase) {
        return None;
    }
    match ctx.next_line {
        Some(next) if !is_blank_line(next) => {}
        _ => return None,
    }

    let dual_dialogue = DUAL_DIALOGUE.is_match(line);
    let text = if dual_dialogue {
        DUAL_DIALOGUE.replace(line, "").trim().to_string()
    } else {
        line.trim().to_string()
    };

    Some(LineClass::Character { text, dual_dialogue })
}

pub fn parenthetical(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if !ctx.in_dialogue || ctx.after_blank() || !PARENTHETICAL.is_match(line) {
        return None;
    }
    Some(LineClass::Parenthetical(line.to_string()))
}

pub fn dialogue(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    ctx.in_dialogue.then(|| LineClass::Dialogue(line.to_string()))
}

pub fn continuation(line: &str, ctx: &LineContext<'_>) -> Option<LineClass> {
    if ctx.after_blank() || !ctx.has_elements {
        return None;
    }
    Some(LineClass::Continuation(line.to_string()))
}
