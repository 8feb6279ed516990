use serde::Serialize;
use crate::models::{Element, ElementKind, ElementStore};
use crate::parser::line_classifier::{classify, LineClass, LineContext};
use crate::utils::{normalize_line_endings, FountainConstants};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutput {
    /// 按文档顺序排列的元素
    pub elements: ElementStore,
    /// 扫描的行数(含末尾补充的两个空行)
    pub line_count: usize,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
}

/// Fountain 文本解析器
///
/// 单次前向扫描的状态机。每次解析都应新建一个实例，`parse` 会消耗它，
/// 块状态(空行计数、对话块、注释块)不会泄漏到下一个文档。
#[derive(Debug, Default)]
pub struct FountainParser {
    store: ElementStore,
    /// 当前行之前连续空行的数量
    blank_lines_before: usize,
    in_dialogue: bool,
    in_comment: bool,
    comment_text: String,
}

impl FountainParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析Fountain格式文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain格式的剧本文本，换行符可以是 `\n`、`\r\n` 或 `\r`
    ///
    /// # Returns
    ///
    /// 解析结果对象；任何文本都能解析，最差情况全部归为 Action
    pub fn parse(mut self, script: &str) -> ParseOutput {
        let start = std::time::Instant::now();

        // 统一换行，去掉首尾空白，再补两个空行，保证最后一个块能正常结束
        let normalized = normalize_line_endings(script);
        let contents = format!("{}\n\n", normalized.trim());
        let lines: Vec<&str> = contents.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            let ctx = LineContext {
                blank_lines_before: self.blank_lines_before,
                in_dialogue: self.in_dialogue,
                in_comment: self.in_comment,
                has_elements: !self.store.is_empty(),
                next_line: lines.get(i + 1).copied(),
            };
            let class = classify(line, &ctx);
            log::trace!("第{}行 {:?}", i + 1, class);
            self.apply(line, class);
        }

        // 没有闭合的注释块，内容依旧保留
        if self.in_comment {
            log::warn!("文档结束时注释块仍未闭合");
            let text = self.comment_text.trim_end_matches('\n').to_string();
            self.flush_comment(text);
        }

        log::debug!("解析完成: {} 行, {} 个元素", lines.len(), self.store.count());

        ParseOutput {
            elements: self.store,
            line_count: lines.len(),
            parse_time: start.elapsed().as_millis() as u64,
        }
    }

    fn apply(&mut self, line: &str, class: LineClass) {
        match class {
            LineClass::Blank => {
                // 空行结束对话块
                self.in_dialogue = false;
                self.blank_lines_before += 1;
                return;
            }
            LineClass::Boneyard { opens, closes } => self.push_comment_line(line, opens, closes),
            LineClass::PageBreak(text) => self.add(Element::new(ElementKind::PageBreak, text)),
            LineClass::Synopsis(text) => self.add(Element::new(ElementKind::Synopsis, text)),
            LineClass::Comment(text) => self.add(Element::new(ElementKind::Comment, text)),
            LineClass::Section { depth, text } => self.add(Element::section_heading(text, depth)),
            LineClass::SceneHeading { text, scene_number } => {
                self.add(Element::scene_heading(text, scene_number))
            }
            LineClass::Transition(text) => self.add(Element::new(ElementKind::Transition, text)),
            LineClass::Character { text, dual_dialogue } => {
                if dual_dialogue {
                    // 上一个角色也改成双对话
                    if let Some(previous) = self.store.last_of_kind_mut(ElementKind::Character) {
                        previous.set_dual_dialogue(true);
                    }
                }
                self.add(Element::character(text, dual_dialogue));
                self.in_dialogue = true;
            }
            LineClass::Parenthetical(text) => {
                self.add(Element::new(ElementKind::Parenthetical, text))
            }
            LineClass::Dialogue(text) => {
                let follows_dialogue = self
                    .store
                    .last()
                    .map_or(false, |last| last.kind() == ElementKind::Dialogue);
                if follows_dialogue {
                    self.append_to_last(&text);
                } else {
                    self.add(Element::new(ElementKind::Dialogue, text));
                }
            }
            LineClass::Continuation(text) => {
                if self.store.is_empty() {
                    self.add(Element::new(ElementKind::Action, text));
                } else {
                    self.append_to_last(&text);
                }
            }
            LineClass::Action(text) => self.add(Element::new(ElementKind::Action, text)),
        }
        self.blank_lines_before = 0;
    }

    fn add(&mut self, element: Element) {
        self.store.append(element);
    }

    fn append_to_last(&mut self, line: &str) {
        if let Some(last) = self.store.last_mut() {
            last.append_line(line);
        }
    }

    fn push_comment_line(&mut self, line: &str, opens: bool, closes: bool) {
        if !opens && !self.in_comment {
            // 块外的 `*/`，整行丢弃
            log::debug!("忽略未开启的注释结束标记: {:?}", line);
            return;
        }
        if opens {
            self.in_comment = true;
            self.comment_text.clear();
        } else {
            self.comment_text.push('\n');
        }
        self.comment_text.push_str(line);

        if closes {
            let text = std::mem::take(&mut self.comment_text);
            self.flush_comment(text);
        }
    }

    fn flush_comment(&mut self, text: String) {
        let text = text
            .replace(FountainConstants::COMMENT_OPEN, "")
            .replace(FountainConstants::COMMENT_CLOSE, "");
        self.add(Element::new(ElementKind::Boneyard, text));
        self.in_comment = false;
        self.comment_text.clear();
    }
}
