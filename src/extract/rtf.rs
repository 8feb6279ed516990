use lazy_static::lazy_static;
use regex::Regex;
use crate::error::ExtractResult;
use crate::extract::adapter::{self, ScenePolicy};
use crate::extract::Extractor;
use crate::models::{Conf, Element, ElementKind};

const PARAGRAPH_END: &str = r"\par }";

// 导出工具写出的固定段落格式，只认这三种
const SCENE_PARAGRAPH: &str = r"{\pard\plain \ql \caps\sb480\f469\fs24\sl200\s2\fi0\ri1100\li2160";
const CHARACTER_PARAGRAPH: &str = r"{\pard\plain \ql \caps\sb240\f469\fs24\sl200\s4\fi0\ri1460\li5040";
const ACTION_PARAGRAPH: &str = r"{\pard\plain \ql \sb240\f469\fs24\sl200\s3\fi0\ri1100\li2160";

fn paragraph_regex(prefix: &str) -> Regex {
    Regex::new(&format!(
        r"(?is){}(.*?){}",
        regex::escape(prefix),
        regex::escape(PARAGRAPH_END)
    ))
    .unwrap()
}

lazy_static! {
    static ref PARAGRAPHS: [(ElementKind, Regex); 3] = [
        (ElementKind::SceneHeading, paragraph_regex(SCENE_PARAGRAPH)),
        (ElementKind::Character, paragraph_regex(CHARACTER_PARAGRAPH)),
        (ElementKind::Action, paragraph_regex(ACTION_PARAGRAPH)),
    ];
}

/// RTF 过滤器：按固定段落格式扫描原始 RTF 文本
#[derive(Debug, Clone)]
pub struct RtfFilter {
    elements: Vec<Element>,
    exclude_characters: bool,
}

impl RtfFilter {
    pub fn from_text(content: &str, conf: &Conf) -> Self {
        RtfFilter {
            elements: scan_paragraphs(content),
            exclude_characters: conf.exclude_characters_from_capitalized,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// 三种段落合并成一个按文档位置排序的元素序列
fn scan_paragraphs(content: &str) -> Vec<Element> {
    let mut found: Vec<(usize, Element)> = Vec::new();

    for (kind, regex) in PARAGRAPHS.iter() {
        for captures in regex.captures_iter(content) {
            let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let text = body.as_str().trim();
            if text.is_empty() {
                continue;
            }
            found.push((whole.start(), Element::new(*kind, text)));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    log::debug!("RTF 段落: {} 个", found.len());
    found.into_iter().map(|(_, element)| element).collect()
}

impl Extractor for RtfFilter {
    fn characters(&self) -> ExtractResult<Vec<String>> {
        Ok(adapter::characters(&self.elements))
    }

    fn scenes(&self) -> Vec<String> {
        adapter::scenes(&self.elements, ScenePolicy::UppercaseUnique)
    }

    fn capitalized(&self) -> Vec<String> {
        let exclude = if self.exclude_characters {
            adapter::characters(&self.elements)
        } else {
            Vec::new()
        };
        adapter::capitalized(&self.elements, &exclude)
    }
}
