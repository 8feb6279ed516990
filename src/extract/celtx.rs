use std::io::{Cursor, Read};
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{ExtractError, ExtractResult};
use crate::extract::adapter::{self, ScenePolicy};
use crate::extract::Extractor;
use crate::models::{Conf, Element, ElementKind};

const SCRIPT_ENTRY_MARKER: &str = "script-";

lazy_static! {
    static ref PARAGRAPH: Regex =
        Regex::new(r#"(?is)<p\b[^>]*?\bclass\s*=\s*["']([^"']*)["'][^>]*>(.*?)</p\s*>"#).unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Celtx 过滤器：.celtx 是 zip 包，剧本正文在名字含 `script-` 的 HTML 条目里
#[derive(Debug, Clone)]
pub struct CeltxFilter {
    elements: Vec<Element>,
    exclude_characters: bool,
}

impl CeltxFilter {
    pub fn from_bytes(bytes: &[u8], conf: &Conf) -> ExtractResult<Self> {
        let html = read_script_html(bytes, conf.archive_entry_limit)?;
        Ok(Self::from_html(&html, conf))
    }

    pub fn from_html(html: &str, conf: &Conf) -> Self {
        CeltxFilter {
            elements: scan_html(html),
            exclude_characters: conf.exclude_characters_from_capitalized,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

fn read_script_html(bytes: &[u8], limit: u64) -> ExtractResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if !entry.name().contains(SCRIPT_ENTRY_MARKER) {
            continue;
        }
        log::debug!("Celtx 剧本条目: {} ({} 字节)", entry.name(), entry.size());
        if entry.size() > limit {
            log::warn!("条目 {} 超过 {} 字节，只读取前面部分", entry.name(), limit);
        }

        let mut raw = Vec::new();
        entry.take(limit).read_to_end(&mut raw)?;
        let html = String::from_utf8_lossy(&raw).into_owned();
        if html.trim().is_empty() {
            return Err(ExtractError::MalformedStructure {
                format: "celtx",
                reason: "剧本 HTML 为空".to_string(),
            });
        }
        return Ok(html);
    }

    Err(ExtractError::MalformedStructure {
        format: "celtx",
        reason: "没有找到剧本 HTML 条目".to_string(),
    })
}

fn kind_for_class(class: &str) -> Option<ElementKind> {
    match class.trim().to_ascii_lowercase().as_str() {
        "sceneheading" => Some(ElementKind::SceneHeading),
        "character" => Some(ElementKind::Character),
        "action" => Some(ElementKind::Action),
        "dialog" => Some(ElementKind::Dialogue),
        "parenthetical" => Some(ElementKind::Parenthetical),
        "transition" => Some(ElementKind::Transition),
        _ => None,
    }
}

/// 段落文本：去标签、解码实体、合并空白
fn paragraph_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    WHITESPACE.replace_all(decoded.trim(), " ").to_string()
}

fn scan_html(html: &str) -> Vec<Element> {
    PARAGRAPH
        .captures_iter(html)
        .filter_map(|captures| {
            let kind = kind_for_class(captures.get(1)?.as_str())?;
            Some(Element::new(kind, paragraph_text(captures.get(2)?.as_str())))
        })
        .collect()
}

impl Extractor for CeltxFilter {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_become_elements() {
        let html = r#"<html><body>
<p class="sceneheading">int. dock - night</p>
<p class="action">The <b>BOAT</b> drifts &amp; sinks.</p>
<p class="character">ROSE</p>
<p class="dialog">Jack!</p>
<p class="footer">page 1</p>
</body></html>"#;
        let elements = scan_html(html);
        let kinds: Vec<ElementKind> = elements.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::SceneHeading,
                ElementKind::Action,
                ElementKind::Character,
                ElementKind::Dialogue,
            ]
        );
        assert_eq!(elements[1].text, "The BOAT drifts & sinks.");
    }

    #[test]
    fn numeric_and_named_entities_are_decoded() {
        let html = r#"<p class="character">O&#8217;BRIEN</p>
<p class="dialog">Wait&mdash;what?</p>
<p class="character">ZO&#xEB;&nbsp;&nbsp;(V.O.)</p>
<p class="action">The&nbsp;DOOR&#x2014;shut.</p>"#;
        let filter = CeltxFilter::from_html(html, &Conf::default());

        assert_eq!(filter.elements()[0].text, "O\u{2019}BRIEN");
        assert_eq!(filter.elements()[1].text, "Wait\u{2014}what?");
        assert_eq!(filter.elements()[2].text, "ZO\u{EB} (V.O.)");
        assert_eq!(filter.characters().unwrap(), vec!["O\u{2019}BRIEN"]);
    }
}
