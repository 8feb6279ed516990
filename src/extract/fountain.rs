use crate::error::ExtractResult;
use crate::extract::adapter::{self, ScenePolicy};
use crate::extract::Extractor;
use crate::models::{Conf, ElementStore};
use crate::parser::FountainParser;

/// Fountain 文本过滤器
#[derive(Debug, Clone)]
pub struct FountainFilter {
    elements: ElementStore,
    exclude_characters: bool,
}

impl FountainFilter {
    pub fn from_text(script: &str, conf: &Conf) -> Self {
        let output = FountainParser::new().parse(script);
        Self::from_elements(output.elements, conf)
    }

    pub fn from_elements(elements: ElementStore, conf: &Conf) -> Self {
        FountainFilter {
            elements,
            exclude_characters: conf.exclude_characters_from_capitalized,
        }
    }

    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    fn cast(&self) -> Vec<String> {
        adapter::characters(&self.elements)
    }
}

impl Extractor for FountainFilter {
    fn characters(&self) -> ExtractResult<Vec<String>> {
        Ok(self.cast())
    }

    fn scenes(&self) -> Vec<String> {
        adapter::scenes(&self.elements, ScenePolicy::DocumentOrder)
    }

    fn capitalized(&self) -> Vec<String> {
        let exclude = if self.exclude_characters {
            self.cast()
        } else {
            Vec::new()
        };
        adapter::capitalized(&self.elements, &exclude)
    }
}
