use serde::{Deserialize, Serialize};

/// 剧本分解结果：角色、场景、需要强调的大写词
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub characters: Vec<String>,
    pub scenes: Vec<String>,
    pub capitalized: Vec<String>,
}

impl Breakdown {
    pub fn new(characters: Vec<String>, scenes: Vec<String>, capitalized: Vec<String>) -> Self {
        Breakdown {
            characters,
            scenes,
            capitalized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.scenes.is_empty() && self.capitalized.is_empty()
    }
}
