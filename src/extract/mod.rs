//! 提取接口以及各格式的过滤器

pub mod adapter;
pub mod fountain;
pub mod rtf;
pub mod celtx;
pub mod dispatch;

use crate::error::ExtractResult;
use crate::models::Breakdown;

pub use adapter::ScenePolicy;
pub use fountain::FountainFilter;
pub use rtf::RtfFilter;
pub use celtx::CeltxFilter;
pub use dispatch::{from_bytes, open, SourceFormat};

/// 所有格式过滤器共同实现的三项查询
pub trait Extractor {
    /// 角色列表；只有在文档完全无法解析时才返回错误，空列表不是错误
    fn characters(&self) -> ExtractResult<Vec<String>>;

    fn scenes(&self) -> Vec<String>;

    /// 需要强调的大写词
    fn capitalized(&self) -> Vec<String>;

    fn breakdown(&self) -> ExtractResult<Breakdown> {
        Ok(Breakdown::new(self.characters()?, self.scenes(), self.capitalized()))
    }
}
