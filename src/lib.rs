pub mod models;
pub mod utils;
pub mod parser;
pub mod extract;
pub mod error;
pub mod api;

pub use models::{
    Breakdown,
    Conf,
    Element,
    ElementDetail,
    ElementKind,
    ElementStore,
    ScreenplayElement
};

pub use parser::{
    FountainParser,
    ParseOutput,
    LineClass,
    LineContext
};

pub use extract::{
    Extractor,
    FountainFilter,
    RtfFilter,
    CeltxFilter,
    ScenePolicy,
    SourceFormat,
    open,
    from_bytes
};

pub use error::{ExtractError, ExtractResult};

pub use api::{
    SimpleConf,
    BreakdownResult,
    parse_fountain_text,
    extract_fountain_text,
    extract_file,
    extract_base64
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 解析结果对象
pub fn parse(script: &str) -> ParseOutput {
    FountainParser::new().parse(script)
}

/// 从Fountain文本直接得到角色、场景和大写词
pub fn extract_fountain(script: &str, config: &Conf) -> Breakdown {
    let filter = FountainFilter::from_text(script, config);
    // Fountain 过滤器的 characters() 不会失败
    Breakdown::new(
        filter.characters().unwrap_or_default(),
        filter.scenes(),
        filter.capitalized(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = parse("INT. ROOM - DAY\n\nHello, world!");
        assert_eq!(result.elements.count(), 2);
        assert_eq!(result.elements.get(0).unwrap().kind(), ElementKind::SceneHeading);
        assert_eq!(result.elements.get(1).unwrap().kind(), ElementKind::Action);
    }
}
