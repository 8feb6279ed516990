pub mod fountain_parser;
pub mod line_classifier;

pub use fountain_parser::FountainParser;
pub use fountain_parser::ParseOutput;
pub use line_classifier::{classify, LineClass, LineContext};
