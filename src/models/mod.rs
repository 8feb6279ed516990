pub mod element;
pub mod element_store;
pub mod breakdown;
pub mod conf;

pub use element::{Element, ElementDetail, ElementKind, ScreenplayElement};
pub use element_store::ElementStore;
pub use breakdown::Breakdown;
pub use conf::Conf;
