pub mod config;
pub mod logging;

pub mod endpoints;
pub mod link;
pub mod resolver;

pub use link::{classify, LinkClass};
pub use resolver::{
    apply_viewer_override, convert, resolve, ConversionError, ConversionResult, MediaType,
    PreviewSurface, ViewerChoice,
};
