//! LaTeX output: TikZ board diagrams and document assembly

pub mod document;
pub mod tikz;

pub use document::{DEFAULT_TEMPLATE, Document, PLACEHOLDER};
pub use tikz::TikzRenderer;
