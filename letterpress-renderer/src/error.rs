//! Error types for letterpress-renderer.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// All errors that can arise while rendering a message body.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Missing template, undefined variable, or any other Tera failure.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// The CSS-inlining transform rejected the assembled markup.
    #[error("css inlining failed: {0}")]
    Transform(#[source] BoxError),
}
