//! CSS inlining — moves `<style>` rules onto the elements they match so mail
//! clients that strip `<head>` still see the styling.
//!
//! The renderer calls its [`Inliner`] exactly once per message, after the
//! full markup has been assembled.

use crate::error::BoxError;

/// Post-processing transform applied to the assembled markup.
pub trait Inliner: Send + Sync {
    fn inline(&self, html: &str) -> Result<String, BoxError>;
}

impl<F> Inliner for F
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn inline(&self, html: &str) -> Result<String, BoxError> {
        self(html)
    }
}

/// Inlines styles with the `css-inline` crate. `<style>` blocks are removed
/// once their rules have been applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssInliner;

impl Inliner for CssInliner {
    fn inline(&self, html: &str) -> Result<String, BoxError> {
        css_inline::inline(html).map_err(BoxError::from)
    }
}

/// Returns the markup unchanged, for callers that inline further downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Inliner for Passthrough {
    fn inline(&self, html: &str) -> Result<String, BoxError> {
        Ok(html.to_owned())
    }
}
