//! # letterpress-renderer
//!
//! Tera-based rendering of message bodies: every block is rendered through
//! the selected theme's markup templates, wrapped in the theme's `index`
//! template and CSS-inlined once; the plain-text body is assembled from each
//! block's plain-text form and normalised.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use letterpress_core::{Block, Line};
//! use letterpress_renderer::{Envelope, Renderer};
//!
//! fn render(envelope: &Envelope) {
//!     let blocks = vec![Block::from(Line::new("Welcome aboard."))];
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(rendered) = renderer.render(envelope, &blocks) {
//!             println!("{}", rendered.text);
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod inline;

pub use context::{Envelope, TemplateContext};
pub use engine::{RenderMarkup, Rendered, Renderer, TemplateEngine};
pub use error::{BoxError, RenderError};
pub use inline::{CssInliner, Inliner, Passthrough};
