//! # letterpress
//!
//! Compose an email body from lines, call-to-action buttons and tables, then
//! render it to CSS-inlined HTML and fixed-width plain text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use letterpress::{Row, Table};
//!
//! fn receipt() -> Result<letterpress::Document, letterpress::RenderError> {
//!     letterpress::new()
//!         .subject("Your receipt")
//!         .to(["jane@example.com"])
//!         .name("Jane")
//!         .line("Thanks for your order.")
//!         .table(Table::new([
//!             Row::new().cell("item", "Widget").cell("price", "$10.00"),
//!         ]))
//!         .action("View order", "https://example.com/orders/1")
//!         .build()
//! }
//! ```
//!
//! New builders are clones of a process-wide default prototype; replace it
//! with [`set_default`] to change greetings, product details or theme for
//! every message created afterwards.

pub mod builder;
pub mod document;
pub mod prototype;

pub use builder::Builder;
pub use document::Document;
pub use prototype::{new, set_default};

pub use letterpress_core::{
    config, Action, Address, Alignment, Block, Columns, Defaults, Entry, Line, Product, Row,
    Table, TextDirection, Theme,
};
pub use letterpress_renderer::{
    BoxError, CssInliner, Inliner, Passthrough, RenderError, Renderer, TemplateEngine,
};
