//! Letterpress core library — content blocks, the plain-text table grid,
//! message metadata types and the YAML defaults file.
//!
//! - [`types`] — addresses, product info, theme and text direction
//! - [`block`] — the closed set of content blocks
//! - [`table`] — fixed-width plain-text rendering for [`block::Table`]
//! - [`config`] — [`config::Defaults`] loading
//! - [`error`] — [`ConfigError`]

pub mod block;
pub mod config;
pub mod error;
pub mod table;
pub mod types;

pub use block::{Action, Alignment, Block, Columns, Entry, Line, Row, Table};
pub use config::Defaults;
pub use error::ConfigError;
pub use types::{Address, Product, TextDirection, Theme};
