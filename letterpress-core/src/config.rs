//! YAML defaults file — the settings every new builder starts from.
//!
//! ```yaml
//! theme: plain
//! text_direction: ltr
//! greeting: Hello
//! salutation: Best regards
//! from: { name: Acme, email: no-reply@acme.test }
//! product: { name: Acme, link: https://acme.test }
//! ```
//!
//! Every key is optional; absent keys keep the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Address, Product, TextDirection, Theme};

pub const DEFAULT_GREETING: &str = "Hello";
pub const DEFAULT_SALUTATION: &str = "Best regards";
pub const DEFAULT_PRODUCT_NAME: &str = "Letterpress";
pub const DEFAULT_PRODUCT_LINK: &str = "https://github.com/letterpress-rs/letterpress";

/// Process-wide message defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub theme: Theme,
    pub text_direction: TextDirection,
    pub greeting: String,
    pub salutation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub product: Product,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            text_direction: TextDirection::Ltr,
            greeting: DEFAULT_GREETING.to_owned(),
            salutation: DEFAULT_SALUTATION.to_owned(),
            from: None,
            product: Product {
                name: DEFAULT_PRODUCT_NAME.to_owned(),
                link: DEFAULT_PRODUCT_LINK.to_owned(),
                copyright: Product::default_copyright(DEFAULT_PRODUCT_NAME),
            },
        }
    }
}

impl Defaults {
    /// Parse defaults from YAML text. An empty product copyright is filled in
    /// from the product name and the current year.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut defaults: Defaults = if yaml.trim().is_empty() {
            Defaults::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        if defaults.product.name.is_empty() {
            defaults.product.name = DEFAULT_PRODUCT_NAME.to_owned();
        }
        if defaults.product.copyright.is_empty() {
            defaults.product.copyright = Product::default_copyright(&defaults.product.name);
        }
        Ok(defaults)
    }
}

/// Load defaults from the YAML file at `path`.
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` (with path + line context) if it is malformed.
pub fn load_at(path: &Path) -> Result<Defaults, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Defaults::from_yaml(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
