//! The finished, read-only output of [`Builder::build`](crate::Builder::build).

use serde::Serialize;

use letterpress_core::Address;

/// A rendered message. Immutable; hand its parts to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) from: Option<Address>,
    pub(crate) to: Vec<String>,
    pub(crate) cc: Vec<String>,
    pub(crate) bcc: Vec<String>,
    pub(crate) html: String,
    pub(crate) plain_text: String,
}

impl Document {
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn from(&self) -> Option<&Address> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn cc(&self) -> &[String] {
        &self.cc
    }

    pub fn bcc(&self) -> &[String] {
        &self.bcc
    }

    /// CSS-inlined HTML body.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Plain-text body.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }
}
