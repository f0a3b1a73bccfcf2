//! Process-wide default builder.
//!
//! The prototype is swapped as a whole with [`set_default`]; [`new`] loads
//! whichever prototype is current and returns a deep clone, so concurrent
//! callers never see a half-updated prototype or each other's blocks.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use letterpress_core::Defaults;

use crate::builder::Builder;

static DEFAULT_BUILDER: LazyLock<ArcSwap<Builder>> =
    LazyLock::new(|| ArcSwap::from_pointee(Builder::from_defaults(&Defaults::default())));

/// A fresh builder cloned from the current default prototype.
pub fn new() -> Builder {
    Builder::clone(&DEFAULT_BUILDER.load())
}

/// Replace the default prototype. Builders created earlier are unaffected.
pub fn set_default(builder: Builder) {
    tracing::debug!("replacing default builder prototype");
    DEFAULT_BUILDER.store(Arc::new(builder));
}

/// Replace the default prototype with one built from `defaults`.
pub fn set_defaults(defaults: &Defaults) {
    set_default(Builder::from_defaults(defaults));
}

/// The current prototype, shared.
pub fn current() -> Arc<Builder> {
    DEFAULT_BUILDER.load_full()
}
