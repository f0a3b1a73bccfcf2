//! [`Builder`] — accumulates message metadata and blocks, then renders a
//! [`Document`].
//!
//! Every setter consumes the builder and returns it, so calls chain:
//!
//! ```rust,no_run
//! let doc = letterpress::new()
//!     .subject("Reset your password")
//!     .to(["jane@example.com"])
//!     .line("Click the button below to reset your password.")
//!     .action("Reset password", "https://example.com/reset")
//!     .line("If you did not request this, ignore this email.")
//!     .build();
//! ```
//!
//! Singular fields (subject, greeting, theme, …) are overwritten by later
//! calls; blocks and recipients accumulate in call order.

use std::fmt;
use std::sync::OnceLock;

use letterpress_core::config::DEFAULT_GREETING;
use letterpress_core::{Action, Address, Block, Defaults, Line, Product, Table, TextDirection, Theme};
use letterpress_renderer::{Envelope, RenderError, Renderer};

use crate::document::Document;
use crate::prototype;

static RENDERER: OnceLock<Renderer> = OnceLock::new();

/// Renderer with the embedded templates and CSS inlining, built on first use.
fn shared_renderer() -> Result<&'static Renderer, RenderError> {
    if let Some(renderer) = RENDERER.get() {
        return Ok(renderer);
    }
    let renderer = Renderer::new()?;
    Ok(RENDERER.get_or_init(|| renderer))
}

fn push_recipients<I, S>(list: &mut Vec<String>, recipients: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list.extend(
        recipients
            .into_iter()
            .map(Into::into)
            .filter(|r| !r.is_empty()),
    );
}

/// Mutable message under construction. Obtain one with [`crate::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    subject: String,
    from: Option<Address>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,

    name: String,
    greeting: String,
    salutation: String,
    preheader: String,
    text_direction: TextDirection,
    theme: Theme,
    product: Product,

    blocks: Vec<Block>,
    fallbacks: Vec<String>,
}

impl Builder {
    /// A builder seeded from `defaults` and nothing else. Use this to create a
    /// prototype for [`crate::set_default`]; use [`crate::new`] for messages.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Builder {
            subject: String::new(),
            from: defaults.from.clone(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            name: String::new(),
            greeting: defaults.greeting.clone(),
            salutation: defaults.salutation.clone(),
            preheader: String::new(),
            text_direction: defaults.text_direction,
            theme: defaults.theme,
            product: defaults.product.clone(),
            blocks: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sender address; pass `Address::named(..)` to include a display name.
    pub fn from(mut self, from: impl Into<Address>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Add recipients. Empty strings are dropped.
    pub fn to<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_recipients(&mut self.to, recipients);
        self
    }

    /// Add carbon-copy recipients. Empty strings are dropped.
    pub fn cc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_recipients(&mut self.cc, recipients);
        self
    }

    /// Add blind carbon-copy recipients. Empty strings are dropped.
    pub fn bcc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_recipients(&mut self.bcc, recipients);
        self
    }

    /// Recipient name used in the greeting line.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn salutation(mut self, salutation: impl Into<String>) -> Self {
        self.salutation = salutation.into();
        self
    }

    /// Inbox preview text shown after the subject line.
    pub fn preheader(mut self, preheader: impl Into<String>) -> Self {
        self.preheader = preheader.into();
        self
    }

    /// `"ltr"` or `"rtl"`; anything else leaves the direction unchanged.
    pub fn text_direction(mut self, direction: &str) -> Self {
        if let Ok(direction) = direction.parse() {
            self.text_direction = direction;
        }
        self
    }

    /// `"default"` or `"plain"`; unknown names select the default theme.
    pub fn theme(mut self, theme: &str) -> Self {
        self.theme = Theme::from_name(theme);
        self
    }

    /// Set product details. An empty name is taken from the default
    /// prototype, an empty copyright is generated from the name and the
    /// current year. The link is used as given.
    pub fn product(mut self, product: Product) -> Self {
        let Product { name, link, copyright } = product;
        let name = if name.is_empty() {
            prototype::current().product.name.clone()
        } else {
            name
        };
        let copyright = if copyright.is_empty() {
            Product::default_copyright(&name)
        } else {
            copyright
        };
        self.product = Product { name, link, copyright };
        self
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Line::new(text).into());
        self
    }

    /// Append a formatted line: `.linef(format_args!("Order #{id}"))`.
    pub fn linef(self, args: fmt::Arguments<'_>) -> Self {
        self.line(args.to_string())
    }

    /// Append a button with the default colour and a fallback line.
    pub fn action(self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.action_with(Action::new(text, link))
    }

    /// Append a fully configured action.
    pub fn action_with(mut self, action: Action) -> Self {
        if let Some(fallback) = action.fallback() {
            self.fallbacks.push(fallback);
        }
        self.blocks.push(action.into());
        self
    }

    /// Append a table. A table without rows is ignored.
    pub fn table(mut self, table: Table) -> Self {
        if table.rows.is_empty() {
            return self;
        }
        self.blocks.push(table.into());
        self
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Blocks in the order they were added.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The theme the next build renders with.
    pub fn selected_theme(&self) -> Theme {
        self.theme
    }

    /// Fallback lines collected from actions, in order.
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// The greeting with the recipient name placed for the text direction.
    pub fn greeting_line(&self) -> String {
        let greeting = if self.greeting.is_empty() {
            DEFAULT_GREETING
        } else {
            self.greeting.as_str()
        };
        if self.name.is_empty() {
            return greeting.to_owned();
        }
        match self.text_direction {
            TextDirection::Ltr => format!("{greeting} {}", self.name),
            TextDirection::Rtl => format!("{} {greeting}", self.name),
        }
    }

    fn envelope(&self) -> Envelope {
        Envelope {
            theme: self.theme,
            text_direction: self.text_direction,
            preheader: self.preheader.clone(),
            greeting: self.greeting_line(),
            salutation: self.salutation.clone(),
            product: self.product.clone(),
            fallbacks: self.fallbacks.clone(),
        }
    }

    /// Render with the embedded templates and CSS inlining.
    pub fn build(&self) -> Result<Document, RenderError> {
        self.build_with(shared_renderer()?)
    }

    /// Render with a caller-supplied [`Renderer`].
    pub fn build_with(&self, renderer: &Renderer) -> Result<Document, RenderError> {
        tracing::debug!(
            "building document: subject={:?} blocks={} theme={}",
            self.subject,
            self.blocks.len(),
            self.theme
        );
        let rendered = renderer.render(&self.envelope(), &self.blocks)?;
        Ok(Document {
            subject: self.subject.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            html: rendered.html,
            plain_text: rendered.text,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_core::config::{DEFAULT_PRODUCT_NAME, DEFAULT_SALUTATION};
    use letterpress_core::Row;
    use letterpress_renderer::{BoxError, Passthrough, TemplateEngine};
    use rstest::rstest;

    fn passthrough() -> Renderer {
        Renderer::with_engine(TemplateEngine::embedded().unwrap(), Passthrough)
    }

    #[test]
    fn new_builder_carries_builtin_defaults() {
        let b = crate::new();
        assert_eq!(b.greeting, DEFAULT_GREETING);
        assert_eq!(b.salutation, DEFAULT_SALUTATION);
        assert_eq!(b.theme, Theme::Default);
        assert_eq!(b.text_direction, TextDirection::Ltr);
        assert_eq!(b.product.name, DEFAULT_PRODUCT_NAME);
        assert!(b.blocks.is_empty());
    }

    #[rstest]
    #[case("ltr", "Hi John")]
    #[case("rtl", "John Hi")]
    fn greeting_places_name_by_direction(#[case] direction: &str, #[case] expected: &str) {
        let b = crate::new().greeting("Hi").name("John").text_direction(direction);
        assert_eq!(b.greeting_line(), expected);
    }

    #[test]
    fn greeting_without_name_is_bare() {
        assert_eq!(crate::new().greeting("Hey").greeting_line(), "Hey");
    }

    #[test]
    fn empty_greeting_falls_back() {
        let b = crate::new().greeting("").name("Ana");
        assert_eq!(b.greeting_line(), format!("{DEFAULT_GREETING} Ana"));
    }

    #[rstest]
    #[case("")]
    #[case("up")]
    #[case("RTL")]
    fn invalid_text_direction_is_ignored(#[case] value: &str) {
        let b = crate::new().text_direction("rtl").text_direction(value);
        assert_eq!(b.text_direction, TextDirection::Rtl);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(crate::new().theme("plain").theme, Theme::Plain);
        assert_eq!(crate::new().theme("plain").theme("neon").theme, Theme::Default);
    }

    #[test]
    fn recipients_accumulate_and_drop_empty() {
        let b = crate::new()
            .to(["a@example.com", ""])
            .to(["b@example.com"])
            .cc([""])
            .bcc(vec![String::from("c@example.com"), String::new()]);
        assert_eq!(b.to, vec!["a@example.com", "b@example.com"]);
        assert!(b.cc.is_empty());
        assert_eq!(b.bcc, vec!["c@example.com"]);
    }

    #[test]
    fn singular_fields_are_overwritten() {
        let b = crate::new()
            .subject("first")
            .subject("second")
            .from("a@example.com")
            .from(Address::named("Acme", "b@example.com"));
        assert_eq!(b.subject, "second");
        assert_eq!(b.from.map(|a| a.to_string()).as_deref(), Some("Acme <b@example.com>"));
    }

    #[test]
    fn blocks_keep_call_order() {
        let b = crate::new()
            .line("one")
            .action("two", "https://example.com/2")
            .linef(format_args!("{}{}", "th", "ree"))
            .table(Table::new([Row::new().cell("k", "v")]));
        let kinds: Vec<&str> = b.blocks().iter().map(Block::template_name).collect();
        assert_eq!(kinds, vec!["line", "button", "line", "table"]);
        assert_eq!(b.blocks()[2].plain_text(), "three");
    }

    #[test]
    fn empty_table_is_not_appended() {
        let b = crate::new().table(Table::default());
        assert!(b.blocks().is_empty());
    }

    #[test]
    fn actions_collect_fallbacks_unless_disabled() {
        let b = crate::new()
            .action("Go", "https://example.com/go")
            .action_with(Action::new("Skip", "https://example.com/skip").without_fallback())
            .action_with(Action::new("Own", "https://example.com/own").fallback_text("custom"));
        assert_eq!(b.fallbacks().len(), 2);
        assert!(b.fallbacks()[0].contains("\"Go\" button"));
        assert_eq!(b.fallbacks()[1], "custom");
        assert_eq!(b.blocks().len(), 3);
    }

    #[test]
    fn empty_product_backfills_name_and_copyright() {
        let b = crate::new().product(Product::default());
        assert_eq!(b.product.name, DEFAULT_PRODUCT_NAME);
        assert_eq!(b.product.copyright, Product::default_copyright(DEFAULT_PRODUCT_NAME));
        assert_eq!(b.product.link, "", "link is taken verbatim even when empty");
    }

    #[test]
    fn product_copyright_uses_resolved_name() {
        let b = crate::new().product(Product {
            name: "Acme".to_owned(),
            link: "https://acme.test".to_owned(),
            copyright: String::new(),
        });
        assert_eq!(b.product.copyright, Product::default_copyright("Acme"));
        assert_eq!(b.product.link, "https://acme.test");
    }

    #[test]
    fn build_is_idempotent() {
        let renderer = passthrough();
        let b = crate::new()
            .subject("Receipt")
            .to(["jane@example.com"])
            .name("Jane")
            .line("Thanks!")
            .action("View", "https://example.com/v")
            .table(Table::new([Row::new().cell("item", "Widget")]));
        let first = b.build_with(&renderer).unwrap();
        let second = b.build_with(&renderer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn build_copies_addresses_into_document() {
        let doc = crate::new()
            .subject("Hi")
            .from(Address::named("Acme", "no-reply@acme.test"))
            .to(["a@example.com"])
            .cc(["b@example.com"])
            .bcc(["c@example.com"])
            .build_with(&passthrough())
            .unwrap();
        assert_eq!(doc.subject(), "Hi");
        assert_eq!(doc.from().map(ToString::to_string).as_deref(), Some("Acme <no-reply@acme.test>"));
        assert_eq!(doc.to(), ["a@example.com"]);
        assert_eq!(doc.cc(), ["b@example.com"]);
        assert_eq!(doc.bcc(), ["c@example.com"]);
    }

    #[test]
    fn build_does_not_require_recipients() {
        assert!(crate::new().build_with(&passthrough()).is_ok());
    }

    #[test]
    fn template_failure_aborts_build() {
        let engine = TemplateEngine::from_raw([("plaintext/index.txt", "{{ greeting }}")]).unwrap();
        let renderer = Renderer::with_engine(engine, Passthrough);
        let err = crate::new().line("x").build_with(&renderer).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)), "got: {err}");
    }

    #[test]
    fn transform_failure_aborts_build() {
        let failing = |_: &str| -> Result<String, BoxError> { Err("bad markup".into()) };
        let renderer = Renderer::with_engine(TemplateEngine::embedded().unwrap(), failing);
        let err = crate::new().line("x").build_with(&renderer).unwrap_err();
        assert!(matches!(err, RenderError::Transform(_)), "got: {err}");
    }

    #[test]
    fn plain_text_body_has_no_fallbacks() {
        let doc = crate::new()
            .greeting("Hi")
            .name("John")
            .action("Click Here", "https://example.com")
            .build_with(&passthrough())
            .unwrap();
        assert!(doc.plain_text().starts_with("Hi John,\n\n"));
        assert!(doc.plain_text().contains("Click Here (https://example.com)"));
        assert!(!doc.plain_text().contains("having trouble"));
        assert!(doc.html().contains("having trouble"));
    }

    #[test]
    fn builders_are_independent_clones() {
        let a = crate::new().line("only in a");
        let b = crate::new();
        assert_eq!(a.blocks().len(), 1);
        assert!(b.blocks().is_empty());
    }

    #[test]
    fn document_serializes_for_transport() {
        let doc = crate::new().subject("S").to(["x@example.com"]).build_with(&passthrough()).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["subject"], "S");
        assert_eq!(json["to"][0], "x@example.com");
        assert!(json["html"].as_str().unwrap().contains("<html"));
        assert!(json.get("from").is_none());
    }
}
