//! Tera rendering engine — [`TemplateEngine`] and the [`Renderer`] that
//! drives a full message render.
//!
//! # Template layout
//!
//! | Name                   | Renders                                    |
//! |------------------------|--------------------------------------------|
//! | `<theme>/index.html`   | markup envelope around the rendered blocks |
//! | `<theme>/line.html`    | [`Block::Line`]                            |
//! | `<theme>/button.html`  | [`Block::Action`]                          |
//! | `<theme>/table.html`   | [`Block::Table`]                           |
//! | `plaintext/index.txt`  | plain-text envelope                        |
//!
//! `<theme>` is `default` or `plain`.

use std::sync::LazyLock;

use regex::Regex;
use tera::Tera;

use letterpress_core::{Block, Theme};

use crate::context::{Envelope, TableCtx, TemplateContext};
use crate::error::RenderError;
use crate::inline::{CssInliner, Inliner};

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("default/index.html", include_str!("templates/default/index.html")),
    ("default/line.html", include_str!("templates/default/line.html")),
    ("default/button.html", include_str!("templates/default/button.html")),
    ("default/table.html", include_str!("templates/default/table.html")),
    ("plain/index.html", include_str!("templates/plain/index.html")),
    ("plain/line.html", include_str!("templates/plain/line.html")),
    ("plain/button.html", include_str!("templates/plain/button.html")),
    ("plain/table.html", include_str!("templates/plain/table.html")),
    ("plaintext/index.txt", include_str!("templates/plaintext/index.txt")),
];

/// Name of the plain-text envelope template.
pub const PLAIN_TEXT_INDEX: &str = "plaintext/index.txt";

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("blank-run pattern is valid")
});

fn build_tera<I, N, C>(templates: I) -> Result<Tera, RenderError>
where
    I: IntoIterator<Item = (N, C)>,
    N: AsRef<str>,
    C: AsRef<str>,
{
    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

/// Trim the plain-text body and collapse runs of blank lines to one.
pub fn normalize_plain_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    BLANK_RUNS.replace_all(text.trim(), "\n\n").into_owned()
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine holding every theme's templates.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Engine with the embedded templates only.
    pub fn embedded() -> Result<Self, RenderError> {
        Self::with_overrides(std::iter::empty::<(String, String)>())
    }

    /// Engine with the embedded templates, where `overrides` replace or add
    /// templates by name.
    pub fn with_overrides<I, N, C>(overrides: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut templates: Vec<(String, String)> = TPLS
            .iter()
            .map(|(name, content)| ((*name).to_owned(), (*content).to_owned()))
            .collect();
        for (name, content) in overrides {
            let name = name.into();
            let content = content.into();
            match templates.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = content,
                None => templates.push((name, content)),
            }
        }
        Ok(TemplateEngine { tera: build_tera(templates)? })
    }

    /// Engine with exactly the given templates and nothing embedded.
    pub fn from_raw<I, N, C>(templates: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        Ok(TemplateEngine { tera: build_tera(templates)? })
    }

    /// `true` when a template called `name` is loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render template `name` with any serializable context.
    pub fn render<S: serde::Serialize>(&self, name: &str, ctx: &S) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(ctx)?;
        Ok(self.tera.render(name, &ctx)?)
    }

    /// Render one block through `<theme>/<block>.html`.
    pub fn render_block(&self, theme: Theme, block: &Block) -> Result<String, RenderError> {
        let name = format!("{}/{}.html", theme.as_str(), block.template_name());
        match block {
            Block::Line(line) => self.render(&name, line),
            Block::Action(action) => self.render(&name, action),
            Block::Table(table) => self.render(&name, &TableCtx::from_table(table)),
        }
    }

    /// Render the markup envelope `<theme>/index.html`.
    pub fn render_index(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
        let name = format!("{}/index.html", ctx.envelope.theme.as_str());
        Ok(self.tera.render(&name, &ctx.to_tera_context()?)?)
    }

    /// Render the plain-text envelope.
    pub fn render_plain_index(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
        Ok(self.tera.render(PLAIN_TEXT_INDEX, &ctx.to_tera_context()?)?)
    }
}

// ---------------------------------------------------------------------------
// RenderMarkup
// ---------------------------------------------------------------------------

/// Markup-rendering capability of a block; the plain-text counterpart is
/// [`Block::plain_text`].
pub trait RenderMarkup {
    fn render_markup(&self, engine: &TemplateEngine, theme: Theme) -> Result<String, RenderError>;
}

impl RenderMarkup for Block {
    fn render_markup(&self, engine: &TemplateEngine, theme: Theme) -> Result<String, RenderError> {
        engine.render_block(theme, self)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Both bodies of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub text: String,
}

/// Drives a full render: blocks → markup envelope → CSS inlining, and
/// blocks → plain-text envelope → blank-line normalisation.
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
    inliner: Box<dyn Inliner>,
}

impl Renderer {
    /// Embedded templates, styles inlined with [`CssInliner`].
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer::with_engine(TemplateEngine::embedded()?, CssInliner))
    }

    pub fn with_engine(engine: TemplateEngine, inliner: impl Inliner + 'static) -> Self {
        Renderer { engine, inliner: Box::new(inliner) }
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Render both bodies. Fails without partial output on the first
    /// template or inlining error.
    pub fn render(&self, envelope: &Envelope, blocks: &[Block]) -> Result<Rendered, RenderError> {
        let html = self.render_html(envelope, blocks)?;
        let text = self.render_text(envelope, blocks)?;
        Ok(Rendered { html, text })
    }

    pub fn render_html(&self, envelope: &Envelope, blocks: &[Block]) -> Result<String, RenderError> {
        tracing::debug!(
            "rendering markup: theme={} blocks={}",
            envelope.theme,
            blocks.len()
        );
        let rendered = blocks
            .iter()
            .map(|block| block.render_markup(&self.engine, envelope.theme))
            .collect::<Result<Vec<_>, _>>()?;

        let ctx = TemplateContext::new(envelope, rendered);
        let html = self.engine.render_index(&ctx)?;
        let inlined = self.inliner.inline(&html).map_err(RenderError::Transform)?;
        tracing::debug!("markup rendered: {} bytes", inlined.len());
        Ok(inlined)
    }

    pub fn render_text(&self, envelope: &Envelope, blocks: &[Block]) -> Result<String, RenderError> {
        let rendered: Vec<String> = blocks.iter().map(Block::plain_text).collect();
        let ctx = TemplateContext::new(envelope, rendered);
        let text = normalize_plain_text(&self.engine.render_plain_index(&ctx)?);
        tracing::debug!("plain text rendered: {} bytes", text.len());
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
