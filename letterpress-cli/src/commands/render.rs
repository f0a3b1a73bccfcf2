//! `letterpress render <demo> [--theme ...] [--config FILE] [--out DIR] [--json]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use letterpress::{config, prototype, Document};

use crate::demos::Demo;
use crate::ThemeArg;

/// Render one or all demo messages.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Demo message to render.
    #[arg(value_enum)]
    pub demo: Option<Demo>,

    /// Render every demo (requires --out).
    #[arg(long, conflicts_with = "demo")]
    pub all: bool,

    /// Theme override: default | plain.
    #[arg(long, short = 't')]
    pub theme: Option<ThemeArg>,

    /// YAML defaults file installed as the default prototype before rendering.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write `<DIR>/<theme>/<demo>.html` and `.txt` instead of printing.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the whole document as JSON.
    #[arg(long, conflicts_with = "out")]
    pub json: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        if let Some(path) = &self.config {
            let defaults = config::load_at(path)
                .with_context(|| format!("failed to load defaults from '{}'", path.display()))?;
            prototype::set_defaults(&defaults);
            tracing::info!("loaded defaults from {}", path.display());
        }

        let demos: Vec<Demo> = match (self.demo, self.all) {
            (Some(demo), _) => vec![demo],
            (None, true) => Demo::all().to_vec(),
            (None, false) => bail!("name a demo (welcome, reset, receipt) or pass --all"),
        };
        if demos.len() > 1 && self.out.is_none() {
            bail!("--all requires --out <DIR>");
        }

        for demo in demos {
            let mut builder = demo.builder();
            if let Some(theme) = self.theme {
                builder = builder.theme(theme.0.as_str());
            }
            let theme = builder.selected_theme();
            let document = builder
                .build()
                .with_context(|| format!("failed to render '{demo}' with theme '{theme}'"))?;

            match &self.out {
                Some(dir) => write_document(&dir.join(theme.as_str()), demo, &document)?,
                None if self.json => {
                    println!("{}", serde_json::to_string_pretty(&document)?);
                }
                None => println!("{}", document.plain_text()),
            }
        }
        Ok(())
    }
}

fn write_document(dir: &Path, demo: Demo, document: &Document) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory '{}'", dir.display()))?;

    let html = dir.join(format!("{demo}.html"));
    let text = dir.join(format!("{demo}.txt"));
    fs::write(&html, document.html())
        .with_context(|| format!("cannot write '{}'", html.display()))?;
    fs::write(&text, document.plain_text())
        .with_context(|| format!("cannot write '{}'", text.display()))?;

    println!("{} wrote {}", "✓".green(), html.display());
    println!("{} wrote {}", "✓".green(), text.display());
    Ok(())
}
