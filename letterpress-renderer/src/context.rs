//! Template context — serializable rendering payloads for the `index`
//! templates and for each block template.

use serde::{Deserialize, Serialize};

use letterpress_core::block::{Alignment, Table};
use letterpress_core::table::capitalize;
use letterpress_core::{Product, TextDirection, Theme};

/// Everything the `index` templates need apart from the blocks themselves.
///
/// `greeting` is the fully composed greeting line (recipient name already
/// placed according to the text direction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub theme: Theme,
    pub text_direction: TextDirection,
    pub preheader: String,
    pub greeting: String,
    pub salutation: String,
    pub product: Product,
    /// Fallback lines for actions, shown in the markup footer only.
    pub fallbacks: Vec<String>,
}

/// Payload for an `index` template: the envelope plus the blocks already
/// rendered to the target format.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    #[serde(flatten)]
    pub envelope: &'a Envelope,
    pub blocks: Vec<String>,
}

impl<'a> TemplateContext<'a> {
    pub fn new(envelope: &'a Envelope, blocks: Vec<String>) -> Self {
        Self { envelope, blocks }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, tera::Error> {
        tera::Context::from_serialize(self)
    }
}

/// Markup view of a [`Table`]: columns in first-row order, cells resolved
/// per column so templates never index by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCtx {
    pub columns: Vec<ColumnCtx>,
    pub rows: Vec<Vec<CellCtx>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCtx {
    pub key: String,
    pub title: String,
    /// Width hint passed through verbatim (`"20%"`, `"120px"`).
    pub width: Option<String>,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellCtx {
    pub value: String,
    pub align: Alignment,
}

impl TableCtx {
    pub fn from_table(table: &Table) -> Self {
        let columns: Vec<ColumnCtx> = table
            .column_keys()
            .into_iter()
            .map(|key| ColumnCtx {
                key: key.to_owned(),
                title: capitalize(key),
                width: table.columns.width(key).map(str::to_owned),
                align: table.columns.alignment(key),
            })
            .collect();

        let rows = if table.is_empty() {
            Vec::new()
        } else {
            table
                .rows
                .iter()
                .map(|row| {
                    columns
                        .iter()
                        .map(|c| CellCtx {
                            value: row.get(&c.key).unwrap_or_default().to_owned(),
                            align: c.align,
                        })
                        .collect()
                })
                .collect()
        };

        TableCtx { columns, rows }
    }
}
