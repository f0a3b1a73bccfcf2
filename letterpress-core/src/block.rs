//! Content blocks — the closed set of things a message body is made of.
//!
//! Every block renders itself two ways: through a markup template looked up
//! by [`Block::template_name`] (see `letterpress-renderer`) and directly to
//! plain text via [`Block::plain_text`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default button colour for actions.
pub const DEFAULT_ACTION_COLOR: &str = "#3869D4";

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// A paragraph of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A call-to-action button linking to `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub text: String,
    pub link: String,
    /// Hex colour of the button, e.g. `#3869D4`.
    pub color: String,
    /// Whether the builder collects a fallback line for this action.
    pub fallback_enabled: bool,
    /// Replaces the generated fallback sentence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
}

impl Action {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            color: DEFAULT_ACTION_COLOR.to_owned(),
            fallback_enabled: true,
            fallback_text: None,
        }
    }

    /// Override the button colour. An empty colour keeps the current one.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        if !color.is_empty() {
            self.color = color;
        }
        self
    }

    /// Do not collect a fallback line for this action.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_enabled = false;
        self
    }

    /// Use `text` instead of the generated fallback sentence.
    pub fn fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    /// The fallback line shown in the markup footer, or `None` when disabled.
    pub fn fallback(&self) -> Option<String> {
        if !self.fallback_enabled {
            return None;
        }
        Some(match &self.fallback_text {
            Some(text) => text.clone(),
            None => format!(
                "If you're having trouble clicking the \"{}\" button, copy and paste the URL below into your web browser: {}",
                self.text, self.link
            ),
        })
    }

    /// `"<text> (<link>)"`.
    pub fn plain_text(&self) -> String {
        format!("{} ({})", self.text, self.link)
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Parse an alignment name; anything unrecognised is [`Alignment::Left`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `key → value` cell of a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// An ordered list of cells. The first row of a table fixes the column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub entries: Vec<Entry>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(Entry::new(key, value));
        self
    }

    /// Value of the cell named `key`. When a key repeats, the last cell wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rfind(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| Entry::new(k, v)).collect(),
        }
    }
}

/// Per-column presentation hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Column width, e.g. `"12"`, `"20%"`, `"200px"`. Markup uses the string
    /// verbatim; plain text honours only the leading digits.
    #[serde(default)]
    pub widths: HashMap<String, String>,
    #[serde(default)]
    pub alignments: HashMap<String, Alignment>,
}

impl Columns {
    pub fn width(&self, key: &str) -> Option<&str> {
        self.widths.get(key).map(String::as_str)
    }

    pub fn alignment(&self, key: &str) -> Alignment {
        self.alignments.get(key).copied().unwrap_or_default()
    }
}

/// A grid of rows with optional column metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
    #[serde(default)]
    pub columns: Columns,
}

impl Table {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            columns: Columns::default(),
        }
    }

    /// Set the width hint for column `key`.
    pub fn width(mut self, key: impl Into<String>, width: impl Into<String>) -> Self {
        self.columns.widths.insert(key.into(), width.into());
        self
    }

    /// Set the alignment of column `key`.
    pub fn align(mut self, key: impl Into<String>, alignment: Alignment) -> Self {
        self.columns.alignments.insert(key.into(), alignment);
        self
    }

    /// Column keys in render order: the keys of the first row.
    ///
    /// Keys that only appear in later rows are not columns and are never
    /// rendered.
    pub fn column_keys(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.first().map_or(true, Row::is_empty)
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A unit of message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Line(Line),
    Action(Action),
    Table(Table),
}

impl Block {
    /// Name of the markup template that renders this block.
    pub fn template_name(&self) -> &'static str {
        match self {
            Block::Line(_) => "line",
            Block::Action(_) => "button",
            Block::Table(_) => "table",
        }
    }

    /// Plain-text rendering; needs no template.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Line(line) => line.text.clone(),
            Block::Action(action) => action.plain_text(),
            Block::Table(table) => table.plain_text(),
        }
    }
}

impl From<Line> for Block {
    fn from(line: Line) -> Self {
        Block::Line(line)
    }
}

impl From<Action> for Block {
    fn from(action: Action) -> Self {
        Block::Action(action)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
