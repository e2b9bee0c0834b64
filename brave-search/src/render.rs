//! Response rendering
//!
//! Prints the decoded response as pretty JSON, as a compact text table, or
//! both. Only two response shapes are understood: a top-level `results`
//! list, or one nested under `web.results`.

use serde_json::Value;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use textwrap::{Options, WrapAlgorithm};

use crate::error::{SearchError, SearchResult};
use crate::types::OutputMode;

/// Column width the snippet is wrapped to
pub const WRAP_WIDTH: usize = 92;
/// Longest snippet printed before truncation
pub const MAX_SNIPPET_CHARS: usize = 160;
const ELLIPSIS: &str = "...";
const INDENT: &str = "    ";

/// Printed when table output finds nothing to show
pub const NO_RESULTS: &str = "No web results in response";

/// Pretty-print a JSON document with 2-space indentation
///
/// Keys keep the order they were received in and non-ASCII text is left
/// unescaped.
pub fn pretty_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Persist the raw response to `path`
pub fn save_response(path: &Path, value: &Value) -> SearchResult<()> {
    let save_err = |source: io::Error| SearchError::Save {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(save_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| save_err(e.into()))?;
    writer.flush().map_err(save_err)?;

    tracing::info!("Saved raw response to {}", path.display());
    Ok(())
}

/// Locate the web result list in a response
///
/// Uses `web.results` when `web` is an object, otherwise top-level
/// `results`. Anything that is not a list counts as empty.
pub fn extract_web_results(response: &Value) -> &[Value] {
    let container = match response.get("web") {
        Some(web @ Value::Object(_)) => web,
        _ => response,
    };

    container
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Display fields of one result, with fallbacks already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem<'a> {
    pub title: Cow<'a, str>,
    pub url: Cow<'a, str>,
    pub snippet: Cow<'a, str>,
}

impl<'a> ResultItem<'a> {
    pub fn from_value(item: &'a Value) -> Self {
        let title = display_field(item, "title")
            .or_else(|| item.get("source").and_then(|s| display_field(s, "title")))
            .unwrap_or_default();
        let url = display_field(item, "url")
            .or_else(|| display_field(item, "link"))
            .unwrap_or_default();
        let snippet = display_field(item, "description")
            .or_else(|| display_field(item, "snippet"))
            .unwrap_or_default();

        Self {
            title,
            url,
            snippet,
        }
    }
}

// Falsy values (null, false, 0, "", [], {}) fall through to the next
// candidate key. Other non-string values are shown as compact JSON.
fn display_field<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, str>> {
    let field = value.get(key)?;
    match field {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Array(a) if !a.is_empty() => Some(Cow::Owned(field.to_string())),
        Value::Object(o) if !o.is_empty() => Some(Cow::Owned(field.to_string())),
        _ => None,
    }
}

/// Collapse whitespace runs and cap the snippet length
pub fn clean_snippet(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > MAX_SNIPPET_CHARS {
        let keep = MAX_SNIPPET_CHARS - ELLIPSIS.len();
        let mut truncated: String = collapsed.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        collapsed
    }
}

/// Wrap the cleaned snippet greedily at [`WRAP_WIDTH`]
///
/// Only the first line is indented. Words wider than the line are split
/// into width-sized pieces, so no line exceeds the width.
fn format_snippet(raw: &str) -> String {
    let snippet = clean_snippet(raw);
    let options = Options::new(WRAP_WIDTH).wrap_algorithm(WrapAlgorithm::FirstFit);
    let lines = textwrap::wrap(&snippet, options);

    format!("{INDENT}{}", lines.join("\n"))
}

/// Render results as numbered 3-line blocks
pub fn compact_table(results: &[Value]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item = ResultItem::from_value(item);
            format!(
                "{:>2}. {}\n{INDENT}{}\n{}",
                i + 1,
                item.title,
                item.url,
                format_snippet(&item.snippet)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the response to `out` according to `mode`
///
/// JSON is written unless the table was requested alone. When both are
/// requested a `---` separator sits between them.
pub fn render<W: Write>(response: &Value, mode: OutputMode, out: &mut W) -> io::Result<()> {
    if mode.prints_json() {
        writeln!(out, "{}", pretty_json(response)?)?;
        if mode.prints_separator() {
            writeln!(out, "\n---\n")?;
        }
    }

    if mode.prints_table() {
        let results = extract_web_results(response);
        if results.is_empty() {
            writeln!(out, "{NO_RESULTS}")?;
            return Ok(());
        }
        writeln!(out, "{}", compact_table(results))?;
    }

    Ok(())
}
