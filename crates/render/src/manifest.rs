//! Manifest text for rendered documents
//!
//! Plain string formatting: values are written as they are, nothing is
//! HTML-escaped. The ConfigMap blob goes into a YAML literal block scalar,
//! the only context here that needs any care.

use kvault_core::{DocumentData, Error, RenderedDocument, Result};
use std::fmt::Write;

const BLOB_INDENT: &str = "    ";

/// Render a document to manifest YAML, terminated by a newline
pub fn render(doc: &RenderedDocument) -> Result<String> {
    let kind = doc.kind.as_str();
    single_line(kind, "name", &doc.name)?;
    single_line(kind, "namespace", &doc.namespace)?;

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "apiVersion: v1\nkind: {kind}\nmetadata:\n  name: {}\n  namespace: {}\n",
        doc.name, doc.namespace
    );

    match &doc.data {
        DocumentData::Blob { key, text } => {
            single_line(kind, "data key", key)?;
            let _ = writeln!(out, "data:\n  {key}: {}", block_header(text));
            out.push_str(&indent(text, BLOB_INDENT));
            out.push('\n');
        }
        DocumentData::Entries(entries) => {
            out.push_str("type: Opaque\ndata:");
            for (key, value) in entries {
                single_line(kind, "data key", key)?;
                let _ = write!(out, "\n  {key}: {value}");
            }
            out.push('\n');
        }
    }

    tracing::info!(
        kind = %kind,
        name = %doc.name,
        namespace = %doc.namespace,
        entries = doc.data.len(),
        "Rendered document"
    );

    Ok(out)
}

fn single_line(kind: &str, field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(Error::template_render(
            kind,
            format!("{field} \"{}\" contains a line break", value.escape_debug()),
        ));
    }
    Ok(())
}

/// Prefix every line, blank ones included, with `pad`
fn indent(text: &str, pad: &str) -> String {
    let mut out = String::with_capacity(text.len() + pad.len());
    out.push_str(pad);
    out.push_str(&text.replace('\n', &format!("\n{pad}")));
    out
}

/// Literal block header.
///
/// YAML detects a block's indentation from its first non-empty line, and no
/// leading empty line may hold more spaces than that. Either a first content
/// line starting with a space or a leading line of spaces breaks detection once
/// everything is padded, so the indentation is then stated explicitly
/// (relative to the two-space key).
fn block_header(text: &str) -> &'static str {
    for line in text.split('\n') {
        if line.starts_with(' ') {
            return "|2";
        }
        if !line.is_empty() {
            break;
        }
    }
    "|"
}
