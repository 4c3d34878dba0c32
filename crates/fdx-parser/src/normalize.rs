use fdx_core::{FdxError, Paragraph, ParagraphKind};

use crate::xml::{XmlDocument, XmlElementNode};

/// Root element spellings seen across FDX exporters.
const ROOT_NAMES: &[&str] = &["FinalDraft", "final_draft"];

/// Paragraph-container paths tried in order, relative to the root. Raw
/// exports that hang paragraphs directly off the root are handled after
/// these, see `normalize_paragraphs`.
const CONTAINER_PATHS: &[&[&str]] = &[
    &["Content"],
    &["Content", "Script"],
    &["Document", "Content"],
];

/// Convert a decoded document tree into paragraphs in document order.
///
/// Fails with `SHAPE_NOT_RECOGNIZED` only once every known exporter layout
/// has been tried. A recognized container holding zero non-empty paragraphs
/// yields `Ok` with an empty list, so callers can tell an empty screenplay
/// apart from a file that is not a screenplay at all.
pub fn normalize_paragraphs(document: &XmlDocument) -> Result<Vec<Paragraph>, FdxError> {
    let root = &document.root;
    if !ROOT_NAMES.contains(&root.name.as_str()) {
        return Err(FdxError::new(
            "SHAPE_NOT_RECOGNIZED",
            format!("Unknown screenplay root element <{}>.", root.name),
        ));
    }

    let mut container_seen = false;
    for path in CONTAINER_PATHS {
        let Some(container) = resolve_path(root, path) else {
            continue;
        };
        container_seen = true;
        let nodes: Vec<&XmlElementNode> = container.children_named("Paragraph").collect();
        if nodes.is_empty() {
            continue;
        }
        return Ok(collect_paragraphs(&nodes));
    }

    // Raw exports place <Paragraph> elements directly under the root.
    let direct: Vec<&XmlElementNode> = root.children_named("Paragraph").collect();
    if !direct.is_empty() {
        return Ok(collect_paragraphs(&direct));
    }

    if container_seen {
        return Ok(Vec::new());
    }

    Err(FdxError::new(
        "SHAPE_NOT_RECOGNIZED",
        format!(
            "<{}> document holds no known paragraph container (tried Content, Content.Script, Document.Content).",
            root.name
        ),
    ))
}

fn resolve_path<'a>(root: &'a XmlElementNode, path: &[&'a str]) -> Option<&'a XmlElementNode> {
    let mut current = root;
    for name in path {
        current = current.child(name)?;
    }
    Some(current)
}

fn collect_paragraphs(nodes: &[&XmlElementNode]) -> Vec<Paragraph> {
    nodes
        .iter()
        .filter_map(|node| normalize_paragraph(node))
        .collect()
}

/// Best-effort extraction of a single paragraph. A node missing both the
/// type designator and any text recovers as `General` with empty text, which
/// the empty rule then drops; one malformed paragraph never fails the parse.
fn normalize_paragraph(node: &XmlElementNode) -> Option<Paragraph> {
    let kind = paragraph_kind(node);
    let text = paragraph_text(node);
    if text.is_empty() {
        return None;
    }
    Some(Paragraph { kind, text })
}

fn paragraph_kind(node: &XmlElementNode) -> ParagraphKind {
    // Attribute form wins when both encodings are present.
    if let Some(raw) = node.attribute("Type") {
        return ParagraphKind::from_designator(raw);
    }
    if let Some(child) = node.child("Type") {
        return ParagraphKind::from_designator(&child.flattened_text());
    }
    ParagraphKind::General
}

/// Unify the text encodings: `<Text>` children (flattening nested style
/// runs), with a fallback to prose sitting directly inside the paragraph.
/// Outer whitespace is trimmed, internal whitespace preserved.
fn paragraph_text(node: &XmlElementNode) -> String {
    let mut out = String::new();
    for run in node.children_named("Text") {
        out.push_str(&run.flattened_text());
    }
    if out.trim().is_empty() {
        out = node.inline_text();
    }
    out.trim().to_string()
}
