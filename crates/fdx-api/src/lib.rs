use fdx_core::{FdxError, Screenplay};
use fdx_parser::{normalize_paragraphs, parse_xml_document, segment_scenes, XmlDocument};

/// Full pipeline over raw document text: XML ingestion, paragraph
/// normalization, scene segmentation. Returns the screenplay by value; no
/// state is retained between calls.
pub fn parse_screenplay(source: &str) -> Result<Screenplay, FdxError> {
    let document = parse_xml_document(source)?;
    parse_screenplay_from_tree(&document)
}

/// Normalize and segment a tree a caller already decoded.
pub fn parse_screenplay_from_tree(document: &XmlDocument) -> Result<Screenplay, FdxError> {
    let paragraphs = normalize_paragraphs(document)?;
    Ok(Screenplay {
        scenes: segment_scenes(paragraphs),
    })
}
