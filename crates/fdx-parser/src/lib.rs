pub mod normalize;
pub mod segment;
pub mod xml;

pub use normalize::normalize_paragraphs;
pub use segment::segment_scenes;
pub use xml::{parse_xml_document, XmlDocument, XmlElementNode, XmlNode};
