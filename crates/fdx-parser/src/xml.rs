use std::collections::BTreeMap;

use fdx_core::FdxError;
use roxmltree::{Document, Node, NodeType};

/// Owned generic tree decoded from raw document text. This is the only stage
/// that touches the XML reader; the normalizer consumes this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: XmlElementNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElementNode),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlElementNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
}

pub fn parse_xml_document(source: &str) -> Result<XmlDocument, FdxError> {
    let document = Document::parse(source)
        .map_err(|error| FdxError::new("XML_PARSE_ERROR", error.to_string()))?;

    let Some(root) = document.root().children().find(|node| node.is_element()) else {
        return Err(FdxError::new(
            "XML_PARSE_ERROR",
            "XML document must contain a root element.",
        ));
    };

    Ok(XmlDocument {
        root: build_element(root),
    })
}

fn build_element(node: Node<'_, '_>) -> XmlElementNode {
    let mut attributes = BTreeMap::new();
    for attribute in node.attributes() {
        attributes.insert(attribute.name().to_string(), attribute.value().to_string());
    }

    let mut children = Vec::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => children.push(XmlNode::Element(build_element(child))),
            NodeType::Text => {
                let value = child.text().unwrap_or_default();
                if value.is_empty() {
                    continue;
                }
                children.push(XmlNode::Text(value.to_string()));
            }
            _ => {}
        }
    }

    XmlElementNode {
        name: node.tag_name().name().to_string(),
        attributes,
        children,
    }
}

impl XmlElementNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First element child with the given tag name.
    pub fn child<'a>(&'a self, name: &'a str) -> Option<&'a XmlElementNode> {
        self.children_named(name).next()
    }

    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElementNode> {
        self.element_children().filter(move |child| child.name == name)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &XmlElementNode> {
        self.children.iter().filter_map(|entry| match entry {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated direct text children, untrimmed.
    pub fn inline_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|entry| match entry {
                XmlNode::Text(value) => Some(value.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// All text content in document order, descending through nested
    /// elements (style runs and the like), untrimmed.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &XmlElementNode, out: &mut String) {
    for entry in &node.children {
        match entry {
            XmlNode::Text(value) => out.push_str(value),
            XmlNode::Element(element) => collect_text(element, out),
        }
    }
}
