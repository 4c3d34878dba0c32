use std::collections::BTreeSet;

use fdx_core::{Paragraph, ParagraphKind, Scene};

/// Open-scene accumulator. Replaced wholesale each time a scene closes so
/// segmentation stays a pure fold over the paragraph sequence.
#[derive(Debug, Default)]
struct SceneBuilder {
    heading: Option<String>,
    elements: Vec<Paragraph>,
    characters: BTreeSet<String>,
}

impl SceneBuilder {
    fn with_heading(heading: String) -> Self {
        Self {
            heading: Some(heading),
            ..Self::default()
        }
    }

    /// A builder with neither a heading nor elements carries no screenplay
    /// information and is never emitted.
    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.elements.is_empty()
    }

    fn push(&mut self, paragraph: Paragraph) {
        if paragraph.kind == ParagraphKind::Character {
            self.characters.insert(paragraph.text.to_uppercase());
        }
        self.elements.push(paragraph);
    }

    fn finish(self, ordinal: usize) -> Scene {
        Scene {
            ordinal,
            heading: self.heading.unwrap_or_default(),
            elements: self.elements,
            characters: self.characters,
        }
    }
}

/// Group paragraphs into scenes at each scene-heading boundary.
///
/// Content before the first heading becomes an ordinal-1 preamble scene with
/// an empty heading. Never fails: any paragraph list, including an empty one,
/// produces a valid (possibly empty) scene list, and every input paragraph
/// lands in exactly one scene (headings in `heading`, the rest in
/// `elements`).
pub fn segment_scenes(paragraphs: Vec<Paragraph>) -> Vec<Scene> {
    let mut scenes: Vec<Scene> = Vec::new();
    let mut open = SceneBuilder::default();

    for paragraph in paragraphs {
        if paragraph.kind == ParagraphKind::SceneHeading {
            if !open.is_empty() {
                let ordinal = scenes.len() + 1;
                scenes.push(open.finish(ordinal));
            }
            open = SceneBuilder::with_heading(paragraph.text);
        } else {
            open.push(paragraph);
        }
    }

    if !open.is_empty() {
        let ordinal = scenes.len() + 1;
        scenes.push(open.finish(ordinal));
    }

    scenes
}
