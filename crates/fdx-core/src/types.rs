use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Formatting class of one screenplay paragraph, as written by the Final
/// Draft family of exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphKind {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Shot,
    General,
}

impl ParagraphKind {
    /// Classify an exporter `Type` designator. Matching is case-sensitive on
    /// the spellings the exporters themselves write; any other value falls
    /// back to `General` so no paragraph is ever dropped for its type alone.
    pub fn from_designator(raw: &str) -> Self {
        match raw.trim() {
            "Scene Heading" => Self::SceneHeading,
            "Action" => Self::Action,
            "Character" => Self::Character,
            "Dialogue" => Self::Dialogue,
            "Parenthetical" => Self::Parenthetical,
            "Transition" => Self::Transition,
            "Shot" => Self::Shot,
            _ => Self::General,
        }
    }

    pub fn designator(&self) -> &'static str {
        match self {
            Self::SceneHeading => "Scene Heading",
            Self::Action => "Action",
            Self::Character => "Character",
            Self::Dialogue => "Dialogue",
            Self::Parenthetical => "Parenthetical",
            Self::Transition => "Transition",
            Self::Shot => "Shot",
            Self::General => "General",
        }
    }
}

/// One formatted unit of screenplay text. `text` is always flat, decoded
/// prose with outer whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub text: String,
}

impl Paragraph {
    pub fn new(kind: ParagraphKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A maximal run of paragraphs between two scene headings. The opening
/// heading lives only in `heading`, never duplicated into `elements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// 1-based position in document order.
    pub ordinal: usize,
    /// Heading text; empty for a preamble scene that starts before the first
    /// scene heading.
    pub heading: String,
    pub elements: Vec<Paragraph>,
    /// Distinct character cue names in this scene, upper-cased for matching.
    pub characters: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenplay {
    pub scenes: Vec<Scene>,
}

impl Screenplay {
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scene(&self, ordinal: usize) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.ordinal == ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_designator_maps_known_exporter_spellings() {
        assert_eq!(
            ParagraphKind::from_designator("Scene Heading"),
            ParagraphKind::SceneHeading
        );
        assert_eq!(ParagraphKind::from_designator("Action"), ParagraphKind::Action);
        assert_eq!(
            ParagraphKind::from_designator("Parenthetical"),
            ParagraphKind::Parenthetical
        );
        assert_eq!(ParagraphKind::from_designator("Shot"), ParagraphKind::Shot);
    }

    #[test]
    fn from_designator_is_case_sensitive_and_falls_back_to_general() {
        assert_eq!(
            ParagraphKind::from_designator("character"),
            ParagraphKind::General
        );
        assert_eq!(
            ParagraphKind::from_designator("SCENE HEADING"),
            ParagraphKind::General
        );
        assert_eq!(ParagraphKind::from_designator("Song Cue"), ParagraphKind::General);
    }

    #[test]
    fn from_designator_trims_outer_whitespace() {
        assert_eq!(
            ParagraphKind::from_designator("  Dialogue "),
            ParagraphKind::Dialogue
        );
    }

    #[test]
    fn designator_round_trips_for_every_kind() {
        for kind in [
            ParagraphKind::SceneHeading,
            ParagraphKind::Action,
            ParagraphKind::Character,
            ParagraphKind::Dialogue,
            ParagraphKind::Parenthetical,
            ParagraphKind::Transition,
            ParagraphKind::Shot,
            ParagraphKind::General,
        ] {
            assert_eq!(ParagraphKind::from_designator(kind.designator()), kind);
        }
    }

    #[test]
    fn screenplay_scene_looks_up_by_ordinal() {
        let screenplay = Screenplay {
            scenes: vec![Scene {
                ordinal: 1,
                heading: "INT. ROOM".to_string(),
                elements: Vec::new(),
                characters: BTreeSet::new(),
            }],
        };
        assert_eq!(screenplay.scene_count(), 1);
        assert!(screenplay.scene(1).is_some());
        assert!(screenplay.scene(2).is_none());
    }

    #[test]
    fn screenplay_serializes_with_camel_case_fields() {
        let screenplay = Screenplay {
            scenes: vec![Scene {
                ordinal: 1,
                heading: "INT. ROOM".to_string(),
                elements: vec![Paragraph::new(ParagraphKind::Action, "A beat.")],
                characters: BTreeSet::new(),
            }],
        };
        let json = serde_json::to_value(&screenplay).expect("screenplay should serialize");
        assert_eq!(json["scenes"][0]["ordinal"], 1);
        assert_eq!(json["scenes"][0]["elements"][0]["kind"], "action");
    }
}
