use std::collections::BTreeSet;

use crate::types::Scene;

/// Ordinal of the first scene whose heading or element text contains `query`,
/// matched case-insensitively, in document order.
pub fn find_scene_containing_text(scenes: &[Scene], query: &str) -> Option<usize> {
    let needle = query.to_lowercase();
    scenes
        .iter()
        .find(|scene| {
            scene.heading.to_lowercase().contains(&needle)
                || scene
                    .elements
                    .iter()
                    .any(|paragraph| paragraph.text.to_lowercase().contains(&needle))
        })
        .map(|scene| scene.ordinal)
}

/// Union of every scene's character set. Callers that need a display order
/// beyond the set's lexicographic one must sort it themselves.
pub fn characters_across_document(scenes: &[Scene]) -> BTreeSet<String> {
    scenes
        .iter()
        .flat_map(|scene| scene.characters.iter().cloned())
        .collect()
}

/// Ordinals of scenes featuring a character whose name contains `name`,
/// matched case-insensitively against the upper-cased cue names.
pub fn scenes_with_character(scenes: &[Scene], name: &str) -> Vec<usize> {
    let needle = name.to_uppercase();
    scenes
        .iter()
        .filter(|scene| scene.characters.iter().any(|cue| cue.contains(&needle)))
        .map(|scene| scene.ordinal)
        .collect()
}
