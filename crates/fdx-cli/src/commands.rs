use fdx_core::{
    characters_across_document, find_scene_containing_text, FdxError, Paragraph, ParagraphKind,
    Screenplay,
};

use crate::map_export_json;

pub(crate) fn scenes_lines(screenplay: &Screenplay) -> Vec<String> {
    let mut lines = vec![
        "RESULT:OK".to_string(),
        format!("SCENE_COUNT:{}", screenplay.scene_count()),
    ];
    for scene in &screenplay.scenes {
        lines.push(format!("SCENE:{}|{}", scene.ordinal, json_string(&scene.heading)));
    }
    lines
}

pub(crate) fn characters_lines(screenplay: &Screenplay) -> Vec<String> {
    let mut lines = vec!["RESULT:OK".to_string()];
    for name in characters_across_document(&screenplay.scenes) {
        lines.push(format!("CHARACTER:{}", json_string(&name)));
    }
    lines
}

pub(crate) fn search_lines(screenplay: &Screenplay, query: &str) -> Vec<String> {
    // A blank query is "no search", not "matches everything".
    if query.trim().is_empty() {
        return vec!["RESULT:OK".to_string(), "FOUND:NONE".to_string()];
    }
    let found = match find_scene_containing_text(&screenplay.scenes, query) {
        Some(ordinal) => format!("FOUND:{}", ordinal),
        None => "FOUND:NONE".to_string(),
    };
    vec!["RESULT:OK".to_string(), found]
}

pub(crate) fn show_lines(
    screenplay: &Screenplay,
    ordinal: usize,
    character: Option<&str>,
) -> Result<Vec<String>, FdxError> {
    if screenplay.is_empty() {
        return Err(FdxError::new(
            "EMPTY_DOCUMENT",
            "screenplay contains no scenes",
        ));
    }

    let Some(scene) = screenplay.scene(ordinal) else {
        return Err(FdxError::new(
            "CLI_SCENE_OUT_OF_RANGE",
            format!(
                "scene {} does not exist (document has {} scenes)",
                ordinal,
                screenplay.scene_count()
            ),
        ));
    };

    let mut lines = vec![
        "RESULT:OK".to_string(),
        format!("HEADING:{}|{}", scene.ordinal, json_string(&scene.heading)),
    ];
    for element in &scene.elements {
        if !element_visible(element, character) {
            continue;
        }
        lines.push(format!(
            "ELEMENT:{}|{}",
            element.kind.designator(),
            json_string(&element.text)
        ));
    }
    Ok(lines)
}

pub(crate) fn export_lines(screenplay: &Screenplay) -> Result<Vec<String>, FdxError> {
    let payload = serde_json::to_string_pretty(screenplay).map_err(map_export_json)?;
    Ok(payload.lines().map(str::to_string).collect())
}

/// Character-filter rule lifted from the original browser UI: non-cue
/// elements always show; a character cue shows only when its name contains
/// the filter, matched case-insensitively.
pub(crate) fn element_visible(element: &Paragraph, character: Option<&str>) -> bool {
    let Some(filter) = character else {
        return true;
    };
    if filter.trim().is_empty() || element.kind != ParagraphKind::Character {
        return true;
    }
    element
        .text
        .to_lowercase()
        .contains(&filter.to_lowercase())
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
