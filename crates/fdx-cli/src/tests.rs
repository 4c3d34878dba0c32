use super::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use fdx_core::Screenplay;

const BINDER_FIXTURE: &str = r#"<FinalDraft DocumentType="Script">
  <Content>
    <Paragraph Type="Scene Heading"><Text>INT. ROOM - DAY</Text></Paragraph>
    <Paragraph Type="Character"><Text>Bob</Text></Paragraph>
    <Paragraph Type="Dialogue"><Text>Morning.</Text></Paragraph>
    <Paragraph Type="Character"><Text>Alice</Text></Paragraph>
    <Paragraph Type="Dialogue"><Text>Morning yourself.</Text></Paragraph>
    <Paragraph Type="Scene Heading"><Text>EXT. PARK - DUSK</Text></Paragraph>
    <Paragraph Type="Action"><Text>Leaves drift across the path.</Text></Paragraph>
  </Content>
</FinalDraft>"#;

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should be monotonic")
        .as_nanos();
    std::env::temp_dir()
        .join(format!("fdx-binder-{}-{}", name, nanos))
        .join(name)
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn fixture_screenplay() -> Screenplay {
    fdx_api::parse_screenplay(BINDER_FIXTURE).expect("fixture should parse")
}

#[test]
fn load_screenplay_file_parses_an_fdx_file() {
    let path = temp_path("binder.fdx");
    write_file(&path, BINDER_FIXTURE);

    let loaded =
        load_screenplay_file(path.to_string_lossy().as_ref()).expect("load should pass");
    assert_eq!(loaded.screenplay.scene_count(), 2);
    assert!(loaded.title.starts_with("binder"));
}

#[test]
fn resolve_screenplay_path_validates_existence_kind_and_extension() {
    let missing = temp_path("missing.fdx");
    let missing_err = resolve_screenplay_path(missing.to_string_lossy().as_ref())
        .expect_err("missing file should fail");
    assert_eq!(missing_err.code, "CLI_SOURCE_NOT_FOUND");

    let dir = temp_path("a-directory.fdx");
    fs::create_dir_all(&dir).expect("dir should be created");
    let dir_err = resolve_screenplay_path(dir.to_string_lossy().as_ref())
        .expect_err("directory should fail");
    assert_eq!(dir_err.code, "CLI_SOURCE_NOT_FILE");

    let wrong_ext = temp_path("notes.txt");
    write_file(&wrong_ext, "not a screenplay");
    let ext_err = resolve_screenplay_path(wrong_ext.to_string_lossy().as_ref())
        .expect_err("unsupported extension should fail");
    assert_eq!(ext_err.code, "CLI_SOURCE_EXT");
}

#[test]
fn load_screenplay_file_propagates_parser_errors() {
    let truncated = temp_path("truncated.fdx");
    write_file(&truncated, "<FinalDraft><Content>");
    let parse_err = load_screenplay_file(truncated.to_string_lossy().as_ref())
        .expect_err("truncated xml should fail");
    assert_eq!(parse_err.code, "XML_PARSE_ERROR");

    let foreign = temp_path("foreign.xml");
    write_file(&foreign, "<Workbook><Sheet/></Workbook>");
    let shape_err = load_screenplay_file(foreign.to_string_lossy().as_ref())
        .expect_err("foreign xml should fail");
    assert_eq!(shape_err.code, "SHAPE_NOT_RECOGNIZED");
}

#[test]
fn scenes_lines_list_every_scene_with_heading_json() {
    let lines = commands::scenes_lines(&fixture_screenplay());
    assert_eq!(lines[0], "RESULT:OK");
    assert_eq!(lines[1], "SCENE_COUNT:2");
    assert_eq!(lines[2], "SCENE:1|\"INT. ROOM - DAY\"");
    assert_eq!(lines[3], "SCENE:2|\"EXT. PARK - DUSK\"");
}

#[test]
fn characters_lines_are_sorted_and_deduplicated() {
    let lines = commands::characters_lines(&fixture_screenplay());
    assert_eq!(
        lines,
        vec![
            "RESULT:OK".to_string(),
            "CHARACTER:\"ALICE\"".to_string(),
            "CHARACTER:\"BOB\"".to_string(),
        ]
    );
}

#[test]
fn scenes_lines_render_zero_count_for_an_empty_screenplay() {
    let lines = commands::scenes_lines(&Screenplay::default());
    assert_eq!(
        lines,
        vec!["RESULT:OK".to_string(), "SCENE_COUNT:0".to_string()]
    );
}

#[test]
fn view_mode_fails_with_empty_document_before_entering_the_terminal() {
    let loaded = LoadedScreenplay {
        path: temp_path("empty.fdx"),
        title: "empty".to_string(),
        screenplay: Screenplay::default(),
    };
    let error = tui::run_view_mode(&loaded).expect_err("empty screenplay cannot be browsed");
    assert_eq!(error.code, "EMPTY_DOCUMENT");
}

#[test]
fn search_lines_report_first_match_or_none() {
    let screenplay = fixture_screenplay();
    assert_eq!(
        commands::search_lines(&screenplay, "leaves drift"),
        vec!["RESULT:OK".to_string(), "FOUND:2".to_string()]
    );
    assert_eq!(
        commands::search_lines(&screenplay, "spaceship"),
        vec!["RESULT:OK".to_string(), "FOUND:NONE".to_string()]
    );
}

#[test]
fn search_lines_treat_blank_queries_as_no_match() {
    let screenplay = fixture_screenplay();
    assert_eq!(
        commands::search_lines(&screenplay, ""),
        vec!["RESULT:OK".to_string(), "FOUND:NONE".to_string()]
    );
    assert_eq!(
        commands::search_lines(&screenplay, "   "),
        vec!["RESULT:OK".to_string(), "FOUND:NONE".to_string()]
    );
}

#[test]
fn show_lines_print_scene_elements_in_order() {
    let lines =
        commands::show_lines(&fixture_screenplay(), 1, None).expect("scene 1 should show");
    assert_eq!(lines[0], "RESULT:OK");
    assert_eq!(lines[1], "HEADING:1|\"INT. ROOM - DAY\"");
    assert_eq!(lines[2], "ELEMENT:Character|\"Bob\"");
    assert_eq!(lines[3], "ELEMENT:Dialogue|\"Morning.\"");
    assert_eq!(lines.len(), 6);
}

#[test]
fn show_lines_character_filter_elides_non_matching_cues() {
    let lines = commands::show_lines(&fixture_screenplay(), 1, Some("alice"))
        .expect("filtered scene should show");
    let rendered = lines.join("\n");
    assert!(rendered.contains("ELEMENT:Character|\"Alice\""));
    assert!(!rendered.contains("\"Bob\""));
    // Dialogue lines stay visible regardless of the cue filter.
    assert!(rendered.contains("ELEMENT:Dialogue|\"Morning.\""));
}

#[test]
fn show_lines_distinguish_empty_document_from_bad_ordinal() {
    let empty = Screenplay::default();
    let empty_err = commands::show_lines(&empty, 1, None).expect_err("empty should fail");
    assert_eq!(empty_err.code, "EMPTY_DOCUMENT");

    let range_err = commands::show_lines(&fixture_screenplay(), 9, None)
        .expect_err("bad ordinal should fail");
    assert_eq!(range_err.code, "CLI_SCENE_OUT_OF_RANGE");
}

#[test]
fn export_lines_round_trip_through_json() {
    let lines = commands::export_lines(&fixture_screenplay()).expect("export should pass");
    let value: serde_json::Value =
        serde_json::from_str(&lines.join("\n")).expect("export should be valid json");
    assert_eq!(value["scenes"][0]["heading"], "INT. ROOM - DAY");
    assert_eq!(value["scenes"][1]["ordinal"], 2);
}

#[test]
fn run_cli_from_args_runs_scenes_command_end_to_end() {
    let path = temp_path("end-to-end.fdx");
    write_file(&path, BINDER_FIXTURE);

    let code = run_cli_from_args([
        "fdx-cli".to_string(),
        "scenes".to_string(),
        "--file".to_string(),
        path.to_string_lossy().to_string(),
    ]);
    assert_eq!(code, 0);
}

#[test]
fn run_cli_from_args_reports_missing_file_as_error_exit() {
    let code = run_cli_from_args([
        "fdx-cli".to_string(),
        "scenes".to_string(),
        "--file".to_string(),
        temp_path("does-not-exist.fdx").to_string_lossy().to_string(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn run_cli_from_args_rejects_unknown_subcommands() {
    let code = run_cli_from_args(["fdx-cli".to_string(), "frobnicate".to_string()]);
    assert_ne!(code, 0);
}
