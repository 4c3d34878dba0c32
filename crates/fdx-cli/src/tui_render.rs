use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use fdx_core::{ParagraphKind, Scene};

use crate::commands::element_visible;
use crate::tui_state::{InputMode, ViewUiState};
use crate::LoadedScreenplay;

const SCENE_LIST_WIDTH: u16 = 38;
const DIALOGUE_INDENT: usize = 10;
const ELLIPSIS: &str = "…";

pub(crate) fn render_view(frame: &mut Frame<'_>, ui: &ViewUiState, loaded: &LoadedScreenplay) {
    let mut footer_rows = 2u16;
    if ui.input_mode != InputMode::Browse {
        footer_rows += 1;
    }
    if ui.help_visible {
        footer_rows += 1;
    }

    let [header_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(footer_rows),
    ])
    .areas(frame.area());
    let [content_area, list_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(SCENE_LIST_WIDTH)])
            .areas(main_area);

    let scenes = &loaded.screenplay.scenes;
    let scene = scenes.get(ui.current_index);

    let mut header = format!(
        "{} | scene {} of {}",
        loaded.title,
        ui.current_index + 1,
        scenes.len()
    );
    if !ui.character_filter.is_empty() {
        header.push_str(&format!(" | filter: {}", ui.character_filter));
    }
    frame.render_widget(
        Paragraph::new(Line::from(truncate_to_width(
            &header,
            header_area.width as usize,
        ))),
        header_area,
    );

    let content_width = (content_area.width as usize).saturating_sub(1).max(16);
    let content_lines = match scene {
        Some(scene) => scene_lines(scene, &ui.character_filter, content_width),
        None => vec![Line::from(Span::styled(
            "No scenes loaded.",
            Style::default().add_modifier(Modifier::ITALIC),
        ))],
    };
    frame.render_widget(
        Paragraph::new(content_lines)
            .wrap(Wrap { trim: false })
            .scroll((ui.scroll_offset as u16, 0)),
        content_area,
    );

    frame.render_widget(
        Paragraph::new(scene_list_lines(
            scenes,
            ui.current_index,
            list_area.height as usize,
            list_area.width as usize,
        )),
        list_area,
    );

    let mut footer_lines: Vec<Line<'_>> = Vec::new();
    if ui.input_mode != InputMode::Browse {
        let prompt = match ui.input_mode {
            InputMode::Filter => "filter",
            InputMode::Search | InputMode::Browse => "search",
        };
        footer_lines.push(Line::from(Span::styled(
            truncate_to_width(
                &format!("{}> {}", prompt, ui.input_buffer),
                footer_area.width as usize,
            ),
            Style::default().fg(Color::Cyan),
        )));
    }
    footer_lines.push(Line::from(Span::styled(
        truncate_to_width(
            &format!("status: {}", ui.status),
            footer_area.width as usize,
        ),
        Style::default().fg(Color::Gray),
    )));
    footer_lines.push(Line::from(Span::styled(
        truncate_to_width(
            "keys: left/right scenes | up/down scroll | / search | f filter | c clear | h help | q quit",
            footer_area.width as usize,
        ),
        Style::default().fg(Color::Yellow),
    )));
    if ui.help_visible {
        footer_lines.push(Line::from(Span::styled(
            truncate_to_width(
                "search jumps to the first scene containing the text; filter hides character cues that do not match.",
                footer_area.width as usize,
            ),
            Style::default().fg(Color::Magenta),
        )));
    }
    frame.render_widget(Paragraph::new(footer_lines), footer_area);
}

/// Screenplay-style layout for one scene: centered bold character cues,
/// indented dialogue, centered italic parentheticals, right-aligned
/// transitions.
pub(crate) fn scene_lines(scene: &Scene, filter: &str, width: usize) -> Vec<Line<'static>> {
    let filter = if filter.is_empty() { None } else { Some(filter) };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}: {}", scene.ordinal, scene.heading),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(String::new()),
    ];

    for element in &scene.elements {
        if !element_visible(element, filter) {
            continue;
        }
        let line = match element.kind {
            ParagraphKind::Character => Line::from(Span::styled(
                center_pad(&element.text, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            ParagraphKind::Dialogue => Line::from(format!(
                "{}{}",
                " ".repeat(DIALOGUE_INDENT),
                element.text
            )),
            ParagraphKind::Parenthetical => Line::from(Span::styled(
                center_pad(&format!("({})", element.text), width),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            ParagraphKind::Transition => Line::from(right_pad(&element.text, width)),
            ParagraphKind::SceneHeading
            | ParagraphKind::Action
            | ParagraphKind::Shot
            | ParagraphKind::General => Line::from(element.text.clone()),
        };
        lines.push(line);
    }

    lines
}

fn scene_list_lines(
    scenes: &[Scene],
    selected: usize,
    height: usize,
    width: usize,
) -> Vec<Line<'static>> {
    let height = height.max(1);
    let window_start = if scenes.len() <= height {
        0
    } else {
        selected
            .saturating_sub(height / 2)
            .min(scenes.len() - height)
    };

    scenes
        .iter()
        .skip(window_start)
        .take(height)
        .map(|scene| {
            let is_selected = scene.ordinal == selected + 1;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                truncate_to_width(
                    &format!("{}{:>3}  {}", prefix, scene.ordinal, scene.heading),
                    width,
                ),
                style,
            ))
        })
        .collect()
}

fn truncate_to_width(value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let chars = value.chars().collect::<Vec<_>>();
    if chars.len() <= width {
        return value.to_string();
    }
    if width == 1 {
        return ELLIPSIS.to_string();
    }
    let mut out = chars.into_iter().take(width - 1).collect::<String>();
    out.push_str(ELLIPSIS);
    out
}

fn center_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), value)
}

fn right_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    format!("{}{}", " ".repeat(width - len), value)
}
