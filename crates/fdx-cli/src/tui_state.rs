use fdx_core::{find_scene_containing_text, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum InputMode {
    #[default]
    Browse,
    Search,
    Filter,
}

#[derive(Debug, Default)]
pub(crate) struct ViewUiState {
    /// 0-based index into the scene list.
    pub(crate) current_index: usize,
    pub(crate) scroll_offset: usize,
    pub(crate) input_mode: InputMode,
    pub(crate) input_buffer: String,
    pub(crate) character_filter: String,
    pub(crate) help_visible: bool,
    pub(crate) status: String,
}

impl ViewUiState {
    /// Navigation wraps past either end of the scene list.
    pub(crate) fn next_scene(&mut self, scene_count: usize) {
        if scene_count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % scene_count;
        self.scroll_offset = 0;
    }

    pub(crate) fn previous_scene(&mut self, scene_count: usize) {
        if scene_count == 0 {
            return;
        }
        self.current_index = (self.current_index + scene_count - 1) % scene_count;
        self.scroll_offset = 0;
    }

    pub(crate) fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub(crate) fn begin_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.input_buffer.clear();
        self.status = "search: type text, enter to jump".to_string();
    }

    pub(crate) fn begin_filter(&mut self) {
        self.input_mode = InputMode::Filter;
        self.input_buffer = self.character_filter.clone();
        self.status = "filter: type a character name, enter to apply".to_string();
    }

    pub(crate) fn cancel_input(&mut self) {
        self.input_mode = InputMode::Browse;
        self.input_buffer.clear();
        self.status = "cancelled".to_string();
    }

    /// Jump to the first scene whose text contains the typed query.
    pub(crate) fn submit_search(&mut self, scenes: &[Scene]) {
        let query = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Browse;
        if query.trim().is_empty() {
            self.status = "empty search".to_string();
            return;
        }
        match find_scene_containing_text(scenes, &query) {
            Some(ordinal) => {
                self.current_index = ordinal - 1;
                self.scroll_offset = 0;
                self.status = format!("\"{}\" found in scene {}", query, ordinal);
            }
            None => {
                self.status = format!("\"{}\" not found", query);
            }
        }
    }

    pub(crate) fn submit_filter(&mut self) {
        self.character_filter = std::mem::take(&mut self.input_buffer).trim().to_string();
        self.input_mode = InputMode::Browse;
        self.status = if self.character_filter.is_empty() {
            "character filter cleared".to_string()
        } else {
            format!("filtering cues by \"{}\"", self.character_filter)
        };
    }

    pub(crate) fn clear_filter(&mut self) {
        self.character_filter.clear();
        self.status = "character filter cleared".to_string();
    }
}
