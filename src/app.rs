#![allow(dead_code)]

use crate::command::derive_run_command;
use crate::config::Config;
use crate::editor::{CommandSink, EditorEvent};
use crate::log;
use crate::scroll::LogScroll;
use crate::selector::{NO_CLUSTER, NO_KERNEL, SelectorState};
use crate::spec::OptionSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Toolbar navigation
    Insert, // Typing into the command line
    Picker, // Dropdown popup open
    Help,   // Help popup showing all hotkeys
}

/// Which toolbar widget has focus in normal mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarFocus {
    Kernel,
    Cluster,
    CommandLine,
}

impl ToolbarFocus {
    pub fn next(self) -> Self {
        match self {
            ToolbarFocus::Kernel => ToolbarFocus::Cluster,
            ToolbarFocus::Cluster => ToolbarFocus::CommandLine,
            ToolbarFocus::CommandLine => ToolbarFocus::Kernel,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ToolbarFocus::Kernel => ToolbarFocus::CommandLine,
            ToolbarFocus::Cluster => ToolbarFocus::Kernel,
            ToolbarFocus::CommandLine => ToolbarFocus::Cluster,
        }
    }
}

/// Which dropdown an open picker popup belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerTarget {
    Kernel,
    Cluster,
}

/// State for an open dropdown popup: a pending highlight over one
/// selector's entries. Nothing commits until Enter.
#[derive(Debug, Clone)]
pub struct OptionPickerState {
    pub target: PickerTarget,
    pub highlighted: usize,
}

/// Cluster dropdown: selection state plus the command side effect.
///
/// Every committed change derives a run command from the new selection
/// and sends it to the editor. One send per commit, including commits
/// that re-select the current identifier; fire-and-forget.
pub struct ClusterSelector {
    state: SelectorState,
    sink: CommandSink,
}

impl ClusterSelector {
    pub fn new(options: OptionSet, sink: CommandSink) -> Self {
        Self {
            state: SelectorState::new(options, NO_CLUSTER),
            sink,
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn selection(&self) -> &str {
        self.state.selection()
    }

    pub fn selection_label(&self) -> &str {
        self.state.selection_label()
    }

    pub fn select_next(&mut self) {
        self.commit(SelectorState::select_next);
    }

    pub fn select_prev(&mut self) {
        self.commit(SelectorState::select_prev);
    }

    pub fn select_id(&mut self, id: &str) {
        self.commit(|state| state.select_id(id));
    }

    fn commit(&mut self, change: impl FnOnce(&mut SelectorState)) {
        // An empty set offers no valid identifiers, so there is nothing
        // to commit and nothing to emit.
        if self.state.is_empty() {
            return;
        }

        let before = self.state.selection().to_string();
        change(&mut self.state);
        let after = self.state.selection();
        log::log(&format!("cluster selection: {} -> {}", before, after));

        self.sink
            .send(EditorEvent::AppendCommand(derive_run_command(after)));
    }
}

/// Free-text command line.
///
/// Every edit sends the full current text to the editor, which keeps the
/// latest value. No validation, no debouncing, no history; a reader may
/// see partially typed text.
pub struct CommandLine {
    buffer: String,
    cursor: usize, // byte offset, always on a char boundary
    sink: CommandSink,
}

impl CommandLine {
    pub fn new(initial: String, sink: CommandSink) -> Self {
        let cursor = initial.len();
        Self {
            buffer: initial,
            cursor,
            sink,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    fn publish(&self) {
        self.sink
            .send(EditorEvent::CommandLineChanged(self.buffer.clone()));
    }

    fn prev_boundary(&self) -> usize {
        let mut pos = self.cursor - 1;
        while !self.buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self) -> usize {
        let mut pos = self.cursor + 1;
        while pos < self.buffer.len() && !self.buffer.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    /// Add a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.publish();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = self.prev_boundary();
            self.buffer.drain(start..self.cursor);
            self.cursor = start;
            self.publish();
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let end = self.next_boundary();
            self.buffer.drain(self.cursor..end);
            self.publish();
        }
    }

    /// Move cursor left
    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    /// Move cursor right
    pub fn right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Move cursor to the start of the previous word
    pub fn word_left(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let bytes = self.buffer.as_bytes();
        let mut pos = self.cursor;

        // Skip any whitespace immediately before cursor
        while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }

        // Skip the word (non-whitespace characters)
        while pos > 0 && !bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }

        self.cursor = pos;
    }

    /// Move cursor to the end of the next word
    pub fn word_right(&mut self) {
        let len = self.buffer.len();
        if self.cursor >= len {
            return;
        }

        let bytes = self.buffer.as_bytes();
        let mut pos = self.cursor;

        // Skip any whitespace at cursor
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        // Skip the word (non-whitespace characters)
        while pos < len && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        self.cursor = pos;
    }

    /// Delete the word before cursor
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let end = self.cursor;
        self.word_left();
        let start = self.cursor;
        self.buffer.drain(start..end);
        self.publish();
    }

    /// Delete from cursor to end of line
    pub fn kill_line(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.truncate(self.cursor);
            self.publish();
        }
    }

    /// Delete from cursor to start of line
    pub fn kill_to_start(&mut self) {
        if self.cursor > 0 {
            self.buffer.drain(..self.cursor);
            self.cursor = 0;
            self.publish();
        }
    }

    /// Clear the whole line (Ctrl+C)
    pub fn clear(&mut self) {
        if !self.buffer.is_empty() || self.cursor > 0 {
            self.buffer.clear();
            self.cursor = 0;
            self.publish();
        }
    }
}

pub struct App {
    pub input_mode: InputMode,
    pub focus: ToolbarFocus,
    pub kernel: SelectorState,
    pub cluster: ClusterSelector,
    pub command_line: CommandLine,
    pub picker: Option<OptionPickerState>,
    pub log_scroll: LogScroll,
    pub viewport_height: usize,
}

impl App {
    pub fn new(config: &Config, sink: CommandSink) -> Self {
        Self {
            input_mode: InputMode::Normal,
            focus: ToolbarFocus::Kernel,
            kernel: SelectorState::new(config.kernel_options(), NO_KERNEL),
            cluster: ClusterSelector::new(config.cluster_options(), sink.clone()),
            command_line: CommandLine::new(config.default_command(), sink),
            picker: None,
            log_scroll: LogScroll::default(),
            viewport_height: 20, // Default, updated before render
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Cycle the focused dropdown directly, committing each step.
    pub fn quick_select_next(&mut self) {
        match self.focus {
            ToolbarFocus::Kernel => self.kernel.select_next(),
            ToolbarFocus::Cluster => self.cluster.select_next(),
            ToolbarFocus::CommandLine => {}
        }
    }

    pub fn quick_select_prev(&mut self) {
        match self.focus {
            ToolbarFocus::Kernel => self.kernel.select_prev(),
            ToolbarFocus::Cluster => self.cluster.select_prev(),
            ToolbarFocus::CommandLine => {}
        }
    }

    /// Open the dropdown popup for the focused widget.
    pub fn open_picker(&mut self) {
        let target = match self.focus {
            ToolbarFocus::Kernel => PickerTarget::Kernel,
            ToolbarFocus::Cluster => PickerTarget::Cluster,
            ToolbarFocus::CommandLine => return,
        };

        let highlighted = match target {
            PickerTarget::Kernel => self.kernel.selected_index(),
            PickerTarget::Cluster => self.cluster.state().selected_index(),
        };

        self.picker = Some(OptionPickerState {
            target,
            highlighted,
        });
        self.input_mode = InputMode::Picker;
    }

    /// Close the popup without committing.
    pub fn close_picker(&mut self) {
        self.picker = None;
        self.input_mode = InputMode::Normal;
    }

    fn picker_entry_count(&self) -> usize {
        match self.picker.as_ref().map(|picker| picker.target) {
            // An empty set still shows its single placeholder entry
            Some(PickerTarget::Kernel) => self.kernel.len().max(1),
            Some(PickerTarget::Cluster) => self.cluster.state().len().max(1),
            None => 1,
        }
    }

    pub fn picker_next(&mut self) {
        let len = self.picker_entry_count();
        if let Some(picker) = &mut self.picker {
            picker.highlighted = (picker.highlighted + 1) % len;
        }
    }

    pub fn picker_prev(&mut self) {
        let len = self.picker_entry_count();
        if let Some(picker) = &mut self.picker {
            picker.highlighted = picker.highlighted.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Commit the highlighted entry and close the popup.
    ///
    /// Placeholder entries cannot be committed; the popup just closes.
    pub fn picker_select(&mut self) {
        let Some(picker) = &self.picker else { return };
        let target = picker.target;
        let highlighted = picker.highlighted;

        let chosen = {
            let entries = match target {
                PickerTarget::Kernel => self.kernel.display_entries(),
                PickerTarget::Cluster => self.cluster.state().display_entries(),
            };
            entries
                .get(highlighted)
                .filter(|entry| entry.enabled)
                .map(|entry| entry.id.to_string())
        };

        self.picker = None;
        self.input_mode = InputMode::Normal;

        if let Some(id) = chosen {
            match target {
                PickerTarget::Kernel => self.kernel.select_id(&id),
                PickerTarget::Cluster => self.cluster.select_id(&id),
            }
        }
    }

    /// Enter insert mode (focus jumps to the command line)
    pub fn enter_insert_mode(&mut self) {
        self.focus = ToolbarFocus::CommandLine;
        self.input_mode = InputMode::Insert;
    }

    /// Exit to normal mode
    pub fn exit_insert_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Update viewport height (called before render)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.log_scroll.scroll_up(n);
    }

    pub fn scroll_down(&mut self, n: usize, total_lines: usize) {
        self.log_scroll
            .scroll_down(n, total_lines, self.viewport_height);
    }

    pub fn scroll_to_top(&mut self) {
        self.log_scroll.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self, total_lines: usize) {
        self.log_scroll
            .scroll_to_bottom(total_lines, self.viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{EditorEvent, ScriptEditor, channel};
    use crate::spec::OptionEntry;

    fn cluster_config(ids: &[&str]) -> Config {
        Config {
            clusters: ids.iter().map(|id| OptionEntry::new(*id, None)).collect(),
            ..Config::default()
        }
    }

    fn drain(
        rx: &mut tokio::sync::mpsc::UnboundedReceiver<EditorEvent>,
        editor: &mut ScriptEditor,
    ) {
        while let Ok(event) = rx.try_recv() {
            editor.apply(event);
        }
    }

    #[test]
    fn test_cluster_selection_appends_in_order() {
        let (sink, mut rx) = channel();
        let config = cluster_config(&["1", "2", "3"]);
        let mut cluster = ClusterSelector::new(config.cluster_options(), sink);

        cluster.select_id("2");
        cluster.select_id("1");

        let mut editor = ScriptEditor::new(None, String::new());
        drain(&mut rx, &mut editor);

        let commands: Vec<_> = editor.commands().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["cpu %file", "gpu %file"]);
    }

    #[test]
    fn test_reselecting_same_id_appends_each_time() {
        let (sink, mut rx) = channel();
        let config = cluster_config(&["1", "2"]);
        let mut cluster = ClusterSelector::new(config.cluster_options(), sink);

        cluster.select_id("1");
        cluster.select_id("1");
        assert_eq!(cluster.selection(), "1");

        let mut editor = ScriptEditor::new(None, String::new());
        drain(&mut rx, &mut editor);
        assert_eq!(editor.commands().len(), 2);
    }

    #[test]
    fn test_empty_cluster_set_never_emits() {
        let (sink, mut rx) = channel();
        let mut cluster = ClusterSelector::new(crate::spec::OptionSet::default(), sink);

        cluster.select_next();
        cluster.select_prev();
        assert_eq!(cluster.selection(), "no-cluster");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_quick_cycle_emits_per_step() {
        let (sink, mut rx) = channel();
        let config = cluster_config(&["1", "2"]);
        let mut app = App::new(&config, sink);
        app.focus = ToolbarFocus::Cluster;

        app.quick_select_next(); // -> "2"
        app.quick_select_next(); // wraps -> "1"

        let mut editor = ScriptEditor::new(None, String::new());
        drain(&mut rx, &mut editor);

        let commands: Vec<_> = editor.commands().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["cpu %file", "gpu %file"]);
        assert_eq!(app.cluster.selection(), "1");
    }

    #[test]
    fn test_kernel_selection_is_silent() {
        let (sink, mut rx) = channel();
        let config = Config {
            kernels: vec![OptionEntry::new("python3", None), OptionEntry::new("r", None)],
            ..Config::default()
        };
        let mut app = App::new(&config, sink);

        app.quick_select_next();
        assert_eq!(app.kernel.selection(), "r");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_command_line_publishes_every_edit() {
        let (sink, mut rx) = channel();
        let mut line = CommandLine::new(String::new(), sink);

        line.insert_char('p');
        line.insert_char('y');
        line.backspace();

        let mut seen = vec![];
        while let Ok(event) = rx.try_recv() {
            match event {
                EditorEvent::CommandLineChanged(text) => seen.push(text),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert_eq!(seen, vec!["p", "py", "p"]);
    }

    #[test]
    fn test_command_line_movement_does_not_publish() {
        let (sink, mut rx) = channel();
        let mut line = CommandLine::new("python %file".to_string(), sink);

        line.home();
        assert_eq!(line.cursor(), 0);
        line.word_right();
        assert_eq!(line.cursor(), "python".len());
        line.left();
        line.end();
        assert_eq!(line.cursor(), line.text().len());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_command_line_word_editing() {
        let (sink, _rx) = channel();
        let mut line = CommandLine::new("gpu train.py".to_string(), sink);

        line.delete_word_back();
        assert_eq!(line.text(), "gpu ");
        line.kill_to_start();
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_picker_commit_emits_once() {
        let (sink, mut rx) = channel();
        let config = cluster_config(&["1", "2"]);
        let mut app = App::new(&config, sink);
        app.focus = ToolbarFocus::Cluster;

        app.open_picker();
        assert_eq!(app.input_mode, InputMode::Picker);
        app.picker_next();
        app.picker_select();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.cluster.selection(), "2");

        let mut editor = ScriptEditor::new(None, String::new());
        drain(&mut rx, &mut editor);
        let commands: Vec<_> = editor.commands().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["cpu %file"]);
    }

    #[test]
    fn test_picker_on_empty_set_cannot_commit() {
        let (sink, mut rx) = channel();
        let config = Config::default();
        let mut app = App::new(&config, sink);
        app.focus = ToolbarFocus::Cluster;

        app.open_picker();
        app.picker_select();

        assert_eq!(app.cluster.selection(), "no-cluster");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_focus_cycles_through_toolbar() {
        let (sink, _rx) = channel();
        let mut app = App::new(&Config::default(), sink);

        assert_eq!(app.focus, ToolbarFocus::Kernel);
        app.focus_next();
        assert_eq!(app.focus, ToolbarFocus::Cluster);
        app.focus_next();
        assert_eq!(app.focus, ToolbarFocus::CommandLine);
        app.focus_next();
        assert_eq!(app.focus, ToolbarFocus::Kernel);
        app.focus_prev();
        assert_eq!(app.focus, ToolbarFocus::CommandLine);
    }
}
