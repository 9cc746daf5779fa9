//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, ToolbarFocus};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(key),
        InputMode::Picker => handle_picker_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Toolbar focus
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Action::FocusPrev,

        // Cycle the focused dropdown in place
        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,

        // Enter opens the dropdown popup, or the command line for typing
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.focus == ToolbarFocus::CommandLine {
                Action::EnterInsertMode
            } else {
                Action::OpenPicker
            }
        }
        KeyCode::Char('i') => Action::EnterInsertMode,

        // Scroll - vim style
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.viewport_height / 2;
            Action::ScrollUp(half_page)
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.viewport_height / 2;
            Action::ScrollDown(half_page)
        }
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ScrollUp(app.viewport_height)
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ScrollDown(app.viewport_height)
        }
        KeyCode::PageUp => Action::ScrollUp(app.viewport_height),
        KeyCode::PageDown => Action::ScrollDown(app.viewport_height),
        KeyCode::Char('g') => Action::ScrollToTop,
        KeyCode::Char('G') => Action::ScrollToBottom,

        _ => Action::None,
    }
}

fn handle_insert_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::ExitInsertMode,

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ClearInput,

        // Navigation - emacs style
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputHome,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputEnd,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,

        // Word navigation
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => Action::InputWordLeft,
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => Action::InputWordRight,
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::ALT) => Action::InputWordLeft,
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::ALT) => Action::InputWordRight,

        // Word/line deletion
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputDeleteWordBack
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            Action::InputDeleteWordBack
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputKillLine
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputKillToStart
        }

        // Basic editing
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,

        // Character input
        KeyCode::Char(c) => Action::InputChar(c),

        _ => Action::None,
    }
}

fn handle_picker_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::ClosePicker,
        KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
        KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
        KeyCode::Enter => Action::PickerSelect,
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::editor::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let (sink, _rx) = channel();
        App::new(&Config::default(), sink)
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::SelectNext
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::OpenPicker
        );
    }

    #[test]
    fn test_enter_on_command_line_focus_starts_typing() {
        let mut app = app();
        app.focus = ToolbarFocus::CommandLine;
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::EnterInsertMode
        );
    }

    #[test]
    fn test_insert_mode_keys() {
        let mut app = app();
        app.enter_insert_mode();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::ExitInsertMode
        );
        assert_eq!(handle_key_event(&app, ctrl('u')), Action::InputKillToStart);
    }

    #[test]
    fn test_picker_mode_keys() {
        let mut app = app();
        app.focus = ToolbarFocus::Cluster;
        app.open_picker();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::PickerDown
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::PickerSelect
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::ClosePicker
        );
    }
}
