//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the main loop to
/// update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Mode switching ===
    /// Enter insert mode for typing into the command line
    EnterInsertMode,
    /// Exit to normal mode
    ExitInsertMode,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Toolbar focus ===
    /// Focus the next toolbar widget
    FocusNext,
    /// Focus the previous toolbar widget
    FocusPrev,

    // === Dropdown selection ===
    /// Cycle the focused dropdown forward, committing immediately
    SelectNext,
    /// Cycle the focused dropdown backward, committing immediately
    SelectPrev,
    /// Open the dropdown popup for the focused widget
    OpenPicker,
    /// Close the popup without committing
    ClosePicker,
    /// Move the popup highlight down
    PickerDown,
    /// Move the popup highlight up
    PickerUp,
    /// Commit the highlighted entry
    PickerSelect,

    // === Command line ===
    /// Add character to the command line
    InputChar(char),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Move cursor word left
    InputWordLeft,
    /// Move cursor word right
    InputWordRight,
    /// Delete word before cursor
    InputDeleteWordBack,
    /// Delete to end of line
    InputKillLine,
    /// Delete to start of line
    InputKillToStart,
    /// Clear the command line (Ctrl+C)
    ClearInput,

    // === Scrolling ===
    /// Scroll the command log up by n lines
    ScrollUp(usize),
    /// Scroll the command log down by n lines
    ScrollDown(usize),
    /// Scroll to top
    ScrollToTop,
    /// Scroll to bottom
    ScrollToBottom,

    // === No-op ===
    /// No action to take
    None,
}
