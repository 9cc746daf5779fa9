//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `toolbar` - The toolbar row: kernel dropdown, cluster dropdown, command line
//! - `option_picker` - Dropdown popup for committing a selection
//! - `command_log` - Main pane showing the editor's command buffer
//! - `help_popup` - Help overlay with keybindings

mod command_log;
mod help_popup;
mod option_picker;
mod toolbar;

pub use command_log::render_command_log;
pub use help_popup::render_help_popup;
pub use option_picker::render_option_picker;
pub use toolbar::render_toolbar;
