//! Script-editor collaborator.
//!
//! Owns the two sinks the toolbar writes into: the append-only command
//! buffer and the latest command-line text. Widgets reach the editor only
//! through [`EditorEvent`]s sent on a channel; the editor never pushes
//! anything back.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::command::FILE_PLACEHOLDER;
use crate::log;

/// Events the toolbar sends to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Append a derived run command to the command buffer.
    AppendCommand(String),
    /// The command line changed; carries the full current text.
    CommandLineChanged(String),
}

/// Sending half of the editor channel, handed to toolbar widgets.
///
/// Sends are fire-and-forget: no acknowledgment, no retry, and a closed
/// receiver is ignored.
#[derive(Debug, Clone)]
pub struct CommandSink {
    tx: mpsc::UnboundedSender<EditorEvent>,
}

impl CommandSink {
    pub fn send(&self, event: EditorEvent) {
        let _ = self.tx.send(event);
    }
}

/// Create the editor channel.
pub fn channel() -> (CommandSink, mpsc::UnboundedReceiver<EditorEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSink { tx }, rx)
}

/// One appended command and when it arrived.
#[derive(Debug, Clone, Serialize)]
pub struct CommandRecord {
    pub command: String,
    pub at: DateTime<Local>,
}

/// Editor-side owner of the command buffer and the command-line slot.
///
/// The buffer is append-only from the toolbar's point of view. The
/// command-line slot is last-write-wins and may hold partially typed
/// text at any time.
pub struct ScriptEditor {
    script: Option<String>,
    commands: Vec<CommandRecord>,
    command_line: String,
}

impl ScriptEditor {
    pub fn new(script: Option<String>, initial_command_line: String) -> Self {
        Self {
            script,
            commands: Vec::new(),
            command_line: initial_command_line,
        }
    }

    /// Apply one event from the toolbar.
    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::AppendCommand(command) => {
                log::log(&format!("command appended: {}", command));
                self.commands.push(CommandRecord {
                    command,
                    at: Local::now(),
                });
            }
            EditorEvent::CommandLineChanged(text) => {
                self.command_line = text;
            }
        }
    }

    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    pub fn latest_command_line(&self) -> &str {
        &self.command_line
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Substitute the script placeholder in a command template.
    ///
    /// Templates pass through unchanged when no script is configured.
    pub fn resolve(&self, command: &str) -> String {
        match &self.script {
            Some(script) => command.replace(FILE_PLACEHOLDER, script),
            None => command.to_string(),
        }
    }

    /// Write the session transcript as pretty-printed JSON.
    pub fn write_transcript(&self, path: &Path) -> std::io::Result<()> {
        #[derive(Serialize)]
        struct Transcript<'a> {
            script: Option<&'a str>,
            command_line: &'a str,
            commands: &'a [CommandRecord],
        }

        let transcript = Transcript {
            script: self.script.as_deref(),
            command_line: &self.command_line,
            commands: &self.commands,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&transcript)?;
        std::fs::write(path, json)
    }
}

/// Default transcript location: `~/.runbar/transcripts/runbar_<ts>.json`.
pub fn transcript_path() -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".runbar")
        .join("transcripts")
        .join(format!("runbar_{}.json", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut editor = ScriptEditor::new(None, String::new());
        editor.apply(EditorEvent::AppendCommand("cpu %file".to_string()));
        editor.apply(EditorEvent::AppendCommand("gpu %file".to_string()));

        let commands: Vec<_> = editor.commands().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["cpu %file", "gpu %file"]);
    }

    #[test]
    fn test_command_line_last_write_wins() {
        let mut editor = ScriptEditor::new(None, "python %file".to_string());
        assert_eq!(editor.latest_command_line(), "python %file");

        editor.apply(EditorEvent::CommandLineChanged("p".to_string()));
        editor.apply(EditorEvent::CommandLineChanged("py".to_string()));
        assert_eq!(editor.latest_command_line(), "py");
    }

    #[test]
    fn test_resolve_substitutes_script() {
        let editor = ScriptEditor::new(Some("train.py".to_string()), String::new());
        assert_eq!(editor.resolve("gpu %file"), "gpu train.py");
        assert_eq!(editor.resolve("echo done"), "echo done");

        let bare = ScriptEditor::new(None, String::new());
        assert_eq!(bare.resolve("gpu %file"), "gpu %file");
    }

    #[test]
    fn test_sink_send_ignores_closed_receiver() {
        let (sink, rx) = channel();
        drop(rx);
        // Must not panic or block.
        sink.send(EditorEvent::AppendCommand("python %file".to_string()));
    }

    #[test]
    fn test_channel_delivers_in_order() {
        let (sink, mut rx) = channel();
        sink.send(EditorEvent::AppendCommand("cpu %file".to_string()));
        sink.send(EditorEvent::CommandLineChanged("x".to_string()));

        let mut editor = ScriptEditor::new(None, String::new());
        while let Ok(event) = rx.try_recv() {
            editor.apply(event);
        }

        assert_eq!(editor.commands().len(), 1);
        assert_eq!(editor.commands()[0].command, "cpu %file");
        assert_eq!(editor.latest_command_line(), "x");
    }
}
