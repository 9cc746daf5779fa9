mod app;
mod command;
mod config;
mod editor;
mod error;
mod events;
mod log;
mod scroll;
mod selector;
mod spec;
mod tui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use app::App;
use config::Config;
use editor::{EditorEvent, ScriptEditor};
use error::RunbarError;
use events::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut script_override: Option<String> = None;
    let mut config_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                    i += 1;
                }
            }
            arg if !arg.starts_with('-') => {
                script_override = Some(arg.to_string());
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    // Config path precedence: CLI > env var > default location
    let config_path = config_override.or_else(|| {
        std::env::var("RUNBAR_CONFIG").ok().map(PathBuf::from)
    });

    let config = match &config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(RunbarError::from)?;

    let config = config.with_overrides(script_override);
    let script = config.script();
    log::log(&format!(
        "{} kernels, {} clusters, script: {:?}",
        config.kernels.len(),
        config.clusters.len(),
        script
    ));

    // Editor channel: the only write path from the toolbar to the editor
    let (sink, mut editor_rx) = editor::channel();
    let mut editor = ScriptEditor::new(script, config.default_command());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config, sink);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut editor, &mut editor_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist the session transcript once the terminal is back to normal
    let transcript = editor::transcript_path();
    match editor.write_transcript(&transcript) {
        Ok(()) => log::log(&format!("Transcript: {}", transcript.display())),
        Err(e) => log::log(&format!("Failed to write transcript: {}", e)),
    }

    result?;
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    editor: &mut ScriptEditor,
    editor_rx: &mut mpsc::UnboundedReceiver<EditorEvent>,
) -> error::Result<()>
where
    B::Error: std::fmt::Display,
{
    // Event stream for keyboard
    let mut event_stream = EventStream::new();

    loop {
        // Keep scroll bounds in step with the log size before drawing
        let size = terminal
            .size()
            .map_err(|e| RunbarError::Terminal(e.to_string()))?;
        let viewport = (size.height as usize).saturating_sub(8);
        app.set_viewport_height(viewport);
        app.log_scroll.clamp(editor.commands().len(), viewport);

        // Render
        terminal
            .draw(|frame| tui::ui::render(frame, app, editor))
            .map_err(|e| RunbarError::Terminal(e.to_string()))?;

        tokio::select! {
            // Terminal events (keyboard)
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        let action = events::handle_key_event(app, key);
                        let quit = apply_action(app, editor, action);

                        // Drain whatever the widgets emitted this turn so the
                        // editor reflects it before the next draw
                        while let Ok(event) = editor_rx.try_recv() {
                            editor.apply(event);
                        }

                        if quit {
                            return Ok(());
                        }
                    }
                }
            }
            // Editor events arriving outside a key turn
            Some(event) = editor_rx.recv() => {
                editor.apply(event);
            }
        }
    }
}

/// Apply an action to the app state. Returns true when the app should quit.
fn apply_action(app: &mut App, editor: &ScriptEditor, action: Action) -> bool {
    let total_lines = editor.commands().len();

    match action {
        Action::Quit => return true,

        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),
        Action::EnterInsertMode => app.enter_insert_mode(),
        Action::ExitInsertMode => app.exit_insert_mode(),

        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),

        Action::SelectNext => app.quick_select_next(),
        Action::SelectPrev => app.quick_select_prev(),
        Action::OpenPicker => app.open_picker(),
        Action::ClosePicker => app.close_picker(),
        Action::PickerDown => app.picker_next(),
        Action::PickerUp => app.picker_prev(),
        Action::PickerSelect => app.picker_select(),

        Action::InputChar(c) => app.command_line.insert_char(c),
        Action::InputBackspace => app.command_line.backspace(),
        Action::InputDelete => app.command_line.delete(),
        Action::InputLeft => app.command_line.left(),
        Action::InputRight => app.command_line.right(),
        Action::InputHome => app.command_line.home(),
        Action::InputEnd => app.command_line.end(),
        Action::InputWordLeft => app.command_line.word_left(),
        Action::InputWordRight => app.command_line.word_right(),
        Action::InputDeleteWordBack => app.command_line.delete_word_back(),
        Action::InputKillLine => app.command_line.kill_line(),
        Action::InputKillToStart => app.command_line.kill_to_start(),
        Action::ClearInput => app.command_line.clear(),

        Action::ScrollUp(n) => app.scroll_up(n),
        Action::ScrollDown(n) => app.scroll_down(n, total_lines),
        Action::ScrollToTop => app.scroll_to_top(),
        Action::ScrollToBottom => app.scroll_to_bottom(total_lines),

        Action::None => {}
    }

    false
}
