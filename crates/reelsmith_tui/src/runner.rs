//! TUI runner - main loop and workflow integration.
//!
//! The runner owns terminal setup/teardown and bridges the synchronous
//! event loop to the asynchronous workflow controllers: submissions are
//! spawned onto the runtime, and state flows back through the controllers'
//! watch channels, sampled once per frame.

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use reelsmith_core::FactsRequest;
use reelsmith_error::{TuiError, TuiErrorKind, TuiResult};
use reelsmith_interface::{FactFinding, ImageSynthesis, ScriptWriting};
use reelsmith_workflow::{FactsWorkflow, ScriptWorkflow};

use crate::app::Feature;
use crate::{App, Event, EventHandler, FactsField, ui};

/// Run the TUI over the two workflow controllers.
pub async fn run_tui<W, I, F>(
    script_workflow: Arc<ScriptWorkflow<W, I>>,
    facts_workflow: Arc<FactsWorkflow<F>>,
) -> TuiResult<()>
where
    W: ScriptWriting + 'static,
    I: ImageSynthesis + 'static,
    F: FactFinding + 'static,
{
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {e}"
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {e}"
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {e}"
        )))
    })?;

    let mut app = App::new();
    let events = EventHandler::new(250);
    let script_states = script_workflow.subscribe();
    let facts_states = facts_workflow.subscribe();

    // Main loop
    while !app.should_quit {
        app.script_state = script_states.borrow().clone();
        app.facts_state = facts_states.borrow().clone();

        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {e}"))))?;

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, &script_workflow, &facts_workflow, event);
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {e}"
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {e}"
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {e}"
        )))
    })?;

    Ok(())
}

/// Handle a single event.
fn handle_event<W, I, F>(
    app: &mut App,
    script_workflow: &Arc<ScriptWorkflow<W, I>>,
    facts_workflow: &Arc<FactsWorkflow<F>>,
    event: Event,
) where
    W: ScriptWriting + 'static,
    I: ImageSynthesis + 'static,
    F: FactFinding + 'static,
{
    match event {
        Event::Key(key) => match key.code {
            KeyCode::Esc => app.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.toggle_theme()
            }
            KeyCode::Tab => app.toggle_feature(),
            KeyCode::Enter => submit(app, script_workflow, facts_workflow),
            KeyCode::Up if app.feature == Feature::Facts => {
                app.facts_focus = app.facts_focus.previous();
            }
            KeyCode::Down if app.feature == Feature::Facts => {
                app.facts_focus = app.facts_focus.next();
            }
            KeyCode::Left
                if app.feature == Feature::Facts && app.facts_focus == FactsField::Language =>
            {
                app.previous_language();
            }
            KeyCode::Right
                if app.feature == Feature::Facts && app.facts_focus == FactsField::Language =>
            {
                app.next_language();
            }
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_char(c);
            }
            _ => {}
        },
        Event::Tick => {}
    }
}

/// Spawn a submission for the active feature.
///
/// While a submission is in flight the control is disabled: pressing Enter
/// again reports the fact instead of starting a duplicate request.
fn submit<W, I, F>(
    app: &mut App,
    script_workflow: &Arc<ScriptWorkflow<W, I>>,
    facts_workflow: &Arc<FactsWorkflow<F>>,
) where
    W: ScriptWriting + 'static,
    I: ImageSynthesis + 'static,
    F: FactFinding + 'static,
{
    if app.is_loading() {
        app.status_message = "A generation is already in flight".to_string();
        return;
    }
    app.status_message.clear();

    match app.feature {
        Feature::Script => {
            let workflow = script_workflow.clone();
            let topic = app.script_topic.clone();
            tokio::spawn(async move {
                workflow.submit(&topic).await;
            });
        }
        Feature::Facts => {
            let workflow = facts_workflow.clone();
            let request =
                FactsRequest::new(app.facts_topic.clone(), app.parsed_facts_count(), app.language());
            tokio::spawn(async move {
                workflow.submit(&request).await;
            });
        }
    }
}
