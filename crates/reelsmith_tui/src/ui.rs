//! UI rendering for TUI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use reelsmith_workflow::{FactsState, ScriptState};

use crate::Theme;
use crate::app::{App, FactsField, Feature};

/// Theme-resolved colors.
struct Palette {
    accent: Color,
    text: Color,
    dim: Color,
    error: Color,
    highlight: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                dim: Color::DarkGray,
                error: Color::Red,
                highlight: Color::Yellow,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::Gray,
                error: Color::Red,
                highlight: Color::Magenta,
            },
        }
    }
}

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let form_height = match app.feature {
        Feature::Script => 3,
        Feature::Facts => 8,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(form_height), // Form
            Constraint::Min(0),              // Content
            Constraint::Length(3),           // Status bar
        ])
        .split(f.area());

    let palette = Palette::for_theme(app.theme);

    draw_header(f, app, &palette, chunks[0]);
    match app.feature {
        Feature::Script => {
            draw_script_form(f, app, &palette, chunks[1]);
            draw_script_content(f, app, &palette, chunks[2]);
        }
        Feature::Facts => {
            draw_facts_form(f, app, &palette, chunks[1]);
            draw_facts_content(f, app, &palette, chunks[2]);
        }
    }
    draw_status_bar(f, app, &palette, chunks[3]);
}

/// Draw the header with the feature toggle.
fn draw_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = format!("Reelsmith — {}", app.feature.label());
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with help text.
fn draw_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let help_text = match app.feature {
        Feature::Script => "Type topic | Enter: Create Content | Tab: Switch | Ctrl+T: Theme | Esc: Quit",
        Feature::Facts => {
            "Type | ↑↓: Field | ←→: Language | Enter: Find Facts | Tab: Switch | Esc: Quit"
        }
    };

    let status_text = if app.status_message.is_empty() {
        help_text.to_string()
    } else {
        format!("{} | {}", app.status_message, help_text)
    };
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(palette.dim));
    f.render_widget(status, area);
}

/// Draw the single-field script form.
fn draw_script_form(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (content, style) = if app.script_topic.is_empty() {
        (
            "e.g., The Great Emu War".to_string(),
            Style::default().fg(palette.dim),
        )
    } else {
        (app.script_topic.clone(), Style::default().fg(palette.text))
    };

    let title = if app.is_loading() {
        "Topic (generating…)"
    } else {
        "Topic"
    };
    let input = Paragraph::new(content)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);
}

/// Draw the three-field facts form.
fn draw_facts_form(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let field_style = |field: FactsField| {
        if app.facts_focus == field {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        }
    };

    let (topic, topic_style) = if app.facts_topic.is_empty() {
        ("e.g., The Ocean".to_string(), Style::default().fg(palette.dim))
    } else {
        (app.facts_topic.clone(), field_style(FactsField::Topic))
    };
    let topic_input = Paragraph::new(topic).style(topic_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keyword")
            .border_style(field_style(FactsField::Topic)),
    );
    f.render_widget(topic_input, rows[0]);

    let count_title = format!("How many facts? ({})", App::count_hint());
    let count_input = Paragraph::new(app.facts_count.clone())
        .style(field_style(FactsField::Count))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(count_title)
                .border_style(field_style(FactsField::Count)),
        );
    f.render_widget(count_input, columns[0]);

    let language_input = Paragraph::new(format!("◂ {} ▸", app.language()))
        .style(field_style(FactsField::Language))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Language")
                .border_style(field_style(FactsField::Language)),
        );
    f.render_widget(language_input, columns[1]);
}

/// Draw the script workflow content for the current state.
fn draw_script_content(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = match &app.script_state {
        ScriptState::Idle => vec![Line::from(Span::styled(
            "Create fun and fascinating reels about history, with AI-generated visual concepts.",
            Style::default().fg(palette.dim),
        ))],
        ScriptState::Loading => vec![Line::from(Span::styled(
            "Our AI historian is crafting your script…",
            Style::default().fg(palette.accent),
        ))],
        ScriptState::Drafted(scenes) | ScriptState::Ready(scenes) => {
            let mut lines = vec![Line::from(Span::styled(
                "Your Reel Script",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))];
            for (i, scene) in scenes.iter().enumerate() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("Scene {}", i + 1),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(vec![
                    Span::styled("Visual: ", Style::default().fg(palette.accent)),
                    Span::styled(scene.visual.clone(), Style::default().fg(palette.text)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Voiceover: ", Style::default().fg(palette.accent)),
                    Span::styled(
                        format!("\"{}\"", scene.voiceover),
                        Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
                lines.push(image_status_line(scene.image_url.as_deref(), palette));
            }
            lines
        }
        ScriptState::Failed(message) => error_banner(message, palette),
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// One status line per scene image: placeholder while pending, size once done.
fn image_status_line<'a>(image_url: Option<&str>, palette: &Palette) -> Line<'a> {
    match image_url {
        Some(url) => {
            // Base64 expands bytes by 4/3; undo that for the display size.
            let payload = url.rsplit(',').next().unwrap_or_default();
            let kib = (payload.len() * 3 / 4) / 1024;
            Line::from(Span::styled(
                format!("Image: ready ({kib} KiB, 9:16 png)"),
                Style::default().fg(palette.accent),
            ))
        }
        None => Line::from(Span::styled(
            "Image: generating visual…",
            Style::default().fg(palette.dim),
        )),
    }
}

/// Draw the facts workflow content for the current state.
fn draw_facts_content(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = match &app.facts_state {
        FactsState::Idle => vec![Line::from(Span::styled(
            "Discover a list of surprising, randomized facts about any topic, in your chosen language.",
            Style::default().fg(palette.dim),
        ))],
        FactsState::Loading => vec![Line::from(Span::styled(
            "Our AI is scouring the archives for hidden gems…",
            Style::default().fg(palette.accent),
        ))],
        FactsState::Ready(facts) => {
            let mut lines = vec![Line::from(Span::styled(
                format!("Surprising facts about {}", app.facts_topic.trim()),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))];
            for (i, fact) in facts.iter().enumerate() {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}. ", i + 1),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(fact.clone(), Style::default().fg(palette.text)),
                ]));
            }
            lines
        }
        FactsState::Failed(message) => error_banner(message, palette),
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// Error banner lines shared by both features.
fn error_banner<'a>(message: &str, palette: &Palette) -> Vec<Line<'a>> {
    vec![Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD),
    ))]
}
