//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui.
//! Supports customizable themes via the Theme struct.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppMode, Field};
use crate::core::{ResearchResult, Tone};
use crate::review::{ReviewPhase, ReviewSession};
use crate::tui::Theme;
use crate::wizard::WizardPhase;
use crate::App;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Help => draw_help_screen(frame, app),
        AppMode::Review => draw_review_screen(frame, app),
        AppMode::Wizard => draw_wizard_screen(frame, app),
    }

    draw_notice(frame, app);
}

fn spinner(app: &App) -> &'static str {
    SPINNER[(app.tick_count as usize) % SPINNER.len()]
}

fn section_title<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(title, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)))
}

fn bullet<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(theme.text_muted)),
        Span::styled(text, Style::default().fg(theme.text)),
    ])
}

/// Draw the wizard view.
fn draw_wizard_screen(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with steps
            Constraint::Min(8),    // Current step
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.wizard.phase() {
        WizardPhase::Idle | WizardPhase::Researching => draw_input_step(frame, app, chunks[1]),
        WizardPhase::ResearchReady | WizardPhase::Generating => {
            draw_settings_step(frame, app, chunks[1]);
        }
        WizardPhase::ArticleReady => draw_article_step(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the header with the step indicator.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let current = match app.wizard.phase() {
        WizardPhase::Idle | WizardPhase::Researching => 0,
        WizardPhase::ResearchReady | WizardPhase::Generating => 1,
        WizardPhase::ArticleReady => 2,
    };

    let mut spans = Vec::new();
    for (i, label) in ["Input", "Ricerca", "Articolo"].iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ›  ", Style::default().fg(theme.border)));
        }
        let style = match i.cmp(&current) {
            std::cmp::Ordering::Less => Style::default().fg(theme.secondary),
            std::cmp::Ordering::Equal => {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            }
            std::cmp::Ordering::Greater => Style::default().fg(theme.text_muted),
        };
        let marker = if i < current { "✓" } else { "●" };
        spans.push(Span::styled(format!("{marker} {} {label}", i + 1), style));
    }

    let session = app
        .wizard
        .session_id()
        .map(|id| format!(" sessione {} ", &id.as_str()[..8.min(id.as_str().len())]))
        .unwrap_or_default();

    let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" copydesk ")
            .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(session).right_aligned()),
    );

    frame.render_widget(header, area);
}

/// Draw a single-line text field.
fn draw_field(frame: &mut Frame, app: &App, field: Field, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == field;
    let value = app.field_value(field);

    let mut spans = vec![Span::styled(value, Style::default().fg(theme.text))];
    if focused {
        spans.push(Span::styled("│", Style::default().fg(theme.primary)));
    }

    let mut title = format!(" {} ", field.label());
    if field == Field::Meta {
        title = format!(" {} ({}) ", field.label(), app.wizard.seo().meta_description_remaining());
    }

    let border = if focused { theme.primary } else { theme.border };
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_style(Style::default().fg(if focused { theme.primary } else { theme.text_dim })),
    );
    frame.render_widget(widget, area);
}

/// Draw the input step (topic + repository).
fn draw_input_step(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(3), // Topic
            Constraint::Length(3), // Repo
            Constraint::Min(1),    // Progress
        ])
        .split(area);

    let intro = Paragraph::new(Line::from(Span::styled(
        "Descrivi l'argomento del tuo articolo (almeno 10 caratteri).",
        Style::default().fg(theme.text_dim),
    )));
    frame.render_widget(intro, chunks[0]);

    draw_field(frame, app, Field::Topic, chunks[1]);
    draw_field(frame, app, Field::Repo, chunks[2]);

    if app.wizard.phase() == WizardPhase::Researching {
        let progress = Paragraph::new(Line::from(vec![
            Span::styled(spinner(app), Style::default().fg(theme.primary)),
            Span::styled(" Ricerca in corso...", Style::default().fg(theme.text)),
        ]));
        frame.render_widget(progress, chunks[3]);
    }
}

/// Lines describing a research result, custom insights included.
fn research_lines<'a>(app: &'a App, research: &'a ResearchResult) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let mut lines = vec![
        Line::from(Span::styled(research.overview.as_str(), Style::default().fg(theme.text))),
        Line::from(""),
        section_title("Punti chiave", theme),
    ];

    for insight in &research.key_insights {
        lines.push(bullet(insight, theme));
    }
    for insight in app.wizard.custom_insights().items() {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.secondary)),
            Span::styled(insight.as_str(), Style::default().fg(theme.text)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_title("Statistiche", theme));
    lines.extend(research.statistics.iter().map(|s| bullet(s, theme)));

    lines.push(Line::from(""));
    lines.push(section_title("Tendenze", theme));
    lines.extend(research.trends.iter().map(|t| bullet(t, theme)));

    lines.push(Line::from(""));
    lines.push(section_title("Fonti", theme));
    for source in &research.sources {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.text_muted)),
            Span::styled(source.title.as_str(), Style::default().fg(theme.text)),
            Span::styled(format!("  {}", source.url), Style::default().fg(theme.text_muted)),
        ]));
    }

    if let Some(github) = &research.github_data {
        lines.push(Line::from(""));
        lines.push(section_title("GitHub", theme));
        lines.push(Line::from(Span::styled(
            format!("  {}  ★ {}  aggiornato {}", github.repo, github.stars, github.last_update),
            Style::default().fg(theme.text),
        )));
        for issue in &github.issues {
            lines.push(bullet(&issue.title, theme));
        }
        for pr in &github.pull_requests {
            lines.push(bullet(&pr.title, theme));
        }
    }

    lines
}

/// Draw the settings step: research on the left, SEO form on the right.
fn draw_settings_step(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    if let Some(research) = app.wizard.research() {
        let panel = Paragraph::new(research_lines(app, research))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Risultati della ricerca ")
                    .title_style(Style::default().fg(theme.text_dim)),
            );
        frame.render_widget(panel, columns[0]);
    }

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Tone
            Constraint::Length(3), // Keyword
            Constraint::Length(3), // Secondary
            Constraint::Length(3), // Meta
            Constraint::Length(3), // Word count
            Constraint::Length(3), // Insight
            Constraint::Min(0),
        ])
        .split(columns[1]);

    draw_tone_selector(frame, app, form[0]);
    draw_field(frame, app, Field::Keyword, form[1]);
    draw_field(frame, app, Field::Secondary, form[2]);
    draw_field(frame, app, Field::Meta, form[3]);
    draw_word_count(frame, app, form[4]);
    draw_field(frame, app, Field::Insight, form[5]);

    if app.wizard.phase() == WizardPhase::Generating {
        let progress = Paragraph::new(Line::from(vec![
            Span::styled(spinner(app), Style::default().fg(theme.primary)),
            Span::styled(" Generazione dell'articolo in corso...", Style::default().fg(theme.text)),
        ]));
        frame.render_widget(progress, form[6]);
    }
}

fn draw_tone_selector(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let selected = app.wizard.tone();

    let mut spans = Vec::new();
    for tone in Tone::ALL {
        let style = if tone == selected {
            Style::default().fg(theme.background).bg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim)
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
        spans.push(Span::raw(" "));
    }

    let widget = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(selected.description(), Style::default().fg(theme.text_muted))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Tono (Ctrl+T) ")
            .title_style(Style::default().fg(theme.text_dim)),
    );
    frame.render_widget(widget, area);
}

fn draw_word_count(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let seo = app.wizard.seo();
    let ratio = f64::from(seo.word_count - crate::core::WORD_COUNT_MIN)
        / f64::from(crate::core::WORD_COUNT_MAX - crate::core::WORD_COUNT_MIN);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Lunghezza (PgUp/PgDn) ")
                .title_style(Style::default().fg(theme.text_dim)),
        )
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} parole · {}", seo.word_count, seo.length_label()));
    frame.render_widget(gauge, area);
}

/// Draw the article step.
fn draw_article_step(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let editing = app.wizard.is_editing();
    let text = app.wizard.editor().visible().unwrap_or_default();

    let mut body: String = text.to_string();
    if editing {
        body.push('│');
    }

    let (title, border) = if editing {
        (" Articolo · modifica (Esc per salvare) ", theme.editing)
    } else {
        (" Articolo ", theme.primary)
    };

    let seo = app.wizard.seo();
    let footer = format!(
        " {} · {} · {} parole ",
        seo.main_keyword,
        app.wizard.tone().label(),
        seo.word_count
    );

    let article = Paragraph::new(body)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .scroll((app.article_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title)
                .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
                .title_bottom(Line::from(footer).right_aligned()),
        );
    frame.render_widget(article, area);
}

/// Draw the status bar with key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(format!(" {message} "), Style::default().fg(theme.text_dim)));
        spans.push(Span::styled("│", Style::default().fg(theme.border)));
    }

    if app.config.ui.show_hints {
        let hints = match (app.mode, app.wizard.phase()) {
            (AppMode::Review, _) => review_hints(app.review.as_ref()),
            (_, WizardPhase::Idle | WizardPhase::Researching) => {
                " Tab campo · Invio ricerca · F1 aiuto · Esc esci"
            }
            (_, WizardPhase::ResearchReady | WizardPhase::Generating) => {
                " Tab campo · Invio genera · Ctrl+R nuova sessione · F1 aiuto"
            }
            (_, WizardPhase::ArticleReady) if app.wizard.is_editing() => {
                " Esc/Ctrl+S salva · Ctrl+E revisione"
            }
            (_, WizardPhase::ArticleReady) => {
                " e modifica · c copia · d scarica · r El Director · g rigenera · n nuovo"
            }
        };
        spans.push(Span::styled(hints, Style::default().fg(theme.text_muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn review_hints(session: Option<&ReviewSession>) -> &'static str {
    match session.map(ReviewSession::phase) {
        Some(ReviewPhase::AwaitingInput) => " Invio analizza · Esc torna all'articolo",
        Some(ReviewPhase::Analyzing) => " Esc annulla",
        Some(ReviewPhase::AnalysisReady) => " e modifica revisione · Esc torna all'articolo",
        Some(ReviewPhase::Editing) => " Ctrl+S invia all'editor · Esc annulla",
        Some(ReviewPhase::Completed) | None => " Esc torna all'articolo",
    }
}

/// Draw El Director's review view.
fn draw_review_screen(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(
        "Revisione tecnica",
        Style::default().fg(theme.text_dim),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" El Director ")
            .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(header, chunks[0]);
    draw_status_bar(frame, app, chunks[2]);

    let Some(session) = app.review.as_ref() else {
        return;
    };
    let area = chunks[1];

    match session.phase() {
        ReviewPhase::AwaitingInput => {
            let lines = vec![
                Line::from(Span::styled(
                    "Premi Invio per avviare l'analisi dell'articolo.",
                    Style::default().fg(theme.text),
                )),
                Line::from(""),
                Line::from(Span::styled(session.article(), Style::default().fg(theme.text_dim))),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                    Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
                ),
                area,
            );
        }
        ReviewPhase::Analyzing => {
            let now = Instant::now();
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints([Constraint::Length(3), Constraint::Length(2), Constraint::Min(0)])
                .split(area);

            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)))
                .gauge_style(Style::default().fg(theme.accent))
                .ratio(session.progress(now));
            frame.render_widget(gauge, rows[0]);

            let status = Paragraph::new(Line::from(vec![
                Span::styled(spinner(app), Style::default().fg(theme.accent)),
                Span::raw(" "),
                Span::styled(
                    session.status_message(now).unwrap_or_default(),
                    Style::default().fg(theme.text),
                ),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(status, rows[1]);
        }
        ReviewPhase::AnalysisReady => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);

            let analysis = Paragraph::new(session.analysis().unwrap_or_default())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.accent))
                        .title(" Analisi "),
                );
            frame.render_widget(analysis, columns[0]);

            let revised = Paragraph::new(session.revised_article().unwrap_or_default())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(" Articolo revisionato "),
                );
            frame.render_widget(revised, columns[1]);
        }
        ReviewPhase::Editing => {
            let mut body = session.draft().to_string();
            body.push('│');
            let editor = Paragraph::new(body)
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.editing))
                        .title(" Modifica revisione "),
                );
            frame.render_widget(editor, area);
        }
        ReviewPhase::Completed => {
            frame.render_widget(
                Paragraph::new("Revisione inviata all'editor.")
                    .style(Style::default().fg(theme.success))
                    .alignment(Alignment::Center),
                area,
            );
        }
    }
}

/// Draw the latest live notice as a toast in the top-right corner.
fn draw_notice(frame: &mut Frame, app: &App) {
    let Some(notice) = app.current_notice(Instant::now()) else {
        return;
    };
    let theme = &app.theme;
    let area = frame.area();

    let width = 48.min(area.width.saturating_sub(2));
    let height = 4.min(area.height);
    let popup = Rect::new(area.width.saturating_sub(width + 1), 1, width, height);
    let color = theme.notice_color(notice.kind);

    let toast = Paragraph::new(vec![
        Line::from(Span::styled(
            notice.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(notice.description.as_str(), Style::default().fg(theme.text))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

    frame.render_widget(Clear, popup);
    frame.render_widget(toast, popup);
}

/// Draw the help screen with keyboard shortcuts.
fn draw_help_screen(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    // Layout: title, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Footer
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        " Scorciatoie da tastiera ",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.primary)));
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![section_title("Generale", theme), Line::from("")];
    lines.push(help_line("F1", "Mostra/nascondi aiuto", theme));
    lines.push(help_line("Ctrl+C", "Esci", theme));
    lines.push(help_line("Ctrl+R", "Nuova sessione", theme));
    lines.push(Line::from(""));

    lines.push(section_title("Ricerca e impostazioni", theme));
    lines.push(Line::from(""));
    lines.push(help_line("Tab / Shift+Tab", "Campo successivo/precedente", theme));
    lines.push(help_line("Invio", "Avvia ricerca / genera articolo", theme));
    lines.push(help_line("Ctrl+T", "Cambia tono", theme));
    lines.push(help_line("PgUp / PgDn", "Lunghezza ±100 parole", theme));
    lines.push(help_line("Ctrl+U", "Svuota campo", theme));
    lines.push(Line::from(""));

    lines.push(section_title("Articolo", theme));
    lines.push(Line::from(""));
    lines.push(help_line("e", "Modifica / salva", theme));
    lines.push(help_line("c", "Copia negli appunti", theme));
    lines.push(help_line("d", "Scarica come .txt", theme));
    lines.push(help_line("r", "Invia a El Director", theme));
    lines.push(help_line("g", "Rigenera", theme));
    lines.push(help_line("↑ / ↓", "Scorri", theme));
    lines.push(Line::from(""));

    lines.push(section_title("El Director", theme));
    lines.push(Line::from(""));
    lines.push(help_line("e", "Modifica la revisione", theme));
    lines.push(help_line("Ctrl+S", "Riporta nell'editor", theme));
    lines.push(help_line("Esc", "Torna all'articolo", theme));

    let content = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(content, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Premi Esc o F1 per chiudere",
        Style::default().fg(theme.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn help_line<'a>(key: &'a str, description: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:16}", key),
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(theme.text)),
    ])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::{Config, Timing};
    use crate::persistence::InMemoryGateway;
    use crate::services::Services;

    fn app() -> App {
        let mut config = Config::default();
        config.timing = Timing::instant();
        App::with_parts(config, Services::instant(), Arc::new(InMemoryGateway::new())).unwrap()
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_input_step() {
        let screen = render(&app());
        assert!(screen.contains("copydesk"));
        assert!(screen.contains("Argomento"));
    }

    #[test]
    fn test_renders_research_and_settings() {
        let mut app = app();
        app.topic = "Come usare ChatGPT per il marketing locale".to_string();
        app.submit_research();
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.wizard.phase() != WizardPhase::ResearchReady && Instant::now() < deadline {
            app.wait_for_event(Duration::from_millis(50));
        }

        let screen = render(&app);
        assert!(screen.contains("Punti chiave"));
        assert!(screen.contains("Tono di Datapizza"));
    }

    #[test]
    fn test_renders_help() {
        let mut app = app();
        app.show_help();
        assert!(render(&app).contains("Scorciatoie"));
    }
}
