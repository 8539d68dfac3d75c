//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppMode;
use crate::review::ReviewPhase;
use crate::wizard::WizardPhase;
use crate::App;

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    // Global shortcuts
    if ctrl(&key, 'c') {
        app.quit();
        return;
    }
    if key.code == KeyCode::F(1) {
        if app.mode == AppMode::Help {
            app.dismiss_help();
        } else {
            app.show_help();
        }
        return;
    }

    match app.mode {
        AppMode::Help => handle_help_mode(key, app),
        AppMode::Review => handle_review_mode(key, app),
        AppMode::Wizard => handle_wizard_mode(key, app),
    }
}

/// Handle input in help mode.
fn handle_help_mode(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter) {
        app.dismiss_help();
    }
}

/// Handle input in the wizard view.
fn handle_wizard_mode(key: KeyEvent, app: &mut App) {
    // New session (Ctrl+R)
    if ctrl(&key, 'r') {
        app.reset();
        return;
    }

    match app.wizard.phase() {
        WizardPhase::Idle | WizardPhase::Researching => handle_form(key, app, false),
        WizardPhase::ResearchReady | WizardPhase::Generating => handle_form(key, app, true),
        WizardPhase::ArticleReady if app.wizard.is_editing() => handle_article_edit(key, app),
        WizardPhase::ArticleReady => handle_article(key, app),
    }
}

/// Handle typing in the input form (`settings` selects the SEO step).
fn handle_form(key: KeyEvent, app: &mut App, settings: bool) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Enter if !app.is_loading() => {
            if settings {
                app.submit_settings();
            } else {
                app.submit_research();
            }
        }

        // Tone and length (settings step only)
        KeyCode::Char('t') if settings && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_tone();
        }
        KeyCode::PageUp if settings => app.increase_word_count(),
        KeyCode::PageDown if settings => app.decrease_word_count(),

        // Text editing
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_field(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.enter_char(c),
        _ => {}
    }
}

/// Handle input on the article step.
fn handle_article(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Char('e') => app.toggle_edit(),
        KeyCode::Char('c') => app.copy_article(),
        KeyCode::Char('d') => app.download_article(),
        KeyCode::Char('r') => app.open_review(),
        KeyCode::Char('g') => app.submit_generation(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        _ => {}
    }
}

/// Handle typing in the article editor.
fn handle_article_edit(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.toggle_edit(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.toggle_edit(),
        // Send the draft straight to review (Ctrl+E)
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => app.open_review(),
        KeyCode::Enter => app.edit_draft('\n'),
        KeyCode::Backspace => app.delete_draft_char(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.edit_draft(c),
        _ => {}
    }
}

/// Handle input in the review view.
fn handle_review_mode(key: KeyEvent, app: &mut App) {
    let Some(phase) = app.review.as_ref().map(|r| r.phase()) else {
        app.leave_review();
        return;
    };

    match phase {
        ReviewPhase::AwaitingInput => match key.code {
            KeyCode::Enter => app.start_analysis(),
            KeyCode::Esc => app.leave_review(),
            _ => {}
        },
        ReviewPhase::Analyzing | ReviewPhase::Completed => {
            if key.code == KeyCode::Esc {
                app.leave_review();
            }
        }
        ReviewPhase::AnalysisReady => match key.code {
            KeyCode::Char('e') | KeyCode::Enter => app.begin_review_edit(),
            KeyCode::Esc => app.leave_review(),
            _ => {}
        },
        ReviewPhase::Editing => match key.code {
            KeyCode::Esc => app.leave_review(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.commit_review();
            }
            KeyCode::Enter => app.edit_draft('\n'),
            KeyCode::Backspace => app.delete_draft_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.edit_draft(c),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::Field;
    use crate::core::{Config, Timing, Tone};
    use crate::persistence::InMemoryGateway;
    use crate::services::Services;

    fn app() -> App {
        let mut config = Config::default();
        config.timing = Timing::instant();
        App::with_parts(config, Services::instant(), Arc::new(InMemoryGateway::new())).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_events(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), app);
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app();
        for c in "ciao".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.topic, "ciao");
        assert_eq!(app.repo, "a");
        assert_eq!(app.focus, Field::Repo);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_f1_toggles_help() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Wizard);
    }

    #[test]
    fn test_settings_shortcuts_ignored_on_input_step() {
        let mut app = app();
        let tone = app.wizard.tone();
        press_ctrl(&mut app, 't');
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.wizard.tone(), tone);
        assert_eq!(app.wizard.seo().word_count, 1200);
    }

    #[test]
    fn test_enter_with_short_topic_keeps_idle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.phase(), WizardPhase::Idle);
        assert_eq!(Tone::default(), app.wizard.tone());
    }
}
