use crate::application::{App, AppMode};
use crate::domain::ProjectStatus;
use super::ui::get_help_text;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::AddProject => Self::handle_form_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Char('n') | KeyCode::Char('i') => {
                app.start_adding();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                app.toggle_focus();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.focused_list_mut().select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.focused_list_mut().select_next();
            }
            KeyCode::Char('g') | KeyCode::Home => {
                app.focused_list_mut().select_first();
            }
            KeyCode::Char('G') | KeyCode::End => {
                app.focused_list_mut().select_last();
            }
            KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Enter => {
                app.move_selected_to_other();
            }
            KeyCode::Char('a') => {
                app.move_selected(ProjectStatus::Active);
            }
            KeyCode::Char('f') => {
                app.move_selected(ProjectStatus::Finished);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.show_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                app.submit_form();
                return;
            }
            KeyCode::Esc => {
                app.cancel_adding();
                app.status_message = None;
                return;
            }
            _ => {}
        }

        app.status_message = None;
        let form = &mut app.form;
        match key {
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => form.focus_previous(),
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.delete(),
            KeyCode::Left => form.move_left(),
            KeyCode::Right => form.move_right(),
            KeyCode::Home => form.move_home(),
            KeyCode::End => form.move_end(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        let max_scroll = get_help_text().lines().count().saturating_sub(1);
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll = (app.help_scroll + 1).min(max_scroll);
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll = (app.help_scroll + 5).min(max_scroll);
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
