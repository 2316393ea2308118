use crate::application::{App, AppMode, FormField};
use crate::domain::ProjectStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_lists(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "ptrack - Project Tracker | {} active | {} finished",
        app.active.len(),
        app.finished.len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == AppMode::AddProject;
    let fields = [FormField::Title, FormField::Description, FormField::People];

    let value_width = usize::from(area.width.saturating_sub(2 + FORM_LABEL_WIDTH));
    let mut cursor_column = 0;

    let lines: Vec<Line> = fields
        .iter()
        .map(|&field| {
            let focused = editing && field == app.form.field;
            let label_style = if focused {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let cursor = if focused { app.form.cursor_position } else { 0 };
            let (visible, column) = visible_window(app.form.value(field), cursor, value_width);
            if focused {
                cursor_column = column;
            }
            Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::raw(" "),
                Span::raw(visible),
            ])
        })
        .collect();

    let border_style = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("New Project"),
    );
    f.render_widget(form, area);

    if editing {
        let row = fields.iter().position(|&field| field == app.form.field).unwrap_or(0);
        let column = u16::try_from(cursor_column).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1 + FORM_LABEL_WIDTH)
            .saturating_add(column)
            .min(area.right().saturating_sub(2));
        let y = area.y.saturating_add(1).saturating_add(row as u16);
        f.set_cursor_position(Position::new(x, y));
    }
}

/// Label column plus the separating space.
const FORM_LABEL_WIDTH: u16 = 13;

/// Returns the part of `text` that fits in `width` columns with the cursor
/// on screen, and the cursor's column within that part.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let start = (cursor + 1).saturating_sub(width);
    let visible = text.chars().skip(start).take(width).collect();
    (visible, cursor - start)
}

fn render_lists(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_project_list(f, app, ProjectStatus::Active, chunks[0]);
    render_project_list(f, app, ProjectStatus::Finished, chunks[1]);
}

fn render_project_list(f: &mut Frame, app: &App, status: ProjectStatus, area: Rect) {
    let list = app.list(status);
    let focused = app.mode == AppMode::Normal && app.focus == status;

    let items: Vec<ListItem> = list
        .projects()
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    project.people_label(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(project.description.clone()),
            ])
        })
        .collect();

    let (title, color) = match status {
        ProjectStatus::Active => ("ACTIVE PROJECTS", Color::LightBlue),
        ProjectStatus::Finished => ("FINISHED PROJECTS", Color::LightMagenta),
    };
    let border_style = if focused {
        Style::default().fg(color)
    } else {
        Style::default()
    };

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().bg(color).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(list.selected_index());
    }
    f.render_stateful_widget(widget, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "n: new project | Tab: switch list | j/k: select | Space: move | a/f: to active/finished | ?: help | q: quit".to_string()
            }
        }
        AppMode::AddProject => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                format!(
                    "Editing {} (Tab: next field, Enter: add project, Esc: cancel)",
                    app.form.field.label()
                )
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::AddProject => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "ptrack Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub fn get_help_text() -> &'static str {
    r#"PTRACK PROJECT TRACKER

=== PROJECTS ===
• Every project has a title, a description and a headcount
• New projects start in the ACTIVE list
• A project can be moved between ACTIVE and FINISHED at any time
• Projects are kept in memory only and are gone when you quit

=== ADDING A PROJECT ===
n or i          Open the new project form
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
←→ Home End     Move the cursor within a field
Backspace/Del   Delete characters
Enter           Add the project
Esc             Close the form (typed text is kept)

Rules:
title           Must not be blank
description     At least 5 characters
people          A whole number, 1 to 5 by default
                (set PTRACK_MAX_PEOPLE to change the upper bound)

=== LISTS ===
Tab             Switch between ACTIVE and FINISHED
↑↓ or j/k       Select a project
g / G           First / last project
Space, m, Enter Move selected project to the other list
a               Move selected project to ACTIVE
f               Move selected project to FINISHED

=== LOGGING ===
PTRACK_LOG_DIR  Absolute directory for log files (off when unset)
PTRACK_LOG      Log level: trace, debug, info, warn, error

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

q               Quit application"#
}
