//! Application state for the terminal project tracker.
//!
//! `App` owns the project store and composes the form and the two lists
//! around it. The lists only learn about changes through store listeners.

use super::form::ProjectForm;
use super::list::ProjectList;
use super::store::ProjectState;
use crate::config::FormRules;
use crate::domain::{DomainError, ProjectStatus};
use log::info;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again";

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which panels are
/// highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the lists; single-key commands are available
    Normal,
    /// Typing into the new project form
    AddProject,
    /// Help screen is displayed
    Help,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use project_tracker::application::{App, AppMode};
/// use project_tracker::domain::ProjectStatus;
///
/// let app = App::default();
/// assert_eq!(app.mode, AppMode::Normal);
/// assert_eq!(app.focus, ProjectStatus::Active);
/// assert!(app.store.projects().is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// All projects and their listeners
    pub store: ProjectState,
    /// Projects with status `Active`
    pub active: ProjectList,
    /// Projects with status `Finished`
    pub finished: ProjectList,
    /// Which list the selection keys act on
    pub focus: ProjectStatus,
    /// Current application mode
    pub mode: AppMode,
    /// New project form buffers
    pub form: ProjectForm,
    /// Limits checked before a project is added
    pub rules: FormRules,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(FormRules::default())
    }
}

impl App {
    pub fn new(rules: FormRules) -> Self {
        let mut store = ProjectState::new();
        let active = ProjectList::new(ProjectStatus::Active);
        let finished = ProjectList::new(ProjectStatus::Finished);
        active.subscribe(&mut store);
        finished.subscribe(&mut store);

        Self {
            store,
            active,
            finished,
            focus: ProjectStatus::Active,
            mode: AppMode::Normal,
            form: ProjectForm::default(),
            rules,
            help_scroll: 0,
            status_message: None,
        }
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn focused_list(&self) -> &ProjectList {
        self.list(self.focus)
    }

    pub fn focused_list_mut(&mut self) -> &mut ProjectList {
        match self.focus {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Opens the form. Whatever was typed before a cancel is still there.
    pub fn start_adding(&mut self) {
        self.mode = AppMode::AddProject;
        self.form.focus(self.form.field);
        self.status_message = None;
    }

    pub fn cancel_adding(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Submits the form. Invalid input keeps the form open with a message.
    pub fn submit_form(&mut self) {
        let title = self.form.title.clone();
        match self.form.submit(&mut self.store, &self.rules) {
            Ok(()) => {
                self.mode = AppMode::Normal;
                self.focus = ProjectStatus::Active;
                self.active.select_last();
                self.status_message = Some(format!("Added project '{}'", title));
            }
            Err(err) => {
                info!("event=form_rejected reason=\"{}\"", err);
                let detail = match err {
                    DomainError::InvalidInput(fields) => fields,
                    other => other.to_string(),
                };
                self.status_message = Some(format!("{} ({})", INVALID_INPUT_MESSAGE, detail));
            }
        }
    }

    /// Moves the selected project of the focused list to `target`.
    pub fn move_selected(&mut self, target: ProjectStatus) {
        let Some(project) = self.focused_list().selected_project() else {
            self.status_message = Some(format!("No {} project selected", self.focus.label()));
            return;
        };

        self.store.move_project(&project.id, target);

        self.status_message = Some(if project.status == target {
            format!("'{}' is already {}", project.title, target.label())
        } else {
            format!("Moved '{}' to {}", project.title, target.label())
        });
    }

    /// Moves the selected project to whichever list it is not in.
    pub fn move_selected_to_other(&mut self) {
        self.move_selected(self.focus.other());
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }
}
