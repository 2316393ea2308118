//! A project list that renders one status and is fed by store snapshots.

use super::store::ProjectState;
use crate::domain::{Project, ProjectStatus};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    items: Rc<RefCell<Vec<Project>>>,
    selected: usize,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            items: Rc::new(RefCell::new(Vec::new())),
            selected: 0,
        }
    }

    /// Registers a listener on `store` that keeps this list's projects in
    /// sync with the store, filtered to this list's status.
    pub fn subscribe(&self, store: &mut ProjectState) {
        let status = self.status;
        let items = Rc::clone(&self.items);
        store.add_listener(move |projects: &[Project]| {
            *items.borrow_mut() = projects
                .iter()
                .filter(|project| project.status == status)
                .cloned()
                .collect();
        });
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn projects(&self) -> Ref<'_, Vec<Project>> {
        self.items.borrow()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Selected row, clamped to the items received most recently.
    pub fn selected_index(&self) -> Option<usize> {
        match self.len() {
            0 => None,
            len => Some(self.selected.min(len - 1)),
        }
    }

    pub fn selected_project(&self) -> Option<Project> {
        let index = self.selected_index()?;
        self.items.borrow().get(index).cloned()
    }

    pub fn select_next(&mut self) {
        if let Some(index) = self.selected_index() {
            if index + 1 < self.len() {
                self.selected = index + 1;
            } else {
                self.selected = index;
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected_index() {
            self.selected = index.saturating_sub(1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }
}
