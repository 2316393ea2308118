//! The shared project store and its change notification.
//!
//! Every mutation that changes something is followed by a synchronous
//! broadcast of the *whole* project sequence to each listener, in the order
//! the listeners were registered.

use crate::domain::{Project, ProjectStatus};
use log::{debug, trace};
use uuid::Uuid;

/// Receives the full project snapshot after each change to the store.
///
/// Any `FnMut(&[Project])` closure is a listener.
pub trait ProjectListener {
    fn on_projects_changed(&mut self, projects: &[Project]);
}

impl<F> ProjectListener for F
where
    F: FnMut(&[Project]),
{
    fn on_projects_changed(&mut self, projects: &[Project]) {
        self(projects)
    }
}

/// Registration-ordered list of observers of a `[T]` snapshot.
pub struct Listeners<T> {
    listeners: Vec<Box<dyn FnMut(&[T])>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self { listeners: Vec::new() }
    }
}

impl<T> Listeners<T> {
    pub fn add(&mut self, listener: Box<dyn FnMut(&[T])>) {
        self.listeners.push(listener);
    }

    pub fn notify(&mut self, items: &[T]) {
        for listener in self.listeners.iter_mut() {
            listener(items);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.listeners.len()).finish()
    }
}

/// Ordered collection of projects plus the listeners watching it.
///
/// Projects are never removed; only their status changes.
///
/// # Examples
///
/// ```
/// use project_tracker::application::ProjectState;
/// use project_tracker::domain::{Project, ProjectStatus};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&calls);
///
/// let mut state = ProjectState::new();
/// state.add_listener(move |_: &[Project]| seen.set(seen.get() + 1));
/// state.add_project("Website", "Rebuild the landing page", 3);
///
/// let id = state.projects()[0].id.clone();
/// state.move_project(&id, ProjectStatus::Finished);
/// state.move_project(&id, ProjectStatus::Finished);
///
/// assert_eq!(calls.get(), 2);
/// assert_eq!(state.projects()[0].status, ProjectStatus::Finished);
/// ```
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`. Registering the same logic twice means it runs
    /// twice per change; there is no way to unsubscribe.
    pub fn add_listener<L>(&mut self, mut listener: L)
    where
        L: ProjectListener + 'static,
    {
        self.listeners
            .add(Box::new(move |projects: &[Project]| listener.on_projects_changed(projects)));
        debug!("event=listener_added count={}", self.listeners.len());
    }

    /// Appends a new active project under a fresh id and notifies listeners.
    pub fn add_project(&mut self, title: &str, description: &str, num_of_people: u32) {
        let project = Project::new(
            Uuid::new_v4().to_string(),
            title,
            description,
            num_of_people,
            ProjectStatus::Active,
        );
        debug!(
            "event=project_added id={} people={} total={}",
            project.id,
            project.people,
            self.projects.len() + 1
        );
        self.projects.push(project);
        self.update_listeners();
    }

    /// Sets the status of the project with `project_id`.
    ///
    /// Unknown ids and moves to the status a project already has are ignored
    /// and do not notify anyone.
    pub fn move_project(&mut self, project_id: &str, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            trace!("event=move_ignored reason=unknown_id id={}", project_id);
            return;
        };
        if project.status == new_status {
            trace!(
                "event=move_ignored reason=same_status id={} status={}",
                project_id,
                new_status.label()
            );
            return;
        }
        project.status = new_status;
        debug!("event=project_moved id={} status={}", project_id, new_status.label());
        self.update_listeners();
    }

    /// Current projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&mut self) {
        self.listeners.notify(&self.projects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Records every snapshot a listener receives.
    fn recorder(state: &mut ProjectState) -> Rc<RefCell<Vec<Vec<Project>>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        state.add_listener(move |projects: &[Project]| sink.borrow_mut().push(projects.to_vec()));
        calls
    }

    #[test]
    fn test_add_project_appends_active_projects() {
        let mut state = ProjectState::new();
        for i in 0..10 {
            state.add_project(&format!("P{i}"), "description", 2);
        }

        assert_eq!(state.projects().len(), 10);
        for (i, project) in state.projects().iter().enumerate() {
            assert_eq!(project.title, format!("P{i}"));
            assert_eq!(project.status, ProjectStatus::Active);
            assert!(!project.id.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = ProjectState::new();
        for _ in 0..500 {
            state.add_project("Same", "same description", 1);
        }
        let ids: HashSet<&str> = state.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_add_project_broadcasts_full_snapshot() {
        let mut state = ProjectState::new();
        let calls = recorder(&mut state);

        state.add_project("A", "desc", 3);
        state.add_project("B", "desc", 2);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[1].len(), 2);
        assert_eq!(calls[1][0].title, "A");
        assert_eq!(calls[1][1].title, "B");
    }

    #[test]
    fn test_move_unknown_id_is_silent() {
        let mut state = ProjectState::new();
        state.add_project("A", "desc", 3);
        let before = state.projects().to_vec();
        let calls = recorder(&mut state);

        state.move_project("no-such-id", ProjectStatus::Finished);

        assert_eq!(state.projects(), before.as_slice());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_move_to_current_status_does_not_notify() {
        let mut state = ProjectState::new();
        state.add_project("A", "desc", 3);
        let id = state.projects()[0].id.clone();
        let calls = recorder(&mut state);

        state.move_project(&id, ProjectStatus::Active);

        assert!(calls.borrow().is_empty());
        assert_eq!(state.projects()[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_move_example_sequence() {
        let mut state = ProjectState::new();
        let calls = recorder(&mut state);

        state.add_project("A", "desc", 3);
        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].status, ProjectStatus::Active);

        state.add_project("B", "desc", 2);
        assert_eq!(state.projects().len(), 2);

        let id_a = state.projects()[0].id.clone();
        calls.borrow_mut().clear();
        state.move_project(&id_a, ProjectStatus::Finished);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let snapshot = &calls[0];
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].status, ProjectStatus::Finished);
        assert_eq!(snapshot[1].status, ProjectStatus::Active);
        assert_eq!(snapshot[0].title, "A");
        assert_eq!(snapshot[0].people, 3);
        assert_eq!(state.projects(), snapshot.as_slice());
    }

    #[test]
    fn test_late_listener_gets_full_snapshot() {
        let mut state = ProjectState::new();
        state.add_project("A", "desc", 1);
        state.add_project("B", "desc", 1);
        let calls = recorder(&mut state);

        state.add_project("C", "desc", 1);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let titles: Vec<&str> = calls[0].iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_listeners_run_in_registration_order_with_duplicates() {
        let mut state = ProjectState::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            state.add_listener(move |_: &[Project]| order.borrow_mut().push(tag));
        }
        let dup = Rc::clone(&order);
        let shared = move |_: &[Project]| dup.borrow_mut().push("dup");
        state.add_listener(shared.clone());
        state.add_listener(shared);
        assert_eq!(state.listener_count(), 4);

        state.add_project("A", "desc", 1);

        assert_eq!(*order.borrow(), ["first", "second", "dup", "dup"]);
    }

    struct Counter {
        calls: Rc<RefCell<usize>>,
    }

    impl ProjectListener for Counter {
        fn on_projects_changed(&mut self, _projects: &[Project]) {
            *self.calls.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_struct_listener() {
        let mut state = ProjectState::new();
        let calls = Rc::new(RefCell::new(0));
        state.add_listener(Counter { calls: Rc::clone(&calls) });

        state.add_project("A", "desc", 1);
        let id = state.projects()[0].id.clone();
        state.move_project(&id, ProjectStatus::Finished);
        state.move_project(&id, ProjectStatus::Active);

        assert_eq!(*calls.borrow(), 3);
    }
}
