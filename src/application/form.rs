//! The "new project" form: three text buffers and their validation.

use super::store::ProjectState;
use crate::config::FormRules;
use crate::domain::{validate, DomainError, DomainResult, Validatable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    People,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::People => "people",
        }
    }
}

/// Input gathered from a valid form: title, description, headcount.
pub type ProjectInput = (String, String, u32);

/// Text buffers backing the form.
///
/// `cursor_position` counts characters, not bytes, within the focused field.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
    pub field: FormField,
    pub cursor_position: usize,
}

impl ProjectForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    fn focused_len(&self) -> usize {
        self.value(self.field).chars().count()
    }

    pub fn focus(&mut self, field: FormField) {
        self.field = field;
        self.cursor_position = self.focused_len();
    }

    pub fn focus_next(&mut self) {
        self.focus(self.field.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus(self.field.previous());
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        let buffer = self.focused_mut();
        let at = byte_offset(buffer, cursor);
        buffer.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor = self.cursor_position - 1;
        let buffer = self.focused_mut();
        let at = byte_offset(buffer, cursor);
        buffer.remove(at);
        self.cursor_position = cursor;
    }

    pub fn delete(&mut self) {
        if self.cursor_position >= self.focused_len() {
            return;
        }
        let cursor = self.cursor_position;
        let buffer = self.focused_mut();
        let at = byte_offset(buffer, cursor);
        buffer.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.focused_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_position = self.focused_len();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the buffers against `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] naming every field that failed.
    pub fn gather_input(&self, rules: &FormRules) -> DomainResult<ProjectInput> {
        let mut title = Validatable::text(&self.title).required();
        if let Some(max) = rules.title_max_length {
            title = title.max_length(max);
        }

        let mut description = Validatable::text(&self.description)
            .required()
            .min_length(rules.description_min_length);
        if let Some(max) = rules.description_max_length {
            description = description.max_length(max);
        }

        let people = self.people.trim().parse::<i64>().ok();
        let people_valid = people.is_some_and(|n| {
            validate(
                &Validatable::number(n)
                    .required()
                    .min(i64::from(rules.min_people))
                    .max(i64::from(rules.max_people)),
            )
        });

        let mut invalid = Vec::new();
        if !validate(&title) {
            invalid.push(FormField::Title.label());
        }
        if !validate(&description) {
            invalid.push(FormField::Description.label());
        }
        if !people_valid {
            invalid.push(FormField::People.label());
        }
        if !invalid.is_empty() {
            return Err(DomainError::InvalidInput(invalid.join(", ")));
        }

        let people = people
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| DomainError::InvalidInput(FormField::People.label().to_string()))?;
        Ok((self.title.clone(), self.description.clone(), people))
    }

    /// Adds the project to `store` and empties the form. On error the buffers
    /// are left untouched so the user can fix them.
    pub fn submit(&mut self, store: &mut ProjectState, rules: &FormRules) -> DomainResult<()> {
        let (title, description, people) = self.gather_input(rules)?;
        store.add_project(&title, &description, people);
        self.clear();
        Ok(())
    }
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectStatus;

    fn filled(title: &str, description: &str, people: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: description.to_string(),
            people: people.to_string(),
            ..ProjectForm::default()
        }
    }

    #[test]
    fn test_gather_valid_input() {
        let form = filled("Website", "Rebuild landing page", " 3 ");
        let input = form.gather_input(&FormRules::default()).unwrap();
        assert_eq!(input, ("Website".to_string(), "Rebuild landing page".to_string(), 3));
    }

    #[test]
    fn test_any_invalid_field_rejects() {
        let rules = FormRules::default();

        let err = filled("", "long enough", "2").gather_input(&rules).unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("title".to_string()));

        let err = filled("T", "tiny", "2").gather_input(&rules).unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("description".to_string()));

        for people in ["", "0", "6", "-1", "two", "2.5"] {
            let err = filled("T", "long enough", people).gather_input(&rules).unwrap_err();
            assert_eq!(err, DomainError::InvalidInput("people".to_string()), "people = {people:?}");
        }

        let err = filled(" ", "", "").gather_input(&rules).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: title, description, people");
    }

    #[test]
    fn test_rules_are_configurable() {
        let rules = FormRules {
            title_max_length: Some(3),
            max_people: 10,
            ..FormRules::default()
        };
        assert!(filled("Web", "long enough", "10").gather_input(&rules).is_ok());
        assert!(filled("Webs", "long enough", "10").gather_input(&rules).is_err());
    }

    #[test]
    fn test_submit_adds_project_and_clears() {
        let mut store = ProjectState::new();
        let mut form = filled("Website", "Rebuild landing page", "3");
        form.field = FormField::People;

        form.submit(&mut store, &FormRules::default()).unwrap();

        assert_eq!(store.projects().len(), 1);
        let project = &store.projects()[0];
        assert_eq!(project.title, "Website");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(form.title.is_empty());
        assert!(form.people.is_empty());
        assert_eq!(form.field, FormField::Title);
    }

    #[test]
    fn test_failed_submit_keeps_buffers() {
        let mut store = ProjectState::new();
        let mut form = filled("Website", "tiny", "3");

        assert!(form.submit(&mut store, &FormRules::default()).is_err());
        assert!(store.projects().is_empty());
        assert_eq!(form.description, "tiny");
    }

    #[test]
    fn test_editing_handles_multibyte_text() {
        let mut form = ProjectForm::default();
        for c in "héllo".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.title, "héllo");
        assert_eq!(form.cursor_position, 5);

        form.move_left();
        form.move_left();
        form.move_left();
        form.backspace();
        assert_eq!(form.title, "hllo");
        assert_eq!(form.cursor_position, 1);

        form.delete();
        assert_eq!(form.title, "hlo");
        form.move_home();
        form.insert_char('>');
        assert_eq!(form.title, ">hlo");
        form.move_end();
        form.delete();
        assert_eq!(form.title, ">hlo");
    }

    #[test]
    fn test_focus_cycles_and_moves_cursor_to_end() {
        let mut form = filled("abc", "defgh", "");
        form.focus_next();
        assert_eq!(form.field, FormField::Description);
        assert_eq!(form.cursor_position, 5);
        form.focus_next();
        assert_eq!(form.field, FormField::People);
        assert_eq!(form.cursor_position, 0);
        form.focus_next();
        assert_eq!(form.field, FormField::Title);
        form.focus_previous();
        assert_eq!(form.field, FormField::People);
    }
}
