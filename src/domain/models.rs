use serde::{Deserialize, Serialize};

/// Lifecycle of a tracked project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// The status a project lands in when moved to the other list.
    pub fn other(self) -> Self {
        match self {
            ProjectStatus::Active => ProjectStatus::Finished,
            ProjectStatus::Finished => ProjectStatus::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

/// One tracked unit of work.
///
/// Everything except `status` is fixed at creation. Construction performs no
/// validation; callers check their input first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            people,
            status,
        }
    }

    /// Headcount phrased for display, e.g. "1 person assigned".
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.people)
        }
    }
}
