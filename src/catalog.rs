use crate::types::Project;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id {0} in catalog")]
    DuplicateId(u32),
}

/// The fixed, ordered collection of projects. Built once at startup and
/// read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// The built-in five-record sample catalog.
    pub fn builtin() -> Self {
        Self {
            projects: crate::data::builtin_projects(),
        }
    }

    /// Build a catalog from an explicit project list, rejecting duplicate ids.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self { projects })
    }

    /// Load a user-supplied catalog from a JSON file (an array of projects).
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&raw)?;
        Self::from_projects(projects)
    }

    /// The full catalog in declaration order.
    pub fn list_all(&self) -> &[Project] {
        &self.projects
    }

    /// Lookup by id. `None` is the absent sentinel for a lookup miss.
    pub fn find_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
