//! Immutable in-memory record set backing the screen.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::domain::teacher::Teacher;
use crate::domain::types::TeacherId;
use crate::repository::TeacherReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

const SEED_DATASET: &str = include_str!("../../data/teachers.json");

/// Shares one record set between workers; cloning is cheap.
#[derive(Clone, Debug)]
pub struct InMemoryRepository {
    teachers: Arc<[Teacher]>,
}

impl InMemoryRepository {
    /// Wraps `teachers`, rejecting duplicate identifiers.
    pub fn new(teachers: Vec<Teacher>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        for teacher in &teachers {
            if !seen.insert(teacher.id.as_str()) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Duplicate teacher id: {}",
                    teacher.id
                )));
            }
        }

        Ok(Self {
            teachers: teachers.into(),
        })
    }

    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let teachers: Vec<Teacher> = serde_json::from_str(json)?;
        Self::new(teachers)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let repo = Self::from_json(&json)?;
        log::info!(
            "Loaded {} teachers from {}",
            repo.teachers.len(),
            path.display()
        );
        Ok(repo)
    }

    /// The mock dataset bundled with the crate.
    pub fn seeded() -> RepositoryResult<Self> {
        Self::from_json(SEED_DATASET)
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

impl TeacherReader for InMemoryRepository {
    fn get_teacher_by_id(&self, id: &TeacherId) -> RepositoryResult<Option<Teacher>> {
        Ok(self.teachers.iter().find(|t| &t.id == id).cloned())
    }

    fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>> {
        Ok(self.teachers.to_vec())
    }
}
