use crate::domain::teacher::Teacher;
use crate::domain::types::TeacherId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod in_memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use in_memory::InMemoryRepository;

/// Read access to the managed teacher records.
pub trait TeacherReader {
    fn get_teacher_by_id(&self, id: &TeacherId) -> RepositoryResult<Option<Teacher>>;
    /// Every record in dataset order.
    fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>>;
}
