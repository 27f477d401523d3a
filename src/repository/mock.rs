//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::teacher::Teacher;
use crate::domain::types::TeacherId;
use crate::repository::TeacherReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl TeacherReader for Repository {
        fn get_teacher_by_id(&self, id: &TeacherId) -> RepositoryResult<Option<Teacher>>;
        fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>>;
    }
}
