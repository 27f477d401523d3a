//! Services backing the per-teacher card actions.

use crate::dto::notification::Notification;
use crate::forms::FormError;
use crate::forms::teachers::{TeacherActionPath, TeacherActionPayload};
use crate::repository::TeacherReader;
use crate::services::{ServiceError, ServiceResult};

/// Resolves a card action against the record set and returns the message
/// to announce. Records are never modified.
pub fn perform_teacher_action<R>(repo: &R, path: TeacherActionPath) -> ServiceResult<Notification>
where
    R: TeacherReader + ?Sized,
{
    let payload = TeacherActionPayload::try_from(path)?;

    let teacher = repo
        .get_teacher_by_id(&payload.teacher_id)?
        .ok_or(ServiceError::NotFound)?;

    if !payload.action.is_available_for(teacher.status) {
        log::warn!(
            "Rejected {} for teacher {} with status {}",
            payload.action,
            teacher.id,
            teacher.status
        );
        return Err(FormError::InvalidAction.into());
    }

    log::info!("{} action performed for teacher {}", payload.action, teacher.id);

    Ok(Notification::new(
        format!("{} Teacher", payload.action),
        format!("{} action performed for {}", payload.action, teacher.name),
    ))
}

/// Announces the teacher creation form.
pub fn add_teacher() -> Notification {
    Notification::new("Add Teacher", "Opening teacher creation form...")
}
