//! Routes for the per-teacher actions and the "Add Teacher" button.

use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::teachers::{ReturnToForm, TeacherActionPath};
use crate::repository::InMemoryRepository;
use crate::routes::redirect;
use crate::services::{ServiceError, teachers as teachers_service};

#[post("/teachers/add")]
pub async fn add_teacher(form: web::Form<ReturnToForm>) -> impl Responder {
    FlashMessage::info(teachers_service::add_teacher().to_string()).send();
    redirect(&form.location())
}

#[post("/teachers/{id}/{action}")]
/// Run a card action and announce its outcome.
pub async fn teacher_action(
    path: web::Path<TeacherActionPath>,
    repo: web::Data<InMemoryRepository>,
    form: web::Form<ReturnToForm>,
) -> impl Responder {
    match teachers_service::perform_teacher_action(repo.get_ref(), path.into_inner()) {
        Ok(notification) => {
            FlashMessage::success(notification.to_string()).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Teacher not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(format!("Action not available: {message}")).send();
        }
        Err(err) => {
            log::error!("Failed to perform teacher action: {err}");
            FlashMessage::error("Failed to perform the action.").send();
        }
    }
    redirect(&form.location())
}
