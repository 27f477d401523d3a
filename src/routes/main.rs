use actix_web::{HttpRequest, HttpResponse, Responder, get};
use actix_web::web;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::filter::FilterEngine;
use crate::forms::filters::FiltersForm;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
/// Show the filtered, paginated teacher list.
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    engine: web::Data<FilterEngine>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match serde_html_form::from_str::<FiltersForm>(req.query_string()) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Malformed listing query '{}': {err}", req.query_string());
            FlashMessage::warning("Invalid filter values, showing all teachers.").send();
            return redirect("/");
        }
    };

    match main_service::load_index_page(repo.get_ref(), engine.get_ref(), form) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "teachers");
            context.insert("teachers", &data.teachers);
            context.insert("listing", &data.listing);
            context.insert("has_active_filters", &data.has_active_filters);
            context.insert("base_query", &data.base_query);
            context.insert("current_query", &data.current_query);
            context.insert("clear_query", &data.clear_query);
            context.insert("page_link", &data.page_link);
            context.insert("page_sizes", &data.page_sizes);

            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(format!("Invalid filter values: {message}")).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load teachers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
