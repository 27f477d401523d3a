//! Teacher administration screen: filter engine, pager and the Actix-Web
//! front end rendering them.

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::filter::FilterEngine;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::InMemoryRepository;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::teachers::{add_teacher, teacher_action};

pub mod domain;
pub mod filter;
pub mod pagination;
pub mod repository;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every screen route on `cfg`.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(show_index)
        .service(add_teacher)
        .service(teacher_action);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = match &server_config.dataset_path {
        Some(path) => InMemoryRepository::from_path(path),
        None => InMemoryRepository::seeded(),
    }
    .map_err(|e| std::io::Error::other(format!("Failed to load teachers: {e}")))?;

    log::info!("Serving {} teachers", repo.len());

    let engine = FilterEngine::default();

    // Keys and stores for flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(engine.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
