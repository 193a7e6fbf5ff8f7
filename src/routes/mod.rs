use actix_web::{HttpResponse, http::header};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod day_off;
pub mod main;
pub mod overtime;

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Builds the template context for a list page.
pub fn list_context<T: Serialize>(current_page: &str, page: &T) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("page", page);
    context
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a failed service call onto the HTTP response.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidQuery(reason) => HttpResponse::BadRequest().body(reason.clone()),
        ServiceError::Repository(_) => HttpResponse::InternalServerError().finish(),
    }
}
