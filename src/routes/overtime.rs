use actix_web::{Responder, get, web};
use tera::Tera;

use crate::dto::list::OvertimeQuery;
use crate::repository::JsonRepository;
use crate::routes::{list_context, render_template, service_error_response};
use crate::services::overtime::load_overtime_page;

#[get("/overtime/")]
pub async fn show_overtimes(
    params: web::Query<OvertimeQuery>,
    repo: web::Data<JsonRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_overtime_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => render_template(
            &tera,
            "overtime/index.html",
            &list_context("overtime", &page),
        ),
        Err(err) => {
            log::warn!("Failed to load overtime list: {err}");
            service_error_response(&err)
        }
    }
}
