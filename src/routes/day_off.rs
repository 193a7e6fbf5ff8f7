use actix_web::{Responder, get, web};
use chrono::Local;
use tera::Tera;

use crate::dto::list::DayOffQuery;
use crate::repository::JsonRepository;
use crate::routes::{list_context, render_template, service_error_response};
use crate::services::day_off::load_day_off_page;

#[get("/day_off/")]
pub async fn show_day_offs(
    params: web::Query<DayOffQuery>,
    repo: web::Data<JsonRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let today = Local::now().date_naive();

    match load_day_off_page(repo.get_ref(), params.into_inner(), today) {
        Ok(page) => render_template(
            &tera,
            "day_off/index.html",
            &list_context("day_off", &page),
        ),
        Err(err) => {
            log::warn!("Failed to load day-off list: {err}");
            service_error_response(&err)
        }
    }
}
