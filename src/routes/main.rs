use actix_web::{Responder, get};

use crate::routes::redirect;
use crate::services::day_off::DAY_OFF_LIST_PATH;

#[get("/")]
pub async fn index() -> impl Responder {
    redirect(DAY_OFF_LIST_PATH)
}
