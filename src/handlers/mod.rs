use actix_web::{get, HttpResponse};

pub mod catalog_handler;
pub mod exam_handler;
pub mod tutor_handler;

pub use catalog_handler::{get_track, list_tracks};
pub use exam_handler::{
    discard_session, get_session, go_to_next, go_to_previous, record_answer, review,
    start_session, submit,
};
pub use tutor_handler::tutor_message;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
