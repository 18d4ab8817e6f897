use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError, models::dto::request::TutorMessageRequest, services::TutorService,
};

#[post("/api/tracks/{track_id}/tutor")]
pub async fn tutor_message(
    track_id: web::Path<String>,
    request: web::Json<TutorMessageRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let reply = TutorService::reply(&track_id, &request.message);
    Ok(HttpResponse::Ok().json(reply))
}
