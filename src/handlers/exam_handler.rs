use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::RecordAnswerRequest,
    models::dto::response::DiscardResponse,
};

#[post("/api/exams/{exam_id}/sessions")]
pub async fn start_session(
    state: web::Data<AppState>,
    exam_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.start_session(&exam_id).await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.get_session(*id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/answers")]
pub async fn record_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let view = state
        .exam_service
        .record_answer(*id, &request.question_id, &request.value)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/next")]
pub async fn go_to_next(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.go_to_next(*id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/previous")]
pub async fn go_to_previous(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.go_to_previous(*id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/submit")]
pub async fn submit(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.submit(*id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/sessions/{id}/review")]
pub async fn review(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.review(*id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[delete("/api/sessions/{id}")]
pub async fn discard_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.exam_service.discard(*id).await;
    Ok(HttpResponse::Ok().json(DiscardResponse {
        message: "session discarded".to_string(),
    }))
}
