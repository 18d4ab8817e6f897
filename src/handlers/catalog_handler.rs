use actix_web::{get, web, HttpResponse};

use crate::{errors::AppError, services::CatalogService};

#[get("/api/tracks")]
pub async fn list_tracks() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CatalogService::list_tracks()))
}

#[get("/api/tracks/{id}")]
pub async fn get_track(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let track = CatalogService::get_track(&id)?;
    Ok(HttpResponse::Ok().json(track))
}
