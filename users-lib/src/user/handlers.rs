use super::UserIdQuery;
use crate::error::HandlerError;
use actix_web::http::header::ContentType;
use actix_web::{delete, get, post, put, web, HttpMessage, HttpRequest, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;
use users_repo::user_repo::{User, UserId, UserRepo};

#[post("")]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    req: HttpRequest,
    new_user: web::Json<User>,
) -> Result<HttpResponse, HandlerError> {
    let new_user = new_user.into_inner();
    record_user_id(&req, new_user.id);

    let user = user_repo.create_user(new_user).await?;
    info!("Created user");
    json_response(&user)
}

#[get("")]
pub async fn get_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    req: HttpRequest,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, HandlerError> {
    let user_id = query.into_inner().user_id;
    record_user_id(&req, user_id);

    let user = user_repo.get_user(user_id).await?;
    json_response(&user)
}

#[put("")]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    req: HttpRequest,
    updated_user: web::Json<User>,
) -> Result<HttpResponse, HandlerError> {
    let updated_user = updated_user.into_inner();
    record_user_id(&req, updated_user.id);

    let user = user_repo.update_user(updated_user).await?;
    info!("Updated user");
    json_response(&user)
}

#[delete("")]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    req: HttpRequest,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, HandlerError> {
    let user_id = query.into_inner().user_id;
    record_user_id(&req, user_id);

    user_repo.delete_user(user_id).await?;
    info!("Deleted user");
    json_response(&format!("user deleted {}", user_id))
}

fn record_user_id(req: &HttpRequest, user_id: UserId) {
    if let Some(root_span) = req.extensions().get::<RootSpan>() {
        root_span.record("user_id", user_id);
    }
}

fn json_response<T: Serialize>(body: &T) -> Result<HttpResponse, HandlerError> {
    let body = serde_json::to_string(body)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
