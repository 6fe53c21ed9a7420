use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use crate::books::dto::{BookDto, CatalogStatsDto};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::get_stats_cmd::{GetStatsCommand, GetStatsCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::rent_book_cmd::{RentBookCommand, RentBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{ApiResponse, AppState, endpoint_not_found, internal_error, server_error, ServerError};
use crate::core::domain::BookId;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/books", get(list_books).post(add_book))
        .route("/api/books/:id", get(find_book_by_id).delete(remove_book))
        .route("/api/books/:id/rent", put(rent_book))
        .route("/api/books/:id/return", put(return_book))
        .route("/api/stats", get(get_stats))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ids that are not integers never match a catalog route
fn book_id(path: Result<Path<BookId>, PathRejection>) -> Result<BookId, ServerError> {
    path.map(|Path(id)| id).map_err(|_| endpoint_not_found())
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksQuery {
    available: Option<String>,
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn not_found() -> ServerError {
    endpoint_not_found()
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<ListBooksQuery>, QueryRejection>) -> Result<Json<ApiResponse<Vec<BookDto>>>, ServerError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let req = ListBooksCommandRequest::from_query(query.available.as_deref());
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(ApiResponse::data(res.books).with_count(res.count)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>) -> Result<Json<ApiResponse<BookDto>>, ServerError> {
    let req = GetBookCommandRequest::new(book_id(path)?);
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(ApiResponse::data(res.book)))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<ApiResponse<BookDto>>), ServerError> {
    let invalid = || server_error(StatusCode::BAD_REQUEST, "Invalid JSON data");
    let Json(value) = json.map_err(|_| invalid())?;
    let req: AddBookCommandRequest = serde_json::from_value(value).map_err(|_| invalid())?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(res.book).with_message(res.message))))
}

pub(crate) async fn rent_book(
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<ApiResponse<BookDto>>, ServerError> {
    let book_id = book_id(path)?;
    let invalid = || server_error(StatusCode::BAD_REQUEST, "Invalid request data");
    let Json(value) = json.map_err(|_| invalid())?;
    let mut req: RentBookCommandRequest = serde_json::from_value(value).map_err(|_| invalid())?;
    req.book_id = book_id;
    let res = RentBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(ApiResponse::data(res.book).with_message(res.message)))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>) -> Result<Json<ApiResponse<BookDto>>, ServerError> {
    let req = ReturnBookCommandRequest::new(book_id(path)?);
    let res = ReturnBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(ApiResponse::data(res.book).with_message(res.message)))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>) -> Result<Json<ApiResponse<()>>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id(path)?);
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(ApiResponse::<()>::message(res.message)))
}

pub(crate) async fn get_stats(
    State(state): State<AppState>) -> Result<Json<ApiResponse<CatalogStatsDto>>, ServerError> {
    let res = GetStatsCommand::new(state.catalog).execute(GetStatsCommandRequest::default()).await?;
    Ok(Json(ApiResponse::data(res.stats)))
}
