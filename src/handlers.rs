/*!
 * Request handlers
 *
 * One handler per endpoint. Each handler validates its input, performs a
 * single storage call through `Database` and wraps the outcome in the
 * uniform envelope. Extractor rejections (malformed JSON, non-numeric ids,
 * missing query parameters) are mapped to `AppError::Validation` so that
 * bad input always surfaces as a 400 failure envelope instead of the
 * framework's default response.
 */

use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::models::{
    Book, BookInsert, BookInsertMany, DataEnvelope, GreetingResponse, ResultEnvelope,
    StatusEnvelope,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

#[derive(Debug, Deserialize)]
pub struct BookIdQuery {
    pub id: i64,
}

pub async fn index() -> AppResult<Json<GreetingResponse>> {
    Ok(Json(GreetingResponse {
        status: true,
        msg: "Hello world".to_string(),
    }))
}

pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<DataEnvelope<Vec<Book>>>> {
    let books = state.db.list_books().await?;

    Ok(Json(DataEnvelope {
        status: true,
        data: books,
    }))
}

/// Single lookup by `?id=<int>`. An absent record is an empty list with
/// success status, not a 404.
pub async fn get_book(
    State(state): State<AppState>,
    query: Result<Query<BookIdQuery>, QueryRejection>,
) -> AppResult<Json<DataEnvelope<Vec<Book>>>> {
    let Query(query) = query.map_err(|err| AppError::Validation(err.body_text()))?;

    let data: Vec<Book> = state.db.get_book_by_id(query.id).await?.into_iter().collect();

    Ok(Json(DataEnvelope { status: true, data }))
}

pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookInsert>, JsonRejection>,
) -> AppResult<Json<ResultEnvelope<Book>>> {
    let Json(input) = payload.map_err(|err| AppError::Validation(err.body_text()))?;

    let book = state.db.create_book(&input).await?;
    info!("Created book {}", book.id);

    Ok(Json(ResultEnvelope {
        status: true,
        result: book,
    }))
}

pub async fn create_books(
    State(state): State<AppState>,
    payload: Result<Json<BookInsertMany>, JsonRejection>,
) -> AppResult<Json<ResultEnvelope<Vec<Book>>>> {
    let Json(input) = payload.map_err(|err| AppError::Validation(err.body_text()))?;

    let books = state.db.create_books(&input.data).await?;
    info!("Created {} books", books.len());

    Ok(Json(ResultEnvelope {
        status: true,
        result: books,
    }))
}

pub async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookInsert>, JsonRejection>,
) -> AppResult<Json<ResultEnvelope<Book>>> {
    let Path(book_id) = path.map_err(|err| AppError::Validation(err.body_text()))?;
    let Json(input) = payload.map_err(|err| AppError::Validation(err.body_text()))?;

    let book = state.db.update_book(book_id, &input).await?;
    info!("Updated book {}", book.id);

    Ok(Json(ResultEnvelope {
        status: true,
        result: book,
    }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<StatusEnvelope>> {
    let Path(book_id) = path.map_err(|err| AppError::Validation(err.body_text()))?;

    state.db.delete_book(book_id).await?;
    info!("Deleted book {}", book_id);

    Ok(Json(StatusEnvelope { status: true }))
}
