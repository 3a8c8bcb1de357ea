use crate::handlers::{
    create_book, create_books, delete_book, get_book, index, list_books, update_book, AppState,
};
use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        // Greeting / health check
        .route("/", get(index))

        // Buku collection
        .route("/bukus", get(list_books).post(create_books))

        // Single Buku
        .route("/buku", get(get_book).post(create_book))
        .route("/buku/{id}", put(update_book).delete(delete_book))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
