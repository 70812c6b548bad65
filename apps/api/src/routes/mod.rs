pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/crearExamen", get(handlers::handle_create_exam))
        // Grading consumes a JSON body and is wired to POST
        .route("/entregarNivelDeIngles", post(handlers::handle_submit_level))
        .with_state(state)
}
