use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod password;
pub mod repo;
pub mod validate;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
