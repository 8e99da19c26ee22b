use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, instrument, warn};

use crate::state::AppState;
use crate::users::password::hash_password;
use crate::users::repo::{PublicUser, User};
use crate::users::validate::parse_new_user;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<Value>)> {
    let new = match parse_new_user(&body) {
        Ok(n) => n,
        Err(field_errors) => {
            warn!(?field_errors, "user payload failed validation");
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": { "fieldErrors": field_errors } })),
            ));
        }
    };

    let hash = match hash_password(&new.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err(internal(&e));
        }
    };

    let user = match User::create(&state.db, &new, &hash).await {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(internal(&e));
        }
    };

    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let id = coerce_id(&id);
    match PublicUser::find_by_id(&state.db, id).await {
        Ok(Some(user)) => Ok(Json(user).into_response()),
        Ok(None) => {
            warn!(id, "user not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => {
            error!(error = %e, id, "find_by_id failed");
            Err(internal(&e))
        }
    }
}

// Non-numeric ids coerce to a sentinel that matches no row, so garbage
// input falls through to 404 instead of a routing-level 400.
fn coerce_id(raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or(-1)
}

fn internal(e: &anyhow::Error) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}
