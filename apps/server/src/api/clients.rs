use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use eparnova_core::clients::{Client, ProfileCompletion};

async fn list_clients(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Client>>> {
    let clients = state.client_service.list_clients().await?;
    Ok(Json(clients))
}

async fn list_profile_completions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ProfileCompletion>>> {
    let completions = state.client_service.list_profile_completions().await?;
    Ok(Json(completions))
}

async fn get_profile_completion(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProfileCompletion>> {
    let completion = state.client_service.get_profile_completion(&id).await?;
    Ok(Json(completion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", get(list_clients))
        .route("/clients/profiles", get(list_profile_completions))
        .route("/clients/{id}/profile", get(get_profile_completion))
}
