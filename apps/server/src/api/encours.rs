use std::sync::Arc;

use crate::{
    api::shared::{EncoursQuery, PolicyQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use eparnova_core::portfolio::encours::{
    ClientBreakdown, EncoursReport, MonthlyEncours, RepartitionItem,
};

async fn get_encours_report(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EncoursQuery>, QueryRejection>,
) -> ApiResult<Json<EncoursReport>> {
    let Query(q) = query?;
    let options = q.into_options(state.default_options)?;
    let report = state.encours_service.get_encours_report(options).await?;
    Ok(Json(report))
}

async fn get_repartition(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PolicyQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<RepartitionItem>>> {
    let Query(q) = query?;
    let policy = q.into_policy(state.default_options.fetch_policy)?;
    let repartition = state.encours_service.get_repartition(policy).await?;
    Ok(Json(repartition))
}

async fn get_client_breakdowns(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EncoursQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ClientBreakdown>>> {
    let Query(q) = query?;
    let options = q.into_options(state.default_options)?;
    let rows = state.encours_service.get_client_breakdowns(options).await?;
    Ok(Json(rows))
}

async fn get_monthly_encours(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PolicyQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MonthlyEncours>>> {
    let Query(q) = query?;
    let policy = q.into_policy(state.default_options.fetch_policy)?;
    let series = state.encours_service.get_monthly_encours(policy).await?;
    Ok(Json(series))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/encours", get(get_encours_report))
        .route("/encours/repartition", get(get_repartition))
        .route("/encours/clients", get(get_client_breakdowns))
        .route("/encours/monthly", get(get_monthly_encours))
}
