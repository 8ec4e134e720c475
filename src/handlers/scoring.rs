//! Weekly scoring endpoints.

use crate::error::ApiError;
use crate::schemas::Performance;
use crate::service::params::PerformanceListParams;
use crate::service::query;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// Get the weekly performances that match the parameters you send.
///
/// A performance is one player's fantasy-point total for one week. Use
/// `skip` and `limit` to paginate. Don't use the performance ID for counting
/// or logic; it is internal and not guaranteed to be sequential.
#[utoipa::path(
    get,
    path = "/v0/performances/",
    operation_id = "v0_get_performances",
    tag = "scoring",
    params(PerformanceListParams),
    responses(
        (status = 200, description = "Weekly performances, possibly by many players", body = [Performance])
    )
)]
pub async fn list_performances(
    State(state): State<AppState>,
    Query(params): Query<PerformanceListParams>,
) -> Result<Json<Vec<Performance>>, ApiError> {
    let performances = query::get_performances(&state.pool, &params).await?;
    Ok(Json(performances))
}
