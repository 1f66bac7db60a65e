//! `GET /path`: run the solver for a start/end pair.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use protocol::{Algorithm, PathQuery};

use crate::limiter::SlotError;
use crate::services::solver::SolverError;
use crate::state::AppState;

/// Responds 200 with the solver's stdout, 400 for bad coordinates, and a
/// 5xx plain-text description for solver failures.
pub async fn find_path(State(state): State<AppState>, Query(query): Query<PathQuery>) -> Response {
    let request = match query.to_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "rejected path query");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    if let Some(raw) = query.algorithm.as_deref()
        && !Algorithm::is_known(raw)
    {
        tracing::warn!(algorithm = raw, "unknown algorithm; using dijkstra");
    }

    match state.solver.run(&request).await {
        Ok(stdout) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], stdout).into_response(),
        Err(e) => {
            tracing::error!(error = %e, start = %request.start, end = %request.end, "path request failed");
            (solver_error_to_status(&e), e.to_string()).into_response()
        }
    }
}

pub(crate) fn solver_error_to_status(err: &SolverError) -> StatusCode {
    match err {
        SolverError::Busy(SlotError::QueueTimeout { .. } | SlotError::Closed) => StatusCode::SERVICE_UNAVAILABLE,
        SolverError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        SolverError::Launch(_)
        | SolverError::Io(_)
        | SolverError::Exit { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
