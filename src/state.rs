//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the immutable config and the solver bridge. Requests share no
//! mutable state beyond the bridge's slot semaphore.

use std::sync::Arc;

use crate::config::Config;
use crate::services::solver::SolverBridge;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub solver: Arc<SolverBridge>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let solver = SolverBridge::new(config.solver.clone());
        Self { config: Arc::new(config), solver: Arc::new(solver) }
    }
}
