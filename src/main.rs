mod config;
mod limiter;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let port = config.port;
    tracing::info!(
        root = %config.root.display(),
        static_dir = %config.static_dir.display(),
        solver = %config.solver.executable.display(),
        max_concurrent = config.solver.max_concurrent,
        timeout_secs = config.solver.run_timeout.as_secs(),
        "solver bridge configured"
    );

    let state = state::AppState::new(config);
    let slots = state.solver.slots().clone();
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mapview listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(slots))
        .await
        .expect("server failed");
}

/// Resolve on Ctrl-C, closing solver admission so queued requests get 503
/// while running solvers finish.
async fn shutdown_signal(slots: limiter::SolverSlots) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down; closing solver slots");
    slots.close();
}
