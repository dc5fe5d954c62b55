use spudstock_registry::InMemoryRegistry;
use spudstock_tasks::TaskIntervals;

#[tokio::main]
async fn main() {
    spudstock_observability::init();

    let registry = InMemoryRegistry::arc();
    spudstock_api::seed::load_sample_data(registry.clone()).expect("seed data failed validation");

    let scheduler = spudstock_tasks::start(registry.clone(), TaskIntervals::from_env());

    let app = spudstock_api::app::build_app(registry);

    let addr = std::env::var("SPUDSTOCK_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // HTTP is down; stop the background mutators before exiting.
    scheduler.shutdown();
    tracing::info!("background tasks stopped");
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
