mod routes;
mod services;
mod state;

use services::corpus::CorpusRegistry;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let state = state::AppState::new(CorpusRegistry::builtin());
    tracing::info!(datasets = ?state.corpus.list(), "corpus loaded");

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "textlab listening");
    axum::serve(listener, app).await.expect("server failed");
}
