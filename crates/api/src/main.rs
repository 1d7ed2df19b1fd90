use roster_api::context::Locale;

#[tokio::main]
async fn main() {
    roster_observability::init();

    let default_locale = match std::env::var("ROSTER_LOCALE") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("ROSTER_LOCALE={raw} is not a supported locale; using en");
            Locale::En
        }),
        Err(_) => Locale::En,
    };

    let app = roster_api::app::build_app(default_locale);

    let addr = std::env::var("ROSTER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
