//! Backend entry-point: wires both HTTP pipelines and OpenAPI docs.

use std::env;

use actix_web::{App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use complaint_routing::doc::ApiDoc;
use complaint_routing::inbound::http;
use complaint_routing::server::{seed_dev_data, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let (state, stores) = complaint_routing::server::default_state(config.cookie_secure);

    let allow_seed = cfg!(debug_assertions)
        || env::var("SEED_DEV_DATA").ok().as_deref() == Some("1");
    if allow_seed {
        seed_dev_data(&stores)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    HttpServer::new(move || {
        let state = state.clone();
        let app = App::new().configure(move |cfg| http::configure(cfg, state));

        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
