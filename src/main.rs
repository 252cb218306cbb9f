//! Storefront Backend Server
//!
//! REST API server for the demo ecommerce catalog.

use std::sync::Arc;
use storefront_backend::api::create_router;
use storefront_backend::config::Config;
use storefront_backend::db::initialize_store;
use storefront_backend::state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use storefront_backend::models::{
    CategoriesListResponse, HealthResponse, ProductResponse, ProductsListResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        storefront_backend::api::handlers::health_check,
        storefront_backend::api::handlers::list_products,
        storefront_backend::api::handlers::get_product,
        storefront_backend::api::handlers::list_categories,
        storefront_backend::api::handlers::list_category_products,
    ),
    components(
        schemas(
            HealthResponse,
            ProductResponse,
            ProductsListResponse,
            CategoriesListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Product catalog"),
        (name = "Categories", description = "Category listing and filtering"),
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Read-only REST API for the demo ecommerce catalog",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Bring the store up before serving. Worst case is bounded by the retry
    // policy; a store that never comes up degrades the service, it does not
    // abort startup.
    let store = initialize_store(&config.database, &config.bootstrap.retry_policy()).await;
    info!(
        "Store initialization finished: {}",
        store.outcome().as_str()
    );

    let state = Arc::new(AppState::new(store));

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Starting Storefront Backend on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
