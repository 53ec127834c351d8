mod auth;
mod config;
mod db;
mod error;
mod products;
mod validation;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, TokenService, UserRepository};
use config::{AppConfig, Environment};
use products::{ProductRepository, ProductService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::logout_handler,
        auth::handlers::refresh_handler,
        products::handlers::list_products_handler,
        products::handlers::get_product_handler,
        products::handlers::create_product_handler,
        products::handlers::update_product_handler,
        products::handlers::delete_product_handler,
    ),
    components(
        schemas(
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::AuthResponse,
            auth::PublicUser,
            products::Product,
            products::ProductRequest,
            products::TagsInput,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "products", description = "Product catalog endpoints")
    ),
    info(
        title = "Product API",
        version = "1.0.0",
        description = "RESTful API for managing products with token authentication"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    auth: Arc<AuthService>,
    products: Arc<ProductService>,
    env: Environment,
}

/// JSON 404 for unknown routes, rendered in the shared error envelope
async fn fallback_handler(uri: Uri) -> Response {
    error::error_response(StatusCode::NOT_FOUND, format!("Not Found - {}", uri), None)
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(db: PgPool, config: &AppConfig) -> Router {
    let users = UserRepository::new(db.clone());
    let tokens = TokenService::new(&config.jwt_secret);

    let state = AppState {
        auth: Arc::new(AuthService::new(users, tokens)),
        products: Arc::new(ProductService::new(ProductRepository::new(db))),
        env: config.env,
    };

    // Browser clients send the refresh cookie cross-origin, so CORS is
    // pinned to one configured origin with credentials enabled
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN must be a valid origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Auth routes
        .route("/api/auth/register", post(auth::handlers::register_handler))
        .route("/api/auth/login", post(auth::handlers::login_handler))
        .route("/api/auth/logout", post(auth::handlers::logout_handler))
        .route("/api/auth/refresh", post(auth::handlers::refresh_handler))
        // Product routes
        .route("/api/products", get(products::handlers::list_products_handler))
        .route("/api/products", post(products::handlers::create_product_handler))
        .route("/api/products/:id", get(products::handlers::get_product_handler))
        .route("/api/products/:id", put(products::handlers::update_product_handler))
        .route("/api/products/:id", delete(products::handlers::delete_product_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Product API - Starting...");

    let config = AppConfig::from_env();
    config::init_environment(config.env);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let app = create_router(db_pool, &config);

    // Start the Axum server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Product API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
