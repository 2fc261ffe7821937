//! CVHub API Server
//!
//! Backend for the CVHub career site: candidate registration, pricing plans
//! and the marketing content shown on the public homepage.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::{
    Argon2PasswordHasher, DohDomainResolver, JwtTokenIssuer, PostgresArticleRepository,
    PostgresPricingPlanRepository, PostgresReviewRepository, PostgresTeamRepository,
    PostgresUserRepository, StaticDisposableEmailList,
};
use app::{ContentService, PricingPlanService, RegistrationService};
use config::Config;
use domain::entities::{Article, Review, TeamMember};
use domain::ports::{
    ContentRepository, DisposableEmailList, DomainResolver, PasswordHasher,
    PricingPlanRepository, TokenIssuer, UserRepository,
};
use handlers::content::ContentResource;

pub type DynPricingService = PricingPlanService<dyn PricingPlanRepository>;
pub type DynRegistrationService = RegistrationService<
    dyn UserRepository,
    dyn DomainResolver,
    dyn DisposableEmailList,
    dyn PasswordHasher,
    dyn TokenIssuer,
>;
pub type DynContentService<C> = ContentService<C, dyn ContentRepository<C>>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<DynPricingService>,
    pub registration_service: Arc<DynRegistrationService>,
    pub article_service: Arc<DynContentService<Article>>,
    pub review_service: Arc<DynContentService<Review>>,
    pub team_service: Arc<DynContentService<TeamMember>>,
    /// Used by the admin guard
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub cookie_secure: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Wire the Postgres and HTTP adapters into the services
fn build_state(db: DatabaseConnection, config: &Config) -> anyhow::Result<AppState> {
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));
    let plans: Arc<dyn PricingPlanRepository> =
        Arc::new(PostgresPricingPlanRepository::new(db.clone()));
    let articles: Arc<dyn ContentRepository<Article>> =
        Arc::new(PostgresArticleRepository::new(db.clone()));
    let reviews: Arc<dyn ContentRepository<Review>> =
        Arc::new(PostgresReviewRepository::new(db.clone()));
    let team: Arc<dyn ContentRepository<TeamMember>> =
        Arc::new(PostgresTeamRepository::new(db));

    let disposable_list = match &config.disposable_domains_file {
        Some(path) => StaticDisposableEmailList::with_file(path)
            .with_context(|| format!("Failed to read disposable domains from {}", path))?,
        None => StaticDisposableEmailList::builtin(),
    };
    tracing::info!(domains = disposable_list.len(), "Disposable domain list loaded");

    let resolver: Arc<dyn DomainResolver> = Arc::new(DohDomainResolver::new(
        config.dns_resolver_url.clone(),
        config.dns_timeout_ms,
    ));
    let disposable: Arc<dyn DisposableEmailList> = Arc::new(disposable_list);
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(
        &config.jwt_secret,
        config.access_token_ttl_secs,
        config.refresh_token_ttl_secs,
    ));

    Ok(AppState {
        pricing_service: Arc::new(PricingPlanService::new(plans)),
        registration_service: Arc::new(RegistrationService::new(
            users.clone(),
            resolver,
            disposable,
            hasher,
            tokens.clone(),
        )),
        article_service: Arc::new(ContentService::new(articles)),
        review_service: Arc::new(ContentService::new(reviews)),
        team_service: Arc::new(ContentService::new(team)),
        users,
        tokens,
        cookie_secure: config.cookie_secure,
    })
}

/// Admin CRUD routes for one content kind
fn content_routes<C: ContentResource>() -> Router<AppState> {
    Router::new()
        .route(
            C::COLLECTION_PATH,
            get(handlers::list_content::<C>).post(handlers::create_content::<C>),
        )
        .route(
            &format!("{}/:id", C::COLLECTION_PATH),
            get(handlers::get_content::<C>)
                .put(handlers::update_content::<C>)
                .delete(handlers::delete_content::<C>),
        )
}

/// Build the full router
pub fn app_router(state: AppState, cors_allow_origin: Option<&str>) -> anyhow::Result<Router> {
    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Rate-limited routes (registration)
    let rate_limited_routes = Router::new()
        .route("/users", post(handlers::register_user))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Admin routes
    let admin_routes = Router::new()
        .route(
            "/admin/marketing/pricing",
            get(handlers::list_plans).post(handlers::create_plan),
        )
        .route(
            "/admin/marketing/pricing/:id",
            get(handlers::get_plan)
                .put(handlers::update_plan)
                .delete(handlers::delete_plan),
        )
        .merge(content_routes::<Article>())
        .merge(content_routes::<Review>())
        .merge(content_routes::<TeamMember>())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    let allow_origin = match cors_allow_origin {
        Some(origin) => AllowOrigin::exact(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?,
        ),
        None => AllowOrigin::from(Any),
    };

    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public homepage content
        .route("/marketing/home", get(handlers::homepage))
        .merge(rate_limited_routes)
        .merge(admin_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cvhub_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CVHub API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let state = build_state(db, &config)?;
    let app = app_router(state, config.cors_allow_origin.as_deref())?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
