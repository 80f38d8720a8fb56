pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;


use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

use domain::{comment, health, reaction, wall};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::health_check,
        wall::handler::list_walls,
        wall::handler::create_wall,
        wall::handler::get_wall,
        wall::handler::update_wall,
        wall::handler::delete_wall,
        comment::handler::create_comment,
        comment::handler::get_comment,
        comment::handler::update_comment,
        comment::handler::delete_comment,
        reaction::handler::toggle_like,
        reaction::handler::toggle_dislike,
    ),
    components(
        schemas(
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            wall::dto::CreateWallRequest,
            wall::dto::UpdateWallRequest,
            wall::dto::WallResponse,
            wall::dto::SuccessWallResponse,
            wall::dto::SuccessWallListResponse,
            comment::dto::CreateCommentRequest,
            comment::dto::UpdateCommentRequest,
            comment::dto::CommentResponse,
            comment::dto::SuccessCommentResponse,
            utils::response::ErrorMessage,
            utils::response::ErrorResponse,
            utils::response::SuccessMessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Wall", description = "벽 API"),
        (name = "Comment", description = "댓글 API"),
        (name = "Reaction", description = "좋아요/싫어요 토글 API")
    )
)]
pub struct ApiDoc;

/// `bearer_auth` 보안 스키마 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.site_url);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route(
            "/walls/list/",
            get(wall::handler::list_walls).post(wall::handler::create_wall),
        )
        .route(
            "/walls/details/:id/",
            get(wall::handler::get_wall)
                .put(wall::handler::update_wall)
                .delete(wall::handler::delete_wall),
        )
        .route(
            "/comment/list/",
            post(comment::handler::create_comment),
        )
        .route(
            "/comment/details/:id/",
            get(comment::handler::get_comment)
                .put(comment::handler::update_comment)
                .delete(comment::handler::delete_comment),
        )
        .route("/likes/:wall_id/", get(reaction::handler::toggle_like))
        .route("/dislikes/:wall_id/", get(reaction::handler::toggle_dislike))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(
            global::middleware::request_id_middleware,
        ))
        .layer(cors)
        .with_state(state)
}

/// 프론트엔드 origin만 허용 (쿠키 인증을 위해 credentials 허용)
fn cors_layer(site_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(site_url.trim_end_matches('/')) {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!(site_url = %site_url, "invalid SITE_URL, CORS origin not set");
            cors
        }
    }
}
