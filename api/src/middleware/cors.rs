//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use cf_shared::CorsConfig;

/// Builds the CORS policy from configuration.
///
/// A `"*"` entry allows any origin; otherwise only the listed origins are
/// accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring permissive CORS (any origin)");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
        if config.allow_credentials {
            cors = cors.supports_credentials();
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(CorsConfig::development(), "http://localhost:3000").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_restricted_origin_list() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.clarityfin.com".to_string()],
            allow_credentials: true,
            max_age: 600,
        };

        assert_eq!(
            preflight(config.clone(), "https://app.clarityfin.com").await,
            StatusCode::OK
        );
        assert_ne!(
            preflight(config, "https://evil.example.com").await,
            StatusCode::OK
        );
    }
}
