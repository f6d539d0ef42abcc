use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: any origin)
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type, authorization
/// - Credentials: Enabled
///
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) if !allowed_origins.trim().is_empty() => {
            let origins: Vec<&str> = allowed_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .collect();
            cors.allow_origins(origins)
        }
        _ => cors,
    }
}
