use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS for the browser consoles. An origin is allowed when it equals one of
/// `origins` (a trailing `/` on either side is ignored); a `*` entry allows
/// every origin.
pub fn build_cors_layer(origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }

            origin
                .to_str()
                .map(|origin| origin_allowed(origin, &origins))
                .unwrap_or(false)
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

fn origin_allowed(origin: &str, origins: &[String]) -> bool {
    let origin = origin.trim_end_matches('/');
    origins
        .iter()
        .any(|allowed| allowed.trim_end_matches('/') == origin)
}

#[cfg(test)]
mod tests {
    use super::origin_allowed;

    fn dev_origins() -> Vec<String> {
        vec!["http://localhost:5173".to_string()]
    }

    #[test]
    fn configured_origin_is_allowed() {
        assert!(origin_allowed("http://localhost:5173", &dev_origins()));
        assert!(origin_allowed("http://localhost:5173/", &dev_origins()));
    }

    #[test]
    fn lookalike_hosts_and_ports_are_refused() {
        assert!(!origin_allowed("http://localhost:5173.evil.example", &dev_origins()));
        assert!(!origin_allowed("http://localhost:51730", &dev_origins()));
        assert!(!origin_allowed("https://localhost:5173", &dev_origins()));
        assert!(!origin_allowed("http://localhost", &dev_origins()));
    }
}
