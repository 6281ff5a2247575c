use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Accept every origin, method, and header with credentials allowed.
///
/// Browsers reject `*` once credentials are enabled, so all three are
/// mirrored back from the request instead.
pub fn permissive_with_credentials() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
