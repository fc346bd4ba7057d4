use actix_cors::Cors;

/// The React front end is served from its own dev server, so any origin may
/// call the API.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
