use actix_cors::Cors;
use actix_web::dev::RequestHead;
use actix_web::http::header::{self, HeaderValue};

/// Any origin in development. In production the frontend is served by this
/// process, so only the request's own host is accepted.
pub fn cors_policy(production: bool) -> Cors {
    if !production {
        return Cors::permissive();
    }

    Cors::default()
        .allowed_origin_fn(same_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

fn same_origin(origin: &HeaderValue, head: &RequestHead) -> bool {
    let origin_host = origin
        .to_str()
        .ok()
        .and_then(|o| o.split_once("://"))
        .map(|(_, host)| host.trim_end_matches('/'));
    let host = head
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok());

    matches!((origin_host, host), (Some(o), Some(h)) if o.eq_ignore_ascii_case(h))
}
