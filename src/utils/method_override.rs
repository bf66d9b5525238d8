use actix_web::{dev::ServiceRequest, http::Method};
use leptos::logging::log;

const OVERRIDE_KEY: &str = "_method";

/// HTML forms only submit GET and POST. A POST carrying `?_method=PUT`
/// (or PATCH / DELETE) is routed as that method instead.
pub fn apply(req: &mut ServiceRequest) {
    if req.method() != Method::POST {
        return;
    }
    let Some(method) = override_from_query(req.query_string()) else {
        return;
    };
    log!("[SERVER] Overriding POST {} as {}", req.path(), method);
    req.head_mut().method = method;
}

fn override_from_query(query: &str) -> Option<Method> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == OVERRIDE_KEY)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        })
}
