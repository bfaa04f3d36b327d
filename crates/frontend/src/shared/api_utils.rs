//! API utilities for frontend-backend communication

/// Base URL for backend requests, derived from the current window
/// location. The backend always listens on port 3000.
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full backend URL from a path, e.g. `api_url("/shap/list")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
