//! Endpoint URL construction for the chat server.

/// Join a server base URL and an endpoint path without doubled slashes.
///
/// A base URL without a scheme is assumed to be plain HTTP.
///
/// # Examples
///
/// ```
/// use podium::utils::url::endpoint_url;
///
/// assert_eq!(endpoint_url("http://127.0.0.1:5000/", "/chat"), "http://127.0.0.1:5000/chat");
/// assert_eq!(endpoint_url("localhost:5000", "chat"), "http://localhost:5000/chat");
/// ```
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let endpoint = endpoint.trim().trim_start_matches('/');
    let base = if base.contains("://") {
        base.to_string()
    } else {
        format!("http://{base}")
    };

    if endpoint.is_empty() {
        base
    } else {
        format!("{base}/{endpoint}")
    }
}
