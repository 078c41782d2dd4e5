//! HTTP response handlers.

use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::render::{RenderOptions, render_not_found};
use crate::utils::mime::types::{HTML, PLAIN};

/// Respond with a rendered page.
pub fn respond_page(request: Request, body: String) -> Result<()> {
    send_body(request, 200, HTML, body.into_bytes())
}

/// Respond with the embedded not-found page.
pub fn respond_not_found(request: Request, path: &str, opts: &RenderOptions) -> Result<()> {
    let body = render_not_found(Some(path), opts);
    send_body(request, 404, HTML, body.into_bytes())
}

/// Redirect to `location` (302).
pub fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let response = Response::empty(StatusCode(302)).with_header(make_header("Location", location)?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 405 for anything but GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_string("405 Method Not Allowed")
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with a content loading error (500).
pub fn respond_error(request: Request, error: &anyhow::Error) -> Result<()> {
    let error_str = format!("{error:#}");
    let msg = crate::utils::html::escape(&error_str);
    let body = format!("<html><body><h1>Content Error</h1><pre>{msg}</pre></body></html>");
    send_body(request, 500, HTML, body.into_bytes())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

pub fn is_readable_method(request: &Request) -> bool {
    matches!(request.method(), Method::Get | Method::Head)
}

/// Send `body` with `status`, or only the headers for HEAD.
fn send_body(request: Request, status: u16, content_type: &str, body: Vec<u8>) -> Result<()> {
    let content_type = make_header("Content-Type", content_type)?;

    if is_head_request(&request) {
        let response = Response::empty(StatusCode(status)).with_header(content_type);
        request.respond(response)?;
        return Ok(());
    }

    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(content_type);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header {key}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_header() {
        let header = make_header("Content-Type", HTML).unwrap();
        assert_eq!(header.value.as_str(), HTML);
        assert!(make_header("Location", "/docs/安裝/").is_err());
    }
}
