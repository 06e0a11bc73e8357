// HTTP response utilities for rendered charts and pages
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build a 200 response carrying `body` with the given content type.
pub fn document_response(
    body: String,
    content_type: &'static str,
) -> Result<Response<Body>, StatusCode> {
    let length = HeaderValue::from_str(&body.len().to_string()).map_err(|e| {
        tracing::error!("Invalid content length: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, length)
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub fn svg_response(svg: String) -> Result<Response<Body>, StatusCode> {
    document_response(svg, SVG_CONTENT_TYPE)
}

pub fn html_response(html: String) -> Result<Response<Body>, StatusCode> {
    document_response(html, HTML_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_response_headers() {
        let response = svg_response("<svg></svg>".to_string()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            SVG_CONTENT_TYPE
        );
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "11");
    }

    #[test]
    fn test_html_response_headers() {
        let response = html_response("<p>é</p>".to_string()).unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            HTML_CONTENT_TYPE
        );
        // Length is in bytes, not characters.
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "9");
    }
}
