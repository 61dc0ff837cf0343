//! Conversion from `axum` responses.

use axum::response::Response;

use crate::http::body::ResponseBody;
use crate::http::response::ResponseValue;

/// Convert a computed `axum` response into a [`ResponseValue`].
///
/// The body is wrapped lazily; nothing is buffered here. The status text is
/// the canonical reason phrase, or empty for nonstandard codes (`http`
/// responses do not carry one). A body is always attached, since an `axum`
/// body always exists; an empty one simply yields zero chunks.
pub fn from_axum_response(response: Response) -> ResponseValue {
    let (parts, body) = response.into_parts();
    let status_text = parts.status.canonical_reason().unwrap_or("");

    let mut value = ResponseValue::new(parts.status.as_u16(), status_text);
    for (name, header_value) in parts.headers.iter() {
        value = value.header(
            name.as_str(),
            String::from_utf8_lossy(header_value.as_bytes()),
        );
    }
    value.with_body(ResponseBody::from_stream(body.into_data_stream()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_status_and_headers_carry_over() {
        let response = Response::builder()
            .status(201)
            .header("content-type", "application/json")
            .header("set-cookie", "a=1")
            .header("set-cookie", "b=2")
            .body(Body::empty())
            .unwrap();

        let value = from_axum_response(response);

        assert_eq!(value.status(), 201);
        assert_eq!(value.status_text(), "Created");
        assert_eq!(value.headers().get_all("set-cookie"), vec!["a=1", "b=2"]);
        assert!(value.has_body());
    }
}
