//! Hand-assembled multipart/form-data body for the image upload.
//!
//! The upload endpoint takes exactly one part named `image` with filename
//! `image.jpg`. The body is assembled by a pure function rather than through
//! `reqwest::multipart` so the framing stays byte-for-byte under test.

use uuid::Uuid;

/// Generates a fresh per-request boundary string.
pub fn random_boundary() -> String {
    Uuid::new_v4().to_string()
}

/// The `Content-Type` header value matching [`encode_jpeg_part`].
pub fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Frames the given JPEG bytes as the single `image` part.
///
/// Layout (CRLF line endings throughout):
///
/// ```text
/// --{boundary}
/// Content-Disposition: form-data; name="image"; filename="image.jpg"
/// Content-Type: image/jpeg
///
/// {jpeg bytes}
/// --{boundary}--
/// ```
pub fn encode_jpeg_part(boundary: &str, jpeg: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(jpeg.len() + boundary.len() * 2 + 128);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"image\"; filename=\"image.jpg\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(jpeg);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
