use std::mem;

use http::HeaderMap;
use http::Method;
use http::Uri;

/// Signing context for request.
///
/// `build` moves the pieces a signer needs out of `http::request::Parts`,
/// `apply` moves them back. The URI is carried whole: header-based signing
/// reads the path and query but never rewrites them, so the request keeps
/// its original form byte for byte.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP uri, untouched.
    pub uri: Uri,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Self {
        let uri = mem::take(&mut parts.uri);
        let query = uri
            .query()
            .map(|v| {
                form_urlencoded::parse(v.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        SigningRequest {
            method: parts.method.clone(),
            uri,
            query,

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        }
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = self.uri;
    }

    /// The request path, as it appears on the wire.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }
}
