//! Aliyun API Gateway request signing builder

use std::collections::BTreeMap;
use std::fmt::Write;

use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderValue;
use log::debug;
use uuid::Uuid;

use super::constants::*;
use super::credential::Credential;
use gwsign_core::hash;
use gwsign_core::time::{format_timestamp_millis, now, DateTime};
use gwsign_core::{Context, Error, Result, SignRequest, SigningRequest};

/// RequestSigner that implements Aliyun API Gateway app authentication.
///
/// The gateway authenticates callers by an app key pair: the request
/// carries the app key in plain text while an HMAC-SHA256 digest over a
/// canonical description of the request proves possession of the secret.
///
/// - [Request Signature](https://help.aliyun.com/document_detail/29475.html)
#[derive(Debug)]
pub struct RequestSigner {
    sign_headers: Vec<String>,
    debug_mode: bool,
    stage: Option<String>,
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a builder with the default signed header selection.
    pub fn new() -> Self {
        Self {
            sign_headers: vec![X_CA_TIMESTAMP.to_string()],
            debug_mode: false,
            stage: None,
            time: None,
            nonce: None,
        }
    }

    /// Replace the list of header name prefixes that opt additional
    /// headers into the signature.
    ///
    /// Reserved names (`X-Ca-Signature`, `X-Ca-Signature-Headers`,
    /// `Accept`, `Content-MD5`, `Content-Type`, `Date`) are removed from
    /// the list. `X-Ca-` headers are always signed regardless of this
    /// list.
    pub fn with_sign_headers(mut self, sign_headers: Vec<String>) -> Self {
        self.sign_headers = sanitize_sign_headers(sign_headers);
        self
    }

    /// Send requests in debug mode.
    ///
    /// The gateway echoes its view of the signed request back, which helps
    /// to track down signature mismatches.
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    /// Route requests to a named gateway stage such as `TEST` or `PRE`.
    ///
    /// Requests go to the release stage when no stage is set.
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the request nonce.
    ///
    /// # Note
    ///
    /// Every request must carry a fresh nonce.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: Option<&Bytes>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);

        let mut req = SigningRequest::build(parts);

        // Signing runs on a case preserving view of the headers: HeaderMap
        // stores names lowercased while the gateway matches the X-Ca-
        // prefix case sensitively. Names the SDK manages are restored to
        // their canonical casing; every other name keeps the form HeaderMap
        // stored.
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in req.headers.iter() {
            let name = canonical_header_name(name.as_str());
            // Signatures are outputs of this operation, recomputed on
            // every call. A stale one never takes part in a fresh one.
            if name == X_CA_SIGNATURE || name == X_CA_SIGNATURE_HEADERS {
                continue;
            }
            headers.insert(name.to_string(), value.to_str()?.to_string());
        }

        if self.debug_mode {
            headers
                .entry(X_CA_REQUEST_MODE.to_string())
                .or_insert_with(|| REQUEST_MODE_DEBUG.to_string());
        }
        headers
            .entry(X_CA_KEY.to_string())
            .or_insert_with(|| cred.app_key.clone());
        headers
            .entry(ACCEPT.to_string())
            .or_insert_with(|| CONTENT_TYPE_JSON.to_string());
        headers
            .entry(X_CA_TIMESTAMP.to_string())
            .or_insert_with(|| format_timestamp_millis(now));
        headers.entry(X_CA_NONCE.to_string()).or_insert_with(|| {
            self.nonce
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string())
        });
        if let Some(stage) = &self.stage {
            headers
                .entry(X_CA_STAGE.to_string())
                .or_insert_with(|| stage.clone());
        }

        let mut body_params: BTreeMap<String, String> = BTreeMap::new();
        if let Some(bs) = body {
            let declared = headers.get(CONTENT_TYPE).map(String::as_str);
            if declared == Some(CONTENT_TYPE_FORM) {
                // Form bodies take part in the signature through their
                // parsed pairs, not through a content hash.
                for (k, v) in form_urlencoded::parse(bs) {
                    body_params.insert(k.into_owned(), v.into_owned());
                }
                headers.insert(CONTENT_TYPE.to_string(), CONTENT_TYPE_FORM.to_string());
            } else {
                headers.insert(CONTENT_MD5.to_string(), hash::base64_md5(bs)?);
                headers.insert(CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string());
            }
        }

        let mut query: BTreeMap<String, String> = BTreeMap::new();
        for (k, v) in &req.query {
            query.insert(k.clone(), v.clone());
        }

        let to_sign = string_to_sign(
            &req.method,
            req.path(),
            &headers,
            &query,
            &body_params,
            &self.sign_headers,
        )?;
        let signature =
            hash::base64_hmac_sha256(cred.app_secret.as_bytes(), to_sign.value.as_bytes());

        // Merge the signing view back without overwriting anything the
        // caller already set. The signature headers are ours alone and
        // always replace what was there.
        for (name, value) in &headers {
            if req.headers.contains_key(name) {
                continue;
            }
            req.headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        req.headers.insert(
            HeaderName::from_bytes(X_CA_SIGNATURE_HEADERS.as_bytes())?,
            to_sign.signed_headers.join(",").parse()?,
        );
        req.headers
            .insert(HeaderName::from_bytes(X_CA_SIGNATURE.as_bytes())?, {
                let mut value: HeaderValue = signature.parse()?;
                value.set_sensitive(true);

                value
            });

        req.apply(parts);

        Ok(())
    }
}

/// Canonical description of a request plus the header names it covers.
#[derive(Debug)]
pub struct StringToSign {
    /// The canonical text the signature is computed over.
    pub value: String,
    /// Names of the headers folded into `value`, in canonical order.
    /// Transmitted as `X-Ca-Signature-Headers` so the gateway can replay
    /// the computation.
    pub signed_headers: Vec<String>,
}

/// Construct the string to sign.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// Accept + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// SignedHeaders +
/// Resource
/// ```
///
/// A header joins the signed block when its name starts with the literal
/// `X-Ca-` or any prefix in `sign_headers`. Both checks are case
/// sensitive, exactly as the gateway verifies them. The resource block
/// merges query and body parameters into one sorted list, body values
/// winning over query values of the same name.
///
/// This function is pure. Identical inputs produce identical output.
///
/// ## Reference
///
/// - [Request Signature](https://help.aliyun.com/document_detail/29475.html)
pub fn string_to_sign(
    method: &http::Method,
    path: &str,
    headers: &BTreeMap<String, String>,
    query: &BTreeMap<String, String>,
    body_params: &BTreeMap<String, String>,
    sign_headers: &[String],
) -> Result<StringToSign> {
    let mut s = String::new();
    s.write_str(&method.as_str().to_uppercase())?;
    s.write_str("\n")?;
    s.write_str(headers.get(ACCEPT).map(String::as_str).unwrap_or_default())?;
    s.write_str("\n")?;
    s.write_str(
        headers
            .get(CONTENT_MD5)
            .map(String::as_str)
            .unwrap_or_default(),
    )?;
    s.write_str("\n")?;
    s.write_str(
        headers
            .get(CONTENT_TYPE)
            .map(String::as_str)
            .unwrap_or_default(),
    )?;
    s.write_str("\n")?;
    s.write_str(headers.get(DATE).map(String::as_str).unwrap_or_default())?;
    s.write_str("\n")?;

    let mut signed_headers = Vec::new();
    for (name, value) in headers {
        if !is_sign_header(name, sign_headers) {
            continue;
        }
        writeln!(&mut s, "{name}:{value}")?;
        signed_headers.push(name.clone());
    }

    write!(&mut s, "{}", canonicalize_resource(path, query, body_params))?;

    debug!("string to sign: {}", &s);

    Ok(StringToSign {
        value: s,
        signed_headers,
    })
}

fn is_sign_header(name: &str, sign_headers: &[String]) -> bool {
    if name.is_empty() {
        return false;
    }

    name.starts_with(GATEWAY_HEADER_PREFIX)
        || sign_headers
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
}

fn canonicalize_resource(
    path: &str,
    query: &BTreeMap<String, String>,
    body_params: &BTreeMap<String, String>,
) -> String {
    let mut params = query.clone();
    for (k, v) in body_params {
        params.insert(k.clone(), v.clone());
    }

    let params_str = params
        .iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| {
            if v.is_empty() {
                k.clone()
            } else {
                format!("{k}={v}")
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    if params_str.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{params_str}")
    }
}

/// Restore the canonical casing of a name the SDK manages.
///
/// `http::HeaderMap` stores names lowercased. The gateway documents its
/// headers in mixed case and matches them case sensitively, so managed
/// names go back to their documented form before signing. Unmanaged names
/// are kept as stored.
fn canonical_header_name(name: &str) -> &str {
    match name {
        "accept" => ACCEPT,
        "content-md5" => CONTENT_MD5,
        "content-type" => CONTENT_TYPE,
        "date" => DATE,
        "x-ca-key" => X_CA_KEY,
        "x-ca-nonce" => X_CA_NONCE,
        "x-ca-request-mode" => X_CA_REQUEST_MODE,
        "x-ca-signature" => X_CA_SIGNATURE,
        "x-ca-signature-headers" => X_CA_SIGNATURE_HEADERS,
        "x-ca-stage" => X_CA_STAGE,
        "x-ca-timestamp" => X_CA_TIMESTAMP,
        _ => name,
    }
}

fn sanitize_sign_headers(mut sign_headers: Vec<String>) -> Vec<String> {
    sign_headers.retain(|name| !RESERVED_SIGN_HEADERS.contains(&name.as_str()));
    sign_headers.sort_unstable();
    sign_headers
}

// Names that never act as a sign header prefix: the signature pair is an
// output of signing, the other four already have fixed lines in the
// string to sign.
const RESERVED_SIGN_HEADERS: &[&str] = &[
    X_CA_SIGNATURE,
    X_CA_SIGNATURE_HEADERS,
    ACCEPT,
    CONTENT_MD5,
    CONTENT_TYPE,
    DATE,
];

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;
    use http::{Method, Uri};
    use pretty_assertions::assert_eq;

    use super::super::provide_credential::StaticCredentialProvider;
    use super::*;
    use gwsign_core::{ErrorKind, Signer};

    const APP_KEY: &str = "24900000";
    const APP_SECRET: &str = "f0c9488dc4ed8ed0f34e7e3d62e40672";
    const NONCE: &str = "3e482a9e-2a38-4e2f-9a46-a7e849b26d1a";

    fn test_time() -> DateTime {
        chrono::DateTime::parse_from_rfc2822("Mon, 15 Aug 2022 16:50:12 GMT")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn test_builder() -> RequestSigner {
        RequestSigner::new().with_time(test_time()).with_nonce(NONCE)
    }

    fn test_signer(builder: RequestSigner) -> Signer<Credential> {
        let loader = StaticCredentialProvider::new(APP_KEY, APP_SECRET);
        Signer::new(Context::new(), loader, builder)
    }

    #[tokio::test]
    async fn test_sign_get() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;

        let headers = parts.headers;
        assert_eq!(headers.get(X_CA_KEY).unwrap().to_str()?, APP_KEY);
        assert_eq!(headers.get(ACCEPT).unwrap().to_str()?, CONTENT_TYPE_JSON);
        assert_eq!(
            headers.get(X_CA_TIMESTAMP).unwrap().to_str()?,
            "1660582212000"
        );
        assert_eq!(headers.get(X_CA_NONCE).unwrap().to_str()?, NONCE);
        assert_eq!(
            headers.get(X_CA_SIGNATURE_HEADERS).unwrap().to_str()?,
            "X-Ca-Key,X-Ca-Nonce,X-Ca-Timestamp"
        );
        // calculated from the Aliyun signature demo
        // https://help.aliyun.com/document_detail/29475.html
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "w1FUy364/ygXcGSdxrXUghz/AXWTvPiNkRnQuwhbmKM="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_form_body() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::post(Uri::from_str("https://gateway.example.com/latest/0")?)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .body(())?;
        let body = Bytes::from_static(b"a=1&b=2");

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, Some(&body)).await?;

        let headers = parts.headers;
        // Form bodies are signed through their parsed pairs, never hashed.
        assert!(headers.get(CONTENT_MD5).is_none());
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str()?,
            CONTENT_TYPE_FORM
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "9Vq8hWN0xQR5EGbvcVxNNVO2UBkTpgi2Ji+iplr+GBo="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_json_body() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::post(Uri::from_str("https://gateway.example.com/latest/0")?)
            .body(())?;
        let body = Bytes::from_static(b"{\"a\":\"1\"}");

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, Some(&body)).await?;

        let headers = parts.headers;
        assert_eq!(
            headers.get(CONTENT_MD5).unwrap().to_str()?,
            "fVFDBtsHFylHGQhgIUJW4w=="
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str()?,
            CONTENT_TYPE_JSON
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "Gclrm8U4l72wB4KE2NIV41C4q+AllBF6hCs73Iij1fg="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_empty_body_fails() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::post(Uri::from_str("https://gateway.example.com/latest/0")?)
            .body(())?;
        let body = Bytes::new();

        let (mut parts, _) = req.into_parts();
        let err = signer.sign(&mut parts, Some(&body)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        Ok(())
    }

    #[tokio::test]
    async fn test_form_params_override_query() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::post(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&c=3",
        )?)
        .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
        .body(())?;
        let body = Bytes::from_static(b"a=2&b=4");

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, Some(&body)).await?;

        // Resource is /latest/0?a=2&b=4&c=3: the form value of a wins.
        assert_eq!(
            parts.headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "7ZeHbDQEzVJNX8+mnl02z9LZ9Bu89JS9sX4GtHlVRh0="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_debug_mode() -> Result<()> {
        let signer = test_signer(test_builder().with_debug_mode(true));

        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;

        let headers = parts.headers;
        assert_eq!(
            headers.get(X_CA_REQUEST_MODE).unwrap().to_str()?,
            REQUEST_MODE_DEBUG
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE_HEADERS).unwrap().to_str()?,
            "X-Ca-Key,X-Ca-Nonce,X-Ca-Request-Mode,X-Ca-Timestamp"
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "dQWaB2ZDEikr1JZ3xAAfVH940uWK3dwJWvzE/PwMsUQ="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_with_stage() -> Result<()> {
        let signer = test_signer(test_builder().with_stage("TEST"));

        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;

        let headers = parts.headers;
        assert_eq!(headers.get(X_CA_STAGE).unwrap().to_str()?, "TEST");
        assert_eq!(
            headers.get(X_CA_SIGNATURE_HEADERS).unwrap().to_str()?,
            "X-Ca-Key,X-Ca-Nonce,X-Ca-Stage,X-Ca-Timestamp"
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "mhL4qeXs5qeNoutuzH8ERNTcAtcVPDVM2TyW7rjth1E="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_custom_prefix() -> Result<()> {
        let signer =
            test_signer(test_builder().with_sign_headers(vec!["x-trace-".to_string()]));

        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .header("x-trace-id", "abc123")
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;

        let headers = parts.headers;
        assert_eq!(
            headers.get(X_CA_SIGNATURE_HEADERS).unwrap().to_str()?,
            "X-Ca-Key,X-Ca-Nonce,X-Ca-Timestamp,x-trace-id"
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "Ru66gVKIlbcGy+2pAzu/hyIn9op+lO/lxbHdmQlPHX4="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_lowercase_x_ca_header_not_signed() -> Result<()> {
        let signer = test_signer(test_builder());

        // HeaderMap lowercases the name, so it no longer matches the case
        // sensitive X-Ca- rule and stays out of the signature.
        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .header("x-ca-foo", "1")
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;

        let headers = parts.headers;
        assert_eq!(
            headers.get(X_CA_SIGNATURE_HEADERS).unwrap().to_str()?,
            "X-Ca-Key,X-Ca-Nonce,X-Ca-Timestamp"
        );
        assert_eq!(
            headers.get(X_CA_SIGNATURE).unwrap().to_str()?,
            "w1FUy364/ygXcGSdxrXUghz/AXWTvPiNkRnQuwhbmKM="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_resign_is_deterministic() -> Result<()> {
        let signer = test_signer(test_builder());

        let req = http::Request::get(Uri::from_str(
            "https://gateway.example.com/latest/0?a=1&b=2",
        )?)
        .body(())?;

        let (mut parts, _) = req.into_parts();
        signer.sign(&mut parts, None).await?;
        let first = parts.headers.get(X_CA_SIGNATURE).unwrap().to_str()?.to_string();

        // Signing again discards the previous signature pair and arrives
        // at the same result.
        signer.sign(&mut parts, None).await?;
        let second = parts.headers.get(X_CA_SIGNATURE).unwrap().to_str()?.to_string();

        assert_eq!(first, second);
        assert_eq!(parts.headers.get_all(X_CA_SIGNATURE).iter().count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_signature_depends_on_secret() -> Result<()> {
        async fn sign_with(secret: &str) -> Result<String> {
            let loader = StaticCredentialProvider::new(APP_KEY, secret);
            let signer = Signer::new(Context::new(), loader, test_builder());

            let req = http::Request::get(Uri::from_str(
                "https://gateway.example.com/latest/0?a=1&b=2",
            )?)
            .body(())?;

            let (mut parts, _) = req.into_parts();
            signer.sign(&mut parts, None).await?;

            Ok(parts
                .headers
                .get(X_CA_SIGNATURE)
                .unwrap()
                .to_str()?
                .to_string())
        }

        assert_ne!(
            sign_with(APP_SECRET).await?,
            sign_with("another_secret").await?
        );

        Ok(())
    }

    #[test]
    fn test_string_to_sign_canonical_order() -> Result<()> {
        let mut headers = BTreeMap::new();
        headers.insert(ACCEPT.to_string(), "application/json".to_string());
        headers.insert(CONTENT_MD5.to_string(), "md5md5".to_string());
        headers.insert(CONTENT_TYPE.to_string(), "text/plain".to_string());
        headers.insert(
            DATE.to_string(),
            "Mon, 15 Aug 2022 16:50:12 GMT".to_string(),
        );
        headers.insert(X_CA_KEY.to_string(), "key".to_string());
        headers.insert("x-ca-lower".to_string(), "1".to_string());
        headers.insert("X-Custom-Tag".to_string(), "77".to_string());

        let mut query = BTreeMap::new();
        query.insert("b".to_string(), String::new());
        query.insert("a".to_string(), "1".to_string());

        let to_sign = string_to_sign(
            &Method::GET,
            "/v2/echo",
            &headers,
            &query,
            &BTreeMap::new(),
            &["X-Custom-".to_string()],
        )?;

        assert_eq!(
            to_sign.value,
            "GET\n\
             application/json\n\
             md5md5\n\
             text/plain\n\
             Mon, 15 Aug 2022 16:50:12 GMT\n\
             X-Ca-Key:key\n\
             X-Custom-Tag:77\n\
             /v2/echo?a=1&b"
        );
        assert_eq!(to_sign.signed_headers, vec!["X-Ca-Key", "X-Custom-Tag"]);

        Ok(())
    }

    #[test]
    fn test_string_to_sign_covers_every_input() -> Result<()> {
        let headers = BTreeMap::from([(X_CA_KEY.to_string(), "key".to_string())]);
        let query = BTreeMap::from([("a".to_string(), "1".to_string())]);
        let empty = BTreeMap::new();

        let base = string_to_sign(&Method::GET, "/v1/echo", &headers, &query, &empty, &[])?;

        let changed = string_to_sign(&Method::POST, "/v1/echo", &headers, &query, &empty, &[])?;
        assert_ne!(base.value, changed.value);

        let changed = string_to_sign(&Method::GET, "/v1/other", &headers, &query, &empty, &[])?;
        assert_ne!(base.value, changed.value);

        let mut bumped = query.clone();
        bumped.insert("a".to_string(), "2".to_string());
        let changed = string_to_sign(&Method::GET, "/v1/echo", &headers, &bumped, &empty, &[])?;
        assert_ne!(base.value, changed.value);

        let mut renamed = headers.clone();
        renamed.insert(X_CA_KEY.to_string(), "other".to_string());
        let changed = string_to_sign(&Method::GET, "/v1/echo", &renamed, &query, &empty, &[])?;
        assert_ne!(base.value, changed.value);

        Ok(())
    }

    #[test]
    fn test_sanitize_sign_headers() {
        let cleaned = sanitize_sign_headers(vec![
            DATE.to_string(),
            "X-Custom-".to_string(),
            ACCEPT.to_string(),
        ]);
        assert_eq!(cleaned, vec!["X-Custom-"]);

        let sorted = sanitize_sign_headers(vec!["x-b-".to_string(), "X-A-".to_string()]);
        assert_eq!(sorted, vec!["X-A-", "x-b-"]);
    }
}
