//! OAuth 1.0a request signing (HMAC-SHA1) for X user-context calls.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// App consumer pair plus the user's access token pair.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Random nonce for one request.
pub fn new_nonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Base64 HMAC-SHA1 signature over the request.
///
/// `url` is the request URL without query string; every query, form, and `oauth_*`
/// parameter goes in `params`.
pub fn signature(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    creds: &Credentials<'_>,
) -> Result<String, String> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    pairs.sort();
    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    let base = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    );
    let key = format!(
        "{}&{}",
        encode(creds.consumer_secret),
        encode(creds.token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| e.to_string())?;
    mac.update(base.as_bytes());
    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// `Authorization` header value for a request without query or form parameters.
pub fn authorization_header(
    method: &str,
    url: &str,
    creds: &Credentials<'_>,
    nonce: &str,
    timestamp: i64,
) -> Result<String, String> {
    let timestamp = timestamp.to_string();
    let mut oauth = vec![
        ("oauth_consumer_key", creds.consumer_key),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", creds.token),
        ("oauth_version", "1.0"),
    ];
    let signature = signature(method, url, &oauth, creds)?;
    oauth.push(("oauth_signature", signature.as_str()));
    oauth.sort();

    let fields: Vec<String> = oauth
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, encode(v)))
        .collect();
    Ok(format!("OAuth {}", fields.join(", ")))
}
