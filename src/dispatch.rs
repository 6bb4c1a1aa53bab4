//! The single outbound POST to the webhook receiver.

use anyhow::Context;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

/// Header carrying the HMAC digest, in `sha1={hex}` form.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// How the receiver answered the trigger.
#[derive(Debug)]
pub enum Outcome {
    /// The receiver acknowledged the trigger with a 200.
    Triggered,
    /// The receiver answered with any other status. The status line is
    /// kept verbatim for the operator's log; no retry is attempted.
    Rejected(StatusCode),
}

/// POSTs the exact payload bytes with the signature header attached and
/// classifies the response. Transport failures (refused connection, DNS,
/// timeout) are fatal; any received response is a classified outcome.
pub fn post(endpoint: &Url, body: Vec<u8>, digest: &str) -> anyhow::Result<Outcome> {
    let client = Client::new();
    let response = client
        .post(endpoint.clone())
        .header(SIGNATURE_HEADER, format!("sha1={digest}"))
        .body(body)
        .send()
        .with_context(|| format!("failed to POST to {endpoint}"))?;

    match response.status() {
        StatusCode::OK => Ok(Outcome::Triggered),
        status => Ok(Outcome::Rejected(status)),
    }
}
