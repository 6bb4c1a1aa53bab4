//! Trigger a reconcile within a Flux cluster through a generic-hmac
//! webhook receiver.
//!
//! The library half of the `flux-reconcile` binary: configuration
//! resolution, payload construction and signing, and the single dispatch
//! to the receiver endpoint.

use anyhow::Context;

pub mod config;
pub mod dispatch;
pub mod payload;

use config::Config;
use dispatch::Outcome;

/// Builds, signs, and dispatches the reconciliation request described by
/// `config`, logging the outcome for the operator.
///
/// The payload is serialized exactly once; the signature covers the same
/// bytes that go out as the request body.
pub fn run(config: &Config) -> anyhow::Result<Outcome> {
    let webhook = payload::ReceiverWebhook::new(config.resources.clone());
    let body = serde_json::to_vec(&webhook).context("failed to serialize webhook payload")?;
    let digest = payload::sign(&body, &config.key);

    tracing::debug!("signature: sha1={digest}");

    let outcome = dispatch::post(&config.endpoint, body, &digest)?;
    match &outcome {
        Outcome::Triggered => {
            tracing::info!(
                "Reconciliation triggered for resources: [{}]",
                config.resources.join(", ")
            );
        }
        Outcome::Rejected(status) => {
            tracing::error!("Reconciliation failed with response status code: {status}");
        }
    }
    Ok(outcome)
}
