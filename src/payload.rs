//! This module implements payload construction and signing for the
//! generic-hmac webhook receiver.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;

/// API group/version the notification-controller expects on receiver
/// payloads.
pub const API_VERSION: &str = "notification.toolkit.fluxcd.io/v1beta1";

/// Object kind addressed by the webhook.
pub const KIND: &str = "Receiver";

/// The reconciliation request sent to the receiver endpoint.
///
/// Field order is the wire order; the receiver matches keys
/// case-sensitively.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverWebhook {
    api_version: &'static str,
    kind: &'static str,
    spec: ReceiverSpec,
}

#[derive(Debug, serde::Serialize)]
struct ReceiverSpec {
    resources: Vec<String>,
}

impl ReceiverWebhook {
    /// Resource names are passed through verbatim, in caller order.
    pub fn new(resources: Vec<String>) -> Self {
        ReceiverWebhook {
            api_version: API_VERSION,
            kind: KIND,
            spec: ReceiverSpec { resources },
        }
    }
}

/// Computes the HMAC-SHA1 of the exact payload bytes under `key`, rendered
/// as lowercase hex. The digest algorithm is fixed by the receiver's
/// generic-hmac contract and is not configurable.
pub fn sign(payload: &[u8], key: &SecretString) -> String {
    let mut mac = Hmac::<Sha1>::new_from_slice(key.expose_secret().as_bytes()).unwrap();
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
