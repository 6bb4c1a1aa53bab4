//! Configuration resolution for the single reconcile run.
//!
//! The signing key may come from the `--key` flag or from the `FR_KEY`
//! environment variable. The variable is read exactly once, in `main`,
//! and merged here; library code never reaches into the ambient
//! environment.

use anyhow::{Context, bail};
use secrecy::SecretString;
use url::Url;

/// Environment variable consulted when `--key` is absent.
pub const KEY_ENV_VAR: &str = "FR_KEY";

/// Trigger a reconcile within a Flux cluster.
///
/// This requires the setup of a generic-hmac webhook.
/// See <https://fluxcd.io/flux/components/notification/receiver/#generic-hmac-receiver>
#[derive(clap::Parser, Debug)]
#[command(name = "flux-reconcile", version)]
pub struct Opt {
    /// The webhook endpoint exposed by the receiver.
    pub webhook: String,

    /// The resources to trigger reconcile for.
    #[arg(short, long, default_value = "GitRepository")]
    pub resources: Vec<String>,

    /// The key used to generate a HMAC signature (optional, use env FR_KEY).
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Everything one run needs, fully resolved and validated.
#[derive(Debug)]
pub struct Config {
    pub endpoint: Url,
    pub resources: Vec<String>,
    pub key: SecretString,
}

impl Config {
    /// Merges CLI input with the environment-supplied key. The flag wins
    /// over the environment. Fails before any network activity when the
    /// endpoint does not parse or no key is available from either source.
    pub fn resolve(opt: Opt, key_env: Option<String>) -> anyhow::Result<Config> {
        let endpoint = Url::parse(&opt.webhook)
            .with_context(|| format!("invalid webhook endpoint `{}`", opt.webhook))?;
        let Some(key) = opt.key.or(key_env) else {
            bail!("no signing key: pass --key or set {KEY_ENV_VAR}");
        };
        Ok(Config {
            endpoint,
            resources: opt.resources,
            key: key.into(),
        })
    }
}
