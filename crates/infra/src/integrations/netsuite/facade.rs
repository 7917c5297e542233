//! Process-wide client handle
//!
//! Most callers build a [`NetSuiteClient`] and pass it around. For code that
//! wants a shared default, `init` installs one and `client` hands out clones
//! of the `Arc`. Nothing is created lazily: `client` before `init` is a
//! configuration error.

use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};
use suitelink_domain::{Config, NetSuiteConfig, Result, SuiteLinkError};
use tracing::info;

use super::client::NetSuiteClient;
use crate::config;

static CLIENT: RwLock<Option<Arc<NetSuiteClient>>> = const_rwlock(None);

/// Build a client from `config` and install it as the shared default.
///
/// Replaces any previously installed client. On error the previous client
/// stays in place.
pub fn init(config: &NetSuiteConfig) -> Result<Arc<NetSuiteClient>> {
    let client = Arc::new(NetSuiteClient::new(config)?);
    *CLIENT.write() = Some(Arc::clone(&client));
    info!(account = client.credentials().account_id(), "shared ERP client initialized");
    Ok(client)
}

/// Load configuration from the environment (and `.env`) then [`init`].
pub fn init_from_env() -> Result<Arc<NetSuiteClient>> {
    let Config { netsuite, .. } = config::load()?;
    init(&netsuite)
}

/// The shared client installed by [`init`].
///
/// # Errors
/// `SuiteLinkError::Config` when no client has been initialized.
pub fn client() -> Result<Arc<NetSuiteClient>> {
    CLIENT.read().as_ref().map(Arc::clone).ok_or_else(|| {
        SuiteLinkError::Config("ERP client not initialized; call init() first".into())
    })
}

/// Drop the shared client. Clones already handed out keep working.
pub fn reset() {
    CLIENT.write().take();
}
