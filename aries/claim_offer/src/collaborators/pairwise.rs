use std::{
    collections::HashMap,
    sync::{RwLock, RwLockWriteGuard},
};

use async_trait::async_trait;
use shared::validation::did::validate_did;

use crate::errors::error::prelude::*;

/// Resolves the DID a remote party uses towards us into our own pairwise DID
/// for that connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PairwiseDirectory: Send + Sync {
    async fn resolve_pairwise_did(&self, remote_did: &str) -> Option<String>;
}

/// In-memory directory filled in as connections get established.
#[derive(Debug, Default)]
pub struct PairwiseConnections {
    connections: RwLock<HashMap<String, String>>,
}

impl PairwiseConnections {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_connections(&self) -> ClaimOfferResult<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.connections.write().map_err(|err| {
            err_msg(
                ClaimOfferErrorKind::LockError,
                format!("Unable to lock connections: {err}"),
            )
        })
    }

    /// Records that `user_pairwise_did` is our side of the connection whose
    /// remote side is `remote_did`. Replaces any earlier entry for `remote_did`.
    pub fn add_connection(
        &self,
        remote_did: &str,
        user_pairwise_did: &str,
    ) -> ClaimOfferResult<()> {
        let remote_did = validate_did(remote_did)?;
        let user_pairwise_did = validate_did(user_pairwise_did)?;
        debug!(
            "Adding pairwise connection remote: {}, user: {}",
            remote_did, user_pairwise_did
        );
        self.lock_connections()?.insert(remote_did, user_pairwise_did);
        Ok(())
    }

    pub fn remove_connection(&self, remote_did: &str) -> ClaimOfferResult<Option<String>> {
        Ok(self.lock_connections()?.remove(remote_did))
    }
}

#[async_trait]
impl PairwiseDirectory for PairwiseConnections {
    async fn resolve_pairwise_did(&self, remote_did: &str) -> Option<String> {
        match self.connections.read() {
            Ok(connections) => connections.get(remote_did).cloned(),
            Err(err) => {
                error!("Unable to read-lock pairwise connections: {:?}", err);
                None
            }
        }
    }
}
