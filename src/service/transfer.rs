// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Transfer metadata orchestration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::ServiceError;
use crate::models::{CreateTransferRequest, Transfer, TransferMetadata, User};
use crate::store::{Store, StoreError};

#[derive(Clone)]
pub struct TransferService {
    store: Arc<dyn Store>,
}

impl TransferService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Record the metadata of a completed out-of-band upload.
    ///
    /// The destination username must resolve to an existing user before
    /// anything is written; `linkToEncFile`, `skb` and `sig` are stored
    /// verbatim and never interpreted.
    pub async fn create_transfer(
        &self,
        source: &User,
        req: CreateTransferRequest,
    ) -> Result<TransferMetadata, ServiceError> {
        if req.dest_user.is_empty()
            || req.link_to_enc_file.is_empty()
            || req.skb.is_empty()
            || req.sig.is_empty()
        {
            return Err(ServiceError::InvalidInput(
                "destUser, linkToEncFile, skb and sig are required".to_string(),
            ));
        }

        let dest = match self.store.get_user_by_username(&req.dest_user).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                return Err(ServiceError::NotFound(format!(
                    "destination user '{}' not found",
                    req.dest_user
                )))
            }
            Err(other) => return Err(ServiceError::Storage(other)),
        };

        let transfer = Transfer {
            id: Uuid::new_v4(),
            source_user_id: source.id,
            dest_user_id: dest.id,
            link_to_enc_file: req.link_to_enc_file,
            skb: req.skb,
            sig: req.sig,
            created_at: Utc::now(),
        };

        self.store.create_transfer(&transfer).await?;

        Ok(TransferMetadata::from_transfer(
            &transfer,
            &source.username,
            &dest.username,
        ))
    }

    /// List all transfers addressed to `dest`, newest first.
    ///
    /// Best-effort: a transfer whose sender no longer resolves is logged
    /// and skipped rather than failing the whole listing.
    pub async fn list_pending(&self, dest: &User) -> Result<Vec<TransferMetadata>, ServiceError> {
        let transfers = self.store.get_transfers_by_dest_user(dest.id).await?;

        let mut metadata = Vec::with_capacity(transfers.len());
        for transfer in &transfers {
            match self.store.get_user_by_id(transfer.source_user_id).await {
                Ok(sender) => metadata.push(TransferMetadata::from_transfer(
                    transfer,
                    &sender.username,
                    &dest.username,
                )),
                Err(err) => {
                    tracing::warn!(
                        transfer_id = %transfer.id,
                        source_user_id = %transfer.source_user_id,
                        error = %err,
                        "skipping transfer with unresolvable sender"
                    );
                }
            }
        }

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{conformance, MemoryStore, TransferStore, UserStore};

    async fn setup() -> (TransferService, Arc<dyn Store>, User, User) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let alice = conformance::user("alice");
        let bob = conformance::user("bob");
        store.create_user(&alice).await.unwrap();
        store.create_user(&bob).await.unwrap();
        (TransferService::new(Arc::clone(&store)), store, alice, bob)
    }

    fn request(dest: &str) -> CreateTransferRequest {
        CreateTransferRequest {
            dest_user: dest.to_string(),
            link_to_enc_file: "uploads/alice/file-1".to_string(),
            skb: "wrapped-key".to_string(),
            sig: "signature".to_string(),
        }
    }

    #[tokio::test]
    async fn create_transfer_resolves_usernames() {
        let (svc, _store, alice, bob) = setup().await;

        let metadata = svc.create_transfer(&alice, request("bob")).await.unwrap();
        assert_eq!(metadata.source_user, "alice");
        assert_eq!(metadata.dest_user, "bob");
        assert_eq!(metadata.skb, "wrapped-key");

        let pending = svc.list_pending(&bob).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].transfer_id, metadata.transfer_id);
    }

    #[tokio::test]
    async fn unknown_destination_fails_and_writes_nothing() {
        let (svc, store, alice, bob) = setup().await;

        let err = svc.create_transfer(&alice, request("mallory")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert!(store.get_transfers_by_dest_user(bob.id).await.unwrap().is_empty());
        assert!(store.get_transfers_by_dest_user(alice.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let (svc, _store, alice, _bob) = setup().await;

        let mut req = request("bob");
        req.skb = String::new();
        assert!(matches!(
            svc.create_transfer(&alice, req).await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn listing_for_a_user_with_no_transfers_is_empty() {
        let (svc, _store, _alice, bob) = setup().await;
        assert!(svc.list_pending(&bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unresolvable_sender_is_skipped_not_fatal() {
        let (svc, store, alice, bob) = setup().await;
        svc.create_transfer(&alice, request("bob")).await.unwrap();

        // A transfer whose sender id points nowhere (e.g. account removed).
        let orphan = conformance::transfer(Uuid::new_v4(), bob.id, 0);
        store.create_transfer(&orphan).await.unwrap();

        let pending = svc.list_pending(&bob).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].source_user, "alice");
    }
}
