use async_trait::async_trait;

use crate::authz::Identity;
use crate::errors::Result;

use super::adoptions_model::{AdoptionRequest, AdoptionStatus, NewAdoptionRequest};

/// Trait defining the contract for adoption request repository operations.
#[async_trait]
pub trait AdoptionRepositoryTrait: Send + Sync {
    fn find_by_id(&self, request_id: &str) -> Result<Option<AdoptionRequest>>;
    /// Finds an unresolved request for this requester+pet pair.
    fn find_pending(&self, pet_id: &str, requester_email: &str)
        -> Result<Option<AdoptionRequest>>;
    fn list_for_owner(&self, pet_owner_email: &str) -> Result<Vec<AdoptionRequest>>;
    async fn insert(
        &self,
        new_request: NewAdoptionRequest,
        requester_email: &str,
        pet_owner_email: &str,
        pet_name: &str,
    ) -> Result<AdoptionRequest>;
    async fn set_status(&self, request_id: &str, status: AdoptionStatus)
        -> Result<AdoptionRequest>;
    /// Accepts atomically: flips the pet's adopted flag guarded on it being
    /// false, marks this request accepted, and auto-rejects every other
    /// pending request for the pet. Returns `false` when the guard lost
    /// (pet already adopted); nothing is changed in that case.
    async fn accept(&self, request_id: &str, pet_id: &str) -> Result<bool>;
}

/// Trait defining the contract for adoption workflow operations.
#[async_trait]
pub trait AdoptionServiceTrait: Send + Sync {
    async fn request(
        &self,
        identity: &Identity,
        new_request: NewAdoptionRequest,
    ) -> Result<AdoptionRequest>;
    async fn accept(&self, identity: &Identity, request_id: &str) -> Result<AdoptionRequest>;
    async fn reject(&self, identity: &Identity, request_id: &str) -> Result<AdoptionRequest>;
    /// Administrative override: owner-or-admin may force a resolution.
    async fn set_status(
        &self,
        identity: &Identity,
        request_id: &str,
        status: AdoptionStatus,
    ) -> Result<AdoptionRequest>;
    fn has_requested(&self, pet_id: &str, email: &str) -> Result<bool>;
    fn list_for_owner(&self, identity: &Identity, email: &str) -> Result<Vec<AdoptionRequest>>;
}
