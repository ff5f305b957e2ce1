use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::authz::{self, Identity};
use crate::errors::{Error, Result};
use crate::pets::PetServiceTrait;
use crate::users::UserServiceTrait;

use super::adoptions_errors::AdoptionError;
use super::adoptions_model::{AdoptionRequest, AdoptionStatus, NewAdoptionRequest};
use super::adoptions_traits::{AdoptionRepositoryTrait, AdoptionServiceTrait};

/// The adoption workflow: a small state machine over adoption requests,
/// sharing the ledger's consistency pattern at smaller scale (conditional
/// update plus cascading cleanup, applied atomically in the store).
pub struct AdoptionService {
    repository: Arc<dyn AdoptionRepositoryTrait>,
    pets: Arc<dyn PetServiceTrait>,
    users: Arc<dyn UserServiceTrait>,
}

impl AdoptionService {
    pub fn new(
        repository: Arc<dyn AdoptionRepositoryTrait>,
        pets: Arc<dyn PetServiceTrait>,
        users: Arc<dyn UserServiceTrait>,
    ) -> Self {
        Self {
            repository,
            pets,
            users,
        }
    }

    fn get_request(&self, request_id: &str) -> Result<AdoptionRequest> {
        self.repository
            .find_by_id(request_id)?
            .ok_or_else(|| AdoptionError::RequestNotFound(request_id.to_string()).into())
    }

    fn ensure_open(request: &AdoptionRequest) -> Result<()> {
        if request.status.is_terminal() {
            return Err(AdoptionError::AlreadyResolved(request.status.as_str().to_string()).into());
        }
        Ok(())
    }

    async fn accept_open_request(&self, request: &AdoptionRequest) -> Result<AdoptionRequest> {
        let accepted = self.repository.accept(&request.id, &request.pet_id).await?;
        if !accepted {
            return Err(AdoptionError::PetAlreadyAdopted.into());
        }
        debug!(
            "request {} accepted; other pending requests for pet {} auto-rejected",
            request.id, request.pet_id
        );
        self.get_request(&request.id)
    }
}

#[async_trait]
impl AdoptionServiceTrait for AdoptionService {
    async fn request(
        &self,
        identity: &Identity,
        new_request: NewAdoptionRequest,
    ) -> Result<AdoptionRequest> {
        let pet = match self.pets.get_pet(&new_request.pet_id) {
            Ok(pet) => pet,
            Err(Error::NotFound(_)) => {
                return Err(AdoptionError::PetNotFound(new_request.pet_id.clone()).into())
            }
            Err(other) => return Err(other),
        };
        if pet.adopted {
            return Err(AdoptionError::PetAlreadyAdopted.into());
        }
        if self
            .repository
            .find_pending(&new_request.pet_id, &identity.email)?
            .is_some()
        {
            return Err(AdoptionError::DuplicateRequest.into());
        }
        self.repository
            .insert(new_request, &identity.email, &pet.owner_email, &pet.name)
            .await
    }

    async fn accept(&self, identity: &Identity, request_id: &str) -> Result<AdoptionRequest> {
        let request = self.get_request(request_id)?;
        authz::ensure_self(identity, &request.pet_owner_email)?;
        Self::ensure_open(&request)?;
        self.accept_open_request(&request).await
    }

    async fn reject(&self, identity: &Identity, request_id: &str) -> Result<AdoptionRequest> {
        let request = self.get_request(request_id)?;
        authz::ensure_self(identity, &request.pet_owner_email)?;
        Self::ensure_open(&request)?;
        self.repository
            .set_status(request_id, AdoptionStatus::Rejected)
            .await
    }

    async fn set_status(
        &self,
        identity: &Identity,
        request_id: &str,
        status: AdoptionStatus,
    ) -> Result<AdoptionRequest> {
        let request = self.get_request(request_id)?;
        let role = self.users.get_role(&identity.email)?;
        authz::ensure_owner_or_admin(identity, &request.pet_owner_email, role)?;
        Self::ensure_open(&request)?;
        match status {
            AdoptionStatus::Accepted => self.accept_open_request(&request).await,
            AdoptionStatus::Rejected => {
                self.repository
                    .set_status(request_id, AdoptionStatus::Rejected)
                    .await
            }
            AdoptionStatus::Pending => {
                Err(AdoptionError::InvalidStatus("pending".to_string()).into())
            }
        }
    }

    fn has_requested(&self, pet_id: &str, email: &str) -> Result<bool> {
        Ok(self.repository.find_pending(pet_id, email)?.is_some())
    }

    fn list_for_owner(&self, identity: &Identity, email: &str) -> Result<Vec<AdoptionRequest>> {
        authz::ensure_self(identity, email)?;
        self.repository.list_for_owner(email)
    }
}
