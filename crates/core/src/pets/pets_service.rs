use std::sync::Arc;

use async_trait::async_trait;

use crate::authz::{self, Identity};
use crate::errors::{Error, Result};
use crate::users::UserServiceTrait;

use super::pets_model::{NewPet, Pet, PetUpdate};
use super::pets_traits::{PetRepositoryTrait, PetServiceTrait};

/// Service for managing pet listings.
pub struct PetService {
    repository: Arc<dyn PetRepositoryTrait>,
    users: Arc<dyn UserServiceTrait>,
}

impl PetService {
    pub fn new(repository: Arc<dyn PetRepositoryTrait>, users: Arc<dyn UserServiceTrait>) -> Self {
        Self { repository, users }
    }

    fn get_owned(&self, identity: &Identity, pet_id: &str) -> Result<Pet> {
        let pet = self
            .repository
            .find_by_id(pet_id)?
            .ok_or_else(|| Error::NotFound(format!("Pet {pet_id} not found")))?;
        let role = self.users.get_role(&identity.email)?;
        authz::ensure_owner_or_admin(identity, &pet.owner_email, role)?;
        Ok(pet)
    }
}

#[async_trait]
impl PetServiceTrait for PetService {
    async fn add_pet(&self, identity: &Identity, new_pet: NewPet) -> Result<Pet> {
        new_pet.validate()?;
        self.repository.insert(&identity.email, new_pet).await
    }

    fn get_pet(&self, pet_id: &str) -> Result<Pet> {
        self.repository
            .find_by_id(pet_id)?
            .ok_or_else(|| Error::NotFound(format!("Pet {pet_id} not found")))
    }

    fn list_by_owner(&self, identity: &Identity, email: &str) -> Result<Vec<Pet>> {
        authz::ensure_self(identity, email)?;
        self.repository.list_by_owner(email)
    }

    async fn update_pet(
        &self,
        identity: &Identity,
        pet_id: &str,
        update: PetUpdate,
    ) -> Result<Pet> {
        update.validate()?;
        self.get_owned(identity, pet_id)?;
        self.repository.update(pet_id, update).await
    }

    async fn set_adopted(&self, identity: &Identity, pet_id: &str, adopted: bool) -> Result<Pet> {
        self.get_owned(identity, pet_id)?;
        self.repository.set_adopted(pet_id, adopted).await
    }

    async fn delete_pet(&self, identity: &Identity, pet_id: &str) -> Result<()> {
        self.get_owned(identity, pet_id)?;
        self.repository.delete(pet_id).await?;
        Ok(())
    }
}
