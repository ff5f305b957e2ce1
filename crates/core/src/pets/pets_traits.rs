use async_trait::async_trait;

use crate::authz::Identity;
use crate::errors::Result;

use super::pets_model::{NewPet, Pet, PetUpdate};

/// Trait defining the contract for pet repository operations.
#[async_trait]
pub trait PetRepositoryTrait: Send + Sync {
    fn find_by_id(&self, pet_id: &str) -> Result<Option<Pet>>;
    fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Pet>>;
    async fn insert(&self, owner_email: &str, new_pet: NewPet) -> Result<Pet>;
    async fn update(&self, pet_id: &str, update: PetUpdate) -> Result<Pet>;
    async fn set_adopted(&self, pet_id: &str, adopted: bool) -> Result<Pet>;
    async fn delete(&self, pet_id: &str) -> Result<usize>;
}

/// Trait defining the contract for pet service operations.
#[async_trait]
pub trait PetServiceTrait: Send + Sync {
    async fn add_pet(&self, identity: &Identity, new_pet: NewPet) -> Result<Pet>;
    fn get_pet(&self, pet_id: &str) -> Result<Pet>;
    fn list_by_owner(&self, identity: &Identity, email: &str) -> Result<Vec<Pet>>;
    async fn update_pet(&self, identity: &Identity, pet_id: &str, update: PetUpdate)
        -> Result<Pet>;
    async fn set_adopted(&self, identity: &Identity, pet_id: &str, adopted: bool) -> Result<Pet>;
    async fn delete_pet(&self, identity: &Identity, pet_id: &str) -> Result<()>;
}
