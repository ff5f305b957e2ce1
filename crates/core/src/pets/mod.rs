//! Pets module - domain models, services, and traits.

mod pets_model;
mod pets_service;
mod pets_traits;

pub use pets_model::{NewPet, Pet, PetUpdate};
pub use pets_service::PetService;
pub use pets_traits::{PetRepositoryTrait, PetServiceTrait};
