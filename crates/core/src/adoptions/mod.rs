//! Adoptions module - the adoption request workflow.

mod adoptions_errors;
mod adoptions_model;
mod adoptions_service;
mod adoptions_traits;

#[cfg(test)]
mod adoptions_service_tests;

pub use adoptions_errors::AdoptionError;
pub use adoptions_model::{AdoptionRequest, AdoptionStatus, NewAdoptionRequest};
pub use adoptions_service::AdoptionService;
pub use adoptions_traits::{AdoptionRepositoryTrait, AdoptionServiceTrait};
