use thiserror::Error;

/// Custom error type for adoption workflow operations.
#[derive(Debug, Error)]
pub enum AdoptionError {
    #[error("You have already requested to adopt this pet.")]
    DuplicateRequest,

    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Adoption request not found: {0}")]
    RequestNotFound(String),

    #[error("Pet has already been adopted")]
    PetAlreadyAdopted,

    #[error("Request was already resolved as {0}")]
    AlreadyResolved(String),

    #[error("Invalid adoption status: {0}")]
    InvalidStatus(String),
}
