mod model;
mod repository;

pub use model::AdoptionRequestDB;
pub use repository::AdoptionRepository;
