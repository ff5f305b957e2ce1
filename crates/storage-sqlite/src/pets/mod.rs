mod model;
mod repository;

pub use model::{PetChangesetDB, PetDB};
pub use repository::PetRepository;
