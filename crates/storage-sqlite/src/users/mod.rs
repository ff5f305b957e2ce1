mod model;
mod repository;

pub use model::{UserDB, UserProfileChangesetDB};
pub use repository::UserRepository;
