mod model;
mod repository;

pub use model::{CampaignChangesetDB, CampaignDB};
pub use repository::CampaignRepository;
