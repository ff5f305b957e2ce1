//! Campaigns module - domain models, services, and traits.

mod campaigns_model;
mod campaigns_service;
mod campaigns_traits;

#[cfg(test)]
mod campaigns_service_tests;

pub use campaigns_model::{Campaign, CampaignUpdate, NewCampaign};
pub use campaigns_service::CampaignService;
pub use campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};
