use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::money;

/// Domain model representing a fundraising campaign.
///
/// `donated_amount` is derived from the payment log and is mutated only by
/// the ledger engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub owner_email: String,
    pub pet_name: String,
    pub pet_image: Option<String>,
    pub target_amount: Decimal,
    pub donated_amount: Decimal,
    pub end_date: Option<NaiveDateTime>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub is_paused: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a campaign. The server assigns owner, id and
/// creation date, and starts the campaign unpaused with a zero total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub pet_name: String,
    pub pet_image: Option<String>,
    pub target_amount: Decimal,
    pub end_date: Option<NaiveDateTime>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl NewCampaign {
    pub fn validate(&self) -> Result<()> {
        if self.pet_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign pet name cannot be empty".to_string(),
            )));
        }
        validate_target(self.target_amount)
    }
}

/// Editable campaign fields, as a typed allow-list.
///
/// The donated total, pause flag and owner are not representable here, and
/// unknown fields fail deserialization, so a request cannot overwrite the
/// derived total through the edit path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CampaignUpdate {
    pub pet_name: Option<String>,
    pub pet_image: Option<String>,
    pub target_amount: Option<Decimal>,
    pub end_date: Option<NaiveDateTime>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl CampaignUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.pet_name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Campaign pet name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(target) = self.target_amount {
            validate_target(target)?;
        }
        Ok(())
    }
}

fn validate_target(target: Decimal) -> Result<()> {
    if target <= Decimal::ZERO || money::to_minor_units(target).is_none() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Target amount must be a positive amount with at most two decimal places".to_string(),
        )));
    }
    Ok(())
}
