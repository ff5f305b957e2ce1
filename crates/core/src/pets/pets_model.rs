use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a pet listed for adoption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub owner_email: String,
    pub name: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub adopted: bool,
    pub date_added: NaiveDateTime,
}

/// Input model for listing a new pet. The server assigns owner, id,
/// `date_added` and starts the pet un-adopted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl NewPet {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Pet name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Editable pet fields. The adopted flag and owner are not part of this
/// set; adoption state changes go through their own operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl PetUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Pet name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}
