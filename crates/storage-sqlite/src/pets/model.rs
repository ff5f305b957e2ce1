//! Database models for pets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawhaven_core::pets::{Pet, PetUpdate};

/// Database model for pets.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::pets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PetDB {
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

/// Changeset for pet edits; `None` fields are left untouched. The adopted
/// flag is deliberately absent.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::pets)]
pub struct PetChangesetDB {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl PetChangesetDB {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.image.is_some()
            || self.location.is_some()
            || self.short_description.is_some()
            || self.long_description.is_some()
    }
}

impl From<PetUpdate> for PetChangesetDB {
    fn from(update: PetUpdate) -> Self {
        Self {
            name: update.name,
            category: update.category,
            image: update.image,
            location: update.location,
            short_description: update.short_description,
            long_description: update.long_description,
        }
    }
}

impl From<PetDB> for Pet {
    fn from(db: PetDB) -> Self {
        Self {
            id: db.id,
            owner_email: db.owner_email,
            name: db.name,
            category: db.category,
            image: db.image,
            location: db.location,
            short_description: db.short_description,
            long_description: db.long_description,
            adopted: db.adopted,
            date_added: db.date_added,
        }
    }
}
