use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use pawhaven_core::pets::{NewPet, Pet, PetRepositoryTrait, PetUpdate};
use pawhaven_core::Result;

use super::model::{PetChangesetDB, PetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::pets;

pub struct PetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PetRepositoryTrait for PetRepository {
    fn find_by_id(&self, pet_id: &str) -> Result<Option<Pet>> {
        let mut conn = get_connection(&self.pool)?;
        pets::table
            .find(pet_id)
            .first::<PetDB>(&mut conn)
            .optional()
            .into_core()
            .map(|pet| pet.map(Pet::from))
    }

    fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Pet>> {
        let mut conn = get_connection(&self.pool)?;
        pets::table
            .filter(pets::owner_email.eq(owner_email))
            .order(pets::date_added.desc())
            .load::<PetDB>(&mut conn)
            .into_core()
            .map(|pets| pets.into_iter().map(Pet::from).collect())
    }

    async fn insert(&self, owner_email: &str, new_pet: NewPet) -> Result<Pet> {
        let pet_db = PetDB {
            id: Uuid::new_v4().to_string(),
            owner_email: owner_email.to_string(),
            name: new_pet.name,
            category: new_pet.category,
            image: new_pet.image,
            location: new_pet.location,
            short_description: new_pet.short_description,
            long_description: new_pet.long_description,
            adopted: false,
            date_added: Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(pets::table)
                    .values(&pet_db)
                    .get_result::<PetDB>(conn)
                    .into_core()
                    .map(Pet::from)
            })
            .await
    }

    async fn update(&self, pet_id: &str, update: PetUpdate) -> Result<Pet> {
        let pet_id = pet_id.to_string();
        let changeset = PetChangesetDB::from(update);
        self.writer
            .exec(move |conn| {
                if changeset.has_changes() {
                    diesel::update(pets::table.find(&pet_id))
                        .set(&changeset)
                        .execute(conn)
                        .into_core()?;
                }
                pets::table
                    .find(&pet_id)
                    .first::<PetDB>(conn)
                    .into_core()
                    .map(Pet::from)
            })
            .await
    }

    async fn set_adopted(&self, pet_id: &str, adopted: bool) -> Result<Pet> {
        let pet_id = pet_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(pets::table.find(&pet_id))
                    .set(pets::adopted.eq(adopted))
                    .execute(conn)
                    .into_core()?;
                pets::table
                    .find(&pet_id)
                    .first::<PetDB>(conn)
                    .into_core()
                    .map(Pet::from)
            })
            .await
    }

    async fn delete(&self, pet_id: &str) -> Result<usize> {
        let pet_id = pet_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(pets::table.find(&pet_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
