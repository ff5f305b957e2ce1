use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use pawhaven_core::adoptions::{
    AdoptionRepositoryTrait, AdoptionRequest, AdoptionStatus, NewAdoptionRequest,
};
use pawhaven_core::Result;

use super::model::AdoptionRequestDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{adoption_requests, pets};

pub struct AdoptionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AdoptionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AdoptionRepositoryTrait for AdoptionRepository {
    fn find_by_id(&self, request_id: &str) -> Result<Option<AdoptionRequest>> {
        let mut conn = get_connection(&self.pool)?;
        adoption_requests::table
            .find(request_id)
            .first::<AdoptionRequestDB>(&mut conn)
            .optional()
            .into_core()
            .map(|request| request.map(AdoptionRequest::from))
    }

    fn find_pending(
        &self,
        pet_id: &str,
        requester_email: &str,
    ) -> Result<Option<AdoptionRequest>> {
        let mut conn = get_connection(&self.pool)?;
        adoption_requests::table
            .filter(adoption_requests::pet_id.eq(pet_id))
            .filter(adoption_requests::requester_email.eq(requester_email))
            .filter(adoption_requests::status.eq(AdoptionStatus::Pending.as_str()))
            .first::<AdoptionRequestDB>(&mut conn)
            .optional()
            .into_core()
            .map(|request| request.map(AdoptionRequest::from))
    }

    fn list_for_owner(&self, pet_owner_email: &str) -> Result<Vec<AdoptionRequest>> {
        let mut conn = get_connection(&self.pool)?;
        adoption_requests::table
            .filter(adoption_requests::pet_owner_email.eq(pet_owner_email))
            .order(adoption_requests::created_at.desc())
            .load::<AdoptionRequestDB>(&mut conn)
            .into_core()
            .map(|requests| requests.into_iter().map(AdoptionRequest::from).collect())
    }

    async fn insert(
        &self,
        new_request: NewAdoptionRequest,
        requester_email: &str,
        pet_owner_email: &str,
        pet_name: &str,
    ) -> Result<AdoptionRequest> {
        let request_db = AdoptionRequestDB {
            id: Uuid::new_v4().to_string(),
            pet_id: new_request.pet_id,
            pet_name: pet_name.to_string(),
            requester_email: requester_email.to_string(),
            requester_name: new_request.requester_name,
            requester_phone: new_request.requester_phone,
            requester_address: new_request.requester_address,
            pet_owner_email: pet_owner_email.to_string(),
            status: AdoptionStatus::Pending.as_str().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(adoption_requests::table)
                    .values(&request_db)
                    .get_result::<AdoptionRequestDB>(conn)
                    .into_core()
                    .map(AdoptionRequest::from)
            })
            .await
    }

    async fn set_status(
        &self,
        request_id: &str,
        status: AdoptionStatus,
    ) -> Result<AdoptionRequest> {
        let request_id = request_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(adoption_requests::table.find(&request_id))
                    .set(adoption_requests::status.eq(status.as_str()))
                    .execute(conn)
                    .into_core()?;
                adoption_requests::table
                    .find(&request_id)
                    .first::<AdoptionRequestDB>(conn)
                    .into_core()
                    .map(AdoptionRequest::from)
            })
            .await
    }

    async fn accept(&self, request_id: &str, pet_id: &str) -> Result<bool> {
        let request_id = request_id.to_string();
        let pet_id = pet_id.to_string();
        self.writer
            .exec(move |conn| {
                // The adopted flip is guarded on the flag still being
                // false; the loser of a concurrent accept changes nothing.
                let flipped = diesel::update(
                    pets::table
                        .find(&pet_id)
                        .filter(pets::adopted.eq(false)),
                )
                .set(pets::adopted.eq(true))
                .execute(conn)
                .into_core()?;
                if flipped == 0 {
                    return Ok(false);
                }
                diesel::update(adoption_requests::table.find(&request_id))
                    .set(adoption_requests::status.eq(AdoptionStatus::Accepted.as_str()))
                    .execute(conn)
                    .into_core()?;
                // Cascade: the pet is gone, so close out every other open
                // request for it.
                diesel::update(
                    adoption_requests::table
                        .filter(adoption_requests::pet_id.eq(&pet_id))
                        .filter(adoption_requests::id.ne(&request_id))
                        .filter(
                            adoption_requests::status.eq(AdoptionStatus::Pending.as_str()),
                        ),
                )
                .set(adoption_requests::status.eq(AdoptionStatus::Rejected.as_str()))
                .execute(conn)
                .into_core()?;
                Ok(true)
            })
            .await
    }
}
