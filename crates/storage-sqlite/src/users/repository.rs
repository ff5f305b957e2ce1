use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use pawhaven_core::authz::Role;
use pawhaven_core::users::{NewUser, User, UserProfileUpdate, UserRepositoryTrait};
use pawhaven_core::Result;

use super::model::{UserDB, UserProfileChangesetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .filter(users::email.eq(email))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()
            .map(|user| user.map(User::from))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()
            .map(|user| user.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let user_db = UserDB {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            name: new_user.name,
            phone: new_user.phone,
            address: new_user.address,
            role: Role::Member.as_str().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(users::table)
                    .values(&user_db)
                    .get_result::<UserDB>(conn)
                    .into_core()
                    .map(User::from)
            })
            .await
    }

    async fn update_profile(&self, email: &str, update: UserProfileUpdate) -> Result<User> {
        let email = email.to_string();
        let changeset = UserProfileChangesetDB {
            name: update.name,
            phone: update.phone,
            address: update.address,
        };
        // Diesel rejects an empty changeset, so skip the update statement
        // when every field is None.
        let has_changes =
            changeset.name.is_some() || changeset.phone.is_some() || changeset.address.is_some();
        self.writer
            .exec(move |conn| {
                if has_changes {
                    diesel::update(users::table.filter(users::email.eq(&email)))
                        .set(&changeset)
                        .execute(conn)
                        .into_core()?;
                }
                users::table
                    .filter(users::email.eq(&email))
                    .first::<UserDB>(conn)
                    .into_core()
                    .map(User::from)
            })
            .await
    }

    async fn set_role(&self, user_id: &str, role: Role) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(users::table.find(&user_id))
                    .set(users::role.eq(role.as_str()))
                    .execute(conn)
                    .into_core()?;
                users::table
                    .find(&user_id)
                    .first::<UserDB>(conn)
                    .into_core()
                    .map(User::from)
            })
            .await
    }
}
