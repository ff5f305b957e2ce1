use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::authz::{self, Identity, Role};
use crate::errors::{Error, Result};

use super::users_model::{NewUser, RegisterOutcome, User, UserProfileUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for managing users and resolving roles.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<RegisterOutcome> {
        new_user.validate()?;
        if let Some(existing) = self.repository.find_by_email(&new_user.email)? {
            debug!("registration for {} matched an existing user", existing.email);
            return Ok(RegisterOutcome {
                user: existing,
                already_existed: true,
            });
        }
        let user = self.repository.insert(new_user).await?;
        Ok(RegisterOutcome {
            user,
            already_existed: false,
        })
    }

    fn get_by_email(&self, identity: &Identity, email: &str) -> Result<User> {
        authz::ensure_self(identity, email)?;
        self.repository
            .find_by_email(email)?
            .ok_or_else(|| Error::NotFound(format!("User {email} not found")))
    }

    async fn update_profile(
        &self,
        identity: &Identity,
        email: &str,
        update: UserProfileUpdate,
    ) -> Result<User> {
        authz::ensure_self(identity, email)?;
        update.validate()?;
        self.repository
            .find_by_email(email)?
            .ok_or_else(|| Error::NotFound(format!("User {email} not found")))?;
        self.repository.update_profile(email, update).await
    }

    fn get_role(&self, email: &str) -> Result<Role> {
        Ok(self
            .repository
            .find_by_email(email)?
            .map(|user| user.role)
            .unwrap_or(Role::Member))
    }

    fn is_admin(&self, identity: &Identity, email: &str) -> Result<bool> {
        authz::ensure_self(identity, email)?;
        Ok(self.get_role(email)?.is_admin())
    }

    async fn grant_admin(&self, identity: &Identity, user_id: &str) -> Result<User> {
        let acting_role = self.get_role(&identity.email)?;
        authz::ensure_admin(acting_role)?;
        self.repository
            .find_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {user_id} not found")))?;
        self.repository.set_role(user_id, Role::Admin).await
    }
}
