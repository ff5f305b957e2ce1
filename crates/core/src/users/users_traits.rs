use async_trait::async_trait;

use crate::authz::{Identity, Role};
use crate::errors::Result;

use super::users_model::{NewUser, RegisterOutcome, User, UserProfileUpdate};

/// Trait defining the contract for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, email: &str, update: UserProfileUpdate) -> Result<User>;
    async fn set_role(&self, user_id: &str, role: Role) -> Result<User>;
}

/// Trait defining the contract for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<RegisterOutcome>;
    fn get_by_email(&self, identity: &Identity, email: &str) -> Result<User>;
    async fn update_profile(
        &self,
        identity: &Identity,
        email: &str,
        update: UserProfileUpdate,
    ) -> Result<User>;
    /// Live role lookup; unknown emails are plain members.
    fn get_role(&self, email: &str) -> Result<Role>;
    fn is_admin(&self, identity: &Identity, email: &str) -> Result<bool>;
    async fn grant_admin(&self, identity: &Identity, user_id: &str) -> Result<User>;
}
