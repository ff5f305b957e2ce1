#[cfg(test)]
mod tests {
    use crate::authz::{Identity, Role};
    use crate::errors::{Error, Result};
    use crate::users::{
        NewUser, User, UserProfileUpdate, UserRepositoryTrait, UserService, UserServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    // --- Mock UserRepository ---
    #[derive(Default)]
    struct MockUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl MockUserRepository {
        fn with_user(self, email: &str, role: Role) -> Self {
            self.users.lock().unwrap().push(User {
                id: format!("id-{email}"),
                email: email.to_string(),
                name: email.split('@').next().unwrap().to_string(),
                phone: None,
                address: None,
                role,
                created_at: Utc::now().naive_utc(),
            });
            self
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        async fn insert(&self, new_user: NewUser) -> Result<User> {
            let user = User {
                id: format!("id-{}", new_user.email),
                email: new_user.email,
                name: new_user.name,
                phone: new_user.phone,
                address: new_user.address,
                role: Role::Member,
                created_at: Utc::now().naive_utc(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update_profile(&self, email: &str, update: UserProfileUpdate) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.email == email)
                .expect("user exists");
            if let Some(name) = update.name {
                user.name = name;
            }
            if update.phone.is_some() {
                user.phone = update.phone;
            }
            if update.address.is_some() {
                user.address = update.address;
            }
            Ok(user.clone())
        }

        async fn set_role(&self, user_id: &str, role: Role) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .expect("user exists");
            user.role = role;
            Ok(user.clone())
        }
    }

    fn service(repo: MockUserRepository) -> UserService {
        UserService::new(Arc::new(repo))
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Some Person".to_string(),
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn register_is_idempotent_on_email() {
        let svc = service(MockUserRepository::default());
        let first = svc.register(new_user("mina@example.com")).await.unwrap();
        assert!(!first.already_existed);

        let second = svc.register(new_user("mina@example.com")).await.unwrap();
        assert!(second.already_existed);
        assert_eq!(second.user.id, first.user.id);
    }

    #[tokio::test]
    async fn register_rejects_invalid_email() {
        let svc = service(MockUserRepository::default());
        let err = svc.register(new_user("not-an-email")).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn profile_read_is_self_only() {
        let svc = service(
            MockUserRepository::default().with_user("mina@example.com", Role::Member),
        );
        let mina = Identity::new("mina@example.com");
        let other = Identity::new("other@example.com");

        assert!(svc.get_by_email(&mina, "mina@example.com").is_ok());
        assert!(matches!(
            svc.get_by_email(&other, "mina@example.com").unwrap_err(),
            Error::Forbidden(_)
        ));
    }

    #[test]
    fn role_lookup_defaults_to_member_for_unknown_email() {
        let svc = service(MockUserRepository::default());
        assert_eq!(svc.get_role("ghost@example.com").unwrap(), Role::Member);
    }

    #[tokio::test]
    async fn grant_admin_requires_admin_actor() {
        let svc = service(
            MockUserRepository::default()
                .with_user("root@example.com", Role::Admin)
                .with_user("mina@example.com", Role::Member),
        );

        let member = Identity::new("mina@example.com");
        let err = svc
            .grant_admin(&member, "id-root@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let admin = Identity::new("root@example.com");
        let updated = svc
            .grant_admin(&admin, "id-mina@example.com")
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Admin);
        // Role takes effect on the next lookup, not via the credential.
        assert_eq!(svc.get_role("mina@example.com").unwrap(), Role::Admin);
    }
}
