#[cfg(test)]
mod tests {
    use crate::adoptions::{
        AdoptionError, AdoptionRepositoryTrait, AdoptionRequest, AdoptionService,
        AdoptionServiceTrait, AdoptionStatus, NewAdoptionRequest,
    };
    use crate::authz::{Identity, Role};
    use crate::errors::{Error, Result};
    use crate::pets::{NewPet, Pet, PetServiceTrait, PetUpdate};
    use crate::users::{NewUser, RegisterOutcome, User, UserProfileUpdate, UserServiceTrait};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Shared in-memory store for pets and requests ---
    #[derive(Default)]
    struct Store {
        pets: HashMap<String, Pet>,
        requests: HashMap<String, AdoptionRequest>,
    }

    #[derive(Default)]
    struct MockAdoptionRepository {
        store: Arc<Mutex<Store>>,
    }

    #[async_trait]
    impl AdoptionRepositoryTrait for MockAdoptionRepository {
        fn find_by_id(&self, request_id: &str) -> Result<Option<AdoptionRequest>> {
            Ok(self.store.lock().unwrap().requests.get(request_id).cloned())
        }

        fn find_pending(
            &self,
            pet_id: &str,
            requester_email: &str,
        ) -> Result<Option<AdoptionRequest>> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .requests
                .values()
                .find(|r| {
                    r.pet_id == pet_id
                        && r.requester_email == requester_email
                        && r.status == AdoptionStatus::Pending
                })
                .cloned())
        }

        fn list_for_owner(&self, pet_owner_email: &str) -> Result<Vec<AdoptionRequest>> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .requests
                .values()
                .filter(|r| r.pet_owner_email == pet_owner_email)
                .cloned()
                .collect())
        }

        async fn insert(
            &self,
            new_request: NewAdoptionRequest,
            requester_email: &str,
            pet_owner_email: &str,
            pet_name: &str,
        ) -> Result<AdoptionRequest> {
            let mut store = self.store.lock().unwrap();
            let request = AdoptionRequest {
                id: format!("r{}", store.requests.len() + 1),
                pet_id: new_request.pet_id,
                pet_name: pet_name.to_string(),
                requester_email: requester_email.to_string(),
                requester_name: new_request.requester_name,
                requester_phone: new_request.requester_phone,
                requester_address: new_request.requester_address,
                pet_owner_email: pet_owner_email.to_string(),
                status: AdoptionStatus::Pending,
                created_at: Utc::now().naive_utc(),
            };
            store.requests.insert(request.id.clone(), request.clone());
            Ok(request)
        }

        async fn set_status(
            &self,
            request_id: &str,
            status: AdoptionStatus,
        ) -> Result<AdoptionRequest> {
            let mut store = self.store.lock().unwrap();
            let request = store.requests.get_mut(request_id).expect("request exists");
            request.status = status;
            Ok(request.clone())
        }

        async fn accept(&self, request_id: &str, pet_id: &str) -> Result<bool> {
            let mut store = self.store.lock().unwrap();
            match store.pets.get_mut(pet_id) {
                Some(pet) if !pet.adopted => pet.adopted = true,
                _ => return Ok(false),
            }
            for request in store.requests.values_mut() {
                if request.id == request_id {
                    request.status = AdoptionStatus::Accepted;
                } else if request.pet_id == pet_id && request.status == AdoptionStatus::Pending {
                    request.status = AdoptionStatus::Rejected;
                }
            }
            Ok(true)
        }
    }

    struct MockPetService {
        store: Arc<Mutex<Store>>,
    }

    #[async_trait]
    impl PetServiceTrait for MockPetService {
        async fn add_pet(&self, _identity: &Identity, _new_pet: NewPet) -> Result<Pet> {
            unimplemented!()
        }

        fn get_pet(&self, pet_id: &str) -> Result<Pet> {
            self.store
                .lock()
                .unwrap()
                .pets
                .get(pet_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Pet {pet_id} not found")))
        }

        fn list_by_owner(&self, _identity: &Identity, _email: &str) -> Result<Vec<Pet>> {
            unimplemented!()
        }

        async fn update_pet(
            &self,
            _identity: &Identity,
            _pet_id: &str,
            _update: PetUpdate,
        ) -> Result<Pet> {
            unimplemented!()
        }

        async fn set_adopted(
            &self,
            _identity: &Identity,
            _pet_id: &str,
            _adopted: bool,
        ) -> Result<Pet> {
            unimplemented!()
        }

        async fn delete_pet(&self, _identity: &Identity, _pet_id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    struct MockUserService {
        admins: Vec<String>,
    }

    #[async_trait]
    impl UserServiceTrait for MockUserService {
        async fn register(&self, _new_user: NewUser) -> Result<RegisterOutcome> {
            unimplemented!()
        }

        fn get_by_email(&self, _identity: &Identity, _email: &str) -> Result<User> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _identity: &Identity,
            _email: &str,
            _update: UserProfileUpdate,
        ) -> Result<User> {
            unimplemented!()
        }

        fn get_role(&self, email: &str) -> Result<Role> {
            Ok(if self.admins.iter().any(|a| a == email) {
                Role::Admin
            } else {
                Role::Member
            })
        }

        fn is_admin(&self, _identity: &Identity, email: &str) -> Result<bool> {
            Ok(self.get_role(email)?.is_admin())
        }

        async fn grant_admin(&self, _identity: &Identity, _user_id: &str) -> Result<User> {
            unimplemented!()
        }
    }

    struct Fixture {
        service: AdoptionService,
        store: Arc<Mutex<Store>>,
    }

    fn fixture(admins: &[&str]) -> Fixture {
        let store = Arc::new(Mutex::new(Store::default()));
        let service = AdoptionService::new(
            Arc::new(MockAdoptionRepository {
                store: store.clone(),
            }),
            Arc::new(MockPetService {
                store: store.clone(),
            }),
            Arc::new(MockUserService {
                admins: admins.iter().map(|s| s.to_string()).collect(),
            }),
        );
        Fixture { service, store }
    }

    fn seed_pet(store: &Arc<Mutex<Store>>, id: &str, owner: &str) {
        store.lock().unwrap().pets.insert(
            id.to_string(),
            Pet {
                id: id.to_string(),
                owner_email: owner.to_string(),
                name: "Biscuit".to_string(),
                category: Some("dog".to_string()),
                image: None,
                location: None,
                short_description: None,
                long_description: None,
                adopted: false,
                date_added: Utc::now().naive_utc(),
            },
        );
    }

    fn new_request(pet_id: &str) -> NewAdoptionRequest {
        NewAdoptionRequest {
            pet_id: pet_id.to_string(),
            requester_name: "Some Requester".to_string(),
            requester_phone: None,
            requester_address: None,
        }
    }

    fn owner() -> Identity {
        Identity::new("owner@example.com")
    }

    #[tokio::test]
    async fn duplicate_request_by_same_requester_is_rejected() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        let requester = Identity::new("req@example.com");

        fx.service
            .request(&requester, new_request("p1"))
            .await
            .unwrap();
        let err = fx
            .service
            .request(&requester, new_request("p1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Adoption(AdoptionError::DuplicateRequest)
        ));

        // A different requester for the same pet is fine.
        fx.service
            .request(&Identity::new("other@example.com"), new_request("p1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn request_for_unknown_pet_fails() {
        let fx = fixture(&[]);
        let err = fx
            .service
            .request(&Identity::new("req@example.com"), new_request("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Adoption(AdoptionError::PetNotFound(_))));
    }

    #[tokio::test]
    async fn accept_marks_pet_adopted_and_rejects_other_pending_requests() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");

        let first = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();
        let second = fx
            .service
            .request(&Identity::new("b@example.com"), new_request("p1"))
            .await
            .unwrap();

        let accepted = fx.service.accept(&owner(), &first.id).await.unwrap();
        assert_eq!(accepted.status, AdoptionStatus::Accepted);
        assert!(fx.store.lock().unwrap().pets["p1"].adopted);
        assert_eq!(
            fx.store.lock().unwrap().requests[&second.id].status,
            AdoptionStatus::Rejected
        );
    }

    #[tokio::test]
    async fn accept_by_non_owner_is_forbidden_and_changes_nothing() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        let request = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();

        let err = fx
            .service
            .accept(&Identity::new("mallory@example.com"), &request.id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
        assert!(!fx.store.lock().unwrap().pets["p1"].adopted);
        assert_eq!(
            fx.store.lock().unwrap().requests[&request.id].status,
            AdoptionStatus::Pending
        );
    }

    #[tokio::test]
    async fn losing_accept_race_yields_conflict() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        let request = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();

        // Another accept already flipped the pet.
        fx.store.lock().unwrap().pets.get_mut("p1").unwrap().adopted = true;

        let err = fx.service.accept(&owner(), &request.id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Adoption(AdoptionError::PetAlreadyAdopted)
        ));
    }

    #[tokio::test]
    async fn terminal_requests_cannot_transition_again() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        let request = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();

        fx.service.reject(&owner(), &request.id).await.unwrap();
        let err = fx.service.accept(&owner(), &request.id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Adoption(AdoptionError::AlreadyResolved(_))
        ));
    }

    #[tokio::test]
    async fn requesting_an_adopted_pet_fails() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        fx.store.lock().unwrap().pets.get_mut("p1").unwrap().adopted = true;

        let err = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Adoption(AdoptionError::PetAlreadyAdopted)
        ));
    }

    #[tokio::test]
    async fn admin_can_force_status_but_not_back_to_pending() {
        let fx = fixture(&["root@example.com"]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        let request = fx
            .service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();

        let admin = Identity::new("root@example.com");
        let resolved = fx
            .service
            .set_status(&admin, &request.id, AdoptionStatus::Rejected)
            .await
            .unwrap();
        assert_eq!(resolved.status, AdoptionStatus::Rejected);

        let err = fx
            .service
            .set_status(&admin, &request.id, AdoptionStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Adoption(AdoptionError::AlreadyResolved(_))
        ));
    }

    #[tokio::test]
    async fn has_requested_probe_tracks_pending_requests() {
        let fx = fixture(&[]);
        seed_pet(&fx.store, "p1", "owner@example.com");
        assert!(!fx.service.has_requested("p1", "a@example.com").unwrap());

        fx.service
            .request(&Identity::new("a@example.com"), new_request("p1"))
            .await
            .unwrap();
        assert!(fx.service.has_requested("p1", "a@example.com").unwrap());
    }
}
