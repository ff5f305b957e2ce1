#[cfg(test)]
mod tests {
    use crate::authz::{Identity, Role};
    use crate::campaigns::{
        Campaign, CampaignRepositoryTrait, CampaignService, CampaignServiceTrait, CampaignUpdate,
        NewCampaign,
    };
    use crate::errors::{Error, Result};
    use crate::users::{NewUser, RegisterOutcome, User, UserProfileUpdate, UserServiceTrait};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock role source ---
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

    // --- Mock CampaignRepository ---
    #[derive(Default)]
    struct MockCampaignRepository {
        campaigns: Arc<Mutex<HashMap<String, Campaign>>>,
    }

    impl MockCampaignRepository {
        fn seed(&self, id: &str, owner: &str, paused: bool) {
            self.campaigns.lock().unwrap().insert(
                id.to_string(),
                Campaign {
                    id: id.to_string(),
                    owner_email: owner.to_string(),
                    pet_name: "Biscuit".to_string(),
                    pet_image: None,
                    target_amount: dec!(500),
                    donated_amount: Decimal::ZERO,
                    end_date: None,
                    short_description: None,
                    long_description: None,
                    is_paused: paused,
                    created_at: Utc::now().naive_utc(),
                },
            );
        }
    }

    #[async_trait]
    impl CampaignRepositoryTrait for MockCampaignRepository {
        fn find_by_id(&self, campaign_id: &str) -> Result<Option<Campaign>> {
            Ok(self.campaigns.lock().unwrap().get(campaign_id).cloned())
        }

        fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Campaign>> {
            Ok(self
                .campaigns
                .lock()
                .unwrap()
                .values()
                .filter(|c| c.owner_email == owner_email)
                .cloned()
                .collect())
        }

        async fn insert(&self, owner_email: &str, new_campaign: NewCampaign) -> Result<Campaign> {
            let campaign = Campaign {
                id: format!("c{}", self.campaigns.lock().unwrap().len() + 1),
                owner_email: owner_email.to_string(),
                pet_name: new_campaign.pet_name,
                pet_image: new_campaign.pet_image,
                target_amount: new_campaign.target_amount,
                donated_amount: Decimal::ZERO,
                end_date: new_campaign.end_date,
                short_description: new_campaign.short_description,
                long_description: new_campaign.long_description,
                is_paused: false,
                created_at: Utc::now().naive_utc(),
            };
            self.campaigns
                .lock()
                .unwrap()
                .insert(campaign.id.clone(), campaign.clone());
            Ok(campaign)
        }

        async fn update(&self, campaign_id: &str, update: CampaignUpdate) -> Result<Campaign> {
            let mut campaigns = self.campaigns.lock().unwrap();
            let campaign = campaigns.get_mut(campaign_id).expect("campaign exists");
            if let Some(name) = update.pet_name {
                campaign.pet_name = name;
            }
            if let Some(target) = update.target_amount {
                campaign.target_amount = target;
            }
            Ok(campaign.clone())
        }

        async fn set_paused(&self, campaign_id: &str, paused: bool) -> Result<Campaign> {
            let mut campaigns = self.campaigns.lock().unwrap();
            let campaign = campaigns.get_mut(campaign_id).expect("campaign exists");
            campaign.is_paused = paused;
            Ok(campaign.clone())
        }
    }

    fn service(repo: MockCampaignRepository, admins: &[&str]) -> CampaignService {
        CampaignService::new(
            Arc::new(repo),
            Arc::new(MockUserService {
                admins: admins.iter().map(|s| s.to_string()).collect(),
            }),
        )
    }

    #[tokio::test]
    async fn create_starts_unpaused_with_zero_total() {
        let svc = service(MockCampaignRepository::default(), &[]);
        let campaign = svc
            .create(
                &Identity::new("owner@example.com"),
                NewCampaign {
                    pet_name: "Biscuit".to_string(),
                    pet_image: None,
                    target_amount: dec!(500),
                    end_date: None,
                    short_description: None,
                    long_description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(campaign.donated_amount, Decimal::ZERO);
        assert!(!campaign.is_paused);
        assert_eq!(campaign.owner_email, "owner@example.com");
    }

    #[tokio::test]
    async fn create_rejects_non_positive_target() {
        let svc = service(MockCampaignRepository::default(), &[]);
        let err = svc
            .create(
                &Identity::new("owner@example.com"),
                NewCampaign {
                    pet_name: "Biscuit".to_string(),
                    pet_image: None,
                    target_amount: dec!(0),
                    end_date: None,
                    short_description: None,
                    long_description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn edit_is_owner_or_admin() {
        let repo = MockCampaignRepository::default();
        repo.seed("c1", "owner@example.com", false);
        let svc = service(repo, &["root@example.com"]);

        let update = CampaignUpdate {
            pet_name: Some("Sir Biscuit".to_string()),
            ..Default::default()
        };

        let err = svc
            .edit(&Identity::new("other@example.com"), "c1", update.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let edited = svc
            .edit(&Identity::new("root@example.com"), "c1", update)
            .await
            .unwrap();
        assert_eq!(edited.pet_name, "Sir Biscuit");
    }

    #[tokio::test]
    async fn pause_toggle_is_owner_or_admin() {
        let repo = MockCampaignRepository::default();
        repo.seed("c1", "owner@example.com", false);
        let svc = service(repo, &[]);

        let paused = svc
            .set_paused(&Identity::new("owner@example.com"), "c1", true)
            .await
            .unwrap();
        assert!(paused.is_paused);

        let err = svc
            .set_paused(&Identity::new("other@example.com"), "c1", false)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[test]
    fn update_payload_cannot_name_the_derived_total() {
        // Editing the donated total must fail at the boundary, not be merged.
        let raw = r#"{"petName":"Biscuit","donatedAmount":"9999"}"#;
        assert!(serde_json::from_str::<CampaignUpdate>(raw).is_err());
    }
}
