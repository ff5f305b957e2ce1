//! Authorization policy.
//!
//! Pure allow/deny decisions over a verified identity and a resource's
//! ownership attributes. The caller resolves the role from the user store
//! at decision time, so a revoked admin loses access on the next request.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Verified subject identity produced by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Role attached to a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    /// Parses a stored role string. Anything but `admin` is a member.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Member
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Allows only the subject itself.
pub fn ensure_self(identity: &Identity, target_email: &str) -> Result<()> {
    if identity.email == target_email {
        Ok(())
    } else {
        Err(forbidden())
    }
}

/// Allows the subject itself or an admin.
pub fn ensure_self_or_admin(identity: &Identity, target_email: &str, role: Role) -> Result<()> {
    if identity.email == target_email || role.is_admin() {
        Ok(())
    } else {
        Err(forbidden())
    }
}

/// Allows the resource owner or an admin.
pub fn ensure_owner_or_admin(identity: &Identity, owner_email: &str, role: Role) -> Result<()> {
    if identity.email == owner_email || role.is_admin() {
        Ok(())
    } else {
        Err(forbidden())
    }
}

/// Allows admins only.
pub fn ensure_admin(role: Role) -> Result<()> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(forbidden())
    }
}

fn forbidden() -> Error {
    Error::Forbidden("forbidden access".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::new("alice@example.com")
    }

    #[test]
    fn self_check_matches_exact_email() {
        assert!(ensure_self(&alice(), "alice@example.com").is_ok());
        assert!(ensure_self(&alice(), "bob@example.com").is_err());
    }

    #[test]
    fn owner_or_admin_allows_owner() {
        assert!(ensure_owner_or_admin(&alice(), "alice@example.com", Role::Member).is_ok());
    }

    #[test]
    fn owner_or_admin_allows_admin_on_foreign_resource() {
        assert!(ensure_owner_or_admin(&alice(), "bob@example.com", Role::Admin).is_ok());
    }

    #[test]
    fn owner_or_admin_denies_member_on_foreign_resource() {
        let err = ensure_owner_or_admin(&alice(), "bob@example.com", Role::Member).unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[test]
    fn admin_only_denies_member() {
        assert!(ensure_admin(Role::Admin).is_ok());
        assert!(ensure_admin(Role::Member).is_err());
    }

    #[test]
    fn role_parsing_defaults_to_member() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("member"), Role::Member);
        assert_eq!(Role::parse(""), Role::Member);
        assert_eq!(Role::parse("gardener"), Role::Member);
    }
}
