//! Client-side role flag. Presentation only; nothing is enforced.
use crate::error::StoreError;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store key holding the active role.
pub const ROLE_KEY: &str = "greyn.role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Investor,
    Corporate,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Investor, Self::Corporate, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Corporate => "corporate",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// Screens gated by the role flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Public,
    Corporate,
    Admin,
}

impl Area {
    /// Whether `role` may see this area.
    #[must_use]
    pub fn admits(self, role: Option<Role>) -> bool {
        match self {
            Self::Public => true,
            Self::Corporate => role == Some(Role::Corporate),
            Self::Admin => role == Some(Role::Admin),
        }
    }

    /// The role that opens this area, if any.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Public => None,
            Self::Corporate => Some(Role::Corporate),
            Self::Admin => Some(Role::Admin),
        }
    }
}

/// Read the persisted role. Absent, unreadable or unknown values mean none.
#[must_use]
pub fn load_role(store: &impl KvStore) -> Option<Role> {
    match store.get_item(ROLE_KEY) {
        Ok(Some(raw)) => raw.parse().ok(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("role unavailable: {err}");
            None
        }
    }
}

/// Persist or clear the role.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn save_role(store: &impl KvStore, role: Option<Role>) -> Result<(), StoreError> {
    match role {
        Some(role) => store.set_item(ROLE_KEY, role.as_str()),
        None => store.remove_item(ROLE_KEY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn role_round_trips_through_store() {
        let store = MemoryStore::new();
        assert_eq!(load_role(&store), None);
        save_role(&store, Some(Role::Corporate)).unwrap();
        assert_eq!(load_role(&store), Some(Role::Corporate));
        save_role(&store, None).unwrap();
        assert_eq!(load_role(&store), None);
    }

    #[test]
    fn unknown_role_is_ignored() {
        let store = MemoryStore::new();
        store.insert_raw(ROLE_KEY, "superuser");
        assert_eq!(load_role(&store), None);
    }

    #[test]
    fn areas_admit_matching_roles() {
        assert!(Area::Public.admits(None));
        assert!(Area::Corporate.admits(Some(Role::Corporate)));
        assert!(!Area::Corporate.admits(Some(Role::Admin)));
        assert!(!Area::Admin.admits(None));
        assert_eq!(Area::Admin.required_role(), Some(Role::Admin));
    }
}
