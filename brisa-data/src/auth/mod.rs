//! Auth Module
//!
//! Placeholder user resolution for the demo: admin status comes from a
//! hard-coded CPF allow-list, nothing is persisted. Must be replaced with a
//! real authentication service before any production use.

use serde::{Deserialize, Serialize};

/// CPFs granted admin access
const ADMIN_CPFS: &[&str] = &["12345678900", "00987654321"];

/// Resolved user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub cpf: String,
    pub is_admin: bool,
}

/// Resolve a user from a CPF
///
/// Pure allow-list membership; no store access, no CPF digit validation.
pub fn lookup_by_cpf(cpf: &str) -> User {
    User {
        cpf: cpf.to_string(),
        is_admin: ADMIN_CPFS.contains(&cpf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_listed_cpf_is_admin() {
        assert!(lookup_by_cpf("12345678900").is_admin);
        assert!(lookup_by_cpf("00987654321").is_admin);
    }

    #[test]
    fn test_unknown_cpf_is_not_admin() {
        let user = lookup_by_cpf("11122233344");
        assert_eq!(user.cpf, "11122233344");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_empty_cpf_is_not_admin() {
        assert!(!lookup_by_cpf("").is_admin);
    }
}
