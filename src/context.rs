use serde::{Deserialize, Serialize};

/// Role of the current session as far as gating is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Visitor,
    Customer,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Visitor
    }
}

/// Snapshot of where the user is and who they are.
/// Supplied fresh on every command; never cached past a single dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub pathname: String,
    pub is_authenticated: bool,
    pub role: UserRole,
}

impl PageContext {
    pub fn new(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            is_authenticated: false,
            role: UserRole::Visitor,
        }
    }

    pub fn authenticated(pathname: &str, role: UserRole) -> Self {
        Self {
            pathname: pathname.to_string(),
            is_authenticated: true,
            role,
        }
    }

    /// Case-insensitive substring match on the pathname.
    pub fn route_contains(&self, fragment: &str) -> bool {
        self.pathname.to_lowercase().contains(&fragment.to_lowercase())
    }

    pub fn is_home(&self) -> bool {
        let p = self.pathname.trim_end_matches('/');
        p.is_empty() || p == "/home" || p == "/inicio"
    }
}

/// Route prefixes the storefront knows about. The dispatcher's page
/// whitelists and the normalizer's keyword tables are keyed off these.
pub mod routes {
    pub const HOME: &str = "/";
    pub const CATALOG: &str = "/catalog";
    pub const CART: &str = "/cart";
    pub const PAYMENT: &str = "/payment";
    pub const PROFILE: &str = "/profile";
    pub const ADMIN: &str = "/admin";
    pub const TEST: &str = "/test";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_matching_is_case_insensitive() {
        let ctx = PageContext::new("/Catalog/chocolates");
        assert!(ctx.route_contains("catalog"));
        assert!(!ctx.route_contains("cart"));
    }

    #[test]
    fn home_detection() {
        assert!(PageContext::new("/").is_home());
        assert!(PageContext::new("").is_home());
        assert!(!PageContext::new("/cart").is_home());
    }
}
