use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::context::UserRole;

/// One cart entry as the host application stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthState {
    pub authenticated: bool,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            role: UserRole::Visitor,
            display_name: None,
            email: None,
        }
    }
}

/// Read-only projection of the host application's store. This core only
/// ever reads it; mutation always goes through interface-tree actions
/// that the host's own handlers turn into store writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub cart: Vec<CartLine>,
    pub auth: AuthState,
}

impl StoreSnapshot {
    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(CartLine::subtotal).sum()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|l| l.quantity).sum()
    }
}

/// The application state store boundary: synchronous snapshot access,
/// multi-reader/single-writer by construction of the host framework.
pub trait StateStore: Send + Sync {
    fn snapshot(&self) -> StoreSnapshot;
}

/// In-memory store for the demo driver and tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    pub fn set(&self, snapshot: StoreSnapshot) {
        *self.inner.lock().expect("store lock poisoned") = snapshot;
    }
}

impl StateStore for MemoryStore {
    fn snapshot(&self) -> StoreSnapshot {
        self.inner.lock().expect("store lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_over_lines() {
        let snapshot = StoreSnapshot {
            cart: vec![
                CartLine {
                    name: "chocolates surtidos".into(),
                    quantity: 2,
                    unit_price: 150.0,
                },
                CartLine {
                    name: "ramo de flores".into(),
                    quantity: 1,
                    unit_price: 300.0,
                },
            ],
            auth: AuthState::default(),
        };
        assert_eq!(snapshot.cart_total(), 600.0);
        assert_eq!(snapshot.cart_count(), 3);
    }
}
