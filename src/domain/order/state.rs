//! Order history container — app-owned, SDK-provided update logic.

use super::Order;

/// The displayed order history: newest first by purchase timestamp.
///
/// Always rebuilt wholesale from the server's order list after any mutation;
/// orders are never merged in client-side.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire history with a fresh authoritative read.
    ///
    /// Sorts newest-first by purchase timestamp, so the invariant holds even
    /// if the server ever misorders a page.
    pub fn replace(&mut self, mut orders: Vec<Order>) {
        orders.sort_by(|a, b| b.purchase_timestamp.cmp(&a.purchase_timestamp));
        self.orders = orders;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}
