//! Queued order model.
//!
//! An order is a client delivery waiting for a slot on the board. It lives
//! in the queue until placed; a placed slot embeds its own copy.

use serde::{Deserialize, Serialize};

/// An order awaiting placement on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedOrder {
    /// Unique order identifier.
    pub id: String,
    /// Commercial order number (e.g. `CMD-001`).
    pub order_number: String,
    /// Client name.
    pub client: String,
    /// Product to deliver (e.g. asphalt mix, concrete class).
    pub product: String,
    /// Quantity ordered, in `unit`.
    pub quantity: f64,
    /// Unit of measure (e.g. `t`, `mc`).
    pub unit: String,
    /// Delivery drop-off point.
    pub drop_off: String,
    /// Dispatch priority.
    pub priority: Priority,
    /// Estimated time of arrival, as shown to the dispatcher.
    pub eta: String,
    /// Distance to the drop-off point (km).
    pub distance_km: f64,
}

/// Order priority, ordered from least to most pressing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Can wait for a free slot.
    Low,
    /// Default priority.
    #[default]
    Normal,
    /// Should be placed today.
    High,
    /// Must be placed first.
    Urgent,
}

impl QueuedOrder {
    /// Creates a new order with the given ID and order number.
    pub fn new(id: impl Into<String>, order_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            client: String::new(),
            product: String::new(),
            quantity: 0.0,
            unit: "t".into(),
            drop_off: String::new(),
            priority: Priority::Normal,
            eta: String::new(),
            distance_km: 0.0,
        }
    }

    /// Sets the client name.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// Sets the product.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Sets quantity and unit.
    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = quantity;
        self.unit = unit.into();
        self
    }

    /// Sets the drop-off point.
    pub fn with_drop_off(mut self, drop_off: impl Into<String>) -> Self {
        self.drop_off = drop_off.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the ETA display string.
    pub fn with_eta(mut self, eta: impl Into<String>) -> Self {
        self.eta = eta.into();
        self
    }

    /// Sets the distance (km).
    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Whether the order is flagged urgent.
    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::Urgent
    }
}
