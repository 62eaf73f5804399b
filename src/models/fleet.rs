//! Driver and truck reference lists.
//!
//! Static for the session; used to populate the allocation choices.

use serde::{Deserialize, Serialize};

/// A driver that can be allocated to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// A truck that can be allocated to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    /// Registration plate (e.g. `B-123-ABC`).
    pub plate: String,
    /// Payload capacity (tonnes).
    pub capacity_tonnes: f64,
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

impl Truck {
    pub fn new(id: impl Into<String>, plate: impl Into<String>, capacity_tonnes: f64) -> Self {
        Self {
            id: id.into(),
            plate: plate.into(),
            capacity_tonnes,
        }
    }
}
