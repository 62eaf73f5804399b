//! Slot model.
//!
//! A slot is a placed, time-boxed assignment of one order to one resource.
//! It embeds its own copy of the order so that removing the slot can hand
//! the order back to the queue unchanged.

use serde::{Deserialize, Serialize};

use super::{HourRange, QueuedOrder};

/// An order placed on a resource for a range of hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Resource the slot occupies.
    pub resource_id: String,
    /// First hour of the slot.
    pub start_hour: u32,
    /// Length of the slot (hours).
    pub duration_hours: u32,
    /// Assigned driver name.
    pub driver: Option<String>,
    /// Assigned truck plate.
    pub truck: Option<String>,
    /// Whether the dispatcher has locked the slot in.
    pub confirmed: bool,
    /// The placed order.
    pub order: QueuedOrder,
}

impl Slot {
    /// Creates an unconfirmed, unallocated slot.
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        start_hour: u32,
        duration_hours: u32,
        order: QueuedOrder,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            start_hour,
            duration_hours,
            driver: None,
            truck: None,
            confirmed: false,
            order,
        }
    }

    /// Hours occupied by this slot.
    #[inline]
    pub fn range(&self) -> HourRange {
        HourRange::starting_at(self.start_hour, self.duration_hours)
    }

    /// Hour after the last occupied one.
    #[inline]
    pub fn end_hour(&self) -> u32 {
        self.range().end
    }

    /// Whether both a driver and a truck are assigned.
    pub fn is_allocated(&self) -> bool {
        self.driver.is_some() && self.truck.is_some()
    }

    /// Whether this slot and `other` sit on the same resource and overlap.
    pub fn clashes_with(&self, other: &Slot) -> bool {
        self.resource_id == other.resource_id && self.range().overlaps(&other.range())
    }
}
