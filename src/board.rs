//! The slot planning board.
//!
//! Holds one working day: the queue of orders waiting for a slot, the
//! slots already placed on the hour × resource grid, and the static
//! resource/driver/truck lists.
//!
//! # Invariants
//!
//! After every operation:
//! - no two slots on the same resource overlap in `[start, start + duration)`;
//! - every order is either in the queue or embedded in exactly one slot.
//!
//! # Example
//!
//! ```
//! use slot_board::board::PlanningBoard;
//! use slot_board::config::BoardConfig;
//! use slot_board::error::BoardError;
//! use slot_board::models::{Priority, QueuedOrder, Resource};
//!
//! let mut board = PlanningBoard::new(BoardConfig::default(), vec![Resource::ramp("rampa-1")])
//!     .with_queue(vec![
//!         QueuedOrder::new("o1", "CMD-001").with_priority(Priority::Urgent),
//!         QueuedOrder::new("o2", "CMD-002"),
//!     ]);
//!
//! let slot_id = board.place_order("o1", "rampa-1", 8).unwrap();
//! assert_eq!(board.slot(&slot_id).unwrap().range().end, 10);
//!
//! // 9 falls inside [8, 10): nothing is overwritten.
//! let err = board.place_order("o2", "rampa-1", 9).unwrap_err();
//! assert!(matches!(err, BoardError::SlotConflict { .. }));
//! assert_eq!(board.queue().len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::error::{AllocationError, BoardError};
use crate::models::{Driver, HourRange, Priority, QueuedOrder, Resource, Slot, Truck};
use crate::validation::{crew_clashes_for, CrewClash};

/// One day of delivery planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningBoard {
    config: BoardConfig,
    resources: Vec<Resource>,
    drivers: Vec<Driver>,
    trucks: Vec<Truck>,
    queue: Vec<QueuedOrder>,
    slots: Vec<Slot>,
    next_slot: u32,
}

/// Result of a confirmed replace.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    /// The newly created slot.
    pub slot_id: String,
    /// Orders that were pushed back to the queue.
    pub displaced: Vec<QueuedOrder>,
}

/// Result of confirming a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmOutcome {
    /// The slot was confirmed with no driver assigned.
    pub without_driver: bool,
}

impl PlanningBoard {
    /// Creates an empty board over the given resources.
    pub fn new(config: BoardConfig, resources: Vec<Resource>) -> Self {
        Self {
            config,
            resources,
            drivers: Vec::new(),
            trucks: Vec::new(),
            queue: Vec::new(),
            slots: Vec::new(),
            next_slot: 1,
        }
    }

    /// Seeds the queue.
    pub fn with_queue(mut self, queue: Vec<QueuedOrder>) -> Self {
        self.queue = queue;
        self
    }

    /// Sets the driver reference list.
    pub fn with_drivers(mut self, drivers: Vec<Driver>) -> Self {
        self.drivers = drivers;
        self
    }

    /// Sets the truck reference list.
    pub fn with_trucks(mut self, trucks: Vec<Truck>) -> Self {
        self.trucks = trucks;
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Orders waiting for a slot, in queue order.
    pub fn queue(&self) -> &[QueuedOrder] {
        &self.queue
    }

    /// Placed slots, in placement order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Queue sorted most pressing first; ties keep queue order.
    pub fn queue_by_priority(&self) -> Vec<&QueuedOrder> {
        let mut orders: Vec<&QueuedOrder> = self.queue.iter().collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.priority));
        orders
    }

    /// Queued orders of a given priority.
    pub fn queued_with_priority(&self, priority: Priority) -> impl Iterator<Item = &QueuedOrder> {
        self.queue.iter().filter(move |o| o.priority == priority)
    }

    pub fn resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == resource_id)
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn queued_order(&self, order_id: &str) -> Option<&QueuedOrder> {
        self.queue.iter().find(|o| o.id == order_id)
    }

    /// All slots on a resource, ordered by start hour.
    pub fn slots_for_resource(&self, resource_id: &str) -> Vec<&Slot> {
        let mut slots: Vec<&Slot> = self
            .slots
            .iter()
            .filter(|s| s.resource_id == resource_id)
            .collect();
        slots.sort_by_key(|s| s.start_hour);
        slots
    }

    /// The slot covering a grid cell, if any.
    pub fn slot_at(&self, resource_id: &str, hour: u32) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|s| s.resource_id == resource_id && s.range().contains(hour))
    }

    /// IDs of slots on `resource_id` that a new placement at `hour` would
    /// overlap.
    pub fn conflicts_at(&self, resource_id: &str, hour: u32) -> Vec<String> {
        let wanted = self.placement_range(hour);
        self.slots
            .iter()
            .filter(|s| s.resource_id == resource_id && s.range().overlaps(&wanted))
            .map(|s| s.id.clone())
            .collect()
    }

    /// Places a queued order on `resource_id` starting at `hour`.
    ///
    /// Never overwrites: if the new range overlaps an existing slot the
    /// board is left untouched and [`BoardError::SlotConflict`] is
    /// returned; use [`replace_and_place`](Self::replace_and_place) once
    /// the dispatcher confirms the replacement.
    ///
    /// # Returns
    /// The new slot's ID.
    pub fn place_order(
        &mut self,
        order_id: &str,
        resource_id: &str,
        hour: u32,
    ) -> Result<String, BoardError> {
        self.check_placement(order_id, resource_id, hour)?;

        let conflicting = self.conflicts_at(resource_id, hour);
        if !conflicting.is_empty() {
            tracing::warn!(
                "Order {} conflicts with {:?} on {} at {:02}:00",
                order_id,
                conflicting,
                resource_id,
                hour
            );
            return Err(BoardError::SlotConflict {
                resource_id: resource_id.to_string(),
                hour,
                conflicting,
            });
        }

        Ok(self.insert_slot(order_id, resource_id, hour))
    }

    /// Removes every slot in the way, then places the order.
    ///
    /// All checks other than occupancy run before anything is removed, so
    /// a failing replace leaves the existing slots in place.
    pub fn replace_and_place(
        &mut self,
        order_id: &str,
        resource_id: &str,
        hour: u32,
    ) -> Result<Replacement, BoardError> {
        self.check_placement(order_id, resource_id, hour)?;

        let conflicting = self.conflicts_at(resource_id, hour);
        let displaced: Vec<QueuedOrder> = conflicting
            .iter()
            .filter_map(|id| self.remove_slot(id))
            .collect();
        let slot_id = self.insert_slot(order_id, resource_id, hour);

        tracing::info!(
            "Slot {} replaced {} slot(s) on {}",
            slot_id,
            displaced.len(),
            resource_id
        );
        Ok(Replacement { slot_id, displaced })
    }

    /// Deletes a slot and appends its order to the back of the queue.
    ///
    /// Returns `None` (and changes nothing) for an unknown ID.
    pub fn remove_slot(&mut self, slot_id: &str) -> Option<QueuedOrder> {
        let idx = self.slots.iter().position(|s| s.id == slot_id)?;
        let slot = self.slots.remove(idx);
        tracing::info!(
            "Slot {} removed, order {} back in queue",
            slot.id,
            slot.order.order_number
        );
        self.queue.push(slot.order.clone());
        Some(slot.order)
    }

    /// Assigns a driver and a truck to a slot.
    ///
    /// Both must be non-blank; otherwise nothing changes. Double-booking
    /// across slots is reported, not prevented.
    ///
    /// # Returns
    /// Crew clashes involving this slot after the assignment.
    pub fn allocate(
        &mut self,
        slot_id: &str,
        driver: &str,
        truck: &str,
    ) -> Result<Vec<CrewClash>, BoardError> {
        let driver = driver.trim();
        let truck = truck.trim();
        if driver.is_empty() {
            return Err(AllocationError::MissingDriver.into());
        }
        if truck.is_empty() {
            return Err(AllocationError::MissingTruck.into());
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| BoardError::UnknownSlot(slot_id.to_string()))?;
        slot.driver = Some(driver.to_string());
        slot.truck = Some(truck.to_string());
        tracing::info!("Slot {} allocated to {} / {}", slot_id, driver, truck);

        let clashes = crew_clashes_for(self, slot_id);
        for clash in &clashes {
            tracing::warn!("{}", clash);
        }
        Ok(clashes)
    }

    /// Marks a slot as confirmed, whether or not it has a crew.
    pub fn confirm(&mut self, slot_id: &str) -> Result<ConfirmOutcome, BoardError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| BoardError::UnknownSlot(slot_id.to_string()))?;
        slot.confirmed = true;

        let without_driver = slot.driver.is_none();
        if without_driver {
            tracing::warn!("Slot {} confirmed without a driver", slot_id);
        } else {
            tracing::info!("Slot {} confirmed", slot_id);
        }
        Ok(ConfirmOutcome { without_driver })
    }

    /// Takes copies of other-day slots onto this board.
    ///
    /// Each copy gets a fresh ID and is unconfirmed; matching orders are
    /// pulled out of this board's queue so they are not planned twice.
    /// Callers guarantee the incoming slots do not overlap each other and
    /// that this board holds no slots.
    pub(crate) fn adopt_slots(&mut self, slots: &[Slot]) -> usize {
        for source in slots {
            let id = self.next_slot_id();
            self.queue.retain(|o| o.id != source.order.id);
            self.slots.push(Slot {
                id,
                confirmed: false,
                ..source.clone()
            });
        }
        slots.len()
    }

    fn placement_range(&self, hour: u32) -> HourRange {
        HourRange::starting_at(hour, self.config.slot_duration_hours)
    }

    fn check_placement(
        &self,
        order_id: &str,
        resource_id: &str,
        hour: u32,
    ) -> Result<(), BoardError> {
        let resource = self
            .resource(resource_id)
            .ok_or_else(|| BoardError::UnknownResource(resource_id.to_string()))?;

        // The whole slot must fit the grid, not just its first hour.
        let day = self.config.working_day();
        if !day.contains(hour) || self.placement_range(hour).end > day.end {
            return Err(BoardError::OutsideWorkingHours {
                hour,
                start: day.start,
                end: day.end,
            });
        }

        if !resource.accepts(&self.placement_range(hour)) {
            tracing::warn!("Drop rejected: {} unavailable at {:02}:00", resource_id, hour);
            return Err(BoardError::ResourceUnavailable(resource_id.to_string()));
        }

        if self.queued_order(order_id).is_none() {
            return Err(BoardError::UnknownOrder(order_id.to_string()));
        }
        Ok(())
    }

    /// Moves a queued order into a new slot. Checks must already have passed.
    fn insert_slot(&mut self, order_id: &str, resource_id: &str, hour: u32) -> String {
        let id = self.next_slot_id();
        if let Some(idx) = self.queue.iter().position(|o| o.id == order_id) {
            let order = self.queue.remove(idx);
            tracing::info!(
                "Order {} placed on {} at {:02}:00 as {}",
                order.order_number,
                resource_id,
                hour,
                id
            );
            self.slots.push(Slot::new(
                id.clone(),
                resource_id,
                hour,
                self.config.slot_duration_hours,
                order,
            ));
        }
        id
    }

    fn next_slot_id(&mut self) -> String {
        let id = format!("SLOT-{:04}", self.next_slot);
        self.next_slot += 1;
        id
    }

    #[cfg(test)]
    pub(crate) fn push_slot_unchecked(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    #[cfg(test)]
    pub(crate) fn push_resource_unchecked(&mut self, resource: Resource) {
        self.resources.push(resource);
    }
}
