//! Day-keyed plan store.
//!
//! Each calendar day gets its own [`PlanningBoard`]. All days share the
//! same configuration and reference lists (resources, drivers, trucks);
//! queues and slots are per day.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::board::PlanningBoard;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::models::{Driver, QueuedOrder, Resource, Truck};

/// Plans for a range of days.
#[derive(Debug, Clone)]
pub struct PlanBook {
    config: BoardConfig,
    resources: Vec<Resource>,
    drivers: Vec<Driver>,
    trucks: Vec<Truck>,
    days: BTreeMap<NaiveDate, PlanningBoard>,
}

impl PlanBook {
    /// Creates an empty book.
    pub fn new(config: BoardConfig, resources: Vec<Resource>) -> Self {
        Self {
            config,
            resources,
            drivers: Vec::new(),
            trucks: Vec::new(),
            days: BTreeMap::new(),
        }
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

    /// Opens a day seeded with `queue`.
    ///
    /// If the day is already open its board is returned unchanged and
    /// `queue` is dropped.
    pub fn open_day(&mut self, date: NaiveDate, queue: Vec<QueuedOrder>) -> &mut PlanningBoard {
        let Self {
            config,
            resources,
            drivers,
            trucks,
            days,
        } = self;
        days.entry(date).or_insert_with(|| {
            tracing::info!("Opening plan for {} with {} queued order(s)", date, queue.len());
            PlanningBoard::new(config.clone(), resources.clone())
                .with_drivers(drivers.clone())
                .with_trucks(trucks.clone())
                .with_queue(queue)
        })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&PlanningBoard> {
        self.days.get(&date)
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut PlanningBoard> {
        self.days.get_mut(&date)
    }

    pub fn is_open(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Open days in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Copies every slot of `date` onto the following day, unconfirmed.
    ///
    /// The source day is not modified. The target day is opened if needed
    /// and must not hold any slots yet.
    ///
    /// # Returns
    /// Number of slots copied.
    pub fn copy_to_next_day(&mut self, date: NaiveDate) -> Result<usize, BoardError> {
        let slots = self
            .days
            .get(&date)
            .ok_or(BoardError::DayNotOpen(date))?
            .slots()
            .to_vec();
        let next = date.succ_opt().ok_or(BoardError::DayNotOpen(date))?;

        let target = self.open_day(next, Vec::new());
        if !target.slots().is_empty() {
            tracing::warn!("Not copying {} onto {}: target already planned", date, next);
            return Err(BoardError::PlanAlreadyExists(next));
        }

        let copied = target.adopt_slots(&slots);
        tracing::info!("Copied {} slot(s) from {} to {}", copied, date, next);
        Ok(copied)
    }
}
