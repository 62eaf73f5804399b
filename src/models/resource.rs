//! Resource model.
//!
//! Resources are the columns of the planning grid: fixed loading ramps
//! at the plant and individual trucks. Each resource carries an
//! availability flag and optional blocked hour ranges (maintenance,
//! breakdowns).

use serde::{Deserialize, Serialize};

use super::HourRange;

/// A schedulable bay on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Resource classification.
    pub kind: ResourceKind,
    /// Whether the resource accepts slots at all today.
    pub available: bool,
    /// Hour ranges when the resource cannot take slots.
    pub blocked: Vec<HourRange>,
}

/// Resource classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Fixed loading ramp at the plant.
    Ramp,
    /// A specific truck.
    Truck,
}

impl Resource {
    /// Creates a new, available resource.
    pub fn new(id: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            available: true,
            blocked: Vec::new(),
        }
    }

    /// Creates a loading ramp.
    pub fn ramp(id: impl Into<String>) -> Self {
        Self::new(id, ResourceKind::Ramp)
    }

    /// Creates a truck column.
    pub fn truck(id: impl Into<String>) -> Self {
        Self::new(id, ResourceKind::Truck)
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Adds a blocked hour range.
    pub fn with_blocked(mut self, start: u32, end: u32) -> Self {
        self.blocked.push(HourRange::new(start, end));
        self
    }

    /// Whether a slot occupying `range` may be placed here.
    ///
    /// Returns `false` if the resource is flagged unavailable or if any
    /// blocked range overlaps `range`.
    pub fn accepts(&self, range: &HourRange) -> bool {
        self.available && !self.blocked.iter().any(|b| b.overlaps(range))
    }

    /// Hours of `window` this resource can actually be planned.
    pub fn plannable_hours(&self, window: &HourRange) -> u32 {
        if !self.available {
            return 0;
        }
        let blocked: u32 = self.blocked.iter().map(|b| b.overlap_hours(window)).sum();
        window.duration().saturating_sub(blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::ramp("rampa-1")
            .with_name("Rampa 1")
            .with_blocked(12, 13);

        assert_eq!(r.id, "rampa-1");
        assert_eq!(r.name, "Rampa 1");
        assert_eq!(r.kind, ResourceKind::Ramp);
        assert!(r.available);
        assert_eq!(r.blocked, vec![HourRange::new(12, 13)]);
    }

    #[test]
    fn test_resource_kinds() {
        assert_eq!(Resource::ramp("R").kind, ResourceKind::Ramp);
        assert_eq!(Resource::truck("T").kind, ResourceKind::Truck);
    }

    #[test]
    fn test_accepts_respects_flag_and_blocks() {
        let r = Resource::ramp("rampa-1").with_blocked(12, 14);
        assert!(r.accepts(&HourRange::new(8, 10)));
        assert!(!r.accepts(&HourRange::new(11, 13)));
        assert!(r.accepts(&HourRange::new(14, 16)));

        let off = Resource::ramp("rampa-3").with_available(false);
        assert!(!off.accepts(&HourRange::new(8, 10)));
    }

    #[test]
    fn test_plannable_hours() {
        let day = HourRange::new(6, 20);
        let r = Resource::truck("camion-1").with_blocked(12, 14);
        assert_eq!(r.plannable_hours(&day), 12);

        let off = Resource::truck("camion-2").with_available(false);
        assert_eq!(off.plannable_hours(&day), 0);
    }
}
