//! Structural validation for a planning board.
//!
//! The board's own operations keep it consistent; these checks exist for
//! boards that arrive from elsewhere (deserialized, copied between days)
//! and for the crew double-booking report. Detects:
//! - Duplicate resource and slot IDs
//! - Slots referencing missing resources
//! - Overlapping slots on one resource
//! - Orders that are both queued and placed, or placed twice
//! - Slots not fully inside working hours
//!
//! Crew clashes (one driver or truck on two overlapping slots) are
//! reported separately and never fail validation.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::board::PlanningBoard;
use crate::models::Slot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A slot references a resource that doesn't exist.
    InvalidResourceReference,
    /// Two slots on one resource share at least one hour.
    OverlappingSlots,
    /// An order appears in more than one place.
    DuplicateOrder,
    /// A slot starts or ends outside the working day.
    OutsideWorkingHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a board's structure.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_board(board: &PlanningBoard) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_ids = HashSet::new();
    for r in board.resources() {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    let day = board.config().working_day();
    for s in board.slots() {
        if !slot_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", s.id),
            ));
        }
        if !resource_ids.contains(s.resource_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidResourceReference,
                format!("Slot '{}' references unknown resource '{}'", s.id, s.resource_id),
            ));
        }
        if !day.contains(s.start_hour) || s.end_hour() > day.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideWorkingHours,
                format!("Slot '{}' ({}) is outside {}", s.id, s.range(), day),
            ));
        }
    }

    let slots = board.slots();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.clashes_with(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingSlots,
                    format!(
                        "Slots '{}' ({}) and '{}' ({}) overlap on '{}'",
                        a.id,
                        a.range(),
                        b.id,
                        b.range(),
                        a.resource_id
                    ),
                ));
            }
        }
    }

    let mut seen_orders: HashMap<&str, usize> = HashMap::new();
    let queued = board.queue().iter().map(|o| o.id.as_str());
    let placed = board.slots().iter().map(|s| s.order.id.as_str());
    for id in queued.chain(placed) {
        *seen_orders.entry(id).or_insert(0) += 1;
    }
    let mut repeated: Vec<(&str, usize)> = seen_orders
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .collect();
    repeated.sort();
    for (id, n) in repeated {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateOrder,
            format!("Order '{id}' appears {n} times across queue and slots"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// What was double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewKind {
    Driver,
    Truck,
}

/// A driver or truck assigned to two slots whose hours overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewClash {
    pub kind: CrewKind,
    /// Driver name or truck plate.
    pub name: String,
    pub first_slot: String,
    pub second_slot: String,
}

impl std::fmt::Display for CrewClash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.kind {
            CrewKind::Driver => "Driver",
            CrewKind::Truck => "Truck",
        };
        write!(
            f,
            "{} {} is booked on overlapping slots {} and {}",
            what, self.name, self.first_slot, self.second_slot
        )
    }
}

/// Lists every driver/truck double-booking on the board.
pub fn crew_clashes(board: &PlanningBoard) -> Vec<CrewClash> {
    let slots = board.slots();
    let mut clashes = Vec::new();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            clashes.extend(pair_clashes(a, b));
        }
    }
    clashes
}

/// Double-bookings involving one slot.
pub fn crew_clashes_for(board: &PlanningBoard, slot_id: &str) -> Vec<CrewClash> {
    let Some(target) = board.slot(slot_id) else {
        return Vec::new();
    };
    board
        .slots()
        .iter()
        .filter(|other| other.id != target.id)
        .flat_map(|other| pair_clashes(other, target))
        .collect()
}

fn pair_clashes(a: &Slot, b: &Slot) -> Vec<CrewClash> {
    if !a.range().overlaps(&b.range()) {
        return Vec::new();
    }

    let mut out = Vec::new();
    let pairs = [
        (CrewKind::Driver, &a.driver, &b.driver),
        (CrewKind::Truck, &a.truck, &b.truck),
    ];
    for (kind, x, y) in pairs {
        if let (Some(x), Some(y)) = (x, y) {
            if x == y {
                out.push(CrewClash {
                    kind,
                    name: x.clone(),
                    first_slot: a.id.clone(),
                    second_slot: b.id.clone(),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::models::{QueuedOrder, Resource};

    fn slot(id: &str, resource_id: &str, start: u32, order_id: &str) -> Slot {
        Slot::new(id, resource_id, start, 2, QueuedOrder::new(order_id, order_id))
    }

    fn sample_board() -> PlanningBoard {
        PlanningBoard::new(
            BoardConfig::default(),
            vec![Resource::ramp("rampa-1"), Resource::ramp("rampa-2")],
        )
        .with_queue(vec![
            QueuedOrder::new("o1", "CMD-001"),
            QueuedOrder::new("o2", "CMD-002"),
            QueuedOrder::new("o3", "CMD-003"),
        ])
    }

    #[test]
    fn test_valid_board() {
        let mut board = sample_board();
        board.place_order("o1", "rampa-1", 8).unwrap();
        board.place_order("o2", "rampa-2", 8).unwrap();
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_duplicate_resource_id() {
        let mut board = sample_board();
        board.push_resource_unchecked(Resource::ramp("rampa-1"));

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("resource")));
    }

    #[test]
    fn test_overlap_and_unknown_resource() {
        let mut board = PlanningBoard::new(BoardConfig::default(), vec![Resource::ramp("rampa-1")]);
        board.push_slot_unchecked(slot("A", "rampa-1", 8, "o1"));
        board.push_slot_unchecked(slot("B", "rampa-1", 9, "o2"));
        board.push_slot_unchecked(slot("C", "ghost", 8, "o3"));

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingSlots));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidResourceReference));
    }

    #[test]
    fn test_order_queued_and_placed() {
        let mut board = sample_board();
        board.push_slot_unchecked(slot("A", "rampa-1", 8, "o1"));

        let errors = validate_board(&board).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateOrder);
    }

    #[test]
    fn test_slot_outside_working_hours() {
        let mut board = PlanningBoard::new(BoardConfig::default(), vec![Resource::ramp("rampa-1")]);
        board.push_slot_unchecked(slot("A", "rampa-1", 2, "o1"));
        board.push_slot_unchecked(slot("A", "rampa-1", 12, "o2"));

        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutsideWorkingHours));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("slot")));
    }

    #[test]
    fn test_slot_running_past_day_end() {
        let mut board = PlanningBoard::new(BoardConfig::default(), vec![Resource::ramp("rampa-1")]);
        // Starts inside 06-20 but ends at 21.
        board.push_slot_unchecked(slot("A", "rampa-1", 19, "o1"));

        let errors = validate_board(&board).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::OutsideWorkingHours);

        let mut board = PlanningBoard::new(BoardConfig::default(), vec![Resource::ramp("rampa-1")]);
        board.push_slot_unchecked(slot("A", "rampa-1", 18, "o1"));
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_crew_clashes() {
        let mut board = sample_board();
        let a = board.place_order("o1", "rampa-1", 8).unwrap();
        let b = board.place_order("o2", "rampa-2", 9).unwrap();
        let c = board.place_order("o3", "rampa-2", 12).unwrap();

        board.allocate(&a, "Ion Popescu", "B-123-ABC").unwrap();
        board.allocate(&b, "Ion Popescu", "B-123-ABC").unwrap();
        // Same crew, but hours don't overlap.
        board.allocate(&c, "Ion Popescu", "B-123-ABC").unwrap();

        let clashes = crew_clashes(&board);
        assert_eq!(clashes.len(), 2);
        assert!(clashes.iter().any(|x| x.kind == CrewKind::Driver));
        assert!(clashes.iter().any(|x| x.kind == CrewKind::Truck));
        assert!(clashes.iter().all(|x| x.first_slot == a && x.second_slot == b));

        assert!(crew_clashes_for(&board, &c).is_empty());
        assert_eq!(crew_clashes_for(&board, &b).len(), 2);
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_crew_clash_display() {
        let clash = CrewClash {
            kind: CrewKind::Truck,
            name: "B-123-ABC".into(),
            first_slot: "SLOT-0001".into(),
            second_slot: "SLOT-0002".into(),
        };
        assert_eq!(
            clash.to_string(),
            "Truck B-123-ABC is booked on overlapping slots SLOT-0001 and SLOT-0002"
        );
    }
}
