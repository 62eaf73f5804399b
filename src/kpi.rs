//! Board summary indicators.
//!
//! The numbers behind the dashboard cards shown above the planning grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Queued | Orders still waiting for a slot |
//! | Placed | Slots on the grid |
//! | Confirmed | Slots locked in by the dispatcher |
//! | Allocated | Slots with both driver and truck |
//! | Awaiting allocation | Placed slots missing a driver or truck |
//! | Urgent waiting | Urgent orders still in the queue |
//! | Placed quantity | Sum of quantities of placed orders |
//! | Utilization | Busy hours / plannable hours, per resource |

use std::collections::HashMap;

use crate::board::PlanningBoard;
use crate::models::Priority;

/// Board summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardKpi {
    pub queued: usize,
    pub placed: usize,
    pub confirmed: usize,
    pub allocated: usize,
    pub awaiting_allocation: usize,
    pub urgent_waiting: usize,
    /// Sum of placed order quantities (mixed units are summed as-is).
    pub placed_quantity: f64,
    /// Per-resource utilization (0.0..1.0), for resources with plannable hours.
    pub utilization_by_resource: HashMap<String, f64>,
    /// Mean of `utilization_by_resource` (0.0 if empty).
    pub avg_utilization: f64,
}

impl BoardKpi {
    /// Computes the summary for a board.
    pub fn calculate(board: &PlanningBoard) -> Self {
        let slots = board.slots();
        let placed = slots.len();
        let confirmed = slots.iter().filter(|s| s.confirmed).count();
        let allocated = slots.iter().filter(|s| s.is_allocated()).count();
        let placed_quantity = slots.iter().map(|s| s.order.quantity).sum();

        let day = board.config().working_day();
        let mut utilization_by_resource = HashMap::new();
        for resource in board.resources() {
            let capacity = resource.plannable_hours(&day);
            if capacity == 0 {
                continue;
            }
            let busy: u32 = slots
                .iter()
                .filter(|s| s.resource_id == resource.id)
                .map(|s| s.range().overlap_hours(&day))
                .sum();
            utilization_by_resource.insert(resource.id.clone(), busy as f64 / capacity as f64);
        }

        let avg_utilization = if utilization_by_resource.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_resource.values().sum();
            sum / utilization_by_resource.len() as f64
        };

        Self {
            queued: board.queue().len(),
            placed,
            confirmed,
            allocated,
            awaiting_allocation: placed - allocated,
            urgent_waiting: board.queued_with_priority(Priority::Urgent).count(),
            placed_quantity,
            utilization_by_resource,
            avg_utilization,
        }
    }

    /// Fraction of placed slots confirmed (1.0 when nothing is placed).
    pub fn confirmation_rate(&self) -> f64 {
        if self.placed == 0 {
            1.0
        } else {
            self.confirmed as f64 / self.placed as f64
        }
    }
}
