//! Planning board domain models.
//!
//! Provides the data types the board schedules with: orders waiting in
//! the queue, the resources forming the grid columns, placed slots, and
//! the static driver/truck reference lists.
//!
//! # Domain Mappings
//!
//! | slot-board | Plant dispatch | Scheduling theory |
//! |------------|----------------|-------------------|
//! | QueuedOrder | Client order | Job |
//! | Resource | Ramp / Truck | Machine |
//! | Slot | Loading window | Assignment |
//! | HourRange | Hours of the day | Time window |

mod fleet;
mod hours;
mod order;
mod resource;
mod slot;

pub use fleet::{Driver, Truck};
pub use hours::HourRange;
pub use order::{Priority, QueuedOrder};
pub use resource::{Resource, ResourceKind};
pub use slot::Slot;
