//! Delivery slot-planning board for a plant dispatch desk.
//!
//! Assigns pending client orders to hour × resource cells (loading ramps
//! and trucks) for a working day, with conflict detection, availability
//! checks, driver/truck allocation and a confirmation workflow. Everything
//! is in memory and synchronous; there is no backend.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `QueuedOrder`, `Resource`, `Slot`,
//!   `HourRange`, `Driver`, `Truck`
//! - **`board`**: `PlanningBoard`, one day's queue and slots with the
//!   placement, replace, removal, allocation and confirmation operations
//! - **`plan`**: `PlanBook`, day-keyed boards and copy-to-next-day
//! - **`view`**: `BoardSession`, the reducer that turns UI events into
//!   board operations, dialog state and toasts
//! - **`kpi`**: Summary figures for the dashboard cards
//! - **`validation`**: Structural checks and crew double-booking report
//! - **`config`**: Grid bounds and slot length, loadable from TOML
//! - **`seed`**: Reference lists and pending orders loaded at mount
//!
//! # Logging
//!
//! Operations emit `tracing` events; install a subscriber in the host
//! application to see them.

pub mod board;
pub mod config;
pub mod error;
pub mod kpi;
pub mod models;
pub mod plan;
pub mod seed;
pub mod validation;
pub mod view;
