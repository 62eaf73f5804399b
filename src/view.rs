//! Board session: drag payload, hovered cell and dialog state.
//!
//! All user events go through [`BoardSession::dispatch`]. Exactly one
//! dialog can be open at a time ([`ViewState`]); every outcome the
//! dispatcher should see comes back as a list of [`Notice`]s (toasts).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slot_board::seed;
//! use slot_board::view::{Action, ViewState};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let mut session = seed::session(today);
//!
//! session.dispatch(Action::BeginDrag("ord-001".into()));
//! session.dispatch(Action::Drop { resource_id: "rampa-1".into(), hour: 8 });
//!
//! session.dispatch(Action::BeginDrag("ord-002".into()));
//! session.dispatch(Action::Drop { resource_id: "rampa-1".into(), hour: 9 });
//! assert!(matches!(session.view(), ViewState::Conflict { .. }));
//!
//! session.dispatch(Action::CancelDialog);
//! assert_eq!(session.board().unwrap().slots().len(), 1);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::PlanningBoard;
use crate::error::BoardError;
use crate::plan::PlanBook;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A non-blocking notification for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl From<BoardError> for Notice {
    fn from(err: BoardError) -> Self {
        Self::error(err.to_string())
    }
}

/// A grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub resource_id: String,
    pub hour: u32,
}

/// The one dialog currently open over the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    None,
    /// A drop hit occupied hours; waiting for replace or cancel.
    Conflict {
        order_id: String,
        resource_id: String,
        hour: u32,
        conflicting: Vec<String>,
    },
    /// Choosing driver and truck for a slot.
    Allocate {
        slot_id: String,
        driver: Option<String>,
        truck: Option<String>,
    },
    /// Asking to lock a slot in.
    ConfirmSlot { slot_id: String },
}

impl ViewState {
    /// The slot the open dialog is about, if any.
    fn slot_id(&self) -> Option<&str> {
        match self {
            ViewState::Allocate { slot_id, .. } | ViewState::ConfirmSlot { slot_id } => {
                Some(slot_id.as_str())
            }
            _ => None,
        }
    }
}

/// User events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    BeginDrag(String),
    HoverCell { resource_id: String, hour: u32 },
    LeaveCell,
    Drop { resource_id: String, hour: u32 },
    ConfirmReplace,
    CancelDialog,
    OpenAllocate(String),
    SelectDriver(String),
    SelectTruck(String),
    SubmitAllocate,
    RequestConfirm(String),
    Confirm,
    RemoveSlot(String),
    CopyToNextDay,
    SelectDate(NaiveDate),
}

/// One dispatcher's view of the plan book.
#[derive(Debug, Clone)]
pub struct BoardSession {
    book: PlanBook,
    date: NaiveDate,
    dragging: Option<String>,
    hovered: Option<Cell>,
    view: ViewState,
}

impl BoardSession {
    /// Starts a session on `date`, opening an empty day if needed.
    pub fn new(mut book: PlanBook, date: NaiveDate) -> Self {
        book.open_day(date, Vec::new());
        Self {
            book,
            date,
            dragging: None,
            hovered: None,
            view: ViewState::None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn book(&self) -> &PlanBook {
        &self.book
    }

    /// The board for the current day.
    pub fn board(&self) -> Option<&PlanningBoard> {
        self.book.day(self.date)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn hovered(&self) -> Option<&Cell> {
        self.hovered.as_ref()
    }

    /// Applies one user event.
    pub fn dispatch(&mut self, action: Action) -> Vec<Notice> {
        match action {
            Action::BeginDrag(order_id) => {
                tracing::debug!("Drag started: {}", order_id);
                self.dragging = Some(order_id);
                Vec::new()
            }
            Action::HoverCell { resource_id, hour } => {
                tracing::debug!("Hover {} at {:02}:00", resource_id, hour);
                self.hovered = Some(Cell { resource_id, hour });
                Vec::new()
            }
            Action::LeaveCell => {
                self.hovered = None;
                Vec::new()
            }
            Action::Drop { resource_id, hour } => self.on_drop(resource_id, hour),
            Action::ConfirmReplace => self.on_confirm_replace(),
            Action::CancelDialog => {
                self.view = ViewState::None;
                Vec::new()
            }
            Action::OpenAllocate(slot_id) => self.on_open_allocate(slot_id),
            Action::SelectDriver(name) => {
                if let ViewState::Allocate { driver, .. } = &mut self.view {
                    *driver = Some(name);
                }
                Vec::new()
            }
            Action::SelectTruck(plate) => {
                if let ViewState::Allocate { truck, .. } = &mut self.view {
                    *truck = Some(plate);
                }
                Vec::new()
            }
            Action::SubmitAllocate => self.on_submit_allocate(),
            Action::RequestConfirm(slot_id) => {
                if self.board().and_then(|b| b.slot(&slot_id)).is_none() {
                    return vec![BoardError::UnknownSlot(slot_id).into()];
                }
                self.view = ViewState::ConfirmSlot { slot_id };
                Vec::new()
            }
            Action::Confirm => self.on_confirm(),
            Action::RemoveSlot(slot_id) => self.on_remove(slot_id),
            Action::CopyToNextDay => match self.book.copy_to_next_day(self.date) {
                Ok(n) => vec![Notice::info(format!("{} slot(s) copied to the next day", n))],
                Err(e) => vec![e.into()],
            },
            Action::SelectDate(date) => {
                self.date = date;
                self.dragging = None;
                self.hovered = None;
                self.view = ViewState::None;
                self.book.open_day(date, Vec::new());
                Vec::new()
            }
        }
    }

    /// The current day's board, opened on demand.
    fn current(&mut self) -> &mut PlanningBoard {
        self.book.open_day(self.date, Vec::new())
    }

    fn on_drop(&mut self, resource_id: String, hour: u32) -> Vec<Notice> {
        self.hovered = None;
        let Some(order_id) = self.dragging.take() else {
            return vec![BoardError::NoDragPayload.into()];
        };

        let result = self.current().place_order(&order_id, &resource_id, hour);
        match result {
            Ok(slot_id) => vec![placed_notice(self.current(), &slot_id)],
            Err(BoardError::SlotConflict { conflicting, .. }) => {
                self.view = ViewState::Conflict {
                    order_id,
                    resource_id,
                    hour,
                    conflicting,
                };
                Vec::new()
            }
            Err(e) => vec![e.into()],
        }
    }

    fn on_confirm_replace(&mut self) -> Vec<Notice> {
        let ViewState::Conflict {
            order_id,
            resource_id,
            hour,
            ..
        } = self.view.clone()
        else {
            return Vec::new();
        };
        self.view = ViewState::None;

        let result = self.current().replace_and_place(&order_id, &resource_id, hour);
        match result {
            Ok(rep) => {
                let mut notices = vec![placed_notice(self.current(), &rep.slot_id)];
                notices.extend(rep.displaced.iter().map(|o| {
                    Notice::info(format!("Order {} returned to the queue", o.order_number))
                }));
                notices
            }
            Err(e) => vec![e.into()],
        }
    }

    fn on_open_allocate(&mut self, slot_id: String) -> Vec<Notice> {
        let Some((driver, truck)) = self
            .board()
            .and_then(|b| b.slot(&slot_id))
            .map(|s| (s.driver.clone(), s.truck.clone()))
        else {
            return vec![BoardError::UnknownSlot(slot_id).into()];
        };
        self.view = ViewState::Allocate {
            slot_id,
            driver,
            truck,
        };
        Vec::new()
    }

    fn on_submit_allocate(&mut self) -> Vec<Notice> {
        let ViewState::Allocate {
            slot_id,
            driver,
            truck,
        } = self.view.clone()
        else {
            return Vec::new();
        };

        let result = self.current().allocate(
            &slot_id,
            driver.as_deref().unwrap_or_default(),
            truck.as_deref().unwrap_or_default(),
        );
        match result {
            Ok(clashes) => {
                self.view = ViewState::None;
                let mut notices = vec![Notice::success(format!("Crew assigned to {}", slot_id))];
                notices.extend(clashes.iter().map(|c| Notice::warning(c.to_string())));
                notices
            }
            // Dialog stays open so the dispatcher can complete the form.
            Err(e @ BoardError::Validation(_)) => vec![e.into()],
            Err(e) => {
                self.view = ViewState::None;
                vec![e.into()]
            }
        }
    }

    fn on_confirm(&mut self) -> Vec<Notice> {
        let ViewState::ConfirmSlot { slot_id } = self.view.clone() else {
            return Vec::new();
        };
        self.view = ViewState::None;

        match self.current().confirm(&slot_id) {
            Ok(outcome) => {
                let mut notices = vec![Notice::success(format!("Slot {} confirmed", slot_id))];
                if outcome.without_driver {
                    notices.push(Notice::warning(format!(
                        "Slot {} has no driver assigned",
                        slot_id
                    )));
                }
                notices
            }
            Err(e) => vec![e.into()],
        }
    }

    fn on_remove(&mut self, slot_id: String) -> Vec<Notice> {
        let Some(order) = self.current().remove_slot(&slot_id) else {
            return Vec::new();
        };
        if self.view.slot_id() == Some(slot_id.as_str()) {
            self.view = ViewState::None;
        }
        vec![Notice::info(format!("Order {} returned to the queue", order.order_number))]
    }
}

fn placed_notice(board: &PlanningBoard, slot_id: &str) -> Notice {
    match board.slot(slot_id) {
        Some(slot) => {
            let resource = board
                .resource(&slot.resource_id)
                .map(|r| r.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(slot.resource_id.as_str());
            Notice::success(format!(
                "Order {} placed on {} at {:02}:00",
                slot.order.order_number, resource, slot.start_hour
            ))
        }
        None => Notice::success(format!("Slot {} created", slot_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn drop_order(
        session: &mut BoardSession,
        order_id: &str,
        resource_id: &str,
        hour: u32,
    ) -> Vec<Notice> {
        session.dispatch(Action::BeginDrag(order_id.into()));
        session.dispatch(Action::HoverCell {
            resource_id: resource_id.into(),
            hour,
        });
        session.dispatch(Action::Drop {
            resource_id: resource_id.into(),
            hour,
        })
    }

    fn first_slot_id(session: &BoardSession) -> String {
        session.board().unwrap().slots()[0].id.clone()
    }

    #[test]
    fn test_drag_and_hover_do_not_touch_board() {
        let mut session = seed::session(today());
        let before = session.board().unwrap().clone();

        session.dispatch(Action::BeginDrag("ord-001".into()));
        session.dispatch(Action::HoverCell {
            resource_id: "rampa-1".into(),
            hour: 8,
        });
        assert_eq!(session.dragging(), Some("ord-001"));
        assert_eq!(session.hovered().map(|c| c.hour), Some(8));
        assert_eq!(session.board().unwrap(), &before);

        session.dispatch(Action::LeaveCell);
        assert!(session.hovered().is_none());
    }

    #[test]
    fn test_drop_places_order() {
        // Scenario 1
        let mut session = seed::session(today());
        let notices = drop_order(&mut session, "ord-001", "rampa-1", 8);

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].message, "Order CMD-001 placed on Rampa 1 at 08:00");
        assert!(session.dragging().is_none());
        assert!(session.hovered().is_none());

        let board = session.board().unwrap();
        assert!(board.queue().iter().all(|o| o.order_number != "CMD-001"));
        let slot = &board.slots()[0];
        assert_eq!(slot.resource_id, "rampa-1");
        assert_eq!((slot.start_hour, slot.duration_hours), (8, 2));
        assert!(!slot.confirmed);
    }

    #[test]
    fn test_conflict_cancel_keeps_board() {
        // Scenario 2
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        let before = session.board().unwrap().clone();

        let notices = drop_order(&mut session, "ord-002", "rampa-1", 9);
        assert!(notices.is_empty());
        assert_eq!(
            session.view(),
            &ViewState::Conflict {
                order_id: "ord-002".into(),
                resource_id: "rampa-1".into(),
                hour: 9,
                conflicting: vec!["SLOT-0001".into()],
            }
        );
        assert_eq!(session.board().unwrap(), &before);

        session.dispatch(Action::CancelDialog);
        assert_eq!(session.view(), &ViewState::None);
        let board = session.board().unwrap();
        assert_eq!(board, &before);
        assert!(board.queued_order("ord-002").is_some());
    }

    #[test]
    fn test_conflict_confirm_replaces() {
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        drop_order(&mut session, "ord-002", "rampa-1", 9);

        let notices = session.dispatch(Action::ConfirmReplace);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].message, "Order CMD-001 returned to the queue");
        assert_eq!(session.view(), &ViewState::None);

        let board = session.board().unwrap();
        assert_eq!(board.slots().len(), 1);
        assert_eq!(board.slots()[0].order.id, "ord-002");
        assert!(board.queued_order("ord-001").is_some());
    }

    #[test]
    fn test_confirm_replace_without_conflict_is_noop() {
        let mut session = seed::session(today());
        assert!(session.dispatch(Action::ConfirmReplace).is_empty());
        assert!(session.board().unwrap().slots().is_empty());
    }

    #[test]
    fn test_drop_rejections() {
        let mut session = seed::session(today());
        let before = session.board().unwrap().clone();

        let notices = drop_order(&mut session, "ord-001", "rampa-3", 8);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Resource 'rampa-3' is not available");

        let notices = session.dispatch(Action::Drop {
            resource_id: "rampa-1".into(),
            hour: 8,
        });
        assert_eq!(notices, vec![Notice::error("Nothing is being dragged")]);

        assert_eq!(session.board().unwrap(), &before);
        assert_eq!(session.view(), &ViewState::None);
    }

    #[test]
    fn test_allocate_flow() {
        // Scenario 3
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        let slot_id = first_slot_id(&session);

        session.dispatch(Action::OpenAllocate(slot_id.clone()));
        session.dispatch(Action::SelectDriver("Ion Popescu".into()));

        // Missing truck: error toast, dialog stays, slot untouched.
        let notices = session.dispatch(Action::SubmitAllocate);
        assert_eq!(notices, vec![Notice::error("Select a truck")]);
        assert!(matches!(session.view(), ViewState::Allocate { .. }));
        assert!(session.board().unwrap().slots()[0].driver.is_none());

        session.dispatch(Action::SelectTruck("B-123-ABC".into()));
        let notices = session.dispatch(Action::SubmitAllocate);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(session.view(), &ViewState::None);

        let slot = &session.board().unwrap().slots()[0];
        assert_eq!(slot.driver.as_deref(), Some("Ion Popescu"));
        assert_eq!(slot.truck.as_deref(), Some("B-123-ABC"));

        // Re-opening pre-fills from the slot.
        session.dispatch(Action::OpenAllocate(slot_id.clone()));
        assert_eq!(
            session.view(),
            &ViewState::Allocate {
                slot_id,
                driver: Some("Ion Popescu".into()),
                truck: Some("B-123-ABC".into()),
            }
        );
    }

    #[test]
    fn test_allocate_double_booking_warns() {
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        drop_order(&mut session, "ord-002", "rampa-2", 8);
        let slots: Vec<String> = session
            .board()
            .unwrap()
            .slots()
            .iter()
            .map(|s| s.id.clone())
            .collect();

        for id in &slots {
            session.dispatch(Action::OpenAllocate(id.clone()));
            session.dispatch(Action::SelectDriver("Ion Popescu".into()));
            session.dispatch(Action::SelectTruck(format!("TRUCK-{id}")));
        }
        // Only the last dialog is open; submit it.
        let notices = session.dispatch(Action::SubmitAllocate);
        assert_eq!(notices.len(), 1);

        session.dispatch(Action::OpenAllocate(slots[0].clone()));
        session.dispatch(Action::SelectDriver("Ion Popescu".into()));
        session.dispatch(Action::SelectTruck("B-123-ABC".into()));
        let notices = session.dispatch(Action::SubmitAllocate);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].level, NoticeLevel::Warning);
        assert!(notices[1].message.contains("Ion Popescu"));
    }

    #[test]
    fn test_confirm_without_driver_warns() {
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        let slot_id = first_slot_id(&session);

        session.dispatch(Action::RequestConfirm(slot_id.clone()));
        assert_eq!(session.view(), &ViewState::ConfirmSlot { slot_id: slot_id.clone() });

        let notices = session.dispatch(Action::Confirm);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].level, NoticeLevel::Warning);
        assert!(session.board().unwrap().slots()[0].confirmed);
        assert_eq!(session.view(), &ViewState::None);
    }

    #[test]
    fn test_remove_slot_closes_its_dialog() {
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        let slot_id = first_slot_id(&session);
        let queued = session.board().unwrap().queue().len();

        session.dispatch(Action::OpenAllocate(slot_id.clone()));
        let notices = session.dispatch(Action::RemoveSlot(slot_id.clone()));
        assert_eq!(notices, vec![Notice::info("Order CMD-001 returned to the queue")]);
        assert_eq!(session.view(), &ViewState::None);
        assert_eq!(session.board().unwrap().queue().len(), queued + 1);

        // Second removal is silent.
        assert!(session.dispatch(Action::RemoveSlot(slot_id)).is_empty());
    }

    #[test]
    fn test_unknown_slot_dialogs() {
        let mut session = seed::session(today());
        let notices = session.dispatch(Action::OpenAllocate("SLOT-9999".into()));
        assert_eq!(notices[0].level, NoticeLevel::Error);
        let notices = session.dispatch(Action::RequestConfirm("SLOT-9999".into()));
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(session.view(), &ViewState::None);
    }

    #[test]
    fn test_copy_to_next_day_and_switch() {
        let mut session = seed::session(today());
        drop_order(&mut session, "ord-001", "rampa-1", 8);
        let slot_id = first_slot_id(&session);
        session.dispatch(Action::RequestConfirm(slot_id));
        session.dispatch(Action::Confirm);

        let notices = session.dispatch(Action::CopyToNextDay);
        assert_eq!(notices, vec![Notice::info("1 slot(s) copied to the next day")]);
        let notices = session.dispatch(Action::CopyToNextDay);
        assert_eq!(notices[0].level, NoticeLevel::Error);

        let tomorrow = today().succ_opt().unwrap();
        session.dispatch(Action::SelectDate(tomorrow));
        assert_eq!(session.date(), tomorrow);
        let board = session.board().unwrap();
        assert_eq!(board.slots().len(), 1);
        assert!(!board.slots()[0].confirmed);

        // Source day still confirmed.
        assert!(session.book().day(today()).unwrap().slots()[0].confirmed);
    }

    #[test]
    fn test_view_state_serializes_tagged() {
        let v = ViewState::ConfirmSlot {
            slot_id: "SLOT-0001".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "confirm_slot");
        assert_eq!(json["slot_id"], "SLOT-0001");

        let none = serde_json::to_value(ViewState::None).unwrap();
        assert_eq!(none["type"], "none");
    }
}
