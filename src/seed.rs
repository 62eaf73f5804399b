//! Seed data loaded when the board is mounted.
//!
//! Three plant ramps, three trucks, the driver/truck reference lists and
//! the day's pending orders.

use chrono::NaiveDate;

use crate::board::PlanningBoard;
use crate::config::BoardConfig;
use crate::models::{Driver, Priority, QueuedOrder, Resource, Truck};
use crate::plan::PlanBook;
use crate::view::BoardSession;

pub fn resources() -> Vec<Resource> {
    vec![
        Resource::ramp("rampa-1").with_name("Rampa 1"),
        Resource::ramp("rampa-2").with_name("Rampa 2"),
        Resource::ramp("rampa-3")
            .with_name("Rampa 3 (mentenanta)")
            .with_available(false),
        Resource::truck("camion-1").with_name("B-123-ABC"),
        Resource::truck("camion-2").with_name("B-456-DEF"),
        Resource::truck("camion-3")
            .with_name("IF-78-XYZ")
            .with_blocked(12, 14),
    ]
}

pub fn drivers() -> Vec<Driver> {
    vec![
        Driver::new("sofer-1", "Ion Popescu").with_phone("0722 111 222"),
        Driver::new("sofer-2", "Vasile Ionescu").with_phone("0733 222 333"),
        Driver::new("sofer-3", "Gheorghe Marin").with_phone("0744 333 444"),
        Driver::new("sofer-4", "Andrei Dumitru").with_phone("0755 444 555"),
    ]
}

pub fn trucks() -> Vec<Truck> {
    vec![
        Truck::new("camion-1", "B-123-ABC", 25.0),
        Truck::new("camion-2", "B-456-DEF", 30.0),
        Truck::new("camion-3", "IF-78-XYZ", 18.0),
    ]
}

pub fn orders() -> Vec<QueuedOrder> {
    vec![
        QueuedOrder::new("ord-001", "CMD-001")
            .with_client("Drumuri Bucuresti SA")
            .with_product("BA16")
            .with_quantity(24.0, "t")
            .with_drop_off("Bd. Unirii, Sector 3")
            .with_priority(Priority::Urgent)
            .with_eta("07:30")
            .with_distance(12.5),
        QueuedOrder::new("ord-002", "CMD-002")
            .with_client("Construct Ilfov SRL")
            .with_product("BAD22.4")
            .with_quantity(30.0, "t")
            .with_drop_off("DJ101, Otopeni")
            .with_priority(Priority::High)
            .with_eta("09:00")
            .with_distance(21.0),
        QueuedOrder::new("ord-003", "CMD-003")
            .with_client("Primaria Voluntari")
            .with_product("C25/30")
            .with_quantity(8.0, "mc")
            .with_drop_off("Str. Erou Iancu Nicolae")
            .with_priority(Priority::Normal)
            .with_eta("10:15")
            .with_distance(9.0),
        QueuedOrder::new("ord-004", "CMD-004")
            .with_client("Infra Sud SA")
            .with_product("MASF16")
            .with_quantity(18.0, "t")
            .with_drop_off("A2 km 15")
            .with_priority(Priority::Low)
            .with_eta("13:00")
            .with_distance(34.0),
        QueuedOrder::new("ord-005", "CMD-005")
            .with_client("Rezidential Nord SRL")
            .with_product("C30/37")
            .with_quantity(12.0, "mc")
            .with_drop_off("Sos. Pipera 48")
            .with_priority(Priority::Normal)
            .with_eta("14:30")
            .with_distance(15.5),
    ]
}

/// A single-day board with the seed lists and queue.
pub fn board(config: BoardConfig) -> PlanningBoard {
    PlanningBoard::new(config, resources())
        .with_drivers(drivers())
        .with_trucks(trucks())
        .with_queue(orders())
}

/// An empty plan book over the seed reference lists.
pub fn book(config: BoardConfig) -> PlanBook {
    PlanBook::new(config, resources())
        .with_drivers(drivers())
        .with_trucks(trucks())
}

/// A session on `date` with the seed queue.
pub fn session(date: NaiveDate) -> BoardSession {
    let mut book = book(BoardConfig::default());
    book.open_day(date, orders());
    BoardSession::new(book, date)
}
