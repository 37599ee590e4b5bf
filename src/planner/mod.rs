//! Request-level seat planning.
//!
//! # Submodules
//!
//! - **`request`**: [`SeatingRequest`] input payload
//! - **`seat_planner`**: [`SeatPlanner`] pipeline and its [`SeatPlan`] result
//! - **`kpi`**: [`SeatingKpi`] relation quality indicators
//! - **`grid`**: Export payload and [`SeatGrid`] chart layout for renderers

mod grid;
mod kpi;
mod request;
mod seat_planner;

pub use grid::{is_aisle_column, ExportRequest, ExportStudent, GridCell, SeatGrid, MAX_GRID_CELLS};
pub use kpi::SeatingKpi;
pub use request::SeatingRequest;
pub use seat_planner::{SeatPlan, SeatPlanner};
