//! Job-shop domain models.
//!
//! Provides the problem instance, the solution encodings, and the
//! simulated schedule.
//!
//! # Domain Mappings
//!
//! | u-jobshop | Manufacturing | Healthcare | Logistics |
//! |-----------|--------------|------------|-----------|
//! | Instance | Production Order Book | Patient Pathways | Shipment Plan |
//! | Operation | Routing Step | Procedure | Transport Leg |
//! | Machine | Work Center | Operating Room | Dock |
//! | MachineOrder | Dispatch List | OR Sequence | Dock Sequence |
//! | Schedule | Production Plan | OR Schedule | Route Plan |

mod encoding;
mod instance;
mod schedule;

pub use encoding::{JobSequence, MachineOrder};
pub use instance::{Instance, Operation, Step};
pub use schedule::{Assignment, Schedule};
