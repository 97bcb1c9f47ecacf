//! Simulation domain models.
//!
//! Provides the core data types for describing a process set and the
//! outcome of simulating it.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input: id, arrival, burst, priority |
//! | `ProcessRecord` | Per-run copy carrying remaining/waiting/completion |
//! | `Slice` | One contiguous CPU grant |
//! | `Timeline` | Ordered slices of a run (Gantt chart) |

mod process;
mod timeline;

pub use process::{Process, ProcessRecord};
pub use timeline::{Slice, Timeline};
