//! Core types for taskpad.
//!
//! The task entity, the storage interface and the edit outcome shared by the
//! controller and its front ends.

mod edit;
mod task;
mod traits;

pub use edit::EditOutcome;
pub use task::Task;
pub use traits::TaskStore;

#[cfg(test)]
pub use traits::MockTaskStore;
