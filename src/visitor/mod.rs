//! Visitors over staff records.
//!
//! A [`Visitor`] has one method per concrete staff type. Staff call back into
//! the right method from [`Staff::accept`](crate::staff::Staff::accept), so the
//! visitor sees the concrete type without any downcasting.
//!
//! - `cto`: grades every member and builds the CTO performance report
//! - `shared`: a lockable handle for feeding one visitor from several threads

pub mod cto;
pub mod shared;

use crate::staff::{Engineer, Manager};

pub use cto::{CtoVisitor, Grade};
pub use shared::SharedVisitor;

/// Per-type callbacks invoked by [`Staff::accept`](crate::staff::Staff::accept).
pub trait Visitor {
    fn visit_engineer(&mut self, engineer: &Engineer);
    fn visit_manager(&mut self, manager: &Manager);
}
