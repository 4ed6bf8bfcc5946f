//! Staff records that can be walked by a [`Visitor`].
//!
//! Each concrete staff type implements [`Staff::accept`] by calling the
//! visitor method written for that type, so new reports can be added as
//! visitors without touching the staff types themselves.

pub mod engineer;
pub mod manager;

use serde::Deserialize;

use crate::visitor::Visitor;

pub use engineer::Engineer;
pub use manager::Manager;

/// Something a [`Visitor`] can be dispatched to.
pub trait Staff {
    /// Display name, fixed at construction.
    fn name(&self) -> &str;

    /// Hand `self` to the visitor method matching the concrete type.
    fn accept(&self, visitor: &mut dyn Visitor);
}

// ─────────────────────────────────────────────────────────────────
// Staff Member
// ─────────────────────────────────────────────────────────────────

/// The closed set of staff kinds.
///
/// Roster files tag each entry with `role = "engineer"` or `role = "manager"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum StaffMember {
    Engineer(Engineer),
    Manager(Manager),
}

impl StaffMember {
    /// Role label used in logs.
    pub fn role(&self) -> &'static str {
        match self {
            StaffMember::Engineer(_) => "engineer",
            StaffMember::Manager(_) => "manager",
        }
    }
}

impl Staff for StaffMember {
    fn name(&self) -> &str {
        match self {
            StaffMember::Engineer(e) => e.name(),
            StaffMember::Manager(m) => m.name(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            StaffMember::Engineer(e) => e.accept(visitor),
            StaffMember::Manager(m) => m.accept(visitor),
        }
    }
}

impl From<Engineer> for StaffMember {
    fn from(engineer: Engineer) -> Self {
        StaffMember::Engineer(engineer)
    }
}

impl From<Manager> for StaffMember {
    fn from(manager: Manager) -> Self {
        StaffMember::Manager(manager)
    }
}
