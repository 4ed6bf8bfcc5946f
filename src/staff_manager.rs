//! Ordered staff collection that drives visitors over its members.

use tracing::debug;

use crate::roster::Roster;
use crate::staff::{Staff, StaffMember};
use crate::visitor::Visitor;

/// Staff members in insertion order.
///
/// Insertion order is the order visitors see members in, and therefore the
/// order of any report they build. Members are never removed.
#[derive(Debug, Clone, Default)]
pub struct StaffManager {
    staffs: Vec<StaffMember>,
}

impl StaffManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member.
    pub fn add(&mut self, staff: impl Into<StaffMember>) {
        self.staffs.push(staff.into());
    }

    pub fn len(&self) -> usize {
        self.staffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staffs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StaffMember> {
        self.staffs.iter()
    }

    /// Apply every visitor to every member.
    ///
    /// Members are the outer loop and visitors the inner one, so each
    /// visitor sees members in insertion order. An empty `visitors` slice
    /// does nothing.
    pub fn accept(&self, visitors: &mut [&mut dyn Visitor]) {
        for staff in &self.staffs {
            for visitor in visitors.iter_mut() {
                staff.accept(&mut **visitor);
            }
        }

        debug!(
            staff = self.staffs.len(),
            visitors = visitors.len(),
            "Traversal complete"
        );
    }
}

impl From<Roster> for StaffManager {
    fn from(roster: Roster) -> Self {
        roster.staff.into_iter().collect()
    }
}

impl FromIterator<StaffMember> for StaffManager {
    fn from_iter<I: IntoIterator<Item = StaffMember>>(iter: I) -> Self {
        Self {
            staffs: iter.into_iter().collect(),
        }
    }
}

impl Extend<StaffMember> for StaffManager {
    fn extend<I: IntoIterator<Item = StaffMember>>(&mut self, iter: I) {
        self.staffs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StaffManager {
    type Item = &'a StaffMember;
    type IntoIter = std::slice::Iter<'a, StaffMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.staffs.iter()
    }
}
