//! Product manager staff records.

use serde::Deserialize;

use super::Staff;
use crate::visitor::Visitor;

/// A product manager, graded on the number of requirements handled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manager {
    name: String,

    /// Requirements handled
    #[serde(default)]
    pub requirement_num: i32,
}

impl Manager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement_num: 0,
        }
    }

    pub fn with_requirement_num(mut self, requirement_num: i32) -> Self {
        self.requirement_num = requirement_num;
        self
    }
}

impl Staff for Manager {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_manager(self);
    }
}
