//! Engineer staff records.

use serde::Deserialize;

use super::Staff;
use crate::visitor::Visitor;

/// An engineer, graded on the amount of code produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Engineer {
    name: String,

    /// Lines (units) of code produced
    #[serde(default)]
    pub code_num: i32,
}

impl Engineer {
    /// Create an engineer with no code recorded yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code_num: 0,
        }
    }

    /// Set the code count while building.
    pub fn with_code_num(mut self, code_num: i32) -> Self {
        self.code_num = code_num;
        self
    }
}

impl Staff for Engineer {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_engineer(self);
    }
}
