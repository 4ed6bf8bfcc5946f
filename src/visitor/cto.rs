//! CTO performance report.
//!
//! Grades engineers by code volume and managers by requirement volume, and
//! keeps one report line per visit in visiting order.

use std::fmt;

use tracing::debug;

use super::Visitor;
use crate::staff::{Engineer, Manager, Staff};

// ─────────────────────────────────────────────────────────────────
// Grade
// ─────────────────────────────────────────────────────────────────

/// Letter grade, A best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Grade an engineer's code volume.
    ///
    /// Exactly 100_000 falls into no band and keeps the starting grade D,
    /// as do negative counts. This gap is most likely unintended, but report
    /// output depends on it, so it stays until the report format is revised.
    pub fn for_code_num(code_num: i32) -> Self {
        match code_num {
            0..=999 => Grade::D,
            1_000..=9_999 => Grade::C,
            10_000..=99_999 => Grade::B,
            n if n > 100_000 => Grade::A,
            _ => Grade::D,
        }
    }

    /// Grade a manager's requirement volume.
    ///
    /// Same shape as [`Grade::for_code_num`]: exactly 30 and negative counts
    /// fall back to D.
    pub fn for_requirement_num(requirement_num: i32) -> Self {
        match requirement_num {
            0..=9 => Grade::D,
            10..=19 => Grade::C,
            20..=29 => Grade::B,
            n if n > 30 => Grade::A,
            _ => Grade::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// CTO Visitor
// ─────────────────────────────────────────────────────────────────

/// Accumulates one graded line per visited staff member.
#[derive(Debug, Clone, Default)]
pub struct CtoVisitor {
    performances: Vec<String>,
}

impl CtoVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far, in visiting order.
    pub fn performances(&self) -> &[String] {
        &self.performances
    }

    /// All lines joined with `\n`; empty if nothing was visited.
    pub fn gen_report(&self) -> String {
        self.performances.join("\n")
    }
}

impl Visitor for CtoVisitor {
    fn visit_engineer(&mut self, engineer: &Engineer) {
        let grade = Grade::for_code_num(engineer.code_num);
        debug!(
            name = %engineer.name(),
            code_num = engineer.code_num,
            grade = %grade,
            "Graded engineer"
        );
        self.performances.push(format!(
            "工程师:{} 代码量:{} 评级:{}",
            engineer.name(),
            engineer.code_num,
            grade
        ));
    }

    fn visit_manager(&mut self, manager: &Manager) {
        let grade = Grade::for_requirement_num(manager.requirement_num);
        debug!(
            name = %manager.name(),
            requirement_num = manager.requirement_num,
            grade = %grade,
            "Graded manager"
        );
        self.performances.push(format!(
            "产品经理:{} 需求量:{} 评级:{}",
            manager.name(),
            manager.requirement_num,
            grade
        ));
    }
}
