//! staff-report - staff performance reports via the visitor pattern
//!
//! Staff records ([`Engineer`], [`Manager`]) know nothing about reports.
//! A [`Visitor`] is dispatched to each record through [`Staff::accept`], and
//! [`StaffManager`] drives any number of visitors over its members in
//! insertion order.
//!
//! ```
//! use staff_report::{CtoVisitor, Engineer, Manager, StaffManager};
//!
//! let mut staff = StaffManager::new();
//! staff.add(Manager::new("张三").with_requirement_num(5));
//! staff.add(Engineer::new("小明").with_code_num(600));
//!
//! let mut cto = CtoVisitor::new();
//! staff.accept(&mut [&mut cto]);
//!
//! assert_eq!(
//!     cto.gen_report(),
//!     "产品经理:张三 需求量:5 评级:D\n工程师:小明 代码量:600 评级:D"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod roster;
pub mod staff;
pub mod staff_manager;
pub mod version;
pub mod visitor;

pub use error::{Error, ErrorCode, Result};
pub use roster::Roster;
pub use staff::{Engineer, Manager, Staff, StaffMember};
pub use staff_manager::StaffManager;
pub use visitor::{CtoVisitor, Grade, SharedVisitor, Visitor};
