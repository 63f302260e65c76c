//! core types for wicket - declarative role-based authorization rules.
//!
//! this crate provides the fundamental data structures used throughout wicket:
//! - [`Token`]: canonical comparable identifier for roles and actions
//! - [`RoleChecker`]: optional role-membership capability a user type may implement

#![warn(missing_docs)]

mod checker;
mod token;

pub use checker::RoleChecker;
pub use token::{DEFAULT_ACTION, PUBLIC_ROLE, Token};
