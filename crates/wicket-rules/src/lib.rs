//! declarative role-based authorization rules for wicket.
//!
//! this crate implements rule registration and the decision engine. Rules use
//! deny-by-default semantics with first-grant-wins scanning: a request is
//! authorized as soon as one rule that applies to the attempted action names
//! either the reserved `public` role or a role the user holds. A rule that
//! does not apply (or applies but grants nothing) is skipped, not treated as
//! a denial, and a subject with no rules at all denies everything.
//!
//! # Example
//! ```
//! use wicket_rules::{Engine, RuleOptions, RuleSet};
//! use wicket_types::Token;
//!
//! let mut rules = RuleSet::new();
//! rules.register("admin", RuleOptions::all());
//! rules.register("public", RuleOptions::except(["new", "create"]));
//!
//! let engine = Engine::new(rules);
//! // anonymous visitors can browse, but not create
//! assert!(engine.authorized(None, &Token::new("index")));
//! assert!(!engine.authorized(None, &Token::new("create")));
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod rule;
pub mod ruleset;

pub use engine::{Engine, authorized};
pub use error::{Error, Result, Unauthorized};
pub use rule::{ActionList, RoleList, Rule, RuleOptions};
pub use ruleset::RuleSet;
