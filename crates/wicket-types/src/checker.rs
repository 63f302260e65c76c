//! optional role-membership capability.

use std::collections::HashSet;

use crate::token::Token;

/// capability to answer whether a subject holds a given role.
///
/// a user type may or may not implement this; the evaluation engine receives
/// it as `Option<&dyn RoleChecker>` and treats `None` as "has no roles",
/// never as an error. implementations may be called several times per
/// decision (once per candidate role across rules), so answers should be
/// cheap and free of observable side effects.
pub trait RoleChecker {
    /// whether the subject holds `role`.
    fn has_role(&self, role: &Token) -> bool;
}

/// a plain granted-role set is already a checker.
impl RoleChecker for HashSet<Token> {
    fn has_role(&self, role: &Token) -> bool {
        self.contains(role)
    }
}

impl<T: RoleChecker + ?Sized> RoleChecker for &T {
    fn has_role(&self, role: &Token) -> bool {
        (**self).has_role(role)
    }
}
