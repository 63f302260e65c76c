//! the authorization decision engine.

use std::sync::Arc;

use tracing::{debug, trace};
use wicket_types::{RoleChecker, Token};

use crate::error::Unauthorized;
use crate::ruleset::RuleSet;

/// decide whether `user` may perform `action` under `rules`.
///
/// rules are scanned in declaration order. A rule whose action filter
/// excludes `action` is skipped; an applicable rule grants access as soon as
/// one of its roles is the reserved `public` token or a role the user's
/// checker confirms. An applicable rule that grants nothing is not a denial,
/// the scan continues. An empty rule set denies everything (fail closed),
/// and a missing checker (`None`) is treated as "has no roles", never as an
/// error.
///
/// evaluation is deterministic and side-effect-free apart from invoking the
/// checker, which may be called once per candidate role; results are not
/// cached.
pub fn authorized(rules: &RuleSet, user: Option<&dyn RoleChecker>, action: &Token) -> bool {
    if rules.is_empty() {
        trace!(%action, "no rules registered, denying");
        return false;
    }

    for rule in rules.rules() {
        if !rule.applies_to(action) {
            continue;
        }

        for role in &rule.roles {
            if role.is_public() || user.is_some_and(|u| u.has_role(role)) {
                debug!(%role, %action, "authorization granted");
                return true;
            }
        }
    }

    trace!(%action, "no rule granted access, denying");
    false
}

/// thread-safe authorization engine for one authorizable subject.
///
/// wraps a rule set in arc for cheap cloning and concurrent access. All
/// evaluation methods take `&self`, making the engine safe to share across
/// request handlers; [`update_rules`](Engine::update_rules) swaps the whole
/// snapshot, so readers holding a clone keep a consistent view.
pub struct Engine {
    rules: Arc<RuleSet>,
}

impl Engine {
    /// create an engine over the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// create an engine with no rules (deny all).
    pub fn empty() -> Self {
        Self::new(RuleSet::new())
    }

    /// replace the rule snapshot.
    pub fn update_rules(&mut self, rules: RuleSet) {
        self.rules = Arc::new(rules);
    }

    /// the current rule snapshot.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// whether `user` may perform `action`.
    pub fn authorized(&self, user: Option<&dyn RoleChecker>, action: &Token) -> bool {
        authorized(&self.rules, user, action)
    }

    /// whether `user` may perform the canonical default `index` action.
    pub fn authorized_default(&self, user: Option<&dyn RoleChecker>) -> bool {
        self.authorized(user, &Token::index())
    }

    /// enforcement convenience: `Err(Unauthorized)` when the check fails.
    ///
    /// the caller owning the request context turns the error into its own
    /// rejection signal; the decision itself never raises.
    pub fn ensure_authorized(
        &self,
        user: Option<&dyn RoleChecker>,
        action: &Token,
    ) -> Result<(), Unauthorized> {
        if self.authorized(user, action) {
            Ok(())
        } else {
            Err(Unauthorized)
        }
    }
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}
