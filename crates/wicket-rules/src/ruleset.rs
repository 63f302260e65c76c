//! ordered rule storage for one authorizable subject.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rule::{ActionList, RoleList, Rule, RuleOptions};

/// an ordered sequence of rules owned by one authorizable subject (one
/// handler or controller type, not one instance).
///
/// a rule set is constructed explicitly at setup time and appended to by
/// [`register`](RuleSet::register); there is no hidden process-wide storage,
/// so test isolation is a fresh value rather than a reset hook. A set with
/// no rules denies everything.
///
/// # Example
/// ```
/// use wicket_rules::{RuleOptions, RuleSet};
///
/// let mut rules = RuleSet::new();
/// rules.register("manager", RuleOptions::only(["index", "show"]));
/// assert_eq!(rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    rules: Vec<Rule>,
}

impl RuleSet {
    /// create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// parse a rule set from json.
    ///
    /// the expected shape is `{"rules": [{"roles": ..., "only": ...,
    /// "except": ...}, ...]}`; see [`Rule`] for the field forms.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// append a rule for the given roles, normalized on the way in.
    ///
    /// `roles` accepts a single role or a collection; `options` carries the
    /// optional only/except action filters. Registration never fails: an
    /// empty role list simply produces a rule that can never match.
    pub fn register(&mut self, roles: impl Into<RoleList>, options: RuleOptions) {
        let RuleOptions { only, except } = options;
        self.rules.push(Rule {
            roles: roles.into().into_tokens(),
            only: only.map(ActionList::into_tokens),
            except: except.map(ActionList::into_tokens),
        });
    }

    /// clear all rules. Idempotent, safe to call when already empty.
    pub fn reset(&mut self) {
        self.rules.clear();
    }

    /// read-only view of the rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wicket_types::Token;

    #[test]
    fn test_register_single_role() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::all());

        assert_eq!(rules.len(), 1);
        let rule = &rules.rules()[0];
        assert_eq!(rule.roles, vec![Token::new("admin")]);
        assert!(rule.only.is_none());
        assert!(rule.except.is_none());
    }

    #[test]
    fn test_register_role_collection() {
        let mut rules = RuleSet::new();
        rules.register(["admin", "manager"], RuleOptions::all());

        assert_eq!(
            rules.rules()[0].roles,
            vec![Token::new("admin"), Token::new("manager")]
        );
    }

    #[test]
    fn test_register_combines_rules_in_order() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::all());
        rules.register("manager", RuleOptions::all());

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].roles, vec![Token::new("admin")]);
        assert_eq!(rules.rules()[1].roles, vec![Token::new("manager")]);
    }

    #[test]
    fn test_register_only_option() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::only(["show", "edit"]));

        assert_eq!(
            rules.rules()[0].only,
            Some(vec![Token::new("show"), Token::new("edit")])
        );
        assert!(rules.rules()[0].except.is_none());
    }

    #[test]
    fn test_register_except_option() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::except("index"));

        assert!(rules.rules()[0].only.is_none());
        assert_eq!(rules.rules()[0].except, Some(vec![Token::new("index")]));
    }

    #[test]
    fn test_register_canonicalizes_actions() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::only(["INDEX"]));

        assert_eq!(rules.rules()[0].only, Some(vec![Token::new("index")]));
    }

    #[test]
    fn test_register_keeps_duplicate_roles() {
        let mut rules = RuleSet::new();
        rules.register(["admin", "admin"], RuleOptions::all());

        assert_eq!(rules.rules()[0].roles.len(), 2);
    }

    #[test]
    fn test_register_empty_roles_not_guarded() {
        let mut rules = RuleSet::new();
        rules.register(Vec::<Token>::new(), RuleOptions::all());

        assert_eq!(rules.len(), 1);
        assert!(rules.rules()[0].roles.is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::all());

        rules.reset();
        assert!(rules.is_empty());
        assert!(rules.rules().is_empty());

        rules.reset();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "rules": [
                {"roles": "admin"},
                {"roles": ["public"], "except": ["new", "create"]}
            ]
        }"#;

        let rules = RuleSet::from_json(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].roles, vec![Token::new("admin")]);
        assert_eq!(
            rules.rules()[1].except,
            Some(vec![Token::new("new"), Token::new("create")])
        );
    }

    #[test]
    fn test_from_json_empty() {
        let rules = RuleSet::from_json(r#"{"rules": []}"#).unwrap();
        assert!(rules.is_empty());

        let rules = RuleSet::from_json("{}").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = RuleSet::from_json("not json");
        assert!(matches!(result.unwrap_err(), Error::ParseJson(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut rules = RuleSet::new();
        rules.register("admin", RuleOptions::only(["index"]));

        let json = serde_json::to_string(&rules).unwrap();
        let parsed = RuleSet::from_json(&json).unwrap();
        assert_eq!(parsed.rules(), rules.rules());
    }
}
