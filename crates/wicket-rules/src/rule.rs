//! rule type and registration-input normalization.

use serde::{Deserialize, Deserializer, Serialize};
use wicket_types::Token;

/// one authorization declaration: a role set plus an optional action filter.
///
/// in json form, `roles`, `only` and `except` each accept a single string or
/// an array of strings; `null` entries inside filter arrays are dropped and
/// every token is canonicalized on the way in:
///
/// ```
/// use wicket_rules::Rule;
///
/// let rule: Rule = serde_json::from_str(
///     r#"{"roles": "admin", "only": ["INDEX", null, "show"]}"#,
/// ).unwrap();
/// assert_eq!(rule.roles.len(), 1);
/// assert_eq!(rule.only.as_deref().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// roles that may grant access, in declaration order.
    ///
    /// duplicates are kept as declared; evaluation short-circuits on the
    /// first grant, so deduplication would change nothing.
    #[serde(deserialize_with = "roles_field")]
    pub roles: Vec<Token>,

    /// allow-list of actions this rule applies to.
    ///
    /// `None` applies the rule to all actions. an empty list is a filter
    /// that matches no action, so the rule never applies.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "filter_field")]
    pub only: Option<Vec<Token>>,

    /// deny-list of actions this rule does not apply to.
    ///
    /// a rule may carry both filters; an action must then be in `only` and
    /// not in `except` for the rule to apply.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "filter_field")]
    pub except: Option<Vec<Token>>,
}

impl Rule {
    /// whether this rule applies to `action` under its only/except filters.
    pub fn applies_to(&self, action: &Token) -> bool {
        if let Some(only) = &self.only
            && !only.contains(action)
        {
            return false;
        }
        if let Some(except) = &self.except
            && except.contains(action)
        {
            return false;
        }
        true
    }
}

/// a scalar or a list, as json rule fields accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

fn roles_field<'de, D>(deserializer: D) -> Result<Vec<Token>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(OneOrMany::<Token>::deserialize(deserializer)?.into())
}

// only invoked when the key is present; an absent key stays `None` via the
// serde default. a present `null` becomes an empty filter, matching the
// original option handling where a nil value was compacted away.
fn filter_field<'de, D>(deserializer: D) -> Result<Option<Vec<Token>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<OneOrMany<Option<Token>>>::deserialize(deserializer)?;
    let actions = match raw {
        None => Vec::new(),
        Some(entries) => Vec::from(entries)
            .into_iter()
            .flatten()
            .filter(|token| !token.is_empty())
            .collect(),
    };
    Ok(Some(actions))
}

/// a role list accepted by [`RuleSet::register`](crate::RuleSet::register).
///
/// converts from a single role or a collection of roles; input is kept
/// verbatim (normalized to tokens, but not filtered), so an empty role set
/// produces a rule that can never match rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleList(Vec<Token>);

impl RoleList {
    /// consume the list and return the normalized tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

impl From<Token> for RoleList {
    fn from(role: Token) -> Self {
        Self(vec![role])
    }
}

impl From<&str> for RoleList {
    fn from(role: &str) -> Self {
        Self(vec![Token::new(role)])
    }
}

impl From<String> for RoleList {
    fn from(role: String) -> Self {
        Self(vec![Token::new(role)])
    }
}

impl<T: Into<Token>> From<Vec<T>> for RoleList {
    fn from(roles: Vec<T>) -> Self {
        Self(roles.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Token>, const N: usize> From<[T; N]> for RoleList {
    fn from(roles: [T; N]) -> Self {
        Self(roles.into_iter().map(Into::into).collect())
    }
}

/// an action list accepted by [`RuleOptions`].
///
/// converts from a single action or a collection; entries that normalize to
/// the empty token are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionList(Vec<Token>);

impl ActionList {
    /// consume the list and return the normalized tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

fn normalize_actions<I, T>(actions: I) -> Vec<Token>
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    actions
        .into_iter()
        .map(Into::into)
        .filter(|token| !token.is_empty())
        .collect()
}

impl From<Token> for ActionList {
    fn from(action: Token) -> Self {
        Self(normalize_actions([action]))
    }
}

impl From<&str> for ActionList {
    fn from(action: &str) -> Self {
        Self(normalize_actions([Token::new(action)]))
    }
}

impl From<String> for ActionList {
    fn from(action: String) -> Self {
        Self(normalize_actions([Token::new(action)]))
    }
}

impl<T: Into<Token>> From<Vec<T>> for ActionList {
    fn from(actions: Vec<T>) -> Self {
        Self(normalize_actions(actions))
    }
}

impl<T: Into<Token>, const N: usize> From<[T; N]> for ActionList {
    fn from(actions: [T; N]) -> Self {
        Self(normalize_actions(actions))
    }
}

/// action-filter options for a rule registration.
///
/// the default applies the rule to every action. Both filters may be set;
/// an action must then pass both checks for the rule to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// allow-list of actions, if any.
    pub only: Option<ActionList>,
    /// deny-list of actions, if any.
    pub except: Option<ActionList>,
}

impl RuleOptions {
    /// apply the rule to all actions.
    pub fn all() -> Self {
        Self::default()
    }

    /// restrict the rule to the given actions.
    pub fn only(actions: impl Into<ActionList>) -> Self {
        Self {
            only: Some(actions.into()),
            except: None,
        }
    }

    /// apply the rule to all actions except the given ones.
    pub fn except(actions: impl Into<ActionList>) -> Self {
        Self {
            only: None,
            except: Some(actions.into()),
        }
    }
}
