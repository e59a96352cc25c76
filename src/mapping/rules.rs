//! Conditional rules that pick the option ids written to a choice field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::ChoiceKind;

/// The value a rule contributes: one option id, or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// A single option id.
    One(String),
    /// Several option ids.
    Many(Vec<String>),
}

/// "When the selector equals `selector`, write `value`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRule {
    /// Selector value this rule applies to.
    #[serde(deserialize_with = "crate::field::scalar_string")]
    pub selector: String,
    /// Value contributed when the rule applies.
    pub value: RuleValue,
}

/// Values of every rule whose selector equals `selector`, in rule order.
pub fn matching<'a>(
    rules: &'a [LookupRule],
    selector: &'a str,
) -> impl Iterator<Item = &'a RuleValue> + 'a {
    rules.iter().filter(move |rule| rule.selector == selector).map(|rule| &rule.value)
}

/// Builds the value ClickUp expects for a choice field.
///
/// Single-select fields take the first matching rule (the first id of a
/// list value) and become `""` when nothing matches. Multi-select fields
/// collect every matching id in rule order, duplicates included, and become
/// `[]` when nothing matches.
#[must_use]
pub fn map_choice(kind: ChoiceKind, rules: &[LookupRule], selector: &str) -> Value {
    let mut matched = matching(rules, selector);
    match kind {
        ChoiceKind::SingleSelect => {
            let id = match matched.next() {
                Some(RuleValue::One(id)) => id.clone(),
                Some(RuleValue::Many(ids)) => ids.first().cloned().unwrap_or_default(),
                None => String::new(),
            };
            Value::String(id)
        }
        ChoiceKind::MultiSelect => {
            let ids = matched
                .flat_map(|value| match value {
                    RuleValue::One(id) => vec![id.clone()],
                    RuleValue::Many(ids) => ids.clone(),
                })
                .map(Value::String)
                .collect();
            Value::Array(ids)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(selector: &str, value: &str) -> LookupRule {
        LookupRule { selector: selector.into(), value: RuleValue::One(value.into()) }
    }

    fn abz() -> Vec<LookupRule> {
        vec![rule("A", "x"), rule("A", "y"), rule("B", "z")]
    }

    #[test]
    fn multi_select_collects_every_match_in_order() {
        assert_eq!(map_choice(ChoiceKind::MultiSelect, &abz(), "A"), json!(["x", "y"]));
    }

    #[test]
    fn single_select_keeps_first_match() {
        assert_eq!(map_choice(ChoiceKind::SingleSelect, &abz(), "A"), json!("x"));
        assert_eq!(map_choice(ChoiceKind::SingleSelect, &abz(), "B"), json!("z"));
    }

    #[test]
    fn no_match_yields_empty_values() {
        assert_eq!(map_choice(ChoiceKind::SingleSelect, &abz(), "C"), json!(""));
        assert_eq!(map_choice(ChoiceKind::MultiSelect, &abz(), "C"), json!([]));
    }

    #[test]
    fn multi_select_keeps_duplicates_and_flattens_lists() {
        let rules = vec![
            rule("A", "x"),
            LookupRule { selector: "A".into(), value: RuleValue::Many(vec!["x".into(), "w".into()]) },
        ];
        assert_eq!(map_choice(ChoiceKind::MultiSelect, &rules, "A"), json!(["x", "x", "w"]));
    }

    #[test]
    fn single_select_takes_first_id_of_list_value() {
        let rules =
            vec![LookupRule { selector: "A".into(), value: RuleValue::Many(vec!["p".into(), "q".into()]) }];
        assert_eq!(map_choice(ChoiceKind::SingleSelect, &rules, "A"), json!("p"));
    }

    #[test]
    fn rule_value_accepts_string_or_list() {
        let one: LookupRule = serde_json::from_value(json!({"selector": "A", "value": "x"})).unwrap();
        assert_eq!(one.value, RuleValue::One("x".into()));
        let many: LookupRule =
            serde_json::from_value(json!({"selector": "A", "value": ["x", "y"]})).unwrap();
        assert_eq!(many.value, RuleValue::Many(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn numeric_rule_selector_matches_text_selector() {
        let rules: Vec<LookupRule> =
            serde_json::from_value(json!([{"selector": 1, "value": "x"}, {"selector": "2", "value": "y"}]))
                .unwrap();
        assert_eq!(map_choice(ChoiceKind::MultiSelect, &rules, "1"), json!(["x"]));
    }
}
