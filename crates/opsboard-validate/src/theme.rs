use std::collections::BTreeMap;

use serde_json::Value;

use opsboard_model::{THEME_TOKENS, Theme, ThemeGroup, ThemeSource, tokens_for_group};

use crate::coerce::{non_blank, value_kind, warn_unknown_fields};
use crate::warning::{SanitizeWarning, Warnings};

const THEME_FIELDS: &[&str] = &["palette", "typography", "shape"];

/// Builds a theme from the raw `theme` value.
///
/// Returns `None` both when no theme was supplied and when nothing in it was
/// usable. A bad token only drops that token.
pub(crate) fn sanitize_theme(raw: Option<&Value>, warnings: &mut Warnings) -> Option<Theme> {
    let raw = match raw {
        None | Some(Value::Null) => return None,
        Some(raw) => raw,
    };
    let Some(groups) = raw.as_object() else {
        warnings.push(SanitizeWarning::ThemeNotObject {
            found: value_kind(raw),
        });
        return None;
    };
    warn_unknown_fields(groups, THEME_FIELDS, "theme", warnings);

    let mut source = ThemeSource::default();
    let mut css_variables = BTreeMap::new();
    for group in ThemeGroup::ALL {
        let group_value = match groups.get(group.key()) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        let Some(tokens) = group_value.as_object() else {
            warnings.push(SanitizeWarning::ThemeGroupNotObject { group: group.key() });
            continue;
        };
        let allowed: Vec<&str> = tokens_for_group(group).map(|token| token.key).collect();
        warn_unknown_fields(tokens, &allowed, &format!("theme.{group}"), warnings);

        let mut accepted = BTreeMap::new();
        for (key, value) in tokens {
            let Some(token) = THEME_TOKENS
                .iter()
                .find(|token| token.group == group && token.key == key.as_str())
            else {
                continue;
            };
            match token_value(value) {
                Some(normalized) => {
                    css_variables.insert(token.variable.to_string(), normalized.clone());
                    accepted.insert(token.key.to_string(), normalized);
                }
                None => warnings.push(SanitizeWarning::InvalidThemeToken {
                    group: group.key(),
                    token: key.clone(),
                }),
            }
        }
        if !accepted.is_empty() {
            source.set_group(group, accepted);
        }
    }

    if source.is_empty() {
        warnings.push(SanitizeWarning::ThemeEmpty);
        return None;
    }
    Some(Theme {
        source,
        css_variables,
    })
}

/// Trimmed non-blank strings and finite numbers; everything else is rejected.
fn token_value(value: &Value) -> Option<String> {
    if let Some(text) = non_blank(Some(value)) {
        return Some(text.trim().to_string());
    }
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(integer) = number.as_i64() {
        return Some(integer.to_string());
    }
    if let Some(integer) = number.as_u64() {
        return Some(integer.to_string());
    }
    number
        .as_f64()
        .filter(|parsed| parsed.is_finite())
        .map(|parsed| parsed.to_string())
}
