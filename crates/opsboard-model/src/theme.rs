//! Theme token table and the sanitized theme record.
//!
//! Each token belongs to one of three groups and is bound to exactly one CSS
//! custom property. The table is closed: keys outside it are never copied
//! into the output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeGroup {
    Palette,
    Typography,
    Shape,
}

impl ThemeGroup {
    pub const ALL: [ThemeGroup; 3] = [Self::Palette, Self::Typography, Self::Shape];

    /// Key of the group inside the raw `theme` object.
    pub fn key(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Typography => "typography",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for ThemeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToken {
    pub group: ThemeGroup,
    pub key: &'static str,
    pub variable: &'static str,
}

const fn token(group: ThemeGroup, key: &'static str, variable: &'static str) -> ThemeToken {
    ThemeToken {
        group,
        key,
        variable,
    }
}

pub const THEME_TOKENS: &[ThemeToken] = &[
    token(ThemeGroup::Palette, "background", "--color-background"),
    token(ThemeGroup::Palette, "surface", "--color-surface"),
    token(ThemeGroup::Palette, "surfaceMuted", "--color-surface-muted"),
    token(ThemeGroup::Palette, "text", "--color-text"),
    token(ThemeGroup::Palette, "textMuted", "--color-text-muted"),
    token(ThemeGroup::Palette, "accent", "--color-accent"),
    token(ThemeGroup::Palette, "accentStrong", "--color-accent-strong"),
    token(ThemeGroup::Palette, "border", "--color-border"),
    token(ThemeGroup::Palette, "positive", "--color-positive"),
    token(ThemeGroup::Palette, "negative", "--color-negative"),
    token(ThemeGroup::Palette, "warning", "--color-warning"),
    token(ThemeGroup::Typography, "fontFamily", "--font-family-base"),
    token(ThemeGroup::Typography, "headingFamily", "--font-family-heading"),
    token(ThemeGroup::Typography, "baseSize", "--font-size-base"),
    token(ThemeGroup::Typography, "lineHeight", "--line-height-base"),
    token(ThemeGroup::Typography, "headingWeight", "--font-weight-heading"),
    token(ThemeGroup::Shape, "radius", "--radius-base"),
    token(ThemeGroup::Shape, "radiusSmall", "--radius-small"),
    token(ThemeGroup::Shape, "radiusLarge", "--radius-large"),
    token(ThemeGroup::Shape, "spacing", "--spacing-unit"),
    token(ThemeGroup::Shape, "borderWidth", "--border-width"),
];

/// Tokens of one group, in table order.
pub fn tokens_for_group(group: ThemeGroup) -> impl Iterator<Item = &'static ThemeToken> {
    THEME_TOKENS.iter().filter(move |token| token.group == group)
}

/// Accepted token values per group. A group with no accepted token is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<BTreeMap<String, String>>,
}

impl ThemeSource {
    pub fn group(&self, group: ThemeGroup) -> Option<&BTreeMap<String, String>> {
        match group {
            ThemeGroup::Palette => self.palette.as_ref(),
            ThemeGroup::Typography => self.typography.as_ref(),
            ThemeGroup::Shape => self.shape.as_ref(),
        }
    }

    pub fn set_group(&mut self, group: ThemeGroup, tokens: BTreeMap<String, String>) {
        let slot = match group {
            ThemeGroup::Palette => &mut self.palette,
            ThemeGroup::Typography => &mut self.typography,
            ThemeGroup::Shape => &mut self.shape,
        };
        *slot = Some(tokens);
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_none() && self.typography.is_none() && self.shape.is_none()
    }

    /// Groups that carry at least one accepted token, in table order.
    pub fn supplied_groups(&self) -> impl Iterator<Item = ThemeGroup> + '_ {
        ThemeGroup::ALL
            .into_iter()
            .filter(|group| self.group(*group).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub source: ThemeSource,
    /// CSS custom property name to value, e.g. `--color-background`.
    pub css_variables: BTreeMap<String, String>,
}

impl Theme {
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.css_variables.get(name).map(String::as_str)
    }
}
