//! Drill-down selection events

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::PanelError;

/// Suffix that follows the category in a composite identifier (`mxTbl:example.com`)
pub const TABLE_SUFFIX: &str = "Tbl";

/// Activation of one drill-down entry.
///
/// Built directly by the widget; the composite string form only exists for
/// markup attributes and is parsed back with [`SelectionEvent::from_composite_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    pub category: Category,
    pub group_id: String,
}

impl SelectionEvent {
    pub fn new(category: Category, group_id: impl Into<String>) -> Self {
        Self {
            category,
            group_id: group_id.into(),
        }
    }

    /// `<category>Tbl:<groupId>`
    pub fn composite_id(&self) -> String {
        format!("{}{TABLE_SUFFIX}:{}", self.category, self.group_id)
    }

    /// Recover the selection from a composite identifier.
    ///
    /// The group id is everything after the first `:`. The category prefix may
    /// omit the `Tbl` suffix; anything else is matched by the category name it
    /// contains. Returns `None` when no category or no group id can be found.
    pub fn from_composite_id(id: &str) -> Option<Self> {
        let (prefix, group_id) = id.split_once(':')?;
        if group_id.is_empty() {
            return None;
        }

        let name = prefix.strip_suffix(TABLE_SUFFIX).unwrap_or(prefix);
        let category = name.parse::<Category>().ok().or_else(|| {
            let lowered = prefix.to_ascii_lowercase();
            Category::ALL
                .into_iter()
                .find(|c| lowered.contains(c.as_str()))
        })?;

        Some(Self::new(category, group_id))
    }
}

impl FromStr for SelectionEvent {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_composite_id(s).ok_or_else(|| {
            PanelError::ValidationError(format!(
                "invalid selection '{s}', expected <category>:<group>"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_id_format() {
        let event = SelectionEvent::new(Category::Mx, "example.com");
        assert_eq!(event.composite_id(), "mxTbl:example.com");
    }

    #[test]
    fn composite_id_round_trips_group_with_colons() {
        let event = SelectionEvent::new(Category::Dkim, "weird:zone:name");
        let parsed = SelectionEvent::from_composite_id(&event.composite_id());
        assert_eq!(parsed, Some(event));
    }

    #[test]
    fn parse_without_suffix() {
        assert_eq!(
            SelectionEvent::from_composite_id("spf:example.org"),
            Some(SelectionEvent::new(Category::Spf, "example.org"))
        );
    }

    #[test]
    fn parse_tolerates_decorated_prefix() {
        assert_eq!(
            SelectionEvent::from_composite_id("panel-dkimTbl-row:example.net"),
            Some(SelectionEvent::new(Category::Dkim, "example.net"))
        );
    }

    #[test]
    fn parse_rejects_missing_parts() {
        assert_eq!(SelectionEvent::from_composite_id("mxTbl:"), None);
        assert_eq!(SelectionEvent::from_composite_id("mxTbl"), None);
        assert_eq!(SelectionEvent::from_composite_id("aaaaTbl:example.com"), None);
    }

    #[test]
    fn from_str_reports_invalid_selection() {
        assert!(matches!(
            "nothing".parse::<SelectionEvent>(),
            Err(PanelError::ValidationError(_))
        ));
        assert_eq!(
            "mx:example.com".parse::<SelectionEvent>(),
            Ok(SelectionEvent::new(Category::Mx, "example.com"))
        );
    }
}
