//! Drill-down widget model

use crate::types::{Category, ListEntry, SelectionEvent};

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDownItem {
    /// `<groupId> (<count>)`
    pub label: String,
    /// `<category>Tbl:<groupId>`
    pub composite_id: String,
    pub group_id: String,
    pub count: u64,
}

/// Selectable list of aggregate groups for one category.
///
/// Entries keep the order the backend returned them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDownList {
    pub category: Category,
    pub items: Vec<DrillDownItem>,
}

impl DrillDownList {
    pub fn from_entries(category: Category, entries: Vec<ListEntry>) -> Self {
        let items = entries
            .into_iter()
            .map(|entry| DrillDownItem {
                label: format!("{} ({})", entry.group_id, entry.count),
                composite_id: SelectionEvent::new(category, entry.group_id.as_str())
                    .composite_id(),
                group_id: entry.group_id,
                count: entry.count,
            })
            .collect();

        Self { category, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activate the entry at `index`
    ///
    /// `None` when nothing is there to activate.
    pub fn activate(&self, index: usize) -> Option<SelectionEvent> {
        self.items
            .get(index)
            .map(|item| SelectionEvent::new(self.category, item.group_id.as_str()))
    }

    /// Activate the entry carrying `composite_id`
    pub fn activate_id(&self, composite_id: &str) -> Option<SelectionEvent> {
        let event = SelectionEvent::from_composite_id(composite_id)?;
        let known = event.category == self.category
            && self.items.iter().any(|item| item.group_id == event.group_id);
        known.then_some(event)
    }

    /// Sum of all group counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.count)
            .fold(0, u64::saturating_add)
    }
}
