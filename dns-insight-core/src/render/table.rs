//! Detail table model

use crate::query::{domain_link, zone_link};
use crate::types::{Category, DetailRecord};

/// Column headings of every detail table
pub const DETAIL_HEADER: [&str; 3] = ["Zone", "Domain", "Value"];

/// Hyperlink to a related page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// One record row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Links to `/zone?search=<zone>`
    pub zone: Link,
    /// Links to `/domain?search=<fqdn>`
    pub domain: Link,
    /// Raw record value; escaping is up to the renderer
    pub value: String,
}

/// Records of one selected group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTable {
    pub category: Category,
    pub group_id: String,
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    pub fn from_records(
        category: Category,
        group_id: impl Into<String>,
        records: Vec<DetailRecord>,
    ) -> Self {
        let rows = records
            .into_iter()
            .map(|record| DetailRow {
                zone: Link {
                    href: zone_link(&record.zone),
                    text: record.zone,
                },
                domain: Link {
                    href: domain_link(&record.fqdn),
                    text: record.fqdn,
                },
                value: record.value,
            })
            .collect();

        Self {
            category,
            group_id: group_id.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
