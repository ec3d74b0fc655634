//! API response records

use serde::{Deserialize, Serialize};

/// One aggregate group in a list-mode response.
///
/// Wire shape: `{ "_id": string, "count": integer }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Aggregation key, typically a DNS zone
    #[serde(rename = "_id")]
    pub group_id: String,
    /// Number of matching records in the group
    pub count: u64,
}

/// One concrete DNS record in a detail-mode response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub zone: String,
    pub fqdn: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entry_reads_underscore_id() {
        let entries: Vec<ListEntry> =
            serde_json::from_str(r#"[{"_id":"example.com","count":3}]"#).unwrap();
        assert_eq!(
            entries,
            vec![ListEntry {
                group_id: "example.com".to_string(),
                count: 3,
            }]
        );
    }

    #[test]
    fn list_entry_rejects_negative_count() {
        let result: Result<Vec<ListEntry>, _> =
            serde_json::from_str(r#"[{"_id":"example.com","count":-1}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn detail_record_ignores_extra_fields() {
        let records: Vec<DetailRecord> = serde_json::from_str(
            r#"[{"zone":"example.com","fqdn":"mail.example.com","value":"10 mail.example.com","type":"mx"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].fqdn, "mail.example.com");
        assert_eq!(records[0].value, "10 mail.example.com");
    }

    #[test]
    fn detail_record_requires_value() {
        let result: Result<Vec<DetailRecord>, _> =
            serde_json::from_str(r#"[{"zone":"example.com","fqdn":"mail.example.com"}]"#);
        assert!(result.is_err());
    }
}
