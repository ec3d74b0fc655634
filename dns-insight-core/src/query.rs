//! Search API paths and navigation links
//!
//! All paths are relative; the fetch client resolves them against the
//! configured API base URL.

use crate::types::Category;

/// DNS search endpoint
pub const DNS_ENDPOINT: &str = "/api/v1.0/dns";

/// Zone page consuming `?search=<zone>`
pub const ZONE_PAGE: &str = "/zone";

/// Domain page consuming `?search=<fqdn>`
pub const DOMAIN_PAGE: &str = "/domain";

/// List-mode path: aggregate counts per group for a category
///
/// `/api/v1.0/dns?dnsType=mx&list=1`
pub fn list_path(category: Category) -> String {
    let (param, value) = category.query_filter();
    format!("{DNS_ENDPOINT}?{param}={value}&list=1")
}

/// Detail-mode path: records of one group for a category
///
/// `/api/v1.0/dns?txtSearch=spf&zone=example.com`
pub fn detail_path(category: Category, group_id: &str) -> String {
    let (param, value) = category.query_filter();
    format!(
        "{DNS_ENDPOINT}?{param}={value}&zone={}",
        urlencoding::encode(group_id)
    )
}

/// Link to the zone page of `zone`
pub fn zone_link(zone: &str) -> String {
    format!("{ZONE_PAGE}?search={}", urlencoding::encode(zone))
}

/// Link to the domain page of `fqdn`
pub fn domain_link(fqdn: &str) -> String {
    format!("{DOMAIN_PAGE}?search={}", urlencoding::encode(fqdn))
}
