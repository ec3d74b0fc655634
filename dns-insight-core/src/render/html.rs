//! HTML rendering targets
//!
//! Each target keeps the markup of its panel region. Every backend-sourced
//! string (group ids, zones, fqdns, record values, error details) is escaped
//! before it reaches the markup.

use super::{DetailTable, DetailTarget, DrillDownList, ListTarget, DETAIL_HEADER};
use crate::error::PanelError;
use crate::types::{Category, SelectionEvent};

/// Escape text for element content and double- or single-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn error_block(error: &PanelError) -> String {
    format!(
        r#"<div class="panel-error" role="alert">{}</div>"#,
        escape_html(&error.to_string())
    )
}

/// List region of one category panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlList {
    markup: String,
    /// Widget behind the markup, present only while a list is rendered
    list: Option<DrillDownList>,
}

impl HtmlList {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Activate a rendered entry by its element id
    ///
    /// `None` while loading, after an error, or when no rendered entry carries
    /// `composite_id`.
    pub fn activate_id(&self, composite_id: &str) -> Option<SelectionEvent> {
        self.list.as_ref()?.activate_id(composite_id)
    }

    fn wrap(category: Category, inner: &str) -> String {
        format!(
            r#"<div class="drilldown" id="{c}List" data-category="{c}">{inner}</div>"#,
            c = category.as_str()
        )
    }
}

impl ListTarget for HtmlList {
    fn show_loading(&mut self, category: Category) {
        let inner = format!(
            r#"<p class="panel-loading">Loading {} groups…</p>"#,
            category.label()
        );
        self.markup = Self::wrap(category, &inner);
        self.list = None;
    }

    fn render_list(&mut self, list: DrillDownList) {
        let inner = if list.is_empty() {
            format!(
                r#"<p class="panel-empty">No {} groups found.</p>"#,
                list.category.label()
            )
        } else {
            let items: String = list
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<li class="drilldown-item" id="{id}" data-group="{group}">{label}</li>"#,
                        id = escape_html(&item.composite_id),
                        group = escape_html(&item.group_id),
                        label = escape_html(&item.label),
                    )
                })
                .collect();
            format!(r#"<ul class="drilldown-items">{items}</ul>"#)
        };
        self.markup = Self::wrap(list.category, &inner);
        self.list = Some(list);
    }

    fn show_error(&mut self, category: Category, error: &PanelError) {
        self.markup = Self::wrap(category, &error_block(error));
        self.list = None;
    }
}

/// Detail region of one category panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDetail {
    markup: String,
}

impl HtmlDetail {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    fn wrap(category: Category, group_id: Option<&str>, inner: &str) -> String {
        let group = group_id
            .map(|g| format!(r#" data-group="{}""#, escape_html(g)))
            .unwrap_or_default();
        format!(
            r#"<div class="detail" id="{c}Detail" data-category="{c}"{group}>{inner}</div>"#,
            c = category.as_str()
        )
    }
}

impl DetailTarget for HtmlDetail {
    fn show_loading(&mut self, category: Category, group_id: &str) {
        let inner = format!(
            r#"<p class="panel-loading">Loading {} records for {}…</p>"#,
            category.label(),
            escape_html(group_id)
        );
        self.markup = Self::wrap(category, Some(group_id), &inner);
    }

    fn render_detail(&mut self, table: DetailTable) {
        let header: String = DETAIL_HEADER
            .iter()
            .map(|h| format!("<th>{h}</th>"))
            .collect();
        let rows: String = table
            .rows
            .iter()
            .map(|row| {
                format!(
                    r#"<tr><td><a href="{zone_href}">{zone}</a></td><td><a href="{domain_href}">{domain}</a></td><td>{value}</td></tr>"#,
                    zone_href = escape_html(&row.zone.href),
                    zone = escape_html(&row.zone.text),
                    domain_href = escape_html(&row.domain.href),
                    domain = escape_html(&row.domain.text),
                    value = escape_html(&row.value),
                )
            })
            .collect();
        let inner = format!(
            r#"<table class="detail-table"><thead><tr>{header}</tr></thead><tbody>{rows}</tbody></table>"#
        );
        self.markup = Self::wrap(table.category, Some(&table.group_id), &inner);
    }

    fn show_error(&mut self, category: Category, error: &PanelError) {
        self.markup = Self::wrap(category, None, &error_block(error));
    }
}

/// Assemble a standalone page from the category panels
pub fn render_page<'a, I>(title: &str, panels: I) -> String
where
    I: IntoIterator<Item = (Category, &'a HtmlList, &'a HtmlDetail)>,
{
    let sections: String = panels
        .into_iter()
        .map(|(category, list, detail)| {
            format!(
                "<section class=\"panel\" id=\"{c}Panel\">\n<h2>{label}</h2>\n{list}\n{detail}\n</section>\n",
                c = category.as_str(),
                label = category.label(),
                list = list.markup(),
                detail = detail.markup(),
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{sections}</body>\n</html>\n",
        title = escape_html(title)
    )
}
