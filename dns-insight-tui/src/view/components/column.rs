//! 分类列组件：上方下钻列表，下方详情表

use dns_insight_core::render::DETAIL_HEADER;
use dns_insight_core::Category;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::model::{App, DetailPane, ListPane, PaneState, Section};
use crate::util::fit_width;
use crate::view::theme::colors;

/// 详情表列宽（百分比）
const COLUMN_PERCENT: [u16; 3] = [30, 30, 40];

/// 渲染一个分类列
pub fn render(app: &App, category: Category, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_list(
        app.list(category),
        category,
        app.focus.is(category, Section::List),
        frame,
        rows[0],
    );
    render_detail(
        app.detail(category),
        category,
        app.focus.is(category, Section::Detail),
        frame,
        rows[1],
    );
}

fn block(title: String, focused: bool) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(title)
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(focused))
}

/// 单行提示（加载中、空状态等）
fn notice(text: String, style: Style) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(""), Line::styled(format!("  {text}"), style)])
        .wrap(Wrap { trim: false })
}

/// 渲染下钻列表
fn render_list(pane: &ListPane, category: Category, focused: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let label = category.label();

    let list = match &pane.state {
        PaneState::Ready(list) => list,
        other => {
            let body = match other {
                PaneState::Loading => notice(
                    format!("Loading {label} groups..."),
                    Style::default().fg(c.warning),
                ),
                PaneState::Failed(message) => {
                    notice(message.clone(), Style::default().fg(c.error))
                }
                _ => notice("Press r to load".to_string(), Style::default().fg(c.muted)),
            };
            frame.render_widget(body.block(block(format!(" {label} "), focused)), area);
            return;
        }
    };

    let title = format!(" {label} · {} groups · {} records ", list.len(), list.total());
    if list.is_empty() {
        let body = notice(format!("No {label} groups found."), Style::default().fg(c.muted));
        frame.render_widget(body.block(block(title, focused)), area);
        return;
    }

    // 边框和前缀占用的列
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == pane.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected && focused {
                c.selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(fit_width(&item.label, width), style),
            ]))
        })
        .collect();

    let widget = List::new(items).block(block(title, focused));
    let mut state = ListState::default();
    state.select(Some(pane.selected));

    frame.render_stateful_widget(widget, area, &mut state);
}

/// 渲染详情表
fn render_detail(pane: &DetailPane, category: Category, focused: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let label = category.label();
    let group = pane.group_id.as_deref().unwrap_or("");

    let table = match &pane.state {
        PaneState::Ready(table) => table,
        PaneState::Loading => {
            let body = notice(
                format!("Loading {label} records for {group}..."),
                Style::default().fg(c.warning),
            );
            frame.render_widget(body.block(block(format!(" {group} "), focused)), area);
            return;
        }
        PaneState::Failed(message) => {
            let body = notice(message.clone(), Style::default().fg(c.error));
            frame.render_widget(body.block(block(format!(" {group} "), focused)), area);
            return;
        }
        PaneState::Idle => {
            let body = notice(
                "Select a group and press Enter".to_string(),
                Style::default().fg(c.muted),
            );
            frame.render_widget(body.block(block(" Records ".to_string(), focused)), area);
            return;
        }
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let widths = COLUMN_PERCENT.map(|p| (inner_width * usize::from(p) / 100).saturating_sub(1));

    let header = Row::new(DETAIL_HEADER.to_vec()).style(
        Style::default()
            .fg(c.success)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = table
        .rows
        .iter()
        .skip(pane.offset)
        .map(|row| {
            Row::new(vec![
                fit_width(&row.zone.text, widths[0]),
                fit_width(&row.domain.text, widths[1]),
                fit_width(&row.value, widths[2]),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let title = format!(" {} · {} records ", table.group_id, table.len());
    let widget = Table::new(rows, COLUMN_PERCENT.map(Constraint::Percentage))
        .header(header)
        .block(block(title, focused));

    frame.render_widget(widget, area);
}
