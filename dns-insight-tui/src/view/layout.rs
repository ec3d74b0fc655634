//! 主布局渲染

use dns_insight_core::Category;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 三个分类等宽分栏
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(main_layout[1]);

    for (category, area) in Category::ALL.into_iter().zip(columns.iter()) {
        components::column::render(app, category, frame, *area);
    }

    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let loading = Category::ALL
        .into_iter()
        .filter(|&category| {
            app.list(category).state.is_loading() || app.detail(category).state.is_loading()
        })
        .count();
    let activity = if loading > 0 {
        format!("  ·  loading {loading}")
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(
        " DNS Insight v{}  ·  {}{activity}",
        env!("CARGO_PKG_VERSION"),
        app.api_base
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
