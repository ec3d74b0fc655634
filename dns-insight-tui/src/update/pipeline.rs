//! 后台请求完成后的更新

use dns_insight_core::{Delivery, Phase, PipelineEvent};

use crate::model::App;

/// 把完成的请求写入所属分类的面板
///
/// 状态栏只反映焦点分类的结果和任何分类的失败，
/// 其他分类的成功不会覆盖当前提示。
pub fn update(app: &mut App, event: PipelineEvent) {
    let status = describe(&event);
    let focused = event.context().category == app.focus.category;
    let failed = matches!(event, PipelineEvent::Failed { .. });

    match app.dashboard.apply(event) {
        Delivery::Rendered if focused || failed => app.set_status(status),
        Delivery::Rendered => log::debug!("{status}"),
        Delivery::Discarded => log::debug!("Ignored superseded response: {status}"),
    }
}

/// 状态栏文本
fn describe(event: &PipelineEvent) -> String {
    let context = event.context();
    let label = context.category.label();

    match event {
        PipelineEvent::ListLoaded { entries, .. } => {
            format!("{label}: {} groups", entries.len())
        }
        PipelineEvent::DetailLoaded { records, .. } => {
            let group = match &context.phase {
                Phase::Detail { group_id } => group_id.as_str(),
                Phase::List => "",
            };
            format!("{label}: {} records for {group}", records.len())
        }
        PipelineEvent::Failed { error, .. } => format!("{label}: {error}"),
    }
}
