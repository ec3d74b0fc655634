//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{any_matches, DefaultKeymap};
use crate::message::{AppMessage, PanelMessage};
use crate::model::{App, Section};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::RELOAD.matches(&key) || DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Reload;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_SECTION.matches(&key) {
        return AppMessage::ToggleSection;
    }
    if any_matches(&DefaultKeymap::CATEGORY_LEFT, &key) {
        return AppMessage::PreviousCategory;
    }
    if any_matches(&DefaultKeymap::CATEGORY_RIGHT, &key) {
        return AppMessage::NextCategory;
    }

    // Enter 只在列表区域有意义
    if DefaultKeymap::CONFIRM.matches(&key) {
        return match app.focus.section {
            Section::List => AppMessage::Activate,
            Section::Detail => AppMessage::Noop,
        };
    }

    handle_panel_keys(&key)
}

/// 处理面板内移动的按键
fn handle_panel_keys(key: &KeyEvent) -> AppMessage {
    let msg = if any_matches(&DefaultKeymap::UP, key) {
        PanelMessage::SelectPrevious
    } else if any_matches(&DefaultKeymap::DOWN, key) {
        PanelMessage::SelectNext
    } else if DefaultKeymap::FIRST.matches(key) {
        PanelMessage::SelectFirst
    } else if DefaultKeymap::LAST.matches(key) {
        PanelMessage::SelectLast
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Panel(msg)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;
    use crate::test_support::test_app;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        let app = test_app();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn enter_activates_only_in_list_section() {
        let mut app = test_app();
        assert!(matches!(handle_event(press(KeyCode::Enter), &app), AppMessage::Activate));

        app.focus.section = Section::Detail;
        assert!(matches!(handle_event(press(KeyCode::Enter), &app), AppMessage::Noop));
    }

    #[test]
    fn movement_keys() {
        let app = test_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('k')), &app),
            AppMessage::Panel(PanelMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::End), &app),
            AppMessage::Panel(PanelMessage::SelectLast)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::NextCategory
        ));
        assert!(matches!(handle_event(press(KeyCode::Tab), &app), AppMessage::ToggleSection));
        assert!(matches!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop));
    }

    #[test]
    fn reload_keys() {
        let app = test_app();
        assert!(matches!(handle_event(press(KeyCode::Char('r')), &app), AppMessage::Reload));
        let alt_r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT));
        assert!(matches!(handle_event(alt_r, &app), AppMessage::Reload));
    }
}
