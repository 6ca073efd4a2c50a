use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use anyhow::Result;
use crate::action::Action;

pub fn poll_event(timeout: Duration, in_prompt: bool) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        let action = match event::read()? {
            Event::Key(key) => {
                if in_prompt { translate_prompt_key(key) } else { translate_key(key) }
            }
            Event::Mouse(mouse) => translate_mouse(mouse),
            _ => Action::None,
        };
        Ok(Some(action))
    } else {
        Ok(None)
    }
}

/// Prompt mode: only the decision keys do anything.
pub fn translate_prompt_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::ConfirmNo,
        KeyCode::Esc => Action::Dismiss,
        _ => Action::None,
    }
}

/// Normal mode: chars are commands.
pub fn translate_key(key: KeyEvent) -> Action {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => Action::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Action::NavigateDown,
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Action::NavigateUp,
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => Action::Delete,
        (KeyModifiers::NONE, KeyCode::F(2)) => Action::ToggleDirection,
        (KeyModifiers::NONE, KeyCode::Char('s')) => Action::CycleSide,
        _ => Action::None,
    }
}

pub fn translate_mouse(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Action::Click { column: mouse.column, row: mouse.row }
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn prompt_keys() {
        assert_eq!(translate_prompt_key(key(KeyCode::Char('y'))), Action::ConfirmYes);
        assert_eq!(translate_prompt_key(key(KeyCode::Enter)), Action::ConfirmYes);
        assert_eq!(translate_prompt_key(key(KeyCode::Char('n'))), Action::ConfirmNo);
        assert_eq!(translate_prompt_key(key(KeyCode::Esc)), Action::Dismiss);
        // normal-mode commands are inert while prompting
        assert_eq!(translate_prompt_key(key(KeyCode::Char('q'))), Action::None);
        assert_eq!(translate_prompt_key(key(KeyCode::Char('d'))), Action::None);
    }

    #[test]
    fn normal_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('d'))), Action::Delete);
        assert_eq!(translate_key(key(KeyCode::Delete)), Action::Delete);
        assert_eq!(translate_key(key(KeyCode::F(2))), Action::ToggleDirection);
        assert_eq!(translate_key(key(KeyCode::Char('y'))), Action::None);
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn left_click_only() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(translate_mouse(click), Action::Click { column: 4, row: 9 });
        let scroll = MouseEvent { kind: MouseEventKind::ScrollDown, ..click };
        assert_eq!(translate_mouse(scroll), Action::None);
    }
}
