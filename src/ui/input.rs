//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, FormField, Screen};

/// 输入模式，决定按键的含义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Home,
    Form(FormField),
    Alert,
}

impl App {
    pub fn input_mode(&self) -> InputMode {
        if self.alert.is_some() {
            return InputMode::Alert;
        }
        match self.current() {
            Screen::Home(_) => InputMode::Home,
            Screen::AddMenu(form) => InputMode::Form(form.focus),
        }
    }
}

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: InputMode, key: KeyCode) -> Option<Action> {
    match mode {
        InputMode::Home => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddItem),
            _ => None,
        },
        InputMode::Form(field) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') if !field.is_text() => {
                Some(Action::NextCourse)
            }
            KeyCode::Left | KeyCode::Char('h') if !field.is_text() => Some(Action::PrevCourse),
            KeyCode::Backspace if field.is_text() => Some(Action::DeleteChar),
            KeyCode::Char(c) if field.is_text() => Some(Action::Input(c)),
            _ => None,
        },
        InputMode::Alert => match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.input_mode(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
