//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{AddMenuState, App, FormField, HomeState, Screen};
use crate::config::Config;
use components::{render_course_picker, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    match app.current() {
        Screen::Home(state) => render_home(frame, state, &app.config),
        Screen::AddMenu(state) => render_add_menu(frame, state),
    }

    if let Some(message) = &app.alert {
        render_alert(frame, message);
    }
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

// ============ 首页 ============

fn render_home(frame: &mut Frame, state: &HomeState, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(4), // Logo + 数量
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &config.title);

    // 终端无法显示远程图片，只显示地址
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Logo: ", Style::default().fg(Color::Gray)),
            Span::raw(config.logo_url.as_str()),
        ]),
        Line::from(format!("Total Menu Items: {}", state.menu_items.len())),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[1]);

    render_menu_list(frame, state, &config.currency_symbol, chunks[2]);
    render_help(frame, chunks[3], "[a] Add Menu Item  [j/k] Navigate  [q] Quit");
}

fn render_menu_list(frame: &mut Frame, state: &HomeState, currency: &str, area: Rect) {
    let items: Vec<ListItem> = state
        .menu_items
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry.summary(currency),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(entry.description.as_str()),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Menu").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED),
        );

    let mut list_state = ListState::default();
    if state.selected_entry().is_some() {
        list_state.select(Some(state.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

// ============ 添加菜品 ============

fn render_add_menu(frame: &mut Frame, state: &AddMenuState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 菜名
            Constraint::Length(3), // 描述
            Constraint::Length(3), // 课程
            Constraint::Length(3), // 价格
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0], "Add Menu Item");

    render_input_widget(
        frame,
        chunks[1],
        "Dish Name",
        &state.dish_name,
        state.focus == FormField::DishName,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[2],
        "Description",
        &state.description,
        state.focus == FormField::Description,
        Color::Yellow,
    );
    render_course_picker(
        frame,
        chunks[3],
        "Select Course",
        state.course,
        state.focus == FormField::Course,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[4],
        "Price (in ZAR)",
        &state.price,
        state.focus == FormField::Price,
        Color::Yellow,
    );

    let help = if state.focus == FormField::Course {
        "[←/→] Change course  [Tab] Next field  [Enter] Add Menu Item  [Esc] Back"
    } else {
        "[Tab] Next field  [Enter] Add Menu Item  [Esc] Back"
    };
    render_help(frame, chunks[6], help);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 30, frame.area());
    let inner = render_dialog_framework(frame, area, "Alert");

    let dialog = Paragraph::new(format!("{}\n\n[Enter] OK", message))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(dialog, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, MenuDraft, NavParams, append_entry};
    use crate::ui::actions::Action;
    use crate::ui::navigation::Route;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with_items(drafts: &[(&str, &str, Course, &str)]) -> App {
        let mut items: Vec<crate::models::MenuEntry> = Vec::new();
        for (name, desc, course, price) in drafts {
            items = append_entry(
                &items,
                MenuDraft {
                    dish_name: name.to_string(),
                    description: desc.to_string(),
                    course: *course,
                    price: price.to_string(),
                },
            );
        }
        let mut app = App::new(Config::default());
        app.navigator.navigate(Route::AddMenu, NavParams::default());
        app.navigator.navigate(Route::Home, NavParams::new(items));
        app
    }

    #[test]
    fn test_empty_home() {
        let app = App::new(Config::default());
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Chef's Menu"));
        assert!(text.contains("Total Menu Items: 0"));
    }

    #[test]
    fn test_home_lists_entries() {
        let app = app_with_items(&[
            ("Pasta", "Fresh pasta", Course::Mains, "120"),
            ("Malva", "Pudding with custard", Course::Dessert, "65"),
        ]);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Total Menu Items: 2"));
        assert!(text.contains("Pasta - Mains - R120"));
        assert!(text.contains("Fresh pasta"));
        assert!(text.contains("Malva - Dessert - R65"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        for app in [
            App::new(Config::default()),
            app_with_items(&[("Soup", "Hot", Course::Starters, "40")]),
        ] {
            assert_eq!(draw(&app), draw(&app));
        }
    }

    #[test]
    fn test_currency_symbol_from_config() {
        let mut app = app_with_items(&[("Pasta", "Fresh pasta", Course::Mains, "120")]);
        app.config.currency_symbol = "ZAR ".to_string();
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Pasta - Mains - ZAR 120"));
    }

    #[test]
    fn test_form_and_alert() {
        let mut app = App::new(Config::default());
        app.dispatch(Action::StartAddItem);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Add Menu Item"));
        assert!(text.contains("Price (in ZAR)"));
        assert!(text.contains("Starters"));

        app.dispatch(Action::Submit);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Please fill all fields."));
    }
}
