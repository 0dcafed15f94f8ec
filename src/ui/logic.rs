//! 业务逻辑处理 (Update/Dispatch)
//!
//! 每个页面的 update 是纯函数: (当前状态, Action) -> (新状态, Effect)。
//! App::dispatch 负责把 Effect 应用到导航栈上。

use super::actions::Action;
use super::navigation::Route;
use super::state::{AddMenuState, App, HomeState, Screen};
use crate::models::{FormError, NavParams, append_entry, validate_draft};

/// 页面更新产生的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigate(Route, NavParams),
    Back,
    Alert(String),
    Quit,
}

impl HomeState {
    pub fn update(&self, action: Action) -> (HomeState, Effect) {
        let mut next = self.clone();
        let effect = match action {
            Action::Quit => Effect::Quit,
            Action::MoveSelectionUp => {
                next.selected_index = next.selected_index.saturating_sub(1);
                Effect::None
            }
            Action::MoveSelectionDown => {
                if next.selected_index + 1 < next.menu_items.len() {
                    next.selected_index += 1;
                }
                Effect::None
            }
            Action::StartAddItem => {
                Effect::Navigate(Route::AddMenu, NavParams::new(self.menu_items.clone()))
            }
            _ => Effect::None,
        };
        (next, effect)
    }
}

impl AddMenuState {
    pub fn update(&self, action: Action) -> (AddMenuState, Effect) {
        let mut next = self.clone();
        let effect = match action {
            Action::NextField => {
                next.focus = next.focus.next();
                Effect::None
            }
            Action::PrevField => {
                next.focus = next.focus.prev();
                Effect::None
            }
            Action::NextCourse => {
                next.course = next.course.next();
                Effect::None
            }
            Action::PrevCourse => {
                next.course = next.course.prev();
                Effect::None
            }
            Action::Input(c) => {
                if let Some(text) = next.focused_text_mut() {
                    text.push(c);
                }
                Effect::None
            }
            Action::DeleteChar => {
                if let Some(text) = next.focused_text_mut() {
                    text.pop();
                }
                Effect::None
            }
            Action::Cancel => Effect::Back,
            Action::Submit => return self.submit(),
            _ => Effect::None,
        };
        (next, effect)
    }

    /// 提交表单
    ///
    /// 缺少字段时状态不变并提示；成功时追加新条目、清空文本字段并返回首页。
    pub fn submit(&self) -> (AddMenuState, Effect) {
        let draft = self.draft();
        if let Err(err) = validate_draft(&draft) {
            let FormError::MissingFields(missing) = &err;
            tracing::debug!("提交被拒绝，缺少字段: {:?}", missing);
            return (self.clone(), Effect::Alert(err.to_string()));
        }

        let menu_items = append_entry(&self.menu_items, draft);
        if let Some(entry) = menu_items.last() {
            tracing::info!("已添加菜品 {} ({})", entry.dish_name, entry.id);
        }

        let mut next = self.clone();
        next.clear_text_fields();
        next.menu_items = menu_items.clone();
        (next, Effect::Navigate(Route::Home, NavParams::new(menu_items)))
    }
}

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        if self.alert.is_some() {
            if action == Action::DismissAlert {
                self.alert = None;
            }
            return false;
        }

        let effect = match self.navigator.current_mut() {
            Screen::Home(state) => {
                let (next, effect) = state.update(action);
                *state = next;
                effect
            }
            Screen::AddMenu(state) => {
                let (next, effect) = state.update(action);
                *state = next;
                effect
            }
        };

        self.apply(effect)
    }

    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::Navigate(route, params) => {
                self.navigator.navigate(route, params);
            }
            Effect::Back => {
                self.navigator.back();
            }
            Effect::Alert(message) => self.alert = Some(message),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{Course, MenuDraft, MenuEntry};

    fn collection(n: usize) -> Vec<MenuEntry> {
        let mut items: Vec<MenuEntry> = Vec::new();
        for i in 0..n {
            items = append_entry(
                &items,
                MenuDraft {
                    dish_name: format!("Dish {}", i),
                    description: format!("Description {}", i),
                    course: Course::ALL[i % 3],
                    price: format!("{}", 10 * (i + 1)),
                },
            );
        }
        items
    }

    fn filled_form(items: Vec<MenuEntry>, name: &str, desc: &str, course: Course, price: &str) -> AddMenuState {
        let mut form = AddMenuState::new(items, Course::Starters);
        form.dish_name = name.to_string();
        form.description = desc.to_string();
        form.course = course;
        form.price = price.to_string();
        form
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_submit_appends_for_any_collection() {
        for n in [0, 1, 4] {
            let items = collection(n);
            let form = filled_form(items.clone(), "Pasta", "Fresh pasta", Course::Dessert, "120");
            let (next, effect) = form.update(Action::Submit);

            let Effect::Navigate(Route::Home, params) = &effect else {
                panic!("expected navigation home, got {:?}", effect);
            };
            assert_eq!(params.menu_items.len(), n + 1);
            assert_eq!(&params.menu_items[..n], &items[..]);

            let last = &params.menu_items[n];
            assert_eq!(last.dish_name, "Pasta");
            assert_eq!(last.description, "Fresh pasta");
            assert_eq!(last.price, "120");
            assert_eq!(last.course, Course::Dessert);

            assert!(next.dish_name.is_empty());
            assert!(next.description.is_empty());
            assert!(next.price.is_empty());
            assert_eq!(next.course, Course::Dessert);
        }
    }

    #[test]
    fn test_submit_with_missing_field_is_rejected() {
        let cases = [("", "d", "1"), ("n", "", "1"), ("n", "d", ""), ("", "", "")];
        for n in [0, 3] {
            let items = collection(n);
            for (name, desc, price) in cases {
                let form = filled_form(items.clone(), name, desc, Course::Mains, price);
                let (next, effect) = form.update(Action::Submit);
                assert_eq!(effect, Effect::Alert("Please fill all fields.".to_string()));
                assert_eq!(next, form);
                assert_eq!(next.menu_items.len(), n);
            }
        }
    }

    #[test]
    fn test_form_editing() {
        let form = AddMenuState::new(Vec::new(), Course::Starters);
        let (form, _) = form.update(Action::Input('a'));
        let (form, _) = form.update(Action::Input('b'));
        let (form, _) = form.update(Action::DeleteChar);
        assert_eq!(form.dish_name, "a");

        let (form, _) = form.update(Action::NextField);
        let (form, _) = form.update(Action::NextField);
        let (form, _) = form.update(Action::Input('x'));
        assert_eq!(form.dish_name, "a");
        assert!(form.description.is_empty());

        let (form, _) = form.update(Action::NextCourse);
        assert_eq!(form.course, Course::Mains);
        let (form, _) = form.update(Action::PrevCourse);
        let (form, _) = form.update(Action::PrevCourse);
        assert_eq!(form.course, Course::Dessert);

        let (_, effect) = form.update(Action::Cancel);
        assert_eq!(effect, Effect::Back);
    }

    #[test]
    fn test_home_selection_bounds() {
        let home = HomeState::new(collection(2));
        let (home, _) = home.update(Action::MoveSelectionUp);
        assert_eq!(home.selected_index, 0);
        let (home, _) = home.update(Action::MoveSelectionDown);
        let (home, _) = home.update(Action::MoveSelectionDown);
        assert_eq!(home.selected_index, 1);
        assert_eq!(home.update(Action::Quit).1, Effect::Quit);
    }

    #[test]
    fn test_scenario_add_pasta() {
        let mut app = App::new(Config::default());
        app.dispatch(Action::StartAddItem);
        assert_eq!(app.current().route(), Route::AddMenu);

        type_text(&mut app, "Pasta");
        app.dispatch(Action::NextField);
        type_text(&mut app, "Fresh pasta");
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextCourse);
        app.dispatch(Action::NextField);
        type_text(&mut app, "120");
        app.dispatch(Action::Submit);

        assert_eq!(app.current().route(), Route::Home);
        assert_eq!(app.navigator.depth(), 1);
        let items = app.current().menu_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].summary("R"), "Pasta - Mains - R120");
    }

    #[test]
    fn test_scenario_empty_price_alerts() {
        let mut app = App::new(Config::default());
        app.dispatch(Action::StartAddItem);
        type_text(&mut app, "Pasta");
        app.dispatch(Action::NextField);
        type_text(&mut app, "Fresh pasta");
        app.dispatch(Action::Submit);

        assert_eq!(app.alert.as_deref(), Some("Please fill all fields."));
        assert_eq!(app.current().route(), Route::AddMenu);

        // 提示框打开时其他操作被忽略
        app.dispatch(Action::Input('z'));
        app.dispatch(Action::DismissAlert);
        assert!(app.alert.is_none());

        match app.current() {
            Screen::AddMenu(form) => {
                assert_eq!(form.dish_name, "Pasta");
                assert_eq!(form.description, "Fresh pasta");
            }
            other => panic!("unexpected screen {:?}", other),
        }

        app.dispatch(Action::Cancel);
        assert_eq!(app.current().route(), Route::Home);
        assert_eq!(app.current().menu_items().len(), 0);
    }

    #[test]
    fn test_round_trip_without_submit() {
        // Home -> AddMenu -> Home
        let mut app = App::new(Config::default());
        app.dispatch(Action::StartAddItem);
        type_text(&mut app, "Soup");
        app.dispatch(Action::NextField);
        type_text(&mut app, "Hot");
        app.dispatch(Action::NextField);
        app.dispatch(Action::NextField);
        type_text(&mut app, "50");
        app.dispatch(Action::Submit);
        let before = app.current().menu_items().to_vec();

        app.dispatch(Action::StartAddItem);
        type_text(&mut app, "Half typed");
        app.dispatch(Action::Cancel);
        assert_eq!(app.current().route(), Route::Home);
        assert_eq!(app.current().menu_items(), &before[..]);
    }
}
