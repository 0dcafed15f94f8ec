//! App 状态定义 (Model)
//!
//! 每个页面持有自己的局部状态，进入页面时由导航参数重新创建

use crate::config::Config;
use crate::models::{Course, MenuDraft, MenuEntry, NavParams};

use super::navigation::{Navigator, Route};

/// 应用状态
pub struct App {
    pub navigator: Navigator,
    pub alert: Option<String>, // 阻塞式提示
    pub config: Config,
}

/// 导航栈中的一个页面
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeState),
    AddMenu(AddMenuState),
}

impl Screen {
    /// 根据路由和参数创建页面
    pub fn enter(route: Route, params: NavParams, default_course: Course) -> Self {
        match route {
            Route::Home => Screen::Home(HomeState::new(params.menu_items)),
            Route::AddMenu => Screen::AddMenu(AddMenuState::new(params.menu_items, default_course)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::AddMenu(_) => Route::AddMenu,
        }
    }

    pub fn menu_items(&self) -> &[MenuEntry] {
        match self {
            Screen::Home(state) => &state.menu_items,
            Screen::AddMenu(state) => &state.menu_items,
        }
    }
}

/// 首页（列表）状态
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub menu_items: Vec<MenuEntry>,
    pub selected_index: usize,
}

impl HomeState {
    pub fn new(menu_items: Vec<MenuEntry>) -> Self {
        Self {
            menu_items,
            selected_index: 0,
        }
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.menu_items.get(self.selected_index)
    }
}

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    DishName,
    Description,
    Course,
    Price,
}

impl FormField {
    pub const ORDER: [FormField; 4] = [
        FormField::DishName,
        FormField::Description,
        FormField::Course,
        FormField::Price,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> FormField {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Course)
    }
}

/// 添加菜品表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct AddMenuState {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
    pub focus: FormField,
    pub menu_items: Vec<MenuEntry>, // 从首页继承的集合
}

impl AddMenuState {
    pub fn new(menu_items: Vec<MenuEntry>, course: Course) -> Self {
        Self {
            dish_name: String::new(),
            description: String::new(),
            course,
            price: String::new(),
            focus: FormField::DishName,
            menu_items,
        }
    }

    pub fn draft(&self) -> MenuDraft {
        MenuDraft {
            dish_name: self.dish_name.clone(),
            description: self.description.clone(),
            course: self.course,
            price: self.price.clone(),
        }
    }

    /// 当前焦点对应的文本字段
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::DishName => Some(&mut self.dish_name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::Course => None,
        }
    }

    /// 清空三个文本字段，保留课程选择
    pub fn clear_text_fields(&mut self) {
        self.dish_name.clear();
        self.description.clear();
        self.price.clear();
    }
}

impl App {
    /// 创建新的应用实例，初始页面为首页
    pub fn new(config: Config) -> Self {
        Self {
            navigator: Navigator::new(config.default_course),
            alert: None,
            config,
        }
    }

    pub fn current(&self) -> &Screen {
        self.navigator.current()
    }
}
