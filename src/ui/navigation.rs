//! 导航外壳
//!
//! 两个命名页面 (Home / AddMenu) 组成的栈式导航。
//! 每次导航都复制参数包，页面之间没有共享的可变状态。
//!
//! ```text
//!     Home ──[a]──► AddMenu
//!      ▲               │
//!      └──[Enter/Esc]──┘
//! ```

use crate::models::{Course, NavParams};

use super::state::Screen;

/// 页面路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AddMenu,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AddMenu => "AddMenu",
        }
    }
}

/// 允许的页面跳转
pub const TRANSITIONS: &[(Route, Route)] = &[(Route::Home, Route::AddMenu), (Route::AddMenu, Route::Home)];

pub fn is_valid_transition(from: Route, to: Route) -> bool {
    TRANSITIONS.contains(&(from, to))
}

/// 导航栈
#[derive(Debug, Clone)]
pub struct Navigator {
    base: Screen,
    stack: Vec<Screen>,
    default_course: Course,
}

impl Navigator {
    /// 初始页面为空集合的首页
    pub fn new(default_course: Course) -> Self {
        Self {
            base: Screen::enter(Route::Home, NavParams::default(), default_course),
            stack: Vec::new(),
            default_course,
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().unwrap_or(&self.base)
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        match self.stack.last_mut() {
            Some(screen) => screen,
            None => &mut self.base,
        }
    }

    /// 栈深度（包括根页面）
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// 跳转到指定页面。
    ///
    /// 目标已在栈中时回退到该页面并用新参数重新进入，否则压入新页面。
    /// 返回 false 表示跳转不合法而被忽略。
    pub fn navigate(&mut self, route: Route, params: NavParams) -> bool {
        let from = self.current().route();
        if !is_valid_transition(from, route) {
            tracing::warn!("忽略非法跳转: {} -> {}", from.name(), route.name());
            return false;
        }

        let screen = Screen::enter(route, params, self.default_course);

        if self.base.route() == route {
            self.stack.clear();
            self.base = screen;
        } else if let Some(pos) = self.stack.iter().position(|s| s.route() == route) {
            self.stack.truncate(pos);
            self.stack.push(screen);
        } else {
            self.stack.push(screen);
        }

        tracing::debug!(
            "导航 {} -> {} (depth {})",
            from.name(),
            route.name(),
            self.depth()
        );
        true
    }

    /// 返回上一页，根页面时无效
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(screen) => {
                tracing::debug!(
                    "返回 {} -> {}",
                    screen.route().name(),
                    self.current().route().name()
                );
                true
            }
            None => false,
        }
    }
}
