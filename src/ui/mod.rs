//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 及各页面的局部状态
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs, input.rs): 用户交互转化为明确的语义化 Action
//! - Update (logic.rs): 页面状态的纯更新函数与副作用分发
//! - navigation.rs: 两个页面之间的栈式导航

pub mod actions;
pub mod input;
pub mod logic;
pub mod navigation;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
