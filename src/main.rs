mod config;
mod error;
mod models;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::load_config;
use crate::error::AppError;
use crate::ui::{App, render};

const APP_NAME: &str = "chef-menu";

/// 获取应用目录 (例如 ~/.local/share/chef-menu/)
fn app_dir(base: Option<PathBuf>, kind: &'static str) -> Result<PathBuf, AppError> {
    let dir = base.ok_or(AppError::NoDir(kind))?.join(APP_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 日志写入文件（TUI 占用了 stdout），用 RUST_LOG 控制级别
fn init_logging(data_dir: &std::path::Path) -> Result<(), AppError> {
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("chef-menu.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), AppError> {
    init_logging(&app_dir(dirs::data_dir(), "data")?)?;

    // 配置文件路径 (~/.config/chef-menu/config.toml)
    let config_path = app_dir(dirs::config_dir(), "config")?.join("config.toml");
    let config = load_config(&config_path)?;
    tracing::info!("启动 {}，配置 {}", APP_NAME, config_path.display());

    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("事件循环异常退出: {}", err);
    }
    tracing::info!("退出，共 {} 个菜品（未保存）", app.current().menu_items().len());

    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
