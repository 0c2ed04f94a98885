mod app;
mod board;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::Cli;
use storage::config;
use theme::Theme;

/// 初始化日志，失败时只在 stderr 提示（此时 TUI 还没接管终端）
fn init_logging() {
    let result = logging::log_path().and_then(|path| logging::init(&path));
    if let Err(e) = result {
        eprintln!("taskboard: logging disabled: {}", e);
    }
}

/// 命令行 > 配置文件 > 默认值
fn resolve_theme(cli_theme: Option<Theme>, config: &config::Config) -> Theme {
    if let Some(theme) = cli_theme {
        return theme;
    }
    Theme::from_name(&config.theme.name).unwrap_or_else(|| {
        warn!(name = %config.theme.name, "unknown theme in config, using default");
        Theme::default()
    })
}

/// 启动 TUI 界面
fn run_tui(app: &mut App) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    with_restore(
        || {
            execute!(io::stdout(), EnableMouseCapture)?;
            // 运行主循环
            run(&mut terminal, app)
        },
        || {
            // 恢复终端：无论关闭鼠标捕获是否成功都要 restore
            let mouse = execute!(io::stdout(), DisableMouseCapture);
            ratatui::restore();
            mouse
        },
    )
}

/// 执行 `body` 后总是执行 `restore`，`body` 的错误优先返回
fn with_restore<T>(
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn main() -> io::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    init_logging();

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let config_path = match config::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("config disabled: {}", e);
            None
        }
    };
    let config = config_path
        .as_deref()
        .map(config::load_config_from)
        .unwrap_or_default();
    let theme = resolve_theme(cli.theme, &config);

    let mut app = App::new(theme).with_config_path(config_path);
    app.seed_tasks(&cli.tasks);

    info!(theme = theme.label(), seeded = app.board.len(), "taskboard started");
    let result = run_tui(&mut app);
    info!(tasks = app.board.len(), "taskboard stopped");

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::board::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
