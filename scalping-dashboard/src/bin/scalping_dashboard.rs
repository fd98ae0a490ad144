/// Scalping Dashboard
///
/// Simulated quotes, history, risk signals, fundamentals and options for a
/// user-managed watchlist. Configured through `DASHBOARD_CONFIG` (JSON file)
/// and env overrides (`WATCHLIST`, `SELECTED`, `SELECTOR_STYLE`,
/// `DASHBOARD_SEED`, `DASHBOARD_LOG`).
use std::{error::Error, io, sync::Mutex};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scalping_dashboard::{
    render_dashboard, timer_channel, Action, Dashboard, DashboardConfig, DashboardError,
    SyntheticSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log to the configured file, if any; the terminal belongs to the UI
fn init_logging(config: &DashboardConfig) -> Result<(), DashboardError> {
    let Some(file) = config.open_log_file()? else {
        return Ok(());
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = DashboardConfig::from_env()?;
    init_logging(&config)?;
    info!("Starting scalping dashboard: {:?}", config);

    // Setup panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let source = SyntheticSource::from_seed(config.seed);
    let mut dashboard = Dashboard::new(&config, Box::new(source));
    let (timer_tx, mut timer_rx) = timer_channel();
    dashboard.attach_timers(timer_tx);

    let result = run(&mut terminal, &mut dashboard, &mut timer_rx, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Scalping dashboard stopped");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard,
    timer_rx: &mut scalping_dashboard::TimerReceiver,
    config: &DashboardConfig,
) -> Result<(), Box<dyn Error>> {
    loop {
        while let Ok(tick) = timer_rx.try_recv() {
            dashboard.handle_timer(tick);
        }

        terminal.draw(|f| render_dashboard(f, dashboard))?;

        if event::poll(config.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && dashboard.handle_key(key) == Action::Quit {
                    return Ok(());
                }
            }
        }
    }
}
