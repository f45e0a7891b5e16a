use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::DisableMouseCapture;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use retrodesk::constants::DEFAULT_FRAME_MS;
use retrodesk::drivers::ConsoleInputDriver;
use retrodesk::errors::ShellError;
use retrodesk::runner::{Shell, ShellOptions, run_shell};
use retrodesk::tracing_sub;

#[derive(Debug, Parser)]
#[command(name = "retrodesk", version, about = "A retro desktop in your terminal")]
struct Cli {
    /// Jump straight to the desktop without the boot splash.
    #[arg(long)]
    skip_boot: bool,

    /// Disable click ripples and other eye candy.
    #[arg(long)]
    no_effects: bool,

    /// Append debug logs to this file (the TUI owns the terminal, so
    /// there is no console logging).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Frame/poll interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,
}

fn main() -> Result<(), ShellError> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let mut shell = Shell::new(ShellOptions {
        skip_boot: cli.skip_boot,
        effects: !cli.no_effects,
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_shell(
        &mut terminal,
        ConsoleInputDriver::new(),
        &mut shell,
        Duration::from_millis(cli.frame_ms.max(1)),
    );

    // restore the terminal even when the shell errored out
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
