// delprompt — anchored delete-confirmation prompt in the terminal.

use anyhow::{Context, Result};
use delprompt::{app::App, tui};

fn main() -> Result<()> {
    init_logging();
    tui::install_panic_hook();

    let mut terminal = tui::init().context("terminal init failed")?;

    let result = run(&mut terminal);

    // Always restore terminal, even on error
    let _ = tui::restore(&mut terminal);

    result
}

fn run(terminal: &mut tui::Tui) -> Result<()> {
    let mut app = App::new()?;
    app.run(terminal)
}

/// The TUI owns stderr, so logs only go to a file and only when RUST_LOG is set.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Some(dir) = dirs::cache_dir().map(|d| d.join("delprompt")) else { return };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("delprompt.log")) else { return };
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
