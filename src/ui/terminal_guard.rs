//! Raw-mode and alternate-screen setup with guaranteed restore.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back on drop, or from the panic hook if the screen
/// loop panics first. Restore runs at most once.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn new(restore: Restore) -> Self {
        let guard = Self {
            restore: Arc::new(Mutex::new(Some(restore))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(restore) = slot.take() {
            restore();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::new(Box::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }));

    Ok((terminal, guard))
}
