//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture (for pointer motion).
pub fn init() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal when dropped, including on early returns.
pub struct TerminalGuard {
    restore: fn() -> Result<()>,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self { restore }
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            tracing::error!("failed to restore terminal: {err:#}");
        }
    }
}

/// Runs `setup` while `guard` is held, so a partial setup is still undone.
pub fn guarded<T>(
    guard: TerminalGuard,
    setup: impl FnOnce() -> Result<T>,
) -> Result<(TerminalGuard, T)> {
    let value = setup()?;
    Ok((guard, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn counting_restore() -> Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn failed_setup_still_restores_and_success_defers_it() {
        let guard = TerminalGuard {
            restore: counting_restore,
        };
        let result = guarded(guard, || -> Result<()> { anyhow::bail!("no tty") });
        assert!(result.is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        let guard = TerminalGuard {
            restore: counting_restore,
        };
        let (guard, value) = guarded(guard, || Ok(7)).unwrap();
        assert_eq!(value, 7);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        drop(guard);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2);
    }
}
