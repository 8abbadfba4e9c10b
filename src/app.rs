//! App state and main loop: input handling, refresh timers, async command
//! supervision, and drawing.
//!
//! Everything that touches display state runs on this one loop. Subprocesses
//! and the batched directory inventory run as spawned tasks and report back
//! through an unbounded channel, drained between input polling and drawing,
//! so no handler ever mutates shared state from another thread.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::Config;
use crate::console::ConsoleState;
use crate::integrity::IntegrityState;
use crate::inventory::{self, DirectoryReport};
use crate::metrics::{MetricsSnapshot, MetricsSource};
use crate::runner;
use crate::ui;

/// Completions delivered back onto the UI loop. Each variant is handled in
/// one synchronous step between draws, so one command's result block can
/// never interleave with another's.
pub enum AppEvent {
    CommandFinished(runner::CommandResult),
    CheckFinished(runner::CommandResult),
    InventoryReady(DirectoryReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub cfg: Config,
    pub hostname: String,
    pub snapshot: MetricsSnapshot,
    pub report: DirectoryReport,
    pub console: ConsoleState,
    pub integrity: IntegrityState,
    pub mode: InputMode,

    metrics: MetricsSource,
    should_quit: bool,
    should_suspend: bool,
    inventory_in_flight: bool,
    last_fast_tick: Instant,
    last_slow_tick: Instant,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let fast = Duration::from_secs(cfg.fast_secs);
        let slow = Duration::from_secs(cfg.slow_secs);
        let metrics = MetricsSource::new(&cfg.root_path);
        Self {
            hostname: sysinfo::System::host_name().unwrap_or_else(|| "unknown".into()),
            snapshot: MetricsSnapshot::default(),
            report: DirectoryReport::default(),
            console: ConsoleState::new(),
            integrity: IntegrityState::new(),
            mode: InputMode::Normal,
            metrics,
            should_quit: false,
            should_suspend: false,
            inventory_in_flight: false,
            // backdate both timers so they fire on the first loop pass
            last_fast_tick: Instant::now().checked_sub(fast).unwrap_or_else(Instant::now),
            last_slow_tick: Instant::now().checked_sub(slow).unwrap_or_else(Instant::now),
            tx,
            rx,
            cfg,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B: ratatui::backend::Backend + Write,
    {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press {
                        self.handle_key(k);
                    }
                }
            }
            if self.should_quit {
                break;
            }
            if self.should_suspend {
                self.should_suspend = false;
                suspend_to_shell(terminal)?;
                continue;
            }

            // Drain completed background work before touching timers
            while let Ok(ev) = self.rx.try_recv() {
                self.handle_event(ev);
            }

            self.tick();

            terminal.draw(|f| ui::draw(f, self))?;

            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(())
    }

    /// Timer edges. The fast tick samples inline (sysinfo is cheap and
    /// synchronous); the slow tick farms the batched size run out to a task,
    /// guarded by an in-flight flag so a lagging run cannot overlap the next.
    fn tick(&mut self) {
        if self.last_fast_tick.elapsed() >= Duration::from_secs(self.cfg.fast_secs) {
            self.snapshot = self.metrics.sample();
            self.last_fast_tick = Instant::now();
        }
        if self.last_slow_tick.elapsed() >= Duration::from_secs(self.cfg.slow_secs)
            && !self.inventory_in_flight
        {
            self.inventory_in_flight = true;
            self.last_slow_tick = Instant::now();
            let tx = self.tx.clone();
            let root = self.cfg.root_path.clone();
            let du = self.cfg.du_command.clone();
            let max = self.cfg.max_dirs;
            tokio::spawn(async move {
                let report = inventory::inventory(&root, &du, max).await;
                let _ = tx.send(AppEvent::InventoryReady(report));
            });
        }
    }

    fn handle_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::CommandFinished(res) => self.console.apply_result(&res),
            AppEvent::CheckFinished(res) => self.integrity.apply_result(&res),
            AppEvent::InventoryReady(report) => {
                self.report = report;
                self.inventory_in_flight = false;
            }
        }
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            InputMode::Normal => match k.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                KeyCode::Char('s') => self.should_suspend = true,
                KeyCode::Char('c') => self.trigger_check(),
                KeyCode::Char('i') => self.mode = InputMode::Editing,
                _ => {}
            },
            InputMode::Editing => match k.code {
                KeyCode::Esc => self.mode = InputMode::Normal,
                KeyCode::Enter => self.submit_command(),
                KeyCode::Backspace => {
                    self.console.input.pop();
                }
                KeyCode::Char(c) => self.console.input.push(c),
                _ => {}
            },
        }
    }

    /// Console submit. The read-and-clear happens inside `submit()` with no
    /// await in between; only the finished result comes back asynchronously.
    fn submit_command(&mut self) {
        if let Some(command) = self.console.submit() {
            let tx = self.tx.clone();
            tokio::spawn(async move {
                let res = runner::run(&command).await;
                let _ = tx.send(AppEvent::CommandFinished(res));
            });
        }
    }

    fn trigger_check(&mut self) {
        let command = self.cfg.check_command.clone();
        self.integrity.trigger(&command);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = runner::run(&command).await;
            let _ = tx.send(AppEvent::CheckFinished(res));
        });
    }
}

/// Hand the terminal back to the controlling shell via SIGTSTP and restore
/// it when the process is resumed with `fg`.
#[cfg(unix)]
fn suspend_to_shell<B>(terminal: &mut Terminal<B>) -> Result<()>
where
    B: ratatui::backend::Backend + Write,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    println!("vmdash suspended. Type 'fg' and press Enter to return.");

    // SAFETY: raise(2) with SIGTSTP only stops this process; execution
    // resumes here after SIGCONT.
    unsafe {
        libc::raise(libc::SIGTSTP);
    }

    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.clear()?;
    Ok(())
}

#[cfg(not(unix))]
fn suspend_to_shell<B>(_terminal: &mut Terminal<B>) -> Result<()>
where
    B: ratatui::backend::Backend + Write,
{
    Ok(())
}
