pub mod app;
pub mod view;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use self::app::App;

const TICK: Duration = Duration::from_secs(1);

/// Take over the terminal and run the meeting loop until quit.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut next_tick = Instant::now() + TICK;

    loop {
        terminal.draw(|frame| view::draw(frame, app))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        // There is exactly one ticker: this deadline. A transition that
        // reset the countdown also re-arms it, so a stale deadline cannot
        // fire into a freshly reset timer.
        if app.take_timer_rearm() {
            next_tick = Instant::now() + TICK;
        } else if Instant::now() >= next_tick {
            app.on_tick();
            next_tick += TICK;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
