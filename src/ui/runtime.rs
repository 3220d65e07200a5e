use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;

const TICK: Duration = Duration::from_millis(50);

/// Run the app in the terminal until the user quits.
pub fn run(mut app: App<'_>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = app.event_loop(&mut terminal);
    ratatui::restore();
    result
}

impl<'a> App<'a> {
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        while !self.should_quit {
            self.tick(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now());
                    }
                    Event::Resize(columns, rows) => {
                        self.controller.on_resize(columns, rows, Instant::now());
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
