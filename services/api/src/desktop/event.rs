use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

#[derive(Debug)]
pub(crate) enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Blocking poller; yields `Tick` when nothing arrives within the tick rate.
pub(crate) struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub(crate) const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    pub(crate) fn next(&self) -> Result<Event, std::io::Error> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            CrosstermEvent::Resize(_, _) => Ok(Event::Resize),
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}
