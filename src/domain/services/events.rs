#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;
use crate::domain::models::Screen;

fn handle_key(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind != KeyEventKind::Press {
        return None;
    }
    if keyevent.code == KeyCode::BackTab {
        return Some(Event::KeyboardBackTab());
    }

    match keyevent.into() {
        Input { key: Key::Tab, .. } => {
            return Some(Event::KeyboardTab());
        }
        Input { key: Key::F(num), .. } => {
            return Screen::from_function_key(num).map(|screen| {
                return Event::UISelectScreen(screen);
            });
        }
        Input { key: Key::Down, .. } => {
            return Some(Event::UIScrollDown());
        }
        Input { key: Key::Up, .. } => {
            return Some(Event::UIScrollUp());
        }
        Input {
            key: Key::PageDown, ..
        } => {
            return Some(Event::UIScrollPageDown());
        }
        Input {
            key: Key::PageUp, ..
        } => {
            return Some(Event::UIScrollPageUp());
        }
        Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => {
            return Some(Event::UIScrollPageDown());
        }
        Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => {
            return Some(Event::UIScrollPageUp());
        }
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Some(Event::KeyboardCTRLC());
        }
        Input {
            key: Key::Char('r'),
            ctrl: true,
            ..
        } => {
            return Some(Event::KeyboardCTRLR());
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Some(Event::KeyboardEnter());
        }
        input => {
            return Some(Event::KeyboardCharInput(input));
        }
    }
}

/// Maps terminal input to app events. Returns None for input the app doesn't
/// react to.
pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp());
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown());
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            return handle_key(keyevent);
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
