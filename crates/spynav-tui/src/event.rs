use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use spynav_core::config::ScrollConfig;

use crate::scroll::ScrollConfigExt;

/// Terminal event pump.
///
/// Polls with the idle tick rate normally and with the animation frame
/// interval while a scroll animation needs driving.
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick: Duration::from_millis(16),
        }
    }

    pub fn with_scroll_config(tick_rate_ms: u64, scroll: &ScrollConfig) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick: scroll.animation_tick_duration(),
        }
    }

    /// Poll for the next event. `animating` selects the fast poll timeout.
    pub fn next(&self, animating: bool) -> Result<Option<SpyEvent>> {
        let timeout = if animating {
            self.animation_tick
        } else {
            self.tick_rate
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(SpyEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(SpyEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(SpyEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(SpyEvent::Tick))
        }
    }
}

/// Events delivered to the component.
#[derive(Debug)]
pub enum SpyEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse input (wheel scroll or click)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
