//! Input handling for the application

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent, now: DateTime<Utc>) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.request_refresh(now);
            return;
        }

        match key.code {
            keys::QUIT => self.quit(),
            keys::ESC => self.handle_back(),
            keys::HELP => self.toggle_help(),
            keys::REFRESH => self.request_refresh(now),
            _ => {}
        }
    }

    fn handle_back(&mut self) {
        if self.current_view == View::Help {
            self.current_view = View::Widget;
        } else {
            self.quit();
        }
    }
}
