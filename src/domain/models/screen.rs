#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

/// Screens reachable from the navigation bar once logged in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, strum::Display)]
pub enum Screen {
    Chat,
    Analytics,
    Report,
}

impl Screen {
    pub fn all() -> Vec<Screen> {
        return Screen::iter().collect();
    }

    pub fn index(&self) -> usize {
        return Screen::iter()
            .position(|screen| return screen == *self)
            .unwrap_or(0);
    }

    pub fn next(&self) -> Screen {
        let screens = Screen::all();
        return screens[(self.index() + 1) % screens.len()];
    }

    pub fn previous(&self) -> Screen {
        let screens = Screen::all();
        return screens[(self.index() + screens.len() - 1) % screens.len()];
    }

    /// F1, F2 and F3 map to the screens in navigation order.
    pub fn from_function_key(key: u8) -> Option<Screen> {
        if key == 0 {
            return None;
        }
        return Screen::iter().nth(usize::from(key) - 1);
    }
}
