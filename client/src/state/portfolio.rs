//! Portfolio cards: at most one open at a time.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    open: Option<usize>,
}

impl Portfolio {
    #[must_use]
    pub fn is_open(&self, card: usize) -> bool {
        self.open == Some(card)
    }

    #[must_use]
    pub fn open_card(&self) -> Option<usize> {
        self.open
    }

    /// Open `card`, closing any other. Returns `true` so callers can bring
    /// the card into view.
    pub fn open(&mut self, card: usize) -> bool {
        self.open = Some(card);
        true
    }

    pub fn close(&mut self, card: usize) {
        if self.is_open(card) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Returns whether `card` ended up open.
    pub fn toggle(&mut self, card: usize) -> bool {
        if self.is_open(card) {
            self.open = None;
            false
        } else {
            self.open(card)
        }
    }

    /// Keyboard on a focused card. Returns whether the key was handled.
    pub fn handle_key(&mut self, card: usize, key: &str) -> bool {
        match key {
            "Enter" | " " => {
                self.toggle(card);
                true
            }
            "Escape" => {
                self.close(card);
                true
            }
            _ => false,
        }
    }

    /// A click landed on the page; clicks outside every card close all.
    pub fn handle_pointer(&mut self, inside_card: bool) {
        if !inside_card {
            self.close_all();
        }
    }
}
