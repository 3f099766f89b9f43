//! FAQ accordion: items open and close independently.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Faq {
    open: Vec<bool>,
}

impl Faq {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { open: vec![false; len] }
    }

    #[must_use]
    pub fn is_open(&self, item: usize) -> bool {
        self.open.get(item).copied().unwrap_or(false)
    }

    /// Flip `item`; returns its new state. Unknown items stay closed.
    pub fn toggle(&mut self, item: usize) -> bool {
        match self.open.get_mut(item) {
            Some(open) => {
                *open = !*open;
                *open
            }
            None => false,
        }
    }
}
