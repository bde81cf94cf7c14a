//! Per-card image carousel position.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// A control activated on a room card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    PreviousImage,
    NextImage,
    Reserve,
}

/// Current image of one room card. Wraps in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    index: usize,
    len: usize,
}

impl GalleryState {
    /// Start at the first of `len` images.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Ok(len) = isize::try_from(self.len) else {
            return;
        };
        if len == 0 {
            return;
        }
        let Ok(current) = isize::try_from(self.index) else {
            return;
        };
        // rem_euclid keeps the result in 0..len even when stepping back from 0.
        self.index = usize::try_from((current + delta).rem_euclid(len)).unwrap_or(0);
    }

    /// Apply a card control. Returns `true` only when the card's room should
    /// be handed up for booking; image navigation never selects the room.
    pub fn handle(&mut self, action: CardAction) -> bool {
        match action {
            CardAction::PreviousImage => {
                self.previous();
                false
            }
            CardAction::NextImage => {
                self.next();
                false
            }
            CardAction::Reserve => true,
        }
    }

    /// Whether the dot at `position` marks the current image.
    #[must_use]
    pub fn is_current(&self, position: usize) -> bool {
        position == self.index
    }
}
