// image navigation for the project detail view
//
// the index wraps at both ends, and the full-screen overlay is independent of it so that
// closing the overlay keeps whichever image the user was looking at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    fullscreen: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    Close,
}

impl KeyAction {
    // names as reported by KeyboardEvent.key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            index: 0,
            len,
            fullscreen: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn open(&mut self) {
        self.fullscreen = true;
    }

    pub fn close(&mut self) {
        self.fullscreen = false;
    }

    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Previous => self.previous(),
            KeyAction::Next => self.next(),
            KeyAction::Close => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);

            carousel.previous();
            assert_eq!(carousel.index(), len - 1);

            carousel.next();
            assert_eq!(carousel.index(), 0);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(4);

        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);

        carousel.select(2);
        carousel.select(9);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn escape_only_closes_overlay() {
        let mut carousel = Carousel::new(3);
        carousel.next();

        carousel.handle_key(KeyAction::Close);
        assert!(!carousel.is_fullscreen());
        assert_eq!(carousel.index(), 1);

        carousel.open();
        carousel.handle_key(KeyAction::from_key("Escape").unwrap());
        assert!(!carousel.is_fullscreen());
        assert_eq!(carousel.index(), 1);

        carousel.handle_key(KeyAction::from_key("ArrowLeft").unwrap());
        assert_eq!(carousel.index(), 0);
        assert_eq!(KeyAction::from_key("Enter"), None);
    }

    #[test]
    fn empty_does_not_move() {
        let mut carousel = Carousel::new(0);

        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
