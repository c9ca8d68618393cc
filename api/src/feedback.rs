use std::collections::VecDeque;

// transient "copied" indicator
//
// every successful copy raises the flag and schedules its own reset; resets are never
// rescheduled, so a second copy inside the window does not keep the flag up any longer
// than the first one's deadline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    delay_ms: u64,
    copied: bool,
    resets: VecDeque<u64>,
}

impl CopyFeedback {
    pub fn new(delay_ms: u64) -> Self {
        CopyFeedback {
            delay_ms,
            copied: false,
            resets: VecDeque::new(),
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark(&mut self, now_ms: u64) {
        self.copied = true;
        self.resets.push_back(now_ms + self.delay_ms);
    }

    pub fn tick(&mut self, now_ms: u64) {
        while let Some(&deadline) = self.resets.front() {
            if deadline > now_ms {
                break;
            }

            self.resets.pop_front();
            self.copied = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resets_after_delay() {
        let mut feedback = CopyFeedback::new(2000);

        feedback.mark(0);
        assert!(feedback.is_copied());

        feedback.tick(1999);
        assert!(feedback.is_copied());

        feedback.tick(2000);
        assert!(!feedback.is_copied());
    }

    #[test]
    fn second_copy_does_not_extend_first_window() {
        let mut feedback = CopyFeedback::new(2000);

        feedback.mark(0);
        feedback.mark(1500);

        feedback.tick(2000);
        assert!(!feedback.is_copied());

        // the later reset still fires, and is harmless
        feedback.tick(3500);
        assert!(!feedback.is_copied());
    }
}
