// src/domain/reveal.rs

/// How many more cards each "Load More" reveals. Also the starting count.
pub const REVEAL_STEP: usize = 6;

/// Number of filtered cards currently shown. Only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealWindow {
    threshold: usize,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self {
            threshold: REVEAL_STEP,
        }
    }
}

impl RevealWindow {
    /// Restores a window from a carried-over threshold. Anything below the
    /// starting count is raised to it.
    pub fn from_threshold(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(REVEAL_STEP),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// No upper bound; the visible slice clamps to the list length instead.
    pub fn load_more(&mut self) {
        self.threshold = self.threshold.saturating_add(REVEAL_STEP);
    }

    /// The window after one more "Load More".
    pub fn next(self) -> Self {
        let mut next = self;
        next.load_more();
        next
    }

    /// The first `min(threshold, items.len())` entries.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.threshold.min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_step() {
        let window = RevealWindow::default();
        assert_eq!(window.threshold(), 6);
        assert_eq!(window.visible(&[1, 2, 3]).len(), 3);
        assert!(!window.has_more(6));
        assert!(window.has_more(7));
    }

    #[test]
    fn load_more_grows_the_slice_by_a_step() {
        let items: Vec<usize> = (0..20).collect();
        let mut window = RevealWindow::default();
        assert_eq!(window.visible(&items).len(), 6);

        window.load_more();
        assert_eq!(window.visible(&items), &items[..12]);

        window.load_more();
        assert_eq!(window.visible(&items).len(), 18);
    }

    #[test]
    fn load_more_is_a_no_op_on_the_slice_once_clamped() {
        let items: Vec<usize> = (0..8).collect();
        let mut window = RevealWindow::default().next();
        assert_eq!(window.visible(&items).len(), 8);
        assert!(!window.has_more(items.len()));

        for _ in 0..3 {
            window.load_more();
            assert_eq!(window.visible(&items), &items[..]);
        }
    }

    #[test]
    fn carried_threshold_is_never_below_the_start() {
        assert_eq!(RevealWindow::from_threshold(0).threshold(), 6);
        assert_eq!(RevealWindow::from_threshold(5).threshold(), 6);
        assert_eq!(RevealWindow::from_threshold(13).threshold(), 13);
    }

    #[test]
    fn threshold_saturates() {
        let mut window = RevealWindow::from_threshold(usize::MAX - 1);
        window.load_more();
        assert_eq!(window.threshold(), usize::MAX);
        assert!(window.visible::<u8>(&[]).is_empty());
    }
}
