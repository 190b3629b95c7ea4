use crate::coords::Rect;

/// Cursor over an address window, advancing row-major.
///
/// Used by outputs that need the coordinates of every pixel in a
/// [`DisplayOutput::write`](super::DisplayOutput::write) stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressWindow {
    rect: Rect,
    x: i16,
    y: i16,
}

impl Default for AddressWindow {
    fn default() -> Self {
        Self::new(Rect::empty())
    }
}

impl AddressWindow {
    #[inline]
    pub fn new(rect: Rect) -> Self {
        Self { rect, x: rect.x_min(), y: rect.y_min() }
    }

    /// Returns the cursor position and moves to the next pixel, wrapping
    /// rows.
    #[inline]
    pub fn advance(&mut self) -> (i16, i16) {
        let at = (self.x, self.y);
        if self.rect.is_empty() {
            return at;
        }
        if self.x < self.rect.x_max() {
            self.x += 1;
        } else {
            self.x = self.rect.x_min();
            self.y = self.y.saturating_add(1);
        }
        at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_rows() {
        let mut w = AddressWindow::new(Rect::new(2, 5, 3, 6));
        let visited: Vec<_> = (0..4).map(|_| w.advance()).collect();
        assert_eq!(visited, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }

    #[test]
    fn advance_crosses_many_rows() {
        let mut w = AddressWindow::new(Rect::new(0, 0, 9, 9));
        for _ in 0..25 {
            w.advance();
        }
        assert_eq!(w.advance(), (5, 2));
    }

    #[test]
    fn empty_window_stays_put() {
        let mut w = AddressWindow::default();
        let start = w.advance();
        assert_eq!(w.advance(), start);
    }
}
