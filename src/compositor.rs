//! Depth-resolved writes into the frame store.

use crate::frame::FrameStore;

/// What happened to one candidate write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Nearest sample so far for its pixel; glyph and depth were written.
    Drawn,
    /// A nearer (or equally near) sample already owns the pixel.
    Occluded,
    OutOfBounds,
}

/// Write `glyph` at `(x, y)` only if `ooz` is strictly nearer than what the
/// pixel already holds.
pub fn composite(frame: &mut FrameStore, x: i64, y: i64, ooz: f64, glyph: char) -> Composite {
    let Some((cell, depth)) = frame.pixel_mut(x, y) else {
        return Composite::OutOfBounds;
    };
    if ooz > *depth {
        *depth = ooz;
        *cell = glyph;
        Composite::Drawn
    } else {
        Composite::Occluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{BACKGROUND, RESET_DEPTH};

    #[test]
    fn test_nearer_sample_wins_regardless_of_order() {
        let mut frame = FrameStore::new(10, 5);
        assert_eq!(composite(&mut frame, 3, 2, 0.2, '.'), Composite::Drawn);
        assert_eq!(composite(&mut frame, 3, 2, 0.4, '@'), Composite::Drawn);
        assert_eq!(composite(&mut frame, 3, 2, 0.3, '#'), Composite::Occluded);
        assert_eq!(frame.glyph(3, 2), Some('@'));
        assert_eq!(frame.depth(3, 2), Some(0.4));
    }

    #[test]
    fn test_equal_depth_does_not_overwrite() {
        let mut frame = FrameStore::new(10, 5);
        composite(&mut frame, 0, 0, 0.25, '~');
        assert_eq!(composite(&mut frame, 0, 0, 0.25, '$'), Composite::Occluded);
        assert_eq!(frame.glyph(0, 0), Some('~'));
    }

    #[test]
    fn test_inclusive_upper_bound() {
        let mut frame = FrameStore::new(80, 22);
        assert_eq!(composite(&mut frame, 79, 21, 0.2, '*'), Composite::Drawn);
        assert_eq!(composite(&mut frame, 79, 0, 0.2, '*'), Composite::Drawn);
        assert_eq!(composite(&mut frame, 0, 21, 0.2, '*'), Composite::Drawn);
        assert_eq!(composite(&mut frame, 80, 21, 0.2, '*'), Composite::OutOfBounds);
        assert_eq!(composite(&mut frame, 79, 22, 0.2, '*'), Composite::OutOfBounds);
        assert_eq!(composite(&mut frame, -1, 5, 0.2, '*'), Composite::OutOfBounds);
        assert_eq!(frame.drawn(), 3);
    }

    #[test]
    fn test_reset_depth_never_accepted() {
        let mut frame = FrameStore::new(2, 2);
        assert_eq!(
            composite(&mut frame, 1, 1, RESET_DEPTH, '#'),
            Composite::Occluded
        );
        assert_eq!(frame.glyph(1, 1), Some(BACKGROUND));
    }
}
