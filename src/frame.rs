//! Character and depth buffers for one frame.

use std::fmt;

/// Background glyph for pixels no sample reached.
pub const BACKGROUND: char = ' ';

/// Depth every pixel starts a frame with. Any visible sample has `1/z > 0`.
pub const RESET_DEPTH: f64 = 0.0;

/// Row-major 2D buffer with bounds-checked access.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat offset of `(x, y)`, or `None` when it falls outside the grid.
    ///
    /// Every pixel lookup goes through here.
    pub fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&T> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut T> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y < self.height {
            Some(&self.cells[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }
}

/// The glyph buffer plus its depth buffer, reset at the start of every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStore {
    glyphs: Grid<char>,
    depth: Grid<f64>,
}

impl FrameStore {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            glyphs: Grid::new(width, height, BACKGROUND),
            depth: Grid::new(width, height, RESET_DEPTH),
        }
    }

    pub fn width(&self) -> usize {
        self.glyphs.width()
    }

    pub fn height(&self) -> usize {
        self.glyphs.height()
    }

    pub fn reset(&mut self) {
        self.glyphs.fill(BACKGROUND);
        self.depth.fill(RESET_DEPTH);
    }

    pub fn glyph(&self, x: i64, y: i64) -> Option<char> {
        self.glyphs.get(x, y).copied()
    }

    pub fn depth(&self, x: i64, y: i64) -> Option<f64> {
        self.depth.get(x, y).copied()
    }

    pub fn glyphs(&self) -> &Grid<char> {
        &self.glyphs
    }

    /// Both cells of one pixel, for the compositor.
    pub(crate) fn pixel_mut(&mut self, x: i64, y: i64) -> Option<(&mut char, &mut f64)> {
        let i = self.glyphs.offset(x, y)?;
        Some((&mut self.glyphs.cells[i], &mut self.depth.cells[i]))
    }

    /// Each row rendered as a string.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height()).filter_map(|y| self.glyphs.row(y).map(|row| row.iter().collect()))
    }

    /// Number of pixels holding something other than the background.
    pub fn drawn(&self) -> usize {
        self.glyphs.cells.iter().filter(|&&c| c != BACKGROUND).count()
    }
}

impl fmt::Display for FrameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        let grid = Grid::new(80, 22, 0u8);
        assert_eq!(grid.offset(0, 0), Some(0));
        assert_eq!(grid.offset(79, 0), Some(79));
        assert_eq!(grid.offset(0, 1), Some(80));
        assert_eq!(grid.offset(79, 21), Some(80 * 22 - 1));
        assert_eq!(grid.offset(80, 0), None);
        assert_eq!(grid.offset(0, 22), None);
        assert_eq!(grid.offset(-1, 0), None);
        assert_eq!(grid.offset(0, -1), None);
        assert_eq!(grid.offset(i64::MIN, 0), None);
        assert_eq!(grid.offset(i64::MAX, 0), None);
        assert_eq!(grid.offset(0, 1 << 40), None);
    }

    #[test]
    fn test_rows() {
        let mut grid = Grid::new(3, 2, '.');
        *grid.get_mut(2, 1).unwrap() = '#';
        assert_eq!(grid.row(0), Some(&['.', '.', '.'][..]));
        assert_eq!(grid.row(1), Some(&['.', '.', '#'][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut frame = FrameStore::new(4, 3);
        {
            let (glyph, depth) = frame.pixel_mut(1, 2).unwrap();
            *glyph = '@';
            *depth = 0.4;
        }
        assert_eq!(frame.drawn(), 1);

        frame.reset();
        assert_eq!(frame.drawn(), 0);
        assert_eq!(frame.glyph(1, 2), Some(BACKGROUND));
        assert_eq!(frame.depth(1, 2), Some(RESET_DEPTH));
    }

    #[test]
    fn test_display_one_line_per_row() {
        let mut frame = FrameStore::new(5, 2);
        *frame.pixel_mut(0, 1).unwrap().0 = '#';
        assert_eq!(frame.to_string(), "     \n#    \n");
    }
}
