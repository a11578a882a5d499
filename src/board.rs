use rand::Rng;

use crate::config::{GridSize, SYMBOL_BEAN, SYMBOL_BODY, SYMBOL_EMPTY, SYMBOL_HEAD};
use crate::snake::Position;

/// Occupancy state of one field cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    Head,
    Bean,
}

impl Cell {
    /// Character drawn for this cell.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => SYMBOL_EMPTY,
            Self::Body => SYMBOL_BODY,
            Self::Head => SYMBOL_HEAD,
            Self::Bean => SYMBOL_BEAN,
        }
    }

    /// Style class the cell is drawn with.
    #[must_use]
    pub fn style(self) -> StyleTag {
        match self {
            Self::Empty => StyleTag::Default,
            Self::Body | Self::Head => StyleTag::Snake,
            Self::Bean => StyleTag::Bean,
        }
    }
}

/// Style classes for rendered cells; the UI maps them to concrete colors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StyleTag {
    Default,
    Snake,
    Bean,
}

/// One styled run of text within a rendered field row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FrameSpan {
    pub tag: StyleTag,
    pub text: String,
}

/// Pure text projection of the field: styled spans per row plus a score line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TextFrame {
    pub rows: Vec<Vec<FrameSpan>>,
    pub score_line: String,
}

/// Cell-occupancy grid; the single source of truth for what sits where.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        assert!(
            size.rows > 0 && size.cols > 0,
            "board dimensions must be non-zero"
        );

        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `position`, which must lie inside the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    /// Overwrites the cell at `position`, which must lie inside the board.
    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// Returns the current bean position, if a bean is on the field.
    #[must_use]
    pub fn bean_position(&self) -> Option<Position> {
        self.positions().find(|&p| self.cell(p) == Cell::Bean)
    }

    /// Places the bean on a uniformly sampled free cell.
    ///
    /// Samples from an explicit candidate list rather than rejection
    /// sampling, so placement stays bounded even when the field is nearly
    /// full. Returns `None` when no free cell exists.
    pub fn place_bean<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let candidates: Vec<Position> = self
            .positions()
            .filter(|&p| self.cell(p) == Cell::Empty)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let position = candidates[rng.gen_range(0..candidates.len())];
        self.set_cell(position, Cell::Bean);
        Some(position)
    }

    /// Renders the field plus a score line as styled text spans.
    ///
    /// Pure projection of the current occupancy and score; every cell
    /// becomes one `" <symbol> "` span tagged with its style class.
    #[must_use]
    pub fn render(&self, score: u32) -> TextFrame {
        let mut rows = Vec::with_capacity(usize::from(self.size.rows));
        for row in 0..i32::from(self.size.rows) {
            let mut spans = Vec::with_capacity(usize::from(self.size.cols));
            for col in 0..i32::from(self.size.cols) {
                let cell = self.cell(Position { row, col });
                spans.push(FrameSpan {
                    tag: cell.style(),
                    text: format!(" {} ", cell.symbol()),
                });
            }
            rows.push(spans);
        }

        TextFrame {
            rows,
            score_line: format!("Score: {score}"),
        }
    }

    /// Iterates all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..i32::from(size.rows))
            .flat_map(move |row| (0..i32::from(size.cols)).map(move |col| Position { row, col }))
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.is_within_bounds(self.size),
            "position {position:?} outside {:?} board",
            self.size
        );

        position.row as usize * usize::from(self.size.cols) + position.col as usize
    }
}
