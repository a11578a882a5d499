use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell, TextFrame};
use crate::config::GridSize;
use crate::input::Turn;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    OutOfBounds,
    SelfCollision,
}

/// Outcome of one step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveResult {
    /// The snake moved; `ate_bean` reports whether it grew this step.
    Accepted { ate_bean: bool },
    /// The move would leave the field or bite the body. The field, body,
    /// score, and bean are untouched; the session latches into `GameOver`.
    Rejected(CollisionKind),
    /// The session is no longer playing; the command was dropped.
    Ignored,
}

/// Complete mutable game state for one session.
///
/// Owns the occupancy board and the body chain and keeps them in lockstep:
/// every cell marked `Body` or `Head` corresponds to exactly one chain
/// segment.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub snake: Snake,
    pub score: u32,
    pub status: GameStatus,
    /// Collision recorded when the session latched into `GameOver`.
    pub collision: Option<CollisionKind>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(size: GridSize, length: u16) -> Self {
        Self::with_rng(size, length, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(size: GridSize, length: u16, seed: u64) -> Self {
        Self::with_rng(size, length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, length: u16, mut rng: StdRng) -> Self {
        assert!(length >= 2, "snake length must be at least 2");
        assert!(
            usize::from(length) < size.total_cells(),
            "snake must leave at least one free cell for the bean"
        );
        assert!(
            usize::from(length) <= usize::from(size.rows) + usize::from(size.cols) - 1,
            "snake length exceeds the seeding shape capacity"
        );

        let segments = seed_segments(&mut rng, size, length);
        let mut session = Self::assemble(size, segments, rng);
        session
            .board
            .place_bean(&mut session.rng)
            .expect("a fresh board keeps at least one cell free");

        session
    }

    /// Builds a session from an explicit body layout, for reproducible
    /// simulations and tests. `segments` run head to tail; `bean` must not
    /// overlap them.
    #[must_use]
    pub fn from_layout(
        size: GridSize,
        segments: Vec<Position>,
        bean: Option<Position>,
        seed: u64,
    ) -> Self {
        let mut session = Self::assemble(size, segments, StdRng::seed_from_u64(seed));
        if let Some(bean) = bean {
            assert_eq!(
                session.board.cell(bean),
                Cell::Empty,
                "bean must be placed on a free cell"
            );
            session.board.set_cell(bean, Cell::Bean);
        }

        session
    }

    fn assemble(size: GridSize, segments: Vec<Position>, rng: StdRng) -> Self {
        let snake = Snake::from_segments(segments);
        let mut board = Board::new(size);
        for &segment in snake.segments().skip(1) {
            board.set_cell(segment, Cell::Body);
        }
        board.set_cell(snake.head(), Cell::Head);

        Self {
            board,
            snake,
            score: 0,
            status: GameStatus::Playing,
            collision: None,
            rng,
        }
    }

    /// Applies one relative turn command.
    ///
    /// Resolves the absolute direction from the derived heading, then either
    /// moves the head (growing on a bean) or rejects the move and latches
    /// the session into `GameOver`. A session that already finished drops
    /// the command.
    pub fn step(&mut self, turn: Turn) -> MoveResult {
        if self.status != GameStatus::Playing {
            return MoveResult::Ignored;
        }

        let direction = turn.applied_to(self.snake.heading());
        let candidate = self.snake.head().offset(direction);

        if let Some(kind) = self.collision_at(candidate) {
            self.status = GameStatus::GameOver;
            self.collision = Some(kind);
            return MoveResult::Rejected(kind);
        }

        let ate_bean = self.board.cell(candidate) == Cell::Bean;

        self.board.set_cell(self.snake.head(), Cell::Body);
        let vacated = self.snake.advance(candidate, ate_bean);
        self.board.set_cell(candidate, Cell::Head);
        if let Some(tail) = vacated {
            self.board.set_cell(tail, Cell::Empty);
        }

        if ate_bean {
            self.score += 1;
            if self.board.place_bean(&mut self.rng).is_none() {
                // Board full: nothing left to eat.
                self.status = GameStatus::Victory;
            }
        }

        MoveResult::Accepted { ate_bean }
    }

    /// Projects the current field and score as a styled text frame.
    #[must_use]
    pub fn render(&self) -> TextFrame {
        self.board.render(self.score)
    }

    /// Returns the field dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    fn collision_at(&self, candidate: Position) -> Option<CollisionKind> {
        if !candidate.is_within_bounds(self.board.size()) {
            return Some(CollisionKind::OutOfBounds);
        }

        // The tail has not retracted yet when the candidate is checked, so
        // stepping onto it counts as a self collision.
        match self.board.cell(candidate) {
            Cell::Body | Cell::Head => Some(CollisionKind::SelfCollision),
            Cell::Empty | Cell::Bean => None,
        }
    }
}

/// Seeds the legacy starting shape: from a random head cell the body runs up
/// the column while rows last, then right along the top row.
///
/// Heads whose shape would leave the field are re-sampled, so any
/// dimension/length combination accepted by the constructor is safe.
fn seed_segments<R: Rng + ?Sized>(rng: &mut R, size: GridSize, length: u16) -> Vec<Position> {
    let reach = i32::from(length) - 1;
    loop {
        let head = Position {
            row: rng.gen_range(0..i32::from(size.rows)),
            col: rng.gen_range(0..i32::from(size.cols)),
        };
        if head.row < reach && head.col + (reach - head.row) >= i32::from(size.cols) {
            continue;
        }

        let mut segments = Vec::with_capacity(usize::from(length));
        segments.push(head);
        let Position { mut row, mut col } = head;
        for _ in 1..length {
            if row > 0 {
                row -= 1;
            } else {
                col += 1;
            }
            segments.push(Position { row, col });
        }

        return segments;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::board::Cell;
    use crate::config::GridSize;
    use crate::input::Turn;
    use crate::snake::Position;

    use super::{CollisionKind, GameSession, GameStatus, MoveResult};

    fn pos(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Asserts that the cells marked `Body`/`Head` are exactly the chain
    /// segments and that at most one bean is on the field.
    fn assert_occupancy_consistent(session: &GameSession) {
        let chain: HashSet<Position> = session.snake.segments().copied().collect();
        assert_eq!(chain.len(), session.snake.len(), "chain self-overlaps");

        let mut heads = 0;
        let mut beans = 0;
        for position in session.board.positions() {
            match session.board.cell(position) {
                Cell::Head => {
                    heads += 1;
                    assert_eq!(position, session.snake.head());
                }
                Cell::Body => assert!(chain.contains(&position)),
                Cell::Bean => {
                    beans += 1;
                    assert!(!chain.contains(&position));
                }
                Cell::Empty => assert!(!chain.contains(&position)),
            }
        }

        assert_eq!(heads, 1);
        assert!(beans <= 1);
    }

    #[test]
    fn eating_a_bean_grows_the_chain_and_scores() {
        let size = GridSize { rows: 30, cols: 30 };
        let mut session = GameSession::from_layout(
            size,
            vec![pos(5, 5), pos(5, 4), pos(5, 3)],
            Some(pos(5, 6)),
            9,
        );

        let result = session.step(Turn::Straight);

        assert_eq!(result, MoveResult::Accepted { ate_bean: true });
        assert_eq!(session.score, 1);
        let body: Vec<Position> = session.snake.segments().copied().collect();
        assert_eq!(body, vec![pos(5, 6), pos(5, 5), pos(5, 4), pos(5, 3)]);

        let bean = session
            .board
            .bean_position()
            .expect("a fresh bean should be on the field");
        assert!(!session.snake.occupies(bean));
        assert_occupancy_consistent(&session);
    }

    #[test]
    fn moving_without_a_bean_keeps_length_and_score() {
        let size = GridSize { rows: 30, cols: 30 };
        let mut session =
            GameSession::from_layout(size, vec![pos(5, 5), pos(5, 4), pos(5, 3)], None, 9);

        let result = session.step(Turn::Straight);

        assert_eq!(result, MoveResult::Accepted { ate_bean: false });
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.board.cell(pos(5, 3)), Cell::Empty);
        assert_occupancy_consistent(&session);
    }

    #[test]
    fn seven_straight_moves_facing_up_shift_the_head_one_row_each() {
        let size = GridSize { rows: 30, cols: 30 };
        let segments: Vec<Position> = (0..8).map(|i| pos(10 + i, 10)).collect();
        let mut session = GameSession::from_layout(size, segments, None, 3);

        for step in 1..=7 {
            assert_eq!(
                session.step(Turn::Straight),
                MoveResult::Accepted { ate_bean: false }
            );
            assert_eq!(session.snake.head(), pos(10 - step, 10));
            assert_eq!(session.snake.len(), 8);
        }
    }

    #[test]
    fn wall_rejection_leaves_the_state_untouched() {
        let size = GridSize { rows: 30, cols: 30 };
        let mut session =
            GameSession::from_layout(size, vec![pos(0, 5), pos(1, 5), pos(2, 5)], Some(pos(9, 9)), 5);
        let board_before = session.board.clone();
        let snake_before = session.snake.clone();

        let result = session.step(Turn::Straight);

        assert_eq!(result, MoveResult::Rejected(CollisionKind::OutOfBounds));
        assert_eq!(session.board, board_before);
        assert_eq!(session.snake, snake_before);
        assert_eq!(session.score, 0);
        assert_eq!(session.status, GameStatus::GameOver);
        assert_eq!(session.collision, Some(CollisionKind::OutOfBounds));
    }

    #[test]
    fn biting_the_body_is_a_self_collision() {
        let size = GridSize { rows: 30, cols: 30 };
        // A hook shape: turning left from the head runs into the chain.
        let mut session = GameSession::from_layout(
            size,
            vec![pos(5, 5), pos(6, 5), pos(6, 4), pos(5, 4), pos(4, 4)],
            None,
            5,
        );

        let result = session.step(Turn::Left);

        assert_eq!(result, MoveResult::Rejected(CollisionKind::SelfCollision));
        assert_eq!(session.status, GameStatus::GameOver);
    }

    #[test]
    fn finished_sessions_drop_further_commands() {
        let size = GridSize { rows: 30, cols: 30 };
        let mut session =
            GameSession::from_layout(size, vec![pos(0, 5), pos(1, 5)], None, 5);

        assert_eq!(
            session.step(Turn::Straight),
            MoveResult::Rejected(CollisionKind::OutOfBounds)
        );
        assert_eq!(session.step(Turn::Left), MoveResult::Ignored);
        assert_eq!(session.status, GameStatus::GameOver);
    }

    #[test]
    fn filling_the_board_wins_the_session() {
        let size = GridSize { rows: 2, cols: 2 };
        let mut session = GameSession::from_layout(
            size,
            vec![pos(0, 0), pos(0, 1), pos(1, 1)],
            Some(pos(1, 0)),
            5,
        );

        // Heading is Left; a left-hand turn from Left goes Down, onto the bean.
        let result = session.step(Turn::Left);

        assert_eq!(result, MoveResult::Accepted { ate_bean: true });
        assert_eq!(session.status, GameStatus::Victory);
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 4);
        assert_eq!(session.board.bean_position(), None);
    }

    #[test]
    fn seeded_sessions_start_consistent_and_reproducible() {
        let size = GridSize { rows: 30, cols: 30 };
        let session = GameSession::new_with_seed(size, 8, 42);

        assert_eq!(session.snake.len(), 8);
        assert_eq!(session.status, GameStatus::Playing);
        assert_occupancy_consistent(&session);

        let twin = GameSession::new_with_seed(size, 8, 42);
        assert_eq!(session.board, twin.board);
    }

    #[test]
    fn seeding_fits_snakes_longer_than_one_column() {
        // A 4x20 field forces the shape to spill along the top row.
        let size = GridSize { rows: 4, cols: 20 };
        for seed in 0..50 {
            let session = GameSession::new_with_seed(size, 10, seed);
            assert_occupancy_consistent(&session);
        }
    }

    #[test]
    fn invariants_hold_across_a_scripted_walk() {
        let size = GridSize { rows: 12, cols: 12 };
        let mut session = GameSession::new_with_seed(size, 4, 17);

        let script = [
            Turn::Straight,
            Turn::Left,
            Turn::Straight,
            Turn::Right,
            Turn::Right,
            Turn::Straight,
            Turn::Left,
            Turn::Straight,
        ];
        for turn in script.iter().cycle().take(200) {
            let before_len = session.snake.len();
            let before_score = session.score;

            match session.step(*turn) {
                MoveResult::Accepted { ate_bean: true } => {
                    assert_eq!(session.snake.len(), before_len + 1);
                    assert_eq!(session.score, before_score + 1);
                }
                MoveResult::Accepted { ate_bean: false } => {
                    assert_eq!(session.snake.len(), before_len);
                    assert_eq!(session.score, before_score);
                }
                MoveResult::Rejected(_) | MoveResult::Ignored => break,
            }

            assert_occupancy_consistent(&session);
        }
    }
}
