use crate::log;
use crate::SessionRng;
use super::entity::Snake;
use super::types::{Cell, Direction, FieldSize, GameOverReason, GamePhase};

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// What a single call to [`SnakeGameState::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running, nothing changed.
    Idle,
    Moved,
    AteFood,
    GameOver(GameOverReason),
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub field_size: FieldSize,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: GamePhase,
}

impl BoardSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    field_size: FieldSize,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Cell>,
    score: u32,
    phase: GamePhase,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            field_size,
            snake: Snake::default(),
            direction: Direction::Right,
            pending_direction: None,
            food: None,
            score: 0,
            phase: GamePhase::NotStarted,
        }
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            GamePhase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    /// Starts a fresh game from any phase: a three cell snake centred on the field, heading right.
    /// A field too small for that snake ends the game at once with `BoardFull`.
    pub fn new_game(&mut self, rng: &mut SessionRng) {
        let head = Cell::new(
            (self.field_size.width / 2) as i32,
            (self.field_size.height / 2) as i32,
        );
        self.snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.food = None;

        if !self.snake.cells().all(|cell| self.field_size.contains(cell)) {
            self.snake = Snake::default();
            self.finish(GameOverReason::BoardFull);
            return;
        }

        self.food = self.spawn_food(rng);
        if self.food.is_none() {
            self.finish(GameOverReason::BoardFull);
            return;
        }

        self.phase = GamePhase::Running;
        log!(
            "New game on {}x{} field, head at ({}, {})",
            self.field_size.width,
            self.field_size.height,
            head.x,
            head.y
        );
    }

    /// Buffers a turn for the next tick. Validated against the current heading, not the
    /// pending one; a later request overwrites an earlier one.
    pub fn request_turn(&mut self, direction: Direction) {
        if !self.is_running() || direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let Some(head) = self.snake.head() else {
            return TickOutcome::Idle;
        };
        let next_head = head.step(self.direction);

        if !self.field_size.contains(next_head) {
            return self.finish(GameOverReason::WallCollision);
        }

        // Checked before the tail moves: stepping onto the current tail cell is a collision.
        if self.snake.contains(next_head) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.food != Some(next_head) {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += 1;
        log!(
            "Ate food at ({}, {}). Score: {}",
            next_head.x,
            next_head.y,
            self.score
        );

        self.food = self.spawn_food(rng);
        if self.food.is_none() {
            log!("No free cell left for food");
            return self.finish(GameOverReason::BoardFull);
        }
        TickOutcome::AteFood
    }

    /// Uniformly random cell not covered by the snake, `None` when the snake fills the field.
    pub fn spawn_food(&self, rng: &mut SessionRng) -> Option<Cell> {
        let free: Vec<Cell> = self
            .field_size
            .cells()
            .filter(|cell| !self.snake.contains(*cell))
            .collect();
        rng.pick(&free).copied()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            field_size: self.field_size,
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            phase: self.phase,
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.phase = GamePhase::GameOver(reason);
        self.pending_direction = None;
        log!("Game over: {}. Score: {}", reason, self.score);
        TickOutcome::GameOver(reason)
    }

    #[cfg(test)]
    fn place_snake(&mut self, cells: &[Cell], direction: Direction) {
        self.snake = Snake::from_cells(cells.iter().copied());
        self.direction = direction;
        self.pending_direction = None;
        self.phase = GamePhase::Running;
    }

    #[cfg(test)]
    fn place_food(&mut self, food: Cell) {
        self.food = Some(food);
    }
}
