use rand::rngs::StdRng;

use crate::config::Config;
use crate::food::Food;
use crate::grid::Grid;
use crate::palette::{FOOD_COLOR, SNAKE_BODY_COLOR, SNAKE_HEAD_COLOR};
use crate::score::Score;
use crate::snake::{MoveResult, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Feeding {
    Nothing,
    Ate,
    /// The snake ate the last free cell, there is nowhere left for food.
    BoardFilled,
}

/// All state of one play-through. `reset` throws it away and starts over.
#[derive(Debug)]
pub struct Session {
    config: Config,
    grid: Grid,
    snake: Snake,
    food: Option<Food>,
    score: Score,
    rng: StdRng,
}

impl Session {
    pub fn new(config: Config, mut rng: StdRng) -> Self {
        let grid = Grid::new(config.dimension());
        let snake = Snake::new(grid.dimensions(), config.cadence);
        let food = Food::spawn(grid.dimensions(), &snake, &mut rng);
        let score = Score::new(config.score_multiplier);

        Session { config, grid, snake, food, score, rng }
    }

    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.dimension());
        self.snake = Snake::new(self.grid.dimensions(), self.config.cadence);
        self.food = Food::spawn(self.grid.dimensions(), &self.snake, &mut self.rng);
        self.score = Score::new(self.config.score_multiplier);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    #[cfg(test)]
    pub fn place_food(&mut self, food: Food) {
        self.food = Some(food);
    }

    #[cfg(test)]
    pub fn replace_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn advance(&mut self) -> MoveResult {
        self.snake.tick()
    }

    pub fn paint_snake(&mut self) {
        let Session { grid, snake, .. } = self;

        grid.cell_at_mut(snake.head()).paint(SNAKE_HEAD_COLOR);
        for segment in snake.body() {
            grid.cell_at_mut(*segment).paint(SNAKE_BODY_COLOR);
        }
    }

    pub fn paint_food(&mut self) {
        if let Some(food) = &self.food {
            self.grid.cell_at_mut(food.pos()).paint(FOOD_COLOR);
        }
    }

    /// Grows the snake if its head reached the food, then moves the food to
    /// a cell the grown snake does not cover.
    pub fn feed(&mut self) -> Feeding {
        let food = match &mut self.food {
            Some(food) if food.is_eaten_by(&self.snake) => food,
            _ => return Feeding::Nothing,
        };

        self.snake.grow();
        tracing::debug!(length = self.snake.len(), at = ?food.pos(), "snake ate");

        if food.relocate(self.grid.dimensions(), &self.snake, &mut self.rng) {
            Feeding::Ate
        } else {
            self.food = None;
            Feeding::BoardFilled
        }
    }

    pub fn update_score(&mut self) {
        self.score.update(self.snake.body_len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::SeedableRng;

    fn tiny(dimension: u16) -> Config {
        Config { board_size: dimension, cell_size: 1, cadence: 1, score_multiplier: 10 }
    }

    fn session(config: Config) -> Session {
        Session::new(config, StdRng::seed_from_u64(3))
    }

    #[test]
    fn starts_fresh() {
        let session = session(Config::default());
        assert_eq!(session.grid().dimensions(), (25, 25));
        assert_eq!(session.snake().head(), (0, 0));
        assert_eq!(session.score().value(), 0);

        let food = session.food().unwrap();
        assert_ne!(food.pos(), (0, 0));
    }

    #[test]
    fn lone_head_eats_and_scores() {
        let mut session = session(tiny(2));
        session.place_food(Food::at((1, 0)));

        session.advance();
        assert_eq!(session.snake().head(), (1, 0));
        assert_eq!(session.feed(), Feeding::Ate);
        session.update_score();

        assert_eq!(session.snake().body().copied().collect::<Vec<_>>(), vec![(1, 0)]);
        assert_eq!(session.score().value(), 10);

        let food = session.food().unwrap().pos();
        assert!(!session.snake().occupies(food));
    }

    #[test]
    fn missing_the_food_changes_nothing() {
        let mut session = session(tiny(4));
        session.place_food(Food::at((3, 3)));

        session.advance();
        assert_eq!(session.feed(), Feeding::Nothing);
        assert_eq!(session.snake().body_len(), 0);
        assert_eq!(session.food().unwrap().pos(), (3, 3));
    }

    #[test]
    fn filling_the_board_drops_the_food() {
        let mut session = session(tiny(2));
        session.replace_snake(Snake::from_parts((2, 2), 1, (1, 1), &[(0, 1), (0, 0)], Direction::Down));
        session.place_food(Food::at((1, 1)));

        // the grown segment stacks on the tail, so (1, 0) stays free
        assert_eq!(session.feed(), Feeding::Ate);
        assert_eq!(session.food().unwrap().pos(), (1, 0));

        session.replace_snake(Snake::from_parts((2, 2), 1, (1, 0), &[(1, 1), (0, 1), (0, 0)], Direction::Left));
        assert_eq!(session.feed(), Feeding::BoardFilled);
        assert!(session.food().is_none());
    }

    #[test]
    fn paints_overlays_on_the_grid() {
        let mut session = session(tiny(4));
        session.replace_snake(Snake::from_parts((4, 4), 1, (1, 1), &[(1, 2)], Direction::Left));
        session.place_food(Food::at((3, 0)));

        session.paint_snake();
        session.paint_food();

        let grid = session.grid();
        assert_eq!(grid.cell_at((1, 1)).color(), SNAKE_HEAD_COLOR);
        assert_eq!(grid.cell_at((1, 2)).color(), SNAKE_BODY_COLOR);
        assert_eq!(grid.cell_at((3, 0)).color(), FOOD_COLOR);
        assert_eq!(grid.cell_at((0, 0)).color(), grid.cell_at((0, 0)).terrain());
    }

    #[test]
    fn reset_rebuilds_everything() {
        let mut session = session(tiny(4));
        session.replace_snake(Snake::from_parts((4, 4), 1, (2, 2), &[(2, 1), (2, 0)], Direction::Right));
        session.update_score();
        session.grid_mut().cell_at_mut((3, 3)).paint(FOOD_COLOR);
        assert_eq!(session.score().value(), 20);

        session.reset();

        assert_eq!(session.snake().head(), (0, 0));
        assert_eq!(session.snake().body_len(), 0);
        assert_eq!(session.snake().get_direction(), Direction::Down);
        assert_eq!(session.score().value(), 0);
        assert!(session.grid().cells().all(|cell| cell.color() == cell.terrain()));
        assert!(!session.snake().occupies(session.food().unwrap().pos()));
    }
}
