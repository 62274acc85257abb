use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GridSize, BOOST_MIN_TICK_INTERVAL_MS, DEFAULT_TICK_INTERVAL_MS, EXTRA_POINTS, FOOD_POINTS,
    LEVEL_NOTICE_DURATION_MS, LEVEL_TICK_STEP_MS, MIN_SNAKE_LEN, MIN_TICK_INTERVAL_MS,
    POINTS_PER_LEVEL, SHRINK_SEGMENTS, SPEED_BOOST_DURATION_MS,
};
use crate::food::{Food, SpecialFood, SpecialKind};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Transient level-up notification shown by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct LevelNotice {
    pub level: u32,
    raised_at: Instant,
}

impl LevelNotice {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= Duration::from_millis(LEVEL_NOTICE_DURATION_MS)
    }
}

/// Active speed boost with the interval to restore on expiry.
#[derive(Debug, Clone, Copy)]
struct SpeedBoost {
    expires_at: Instant,
    restore_ms: u64,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub special_food: Option<SpecialFood>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub level_notice: Option<LevelNotice>,
    pub tick_interval_ms: u64,
    speed_boost: Option<SpeedBoost>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh, not-yet-started state.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        let food = Food::spawn(&mut rng, bounds);

        Self {
            snake,
            food,
            special_food: None,
            score: 0,
            level: 1,
            status: GameStatus::NotStarted,
            level_notice: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            speed_boost: None,
            bounds,
            rng,
        }
    }

    /// Starts a new session.
    ///
    /// Re-initializes all session state from scratch and enters `Running`.
    /// Only valid from `NotStarted` or `GameOver`; a no-op while a session
    /// is in progress.
    pub fn start(&mut self) {
        if !matches!(self.status, GameStatus::NotStarted | GameStatus::GameOver) {
            return;
        }

        self.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        self.food = Food::spawn(&mut self.rng, self.bounds);
        self.special_food = None;
        self.score = 0;
        self.level = 1;
        self.level_notice = None;
        self.tick_interval_ms = DEFAULT_TICK_INTERVAL_MS;
        self.speed_boost = None;
        self.status = GameStatus::Running;
    }

    /// Toggles between `Running` and `Paused`; a no-op in any other state.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Requests a direction change, applied at the start of the next tick.
    ///
    /// Reversals of the current direction are silently ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.snake.set_direction(direction);
        }
    }

    /// Advances the simulation by one step at the current wall-clock time.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances the simulation by one step at `now`.
    ///
    /// Boost and notice expiry run even while paused, so a pause does not
    /// stretch a speed boost past its real-time window. Movement, scoring,
    /// and collision only happen while `Running`.
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(notice) = self.level_notice {
            if notice.expired(now) {
                self.level_notice = None;
            }
        }

        if let Some(boost) = self.speed_boost {
            if now >= boost.expires_at {
                self.tick_interval_ms = boost.restore_ms;
                self.speed_boost = None;
            }
        }

        if self.status != GameStatus::Running {
            return;
        }

        let head = self.snake.advance(self.bounds);

        // Exactly one of the three branches runs per tick; normal food wins
        // when it shares a cell with a special food.
        if head == self.food.position {
            self.score += FOOD_POINTS;
            self.food = Food::spawn(&mut self.rng, self.bounds);
            if self.special_food.is_none() {
                self.special_food = SpecialFood::try_spawn(&mut self.rng, self.bounds);
            }
            self.check_level_up(now);
        } else {
            match self.special_food {
                Some(special) if special.position == head => {
                    self.special_food = None;
                    self.apply_effect(special.kind, now);
                }
                _ => self.snake.drop_tail(),
            }
        }

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
        }
    }

    /// One-shot effect dispatch for a consumed special food.
    fn apply_effect(&mut self, kind: SpecialKind, now: Instant) {
        match kind {
            SpecialKind::Speed => match &mut self.speed_boost {
                // A second boost while one is active extends the window and
                // keeps the original restore interval.
                Some(boost) => {
                    boost.expires_at = now + Duration::from_millis(SPEED_BOOST_DURATION_MS);
                }
                None => {
                    self.speed_boost = Some(SpeedBoost {
                        expires_at: now + Duration::from_millis(SPEED_BOOST_DURATION_MS),
                        restore_ms: self.tick_interval_ms,
                    });
                    self.tick_interval_ms =
                        (self.tick_interval_ms / 2).max(BOOST_MIN_TICK_INTERVAL_MS);
                }
            },
            SpecialKind::Points => {
                self.score += EXTRA_POINTS;
            }
            SpecialKind::Shrink => {
                self.snake.shrink_tail(SHRINK_SEGMENTS, MIN_SNAKE_LEN);
            }
        }
    }

    /// Level-up check, run only after normal food consumption.
    fn check_level_up(&mut self, now: Instant) {
        if self.score <= self.level * POINTS_PER_LEVEL {
            return;
        }

        self.level += 1;
        match &mut self.speed_boost {
            // During a boost, step down both the live interval and the value
            // that will be restored, so restoration lands on the leveled
            // interval instead of a stale one.
            Some(boost) => {
                boost.restore_ms = boost
                    .restore_ms
                    .saturating_sub(LEVEL_TICK_STEP_MS)
                    .max(MIN_TICK_INTERVAL_MS);
                self.tick_interval_ms = self
                    .tick_interval_ms
                    .saturating_sub(LEVEL_TICK_STEP_MS)
                    .max(BOOST_MIN_TICK_INTERVAL_MS);
            }
            None => {
                self.tick_interval_ms = self
                    .tick_interval_ms
                    .saturating_sub(LEVEL_TICK_STEP_MS)
                    .max(MIN_TICK_INTERVAL_MS);
            }
        }
        self.level_notice = Some(LevelNotice {
            level: self.level,
            raised_at: now,
        });
    }

    /// Returns the grid bounds for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the current tick interval as a duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns true while a speed boost is in effect.
    #[must_use]
    pub fn speed_boost_active(&self) -> bool {
        self.speed_boost.is_some()
    }
}
