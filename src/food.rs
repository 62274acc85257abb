use rand::Rng;

use crate::config::{GridSize, SPECIAL_FOOD_CHANCE};
use crate::snake::Position;

/// Normal food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Samples a uniformly random cell within bounds.
    ///
    /// Cells occupied by the snake are not excluded; overlap with the body
    /// is permitted by design.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(random_cell(rng, bounds))
    }
}

/// Bonus effect dispatched when a special food is eaten.
///
/// Tagged variants instead of stored closures, so the effect is plain data
/// dispatched through one handler in the game tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpecialKind {
    /// Halves the tick interval for a fixed real-time window.
    Speed,
    /// Adds a flat 50 points immediately.
    Points,
    /// Removes the two tail-most segments when length allows.
    Shrink,
}

impl SpecialKind {
    /// All kinds, in spawn-selection order.
    pub const ALL: [Self; 3] = [Self::Speed, Self::Points, Self::Shrink];

    /// Visual marker drawn on the board.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Speed => "⚡",
            Self::Points => "★",
            Self::Shrink => "✂",
        }
    }
}

/// Transient bonus entity; at most one exists at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpecialFood {
    pub position: Position,
    pub kind: SpecialKind,
}

impl SpecialFood {
    /// Rolls the spawn chance after a normal food was eaten.
    ///
    /// With probability [`SPECIAL_FOOD_CHANCE`], picks one of the three kinds
    /// uniformly and places it at a fresh random cell (same non-exclusion
    /// rule as normal food). The caller is responsible for only invoking
    /// this when no special food is currently active.
    #[must_use]
    pub fn try_spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Option<Self> {
        if !rng.gen_bool(SPECIAL_FOOD_CHANCE) {
            return None;
        }

        let kind = SpecialKind::ALL[rng.gen_range(0..SpecialKind::ALL.len())];
        Some(Self {
            position: random_cell(rng, bounds),
            kind,
        })
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
