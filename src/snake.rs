use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns this position wrapped into bounds on both axes (toroidal
    /// topology: moving off one edge reenters from the opposite edge).
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring cell one step in `direction`, unwrapped.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake state: body segments plus direction buffering.
///
/// At most one direction change is pending at a time; it is applied at the
/// start of the next advance, never mid-tick. The tail is owned by the game
/// tick: [`Snake::advance`] only prepends the new head, and the caller
/// decides whether to pop the tail (normal move) or keep it (growth).
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
        }
    }

    /// Requests a direction change for the next advance.
    ///
    /// Reversals of the current direction are silently rejected; a later
    /// request overwrites an earlier pending one (last input wins).
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.direction, direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Applies the pending direction and prepends the wrapped new head.
    ///
    /// Returns the new head position. The previous tail is left in place;
    /// see [`Snake::drop_tail`].
    pub fn advance(&mut self, bounds: GridSize) -> Position {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }

        let head = self.head().step(self.direction).wrapped(bounds);
        self.body.push_front(head);
        head
    }

    /// Removes the tail segment (normal, non-growing movement).
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Removes `count` tail segments if the resulting length stays at or
    /// above `min_len`; otherwise does nothing.
    pub fn shrink_tail(&mut self, count: usize, min_len: usize) {
        if self.body.len() < min_len + count {
            return;
        }
        for _ in 0..count {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
