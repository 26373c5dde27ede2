// Hunt/target heuristic for the automated opponent.
//
// Hunt fires at a uniformly random unshot cell. After a hit that does not
// sink, the orthogonal neighbours of the hit are queued and fired at first
// (target mode); once two consecutive hits line up, neighbours on that line
// jump the queue. A sink drops the queue and returns to hunting.

use std::collections::VecDeque;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{EngineError, Position, ShotResult};

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AiMode {
    Hunt,
    Target,
}

/// Search state carried by one AI opponent across turns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiState {
    mode: AiMode,
    target_queue: VecDeque<Position>,
    last_hit: Option<Position>,
    hits: Vec<Position>,
}

impl Default for AiState {
    fn default() -> Self {
        Self::new()
    }
}

impl AiState {
    pub fn new() -> Self {
        Self {
            mode: AiMode::Hunt,
            target_queue: VecDeque::new(),
            last_hit: None,
            hits: Vec::new(),
        }
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    /// Cells queued for target mode, next shot first.
    pub fn target_queue(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.target_queue.iter().copied()
    }

    pub fn last_hit(&self) -> Option<Position> {
        self.last_hit
    }

    /// Every hit recorded so far, oldest first.
    pub fn hits(&self) -> &[Position] {
        &self.hits
    }

    /// Choose the next cell to fire at on `board`.
    ///
    /// Queued targets that have been shot in the meantime are discarded.
    /// Fails only when no unshot cell is left.
    pub fn next_shot<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        if self.mode == AiMode::Target {
            while let Some(candidate) = self.target_queue.pop_front() {
                if board.status(candidate).is_some_and(|s| s.is_shootable()) {
                    return Ok(candidate);
                }
            }
            log::debug!("target queue drained, back to hunting");
            self.mode = AiMode::Hunt;
        }
        hunt(board, rng)
    }

    /// Update the search after firing at `position`.
    pub fn record_shot(&mut self, position: Position, was_hit: bool, was_sunk: bool) {
        if !was_hit {
            return;
        }
        self.hits.push(position);

        if was_sunk {
            self.mode = AiMode::Hunt;
            self.target_queue.clear();
            self.last_hit = None;
            return;
        }

        self.last_hit = Some(position);
        self.mode = AiMode::Target;
        for (dr, dc) in ORTHOGONAL {
            let next = position.offset(dr, dc);
            if next.is_valid() && !self.target_queue.contains(&next) {
                self.target_queue.push_back(next);
            }
        }
        self.follow_line();
    }

    /// [`AiState::record_shot`] driven by a [`ShotResult`].
    pub fn record_result(&mut self, position: Position, result: ShotResult) {
        self.record_shot(position, result.is_hit(), result == ShotResult::Sunk);
    }

    // Stable partition: queued cells on the line through the last two hits
    // move to the front, relative order otherwise kept.
    fn follow_line(&mut self) {
        let [.., previous, last] = self.hits.as_slice() else {
            return;
        };
        let (previous, last) = (*previous, *last);
        let in_line: fn(Position, Position) -> bool = if last.row == previous.row {
            |p, anchor| p.row == anchor.row
        } else if last.col == previous.col {
            |p, anchor| p.col == anchor.col
        } else {
            return;
        };
        self.target_queue
            .make_contiguous()
            .sort_by_key(|&p| !in_line(p, last));
    }
}

fn hunt<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, EngineError> {
    let open = board.shootable_positions();
    open.choose(rng).copied().ok_or_else(|| {
        log::error!("hunt found no unshot cell");
        EngineError::NoShootableCells
    })
}
