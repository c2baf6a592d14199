//! Board grid and the random placement of special cells.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Largest grid side; rows are lettered `a..z`.
const MAX_ROWS: u8 = 26;

// ============================================================================
// BoardGrid
// ============================================================================

/// Named cells of a rectangular board, row-major.
///
/// Cells are named by row letter followed by 1-based column number, so a
/// 13×13 board runs `a1, a2, .., a13, b1, .., m13`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    cells: Vec<String>,
}

impl BoardGrid {
    /// Side length of the standard board.
    pub const STANDARD_SIDE: u8 = 13;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `rows` exceeds 26.
    pub fn new(rows: u8, columns: u8) -> Result<Self, DomainError> {
        if rows > MAX_ROWS {
            return Err(DomainError::validation(format!(
                "Board cannot have more than {MAX_ROWS} rows"
            )));
        }
        Ok(Self {
            cells: cell_names(rows, columns),
        })
    }

    /// The 13×13 board the game is played on.
    pub fn standard() -> Self {
        let side = Self::STANDARD_SIDE;
        Self {
            cells: cell_names(side, side),
        }
    }

    #[inline]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn contains(&self, cell: &str) -> bool {
        self.cells.iter().any(|c| c == cell)
    }
}

fn cell_names(rows: u8, columns: u8) -> Vec<String> {
    (b'a'..b'a' + rows)
        .flat_map(|row| (1..=columns).map(move |col| format!("{}{}", row as char, col)))
        .collect()
}

impl Default for BoardGrid {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Layout parameters
// ============================================================================

/// How many cells of each special kind a layout gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCounts {
    pub barriers: usize,
    pub obstacles: usize,
    pub rewards: usize,
}

impl LayoutCounts {
    pub fn new(barriers: usize, obstacles: usize, rewards: usize) -> Self {
        Self {
            barriers,
            obstacles,
            rewards,
        }
    }

    pub fn total(&self) -> usize {
        self.barriers + self.obstacles + self.rewards
    }
}

impl Default for LayoutCounts {
    fn default() -> Self {
        Self::new(9, 7, 4)
    }
}

/// Whether a cell can be drawn more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Every drawn cell is distinct, so the three kinds never overlap.
    #[default]
    Distinct,
    /// Independent draws; a cell may repeat within or across kinds.
    WithReplacement,
}

impl FromStr for SamplingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distinct" | "without_replacement" => Ok(SamplingMode::Distinct),
            "with_replacement" | "replacement" => Ok(SamplingMode::WithReplacement),
            other => Err(DomainError::parse(format!("Unknown sampling mode: {other}"))),
        }
    }
}

// ============================================================================
// BoardLayout
// ============================================================================

/// Special cells of one game, fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub barriers: Vec<String>,
    pub obstacles: Vec<String>,
    pub rewards: Vec<String>,
}

impl BoardLayout {
    /// Draw a layout from `cells`.
    ///
    /// `roll(min, max)` must return a value in `min..=max`; out-of-range values
    /// are clamped. Draws are split in order: the first `counts.barriers`
    /// become barriers, the next `counts.obstacles` obstacles, the rest rewards.
    /// Cells listed in `excluded` are never drawn.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` when more cells are asked for than
    /// the grid has outside `excluded`, in either sampling mode.
    pub fn generate(
        cells: &[String],
        counts: LayoutCounts,
        sampling: SamplingMode,
        excluded: &[String],
        mut roll: impl FnMut(i32, i32) -> i32,
    ) -> Result<Self, DomainError> {
        let mut pool: Vec<&String> = cells.iter().filter(|c| !excluded.contains(*c)).collect();
        let wanted = counts.total();

        if wanted == 0 {
            return Ok(Self::default());
        }
        if pool.is_empty() {
            return Err(DomainError::constraint(
                "Layout needs at least one drawable cell",
            ));
        }
        if wanted > pool.len() {
            return Err(DomainError::constraint(format!(
                "Layout asks for {wanted} cells but only {} are available",
                pool.len()
            )));
        }

        let mut pick = |upper: usize| -> usize {
            let max = i32::try_from(upper).unwrap_or(i32::MAX);
            usize::try_from(roll(0, max).clamp(0, max)).unwrap_or(0)
        };

        let drawn: Vec<String> = match sampling {
            SamplingMode::WithReplacement => {
                let last = pool.len() - 1;
                (0..wanted).map(|_| pool[pick(last)].clone()).collect()
            }
            SamplingMode::Distinct => {
                // Partial Fisher-Yates: position i takes a random cell from i..
                for i in 0..wanted {
                    let j = i + pick(pool.len() - 1 - i);
                    pool.swap(i, j);
                }
                pool[..wanted].iter().map(|c| (*c).clone()).collect()
            }
        };

        let mut drawn = drawn.into_iter();
        let barriers = drawn.by_ref().take(counts.barriers).collect();
        let obstacles = drawn.by_ref().take(counts.obstacles).collect();
        let rewards = drawn.collect();

        Ok(Self {
            barriers,
            obstacles,
            rewards,
        })
    }

    /// True when no cell appears twice across or within the three kinds.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.barriers
            .iter()
            .chain(&self.obstacles)
            .chain(&self.rewards)
            .all(|c| seen.insert(c.as_str()))
    }
}
