//! Random playouts: play uniformly random legal jumps until the board is stuck.
//! Used by the CLI, the benchmark and conservation tests; not an opponent.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::engine::config::BoardDefinition;
use crate::engine::error::BoardError;
use crate::games::peg_solitaire::{Board, JumpMove};

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub jumps: Vec<JumpMove>,
    pub pegs_left: usize,
}

/// Play random legal jumps on `board` until none remain.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> PlayoutResult {
    let mut jumps = Vec::new();
    loop {
        let legal = board.legal_jumps();
        let Some(&mv) = legal.choose(rng) else {
            break;
        };
        if board.jump_from_to(mv.from, mv.to).is_none() {
            tracing::warn!(?mv, "listed jump was rejected");
            break;
        }
        jumps.push(mv);
    }
    PlayoutResult {
        jumps,
        pegs_left: board.peg_count(),
    }
}

/// Aggregated results from a batch of playouts.
#[derive(Debug, Clone)]
pub struct PlayoutSummary {
    pub games: usize,
    pub solved: usize,
    pub best: Option<PlayoutResult>,
    /// pegs left -> number of playouts
    pub histogram: BTreeMap<usize, usize>,
    pub duration_ms: f64,
}

impl PlayoutSummary {
    pub fn average_pegs_left(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let total: usize = self.histogram.iter().map(|(pegs, n)| pegs * n).sum();
        total as f64 / self.games as f64
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Playouts ({} games)", self.games)];
        lines.push("=".repeat(40));
        lines.push(format!(
            "  solved: {} ({:.1}%)",
            self.solved,
            self.solved as f64 * 100.0 / self.games.max(1) as f64
        ));
        lines.push(format!("  avg pegs left: {:.2}", self.average_pegs_left()));
        for (pegs, n) in &self.histogram {
            lines.push(format!("  {:>3} left: {}", pegs, n));
        }
        lines.push(format!("  total: {:.1}ms", self.duration_ms));
        lines.join("\n")
    }
}

/// Run `games` seeded playouts of `definition` in parallel.
pub fn run_playouts(
    definition: &BoardDefinition,
    games: usize,
    base_seed: u64,
) -> Result<PlayoutSummary, BoardError> {
    let shape = definition.shape_mask()?;
    let t0 = Instant::now();

    let results: Vec<PlayoutResult> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut board = Board::new(shape.clone());
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            random_playout(&mut board, &mut rng)
        })
        .collect();

    let mut histogram = BTreeMap::new();
    for r in &results {
        *histogram.entry(r.pegs_left).or_insert(0) += 1;
    }
    let solved = histogram.get(&1).copied().unwrap_or(0);
    let best = results.into_iter().min_by_key(|r| r.pegs_left);

    let summary = PlayoutSummary {
        games,
        solved,
        best,
        histogram,
        duration_ms: t0.elapsed().as_secs_f64() * 1000.0,
    };
    tracing::info!(games, solved, avg = summary.average_pegs_left(), "playouts finished");
    Ok(summary)
}
