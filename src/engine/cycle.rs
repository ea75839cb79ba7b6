use super::try_advance;
use crate::Board;
use tracing::debug;

/// A recurring sequence of generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// First generation that recurs.
    pub start: usize,
    /// Generations between recurrences; `1` for a still life.
    pub period: usize,
    /// Translation applied over one period; non-zero for spaceships.
    pub shift: (i64, i64),
}

impl Cycle {
    #[inline]
    pub fn is_still(&self) -> bool {
        self.period == 1 && self.shift == (0, 0)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.shift != (0, 0)
    }
}

/// Runs `seed` for up to `max_generations` looking for a generation whose
/// shape, up to translation, has been seen before.
///
/// Returns `None` if nothing recurs in time or the pattern runs off the
/// edge of the plane.
pub fn detect_cycle(seed: &Board, max_generations: usize) -> Option<Cycle> {
    let mut history = vec![seed.clone()];
    for generation in 1..=max_generations {
        let Ok(current) = try_advance(&history[generation - 1]) else {
            debug!(generation, "pattern left the supported range");
            return None;
        };

        let found = history
            .iter()
            .enumerate()
            .find_map(|(start, earlier)| earlier.offset_to(&current).map(|shift| (start, shift)));
        if let Some((start, shift)) = found {
            let cycle = Cycle {
                start,
                period: generation - start,
                shift,
            };
            debug!(?cycle, "found cycle");
            return Some(cycle);
        }
        history.push(current);
    }
    None
}
