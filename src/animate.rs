//! Drives the engine one generation at a time and hands each board to a
//! [`Frontend`].

use crate::{Board, Result, engine, stats::Recorder, stats::Report};
use std::{io, thread, time::Duration};
use tracing::{debug, info};

/// Whether the animation should keep going after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Where the animation is displayed.
pub trait Frontend {
    /// Displays `board`, which is generation number `generation`.
    fn show(&mut self, generation: usize, board: &Board) -> io::Result<()>;

    /// Waits `delay` between two generations.
    ///
    /// Returning [`Control::Stop`] ends the animation early.
    fn pause(&mut self, delay: Duration) -> io::Result<Control>;

    /// Receives periodic throughput reports.
    fn report(&mut self, _report: Report) -> io::Result<()> {
        Ok(())
    }
}

/// How an animation ended.
#[derive(Debug)]
pub struct Outcome {
    /// Number of generations computed.
    pub generations: usize,
    /// The last computed board.
    pub board: Board,
    /// Whether the frontend stopped the animation early.
    pub interrupted: bool,
}

/// Runs a private copy of a seed board.
#[derive(Debug)]
pub struct Animator {
    board: Board,
    recorder: Recorder,
}

impl Animator {
    pub fn new(seed: &Board) -> Self {
        Self {
            board: seed.clone(),
            recorder: Recorder::new(seed.len()),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of generations computed so far.
    #[inline]
    pub fn generation(&self) -> usize {
        self.recorder.generations()
    }

    /// Replaces the board with its next generation.
    pub fn step(&mut self) -> Result<()> {
        self.board = engine::try_advance(&self.board)?;
        self.recorder.record(self.board.len());
        Ok(())
    }

    /// Shows the board, advances it and pauses, `iterations` times over.
    pub fn run<F: Frontend>(
        mut self,
        iterations: usize,
        delay: Duration,
        frontend: &mut F,
    ) -> Result<Outcome> {
        let mut interrupted = false;
        for _ in 0..iterations {
            frontend.show(self.generation(), &self.board)?;
            if self.recorder.has_report() {
                frontend.report(self.recorder.report())?;
            }

            self.step()?;
            if frontend.pause(delay)? == Control::Stop {
                debug!(generation = self.generation(), "animation interrupted");
                interrupted = true;
                break;
            }
        }

        Ok(Outcome {
            generations: self.generation(),
            board: self.board,
            interrupted,
        })
    }
}

/// A frontend that draws nothing and logs progress reports.
#[derive(Debug, Default)]
pub struct Headless;

impl Frontend for Headless {
    fn show(&mut self, _generation: usize, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> io::Result<Control> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(Control::Continue)
    }

    fn report(&mut self, report: Report) -> io::Result<()> {
        info!(
            generations = report.generations,
            alive = report.alive,
            gens_per_sec = report.gens_per_sec,
            "progress"
        );
        Ok(())
    }
}
