use std::{
    fmt,
    time::{Duration, Instant},
};

/// Minimum time between two reports
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Progress snapshot produced by a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub gens_per_sec: f64,
    pub generations: usize,
    pub alive: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.02}gen/s gens:{}, alive:{}",
            self.gens_per_sec, self.generations, self.alive
        )
    }
}

/// Tracks generation throughput between reports.
#[derive(Debug)]
pub struct Recorder {
    generations: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}

impl Recorder {
    pub fn new(alive: usize) -> Self {
        Self {
            generations: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.generations += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }

    pub fn report(&mut self) -> Report {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset for the next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        Report {
            gens_per_sec,
            generations: self.generations,
            alive: self.alive,
        }
    }
}
