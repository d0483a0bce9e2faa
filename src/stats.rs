use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, alive: usize);

    /// Whether a report is due, `always` makes every generation report
    fn has_report(&self, always: bool) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self, always: bool) -> bool {
        always || self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> Self::Str {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}
