//! Instrumentation hook for payout evaluation
//!
//! Observers see every (token, starting slot) evaluation and every
//! per-token best. They never influence results.

/// One simulated drop and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub token: usize,
    pub start_slot: usize,
    pub exit_slot: usize,
    pub payout: i64,
}

/// Receives evaluation records while payouts are computed
pub trait Observer {
    fn on_evaluation(&mut self, evaluation: &Evaluation);

    /// Called once per token when a per-token best is settled
    fn on_token_best(&mut self, _token: usize, _best: i64) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_evaluation(&mut self, _evaluation: &Evaluation) {}
}

/// Observer that writes `debug` records to the `pegboard::trace` target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_evaluation(&mut self, evaluation: &Evaluation) {
        log::debug!(
            target: "pegboard::trace",
            "token {} start_slot {} exit_slot {} payout {}",
            evaluation.token,
            evaluation.start_slot,
            evaluation.exit_slot,
            evaluation.payout
        );
    }

    fn on_token_best(&mut self, token: usize, best: i64) {
        log::debug!(target: "pegboard::trace", "token {} best {}", token, best);
    }
}

/// Observer that keeps every record, mostly for tests
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub evaluations: Vec<Evaluation>,
    pub bests: Vec<(usize, i64)>,
}

impl Observer for RecordingObserver {
    fn on_evaluation(&mut self, evaluation: &Evaluation) {
        self.evaluations.push(*evaluation);
    }

    fn on_token_best(&mut self, token: usize, best: i64) {
        self.bests.push((token, best));
    }
}
