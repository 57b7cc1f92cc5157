use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

pub const TIMING_TARGET: &str = "optimizer.timing";

const IDEA_PREVIEW_CHARS: usize = 120;

#[derive(Debug)]
pub struct RequestTimer {
    mode: &'static str,
    idea_preview: String,
    started_at: DateTime<Utc>,
    started_perf: Instant,
    completed: bool,
}

impl RequestTimer {
    pub fn start(mode: &'static str, idea: &str) -> Self {
        let idea_preview: String = idea.chars().take(IDEA_PREVIEW_CHARS).collect();
        let timer = RequestTimer {
            mode,
            idea_preview,
            started_at: Utc::now(),
            started_perf: Instant::now(),
            completed: false,
        };
        info!(
            target: TIMING_TARGET,
            "event=request_received mode={} received_at={} idea={:?}",
            timer.mode,
            timer.started_at.to_rfc3339(),
            timer.idea_preview
        );
        timer
    }

    pub fn complete(&mut self, status: &str, detail: &str) {
        if self.completed {
            return;
        }
        self.completed = true;
        let completed_at = Utc::now();
        let duration = self.started_perf.elapsed().as_secs_f64();
        info!(
            target: TIMING_TARGET,
            "event=request_completed mode={} started_at={} completed_at={} duration_s={:.6} status={} detail={}",
            self.mode,
            self.started_at.to_rfc3339(),
            completed_at.to_rfc3339(),
            duration,
            status,
            detail
        );
    }
}
