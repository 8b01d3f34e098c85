use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Counters written by the ingestion path.
pub struct LinkMetrics {
    connect_attempts: AtomicU64,
    connection_failures: AtomicU64,
    frames_published: AtomicU64,
    malformed_messages: AtomicU64,
}

impl LinkMetrics {
    pub fn new() -> Self {
        Self {
            connect_attempts: AtomicU64::new(0),
            connection_failures: AtomicU64::new(0),
            frames_published: AtomicU64::new(0),
            malformed_messages: AtomicU64::new(0),
        }
    }

    pub fn connect_attempts(&self) -> u64 {
        self.connect_attempts.load(Ordering::Relaxed)
    }

    pub fn connection_failures(&self) -> u64 {
        self.connection_failures.load(Ordering::Relaxed)
    }

    pub fn frames_published(&self) -> u64 {
        self.frames_published.load(Ordering::Relaxed)
    }

    pub fn malformed_messages(&self) -> u64 {
        self.malformed_messages.load(Ordering::Relaxed)
    }

    pub fn record_connect_attempt(&self) {
        self.connect_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_connection_failure(&self) {
        self.connection_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_frame_published(&self) {
        self.frames_published.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed(&self) {
        self.malformed_messages.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for LinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters written by the render path.
pub struct RenderMetrics {
    ticks: AtomicU64,
    fresh_ticks: AtomicU64,
    overruns: AtomicU64,
    total_tick_us: AtomicU64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            fresh_ticks: AtomicU64::new(0),
            overruns: AtomicU64::new(0),
            total_tick_us: AtomicU64::new(0),
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Ticks that picked up a frame newer than the one drawn before.
    pub fn fresh_ticks(&self) -> u64 {
        self.fresh_ticks.load(Ordering::Relaxed)
    }

    pub fn overruns(&self) -> u64 {
        self.overruns.load(Ordering::Relaxed)
    }

    pub fn start_tick(&self) -> Instant {
        Instant::now()
    }

    pub fn finish_tick(&self, start: Instant, fresh: bool) {
        let latency_us = start.elapsed().as_micros() as u64;
        self.total_tick_us.fetch_add(latency_us, Ordering::Relaxed);
        self.ticks.fetch_add(1, Ordering::Relaxed);
        if fresh {
            self.fresh_ticks.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_overrun(&self) {
        self.overruns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn avg_tick_us(&self) -> u64 {
        let ticks = self.ticks.load(Ordering::Relaxed);
        if ticks == 0 {
            return 0;
        }
        self.total_tick_us.load(Ordering::Relaxed) / ticks
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
