//! Host frame-rate sampling over fixed windows.

use crate::constants::{FPS_WINDOW_MS, LOW_FPS_WINDOWS_BEFORE_DEMOTION};

#[derive(Clone, Debug)]
pub struct FrameRateMonitor {
    threshold_fps: f64,
    window_start_ms: Option<f64>,
    frames: u32,
    low_streak: u32,
    last_fps: Option<f64>,
}

impl FrameRateMonitor {
    pub fn new(threshold_fps: f64) -> Self {
        Self {
            threshold_fps,
            window_start_ms: None,
            frames: 0,
            low_streak: 0,
            last_fps: None,
        }
    }

    /// Count a host frame. Returns the measured rate when a window closes.
    pub fn record(&mut self, now_ms: f64) -> Option<f64> {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            self.frames = 0;
            return None;
        };
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = f64::from(self.frames) * 1000.0 / elapsed;
        self.window_start_ms = Some(now_ms);
        self.frames = 0;
        self.last_fps = Some(fps);
        if fps < self.threshold_fps {
            self.low_streak += 1;
        } else {
            self.low_streak = 0;
        }
        Some(fps)
    }

    /// Enough consecutive low windows to justify shedding load.
    pub fn sustained_low(&self) -> bool {
        self.low_streak >= LOW_FPS_WINDOWS_BEFORE_DEMOTION
    }

    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Drop the open window and streak, e.g. after a pause.
    pub fn reset(&mut self) {
        self.window_start_ms = None;
        self.frames = 0;
        self.low_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(m: &mut FrameRateMonitor, start: f64, interval: f64, frames: u32) -> f64 {
        let mut t = start;
        for _ in 0..frames {
            m.record(t);
            t += interval;
        }
        t
    }

    #[test]
    fn steady_sixty_is_not_low() {
        let mut m = FrameRateMonitor::new(30.0);
        feed(&mut m, 0.0, 1000.0 / 60.0, 200);
        let fps = m.last_fps().unwrap();
        assert!((fps - 60.0).abs() < 2.0, "fps was {fps}");
        assert!(!m.sustained_low());
    }

    #[test]
    fn two_slow_windows_trip_the_streak() {
        let mut m = FrameRateMonitor::new(30.0);
        let t = feed(&mut m, 0.0, 50.0, 22);
        assert!(!m.sustained_low());
        feed(&mut m, t, 50.0, 21);
        assert!(m.sustained_low());
        m.reset();
        assert!(!m.sustained_low());
    }
}
