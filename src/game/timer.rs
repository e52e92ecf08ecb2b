// Level timer shown as MM:SS

/// Elapsed time since the level was loaded
#[derive(Debug, Clone, Default)]
pub struct LevelTimer {
    elapsed: f32,
}

impl LevelTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta. Negative or non-finite deltas are ignored.
    pub fn tick(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Zero-padded `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.elapsed)
    }
}

/// Format seconds as zero-padded `MM:SS` (minutes keep growing past 59)
pub fn format_clock(seconds: f32) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u32;
    let secs = (seconds % 60.0).floor() as u32;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(125.4), "02:05");
        assert_eq!(format_clock(3599.9), "59:59");
        assert_eq!(format_clock(59.999), "00:59");
        assert_eq!(format_clock(6000.0), "100:00");
    }

    #[test]
    fn test_tick_accumulates() {
        let mut timer = LevelTimer::new();
        for _ in 0..125 {
            timer.tick(1.0);
        }
        timer.tick(0.4);

        assert_eq!(timer.display(), "02:05");
    }

    #[test]
    fn test_bad_deltas_ignored() {
        let mut timer = LevelTimer::new();
        timer.tick(-1.0);
        timer.tick(f32::NAN);
        timer.tick(f32::INFINITY);

        assert_eq!(timer.elapsed, 0.0);
        assert_eq!(timer.display(), "00:00");
    }
}
