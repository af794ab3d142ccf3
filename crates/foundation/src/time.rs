/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn advanced(self, dt_s: f64) -> Self {
        Self(self.0 + dt_s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: Time,
    pub end: Time,
}

impl TimeSpan {
    pub fn starting_at(start: Time, duration_s: f64) -> Self {
        Self {
            start,
            end: Time(start.0 + duration_s),
        }
    }

    pub fn duration(&self) -> f64 {
        (self.end.0 - self.start.0).max(0.0)
    }

    /// Normalized progress of `t` through the span, clamped to [0, 1].
    /// An empty span is always complete.
    pub fn progress(&self, t: Time) -> f64 {
        let d = self.duration();
        if d <= 0.0 {
            return 1.0;
        }
        ((t.0 - self.start.0) / d).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Time, TimeSpan};

    #[test]
    fn advance_accumulates_seconds() {
        let t = Time::ZERO.advanced(0.5).advanced(1.25);
        assert_eq!(t, Time(1.75));
    }

    #[test]
    fn span_progress_clamps() {
        let span = TimeSpan::starting_at(Time(2.0), 1.0);
        assert_eq!(span.duration(), 1.0);
        assert_eq!(span.progress(Time(1.0)), 0.0);
        assert_eq!(span.progress(Time(2.5)), 0.5);
        assert_eq!(span.progress(Time(4.0)), 1.0);
    }

    #[test]
    fn empty_span_is_complete() {
        let span = TimeSpan::starting_at(Time(1.0), 0.0);
        assert_eq!(span.progress(Time(0.0)), 1.0);
        assert_eq!(span.progress(Time(5.0)), 1.0);
    }
}
