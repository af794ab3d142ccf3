use foundation::time::Time;

/// Per-tick frame metadata for the update loop.
///
/// Marker retargeting and camera animation advance on this timebase
/// rather than reading the wall clock, so a tick sequence can be
/// replayed exactly in tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based tick index.
    pub index: u64,
    /// Delta time of this tick (seconds).
    pub dt_s: f64,
    /// Accumulated time at the start of the tick (seconds).
    pub time: Time,
}

impl Frame {
    pub fn start() -> Self {
        Self {
            index: 0,
            dt_s: 0.0,
            time: Time::ZERO,
        }
    }

    pub fn advance(self, dt_s: f64) -> Self {
        Self {
            index: self.index + 1,
            dt_s,
            time: self.time.advanced(dt_s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use foundation::time::Time;

    #[test]
    fn starts_at_zero() {
        let f = Frame::start();
        assert_eq!(f.index, 0);
        assert_eq!(f.time, Time::ZERO);
    }

    #[test]
    fn advance_accumulates_irregular_ticks() {
        let f = Frame::start().advance(0.016).advance(0.034);
        assert_eq!(f.index, 2);
        assert_eq!(f.dt_s, 0.034);
        assert_eq!(f.time, Time(0.05));
    }
}
