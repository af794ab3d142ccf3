use foundation::math::Vec3;
use foundation::time::{Time, TimeSpan};

/// Orbit-control zoom limits in globe radii.
pub const MIN_DISTANCE: f64 = 1.5;
pub const MAX_DISTANCE: f64 = 10.0;

const FLIGHT_DURATION_S: f64 = 1.0;
const FOCUS_DISTANCE_FACTOR: f64 = 2.5;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Flight {
    from: Vec3,
    to: Vec3,
    span: TimeSpan,
}

/// Camera state plus the click-to-focus flight.
///
/// Clicking a point starts a one-second ease-out flight toward the point
/// pulled out to 2.5x its surface position; each update interpolates the
/// position from the flight origin and nudges the controls target back
/// toward the globe center. Manual movement cancels the flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusCamera {
    position: Vec3,
    controls_target: Vec3,
    flight: Option<Flight>,
}

impl Default for FocusCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusCamera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            controls_target: Vec3::ZERO,
            flight: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn controls_target(&self) -> Vec3 {
        self.controls_target
    }

    /// Distance from the globe center. Drives the marker overlay scale.
    pub fn distance(&self) -> f64 {
        self.position.length()
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Starts the focus flight toward a point, with the destination held
    /// inside the zoom limits.
    pub fn focus_on(&mut self, point_position: Vec3, now: Time) {
        let mut to = point_position * FOCUS_DISTANCE_FACTOR;
        let len = to.length();
        if len > 0.0 {
            to = to * (len.clamp(MIN_DISTANCE, MAX_DISTANCE) / len);
        }
        self.flight = Some(Flight {
            from: self.position,
            to,
            span: TimeSpan::starting_at(now, FLIGHT_DURATION_S),
        });
    }

    /// Advances a flight in progress; a completed flight is dropped with
    /// the camera exactly on its destination.
    pub fn update(&mut self, now: Time) {
        let Some(flight) = self.flight else {
            return;
        };
        let t = flight.span.progress(now);
        let ease = ease_out_cubic(t);
        self.position = flight.from.lerp(flight.to, ease);
        self.controls_target = self.controls_target.lerp(Vec3::ZERO, ease * 0.1);
        if t >= 1.0 {
            self.flight = None;
        }
    }

    /// Manual camera movement from the host controls. Cancels any flight
    /// and keeps the distance inside the zoom limits.
    pub fn set_position(&mut self, position: Vec3) {
        self.flight = None;
        let len = position.length();
        if len > 0.0 {
            self.position = position * (len.clamp(MIN_DISTANCE, MAX_DISTANCE) / len);
        }
    }

    pub fn set_controls_target(&mut self, target: Vec3) {
        self.controls_target = target;
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
