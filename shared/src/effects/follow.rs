use nalgebra::Vector2;

/// Eases a position towards a moving target, a fixed fraction per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Follower {
    position: Vector2<f64>,
    target: Vector2<f64>,
    damping: f64,
}

impl Follower {
    /// Creates a [`Follower`] resting at `origin`.
    ///
    /// `damping` is clamped into `(0, 1]`; a value outside that range would
    /// either never move or overshoot on every step.
    pub fn new(origin: Vector2<f64>, damping: f64) -> Follower {
        Follower {
            position: origin,
            target: origin,
            damping: damping.clamp(f64::EPSILON, 1.0),
        }
    }

    /// Current eased position.
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    /// Position being eased towards.
    pub fn target(&self) -> Vector2<f64> {
        self.target
    }

    /// Moves the target, e.g. on pointer movement.
    pub fn set_target(&mut self, target: Vector2<f64>) {
        self.target = target;
    }

    /// Distance between position and target.
    pub fn error(&self) -> f64 {
        (self.target - self.position).norm()
    }

    /// Covers `damping` of the remaining distance and returns the new position.
    pub fn step(&mut self) -> Vector2<f64> {
        self.position += (self.target - self.position) * self.damping;
        self.position
    }

    /// CSS transform placing an element at the eased position.
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }
}
