//! Spring physics animation
//!
//! RK4-integrated spring physics for smooth, natural animations.
//! Springs can be configured either physically (stiffness, damping, mass) or
//! perceptually (response time and damping ratio).

use std::f32::consts::PI;

/// Largest integration step; longer frames are split into substeps
const MAX_STEP: f32 = 1.0 / 120.0;
/// Distance from target below which a slow spring counts as settled
const REST_EPSILON: f32 = 0.001;
const REST_VELOCITY: f32 = 0.01;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Create a unit-mass spring from a response time and damping ratio
    ///
    /// `response` is the period of the undamped oscillation in seconds.
    /// `damping_ratio` is 1.0 for critical damping; values below 1.0
    /// overshoot and oscillate before settling.
    pub fn from_response(response: f32, damping_ratio: f32) -> Self {
        let response = response.max(f32::EPSILON);
        let omega = 2.0 * PI / response;
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_ratio * omega,
            mass: 1.0,
        }
    }

    /// Bouncy entrance used by alert cards (0.5s response, 0.6 damping ratio)
    pub fn alert_entrance() -> Self {
        Self::from_response(0.5, 0.6)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring resting at `initial`
    ///
    /// Rest thresholds are sized for normalized values such as scale and
    /// opacity.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Frames longer than 1/120s are integrated in substeps. Once settled the
    /// spring snaps exactly onto its target.
    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
            let h = remaining.min(MAX_STEP);
            self.integrate(h);
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Single RK4 step
    fn integrate(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
