//! Damped spring animation, solved in closed form so that any instant can be
//! sampled without stepping.

use super::Millis;

const REST_DISPLACEMENT_THRESHOLD: f64 = 0.001;
const REST_SPEED_THRESHOLD: f64 = 0.001;
const CRITICAL_DAMPING_TOLERANCE: f64 = 1e-6;

/// Spring parameters, expressed as origami-style friction and tension.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub friction: f64,
    pub tension: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig {
            friction: 5.0,
            tension: 100.0,
        }
    }
}

impl SpringConfig {
    /// Stiffness of the equivalent mass-spring system.
    ///
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient of the equivalent mass-spring system.
    ///
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }

    /// Damping ratio; below 1 the spring oscillates around its target.
    ///
    pub fn damping_ratio(&self) -> f64 {
        self.damping() / (2.0 * self.stiffness().sqrt())
    }
}

/// A spring travelling from `from` toward `to`, released at `start` with
/// `velocity` in units per second. Mass is 1.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub config: SpringConfig,
    pub from: f64,
    pub to: f64,
    pub velocity: f64,
    pub start: Millis,
}

impl Spring {
    /// Returns a spring resting at `value`.
    ///
    pub fn at_rest(config: SpringConfig, value: f64, now: Millis) -> Self {
        Spring {
            config,
            from: value,
            to: value,
            velocity: 0.0,
            start: now,
        }
    }

    /// Return a spring heading for `to` from wherever this one is at `now`,
    /// keeping its current velocity.
    ///
    pub fn retarget(&self, now: Millis, to: f64) -> Spring {
        let (position, velocity) = self.sample(now);
        Spring {
            config: self.config,
            from: position,
            to,
            velocity,
            start: now,
        }
    }

    /// Return the position at `now`.
    ///
    pub fn value(&self, now: Millis) -> f64 {
        if self.is_settled(now) {
            return self.to;
        }
        self.sample(now).0
    }

    /// Return whether the spring has come to rest on its target at `now`.
    ///
    pub fn is_settled(&self, now: Millis) -> bool {
        let (position, velocity) = self.sample(now);
        (position - self.to).abs() < REST_DISPLACEMENT_THRESHOLD
            && velocity.abs() < REST_SPEED_THRESHOLD
    }

    /// Return `(position, velocity)` at `now`.
    ///
    pub fn sample(&self, now: Millis) -> (f64, f64) {
        let t = now.saturating_sub(self.start) as f64 / 1000.0;
        let k = self.config.stiffness();
        let c = self.config.damping();
        let omega0 = k.sqrt();
        let zeta = c / (2.0 * omega0);
        let x0 = self.to - self.from;
        let v0 = -self.velocity;

        if (zeta - 1.0).abs() < CRITICAL_DAMPING_TOLERANCE {
            let envelope = (-omega0 * t).exp();
            let position = self.to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        } else if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let a = (v0 + zeta * omega0 * x0) / omega1;
            let (sin, cos) = (omega1 * t).sin_cos();
            let position = self.to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (a * sin + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (position, velocity)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            let position = self.to - (a * e1 + b * e2);
            let velocity = -(a * r1 * e1 + b * r2 * e2);
            (position, velocity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(now: Millis) -> Spring {
        Spring::at_rest(SpringConfig::default(), 0.0, now).retarget(now, 5.0)
    }

    #[test]
    fn default_config_is_underdamped() {
        let config = SpringConfig::default();
        assert!((config.stiffness() - 447.4).abs() < 1e-9);
        assert!((config.damping() - 16.0).abs() < 1e-9);
        assert!(config.damping_ratio() < 1.0);
    }

    #[test]
    fn starts_at_origin() {
        let spring = press(1_000);
        let (position, velocity) = spring.sample(1_000);
        assert!(position.abs() < 1e-9);
        assert!(velocity.abs() < 1e-9);
    }

    #[test]
    fn overshoots_then_settles_on_target() {
        let spring = press(0);
        let peak = (0..1_000).map(|t| spring.value(t)).fold(f64::MIN, f64::max);
        assert!(peak > 5.0);
        assert!(!spring.is_settled(100));
        assert!(spring.is_settled(3_000));
        assert_eq!(spring.value(3_000), 5.0);
    }

    #[test]
    fn retarget_keeps_position_and_velocity() {
        let spring = press(0);
        let (position, velocity) = spring.sample(40);
        let released = spring.retarget(40, 0.0);
        let (new_position, new_velocity) = released.sample(40);
        assert!((new_position - position).abs() < 1e-9);
        assert!((new_velocity - velocity).abs() < 1e-6);
        assert!(released.is_settled(4_000));
        assert_eq!(released.value(4_000), 0.0);
    }

    /// Semi-implicit Euler integration of the same mass-spring system.
    fn integrate(spring: &Spring, until: Millis) -> f64 {
        let k = spring.config.stiffness();
        let c = spring.config.damping();
        let dt = 1e-5;
        let steps = (until as f64 / 1000.0 / dt).round() as usize;
        let (mut x, mut v) = (spring.from, spring.velocity);
        for _ in 0..steps {
            v += (-k * (x - spring.to) - c * v) * dt;
            x += v * dt;
        }
        x
    }

    fn assert_matches_integration(config: SpringConfig) {
        let spring = Spring::at_rest(config, 0.0, 0).retarget(0, 5.0);
        for t in [10, 50, 100, 200, 400] {
            let closed = spring.sample(t).0;
            let reference = integrate(&spring, t);
            assert!(
                (closed - reference).abs() < 1e-2,
                "t={}ms: {} vs {}",
                t,
                closed,
                reference
            );
        }
    }

    #[test]
    fn underdamped_spring_matches_integration() {
        assert_matches_integration(SpringConfig::default());
    }

    #[test]
    fn overdamped_spring_matches_integration() {
        let config = SpringConfig {
            friction: 40.0,
            tension: 40.0,
        };
        assert!(config.damping_ratio() > 1.0);
        assert_matches_integration(config);
        let spring = Spring::at_rest(config, 0.0, 0).retarget(0, 5.0);
        for t in (0..3_000).step_by(5) {
            assert!(spring.value(t) <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn critically_damped_spring_matches_integration() {
        // damping 2 * sqrt(stiffness): tension 30 gives stiffness 194.
        let friction = (2.0 * 194f64.sqrt() - 25.0) / 3.0 + 8.0;
        let config = SpringConfig {
            friction,
            tension: 30.0,
        };
        assert!((config.damping_ratio() - 1.0).abs() < 1e-9);
        assert_matches_integration(config);
    }

    #[test]
    fn resting_spring_is_settled() {
        let spring = Spring::at_rest(SpringConfig::default(), 0.0, 0);
        assert!(spring.is_settled(0));
        assert_eq!(spring.value(10), 0.0);
    }
}
