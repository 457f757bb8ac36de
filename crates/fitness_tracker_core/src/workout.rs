//! Workout variants and their calorie models.

use crate::{M_IN_KM, MINUTES_IN_HOUR, STROKE_LENGTH_M, Workout};

/// Running session measured by step count.
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    const CALORIE_SPEED_RATE: f64 = 18.0;
    const CALORIE_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIE_SPEED_RATE * self.mean_speed_kmh() - Self::CALORIE_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MINUTES_IN_HOUR)
    }
}

/// Sports-walking session; the calorie model additionally needs the
/// athlete's height.
#[derive(Clone, Debug, PartialEq)]
pub struct Walking {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl Walking {
    const CALORIE_WEIGHT_RATE: f64 = 0.035;
    const CALORIE_SPEED_RATE: f64 = 0.029;

    pub fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for Walking {
    fn kind(&self) -> &'static str {
        "Walking"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        // Floor division of speed^2 by height is part of the reference
        // calorie model; do not "fix" it to plain division.
        let speed = self.mean_speed_kmh();
        let speed_term = (speed * speed / self.height_cm).floor();
        (Self::CALORIE_WEIGHT_RATE * self.weight_kg
            + speed_term * Self::CALORIE_SPEED_RATE * self.weight_kg)
            * (self.duration_h * MINUTES_IN_HOUR)
    }
}

/// Swimming session; speed comes from pool length and lap count rather
/// than stroke count.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    lap_count: f64,
}

impl Swimming {
    const CALORIE_SPEED_SHIFT: f64 = 1.1;
    const CALORIE_WEIGHT_RATE: f64 = 2.0;

    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            lap_count,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn stride_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.lap_count / M_IN_KM / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIE_SPEED_SHIFT)
            * Self::CALORIE_WEIGHT_RATE
            * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_distance_and_speed() {
        let run = Running::new(15000.0, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn running_calories_match_model() {
        let run = Running::new(15000.0, 1.0, 75.0);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!((run.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn walking_speed_term_floors_to_zero() {
        let walk = Walking::new(9000.0, 1.0, 75.0, 180.0);
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        // 5.85^2 / 180 < 1, so the floored term contributes nothing.
        assert!((walk.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn walking_speed_term_keeps_floor_for_fast_walks() {
        // 18 km/h over 180 cm gives 324 / 180 = 1.8, floored to 1.
        let walk = Walking::new(27692.0, 1.0, 75.0, 180.0);
        let speed = walk.mean_speed_kmh();
        let floored = (speed * speed / 180.0).floor();
        assert_eq!(floored, 1.0);
        let expected = (0.035 * 75.0 + floored * 0.029 * 75.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn swimming_speed_ignores_stroke_count() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
        // Distance still comes from strokes at the longer stroke length.
        assert!((swim.distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn swimming_calories_match_model() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swim.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn distance_and_speed_non_negative_for_positive_inputs() {
        let run = Running::new(1.0, 0.25, 50.0);
        assert!(run.distance_km() >= 0.0);
        assert!(run.mean_speed_kmh() >= 0.0);
    }
}
