//! Sensor-package decoding: workout-type code plus positional readings.

use serde::{Deserialize, Serialize};

use crate::{Running, Swimming, TrackerError, TrackerResult, Walking, Workout};

/// One raw package as produced by the sensor feed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Decode this package into its workout variant.
    pub fn decode(&self) -> TrackerResult<Box<dyn Workout>> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Decode a workout-type code and positional sensor readings into a workout.
///
/// Codes: `SWM` (5 values), `RUN` (3), `WLK` (4). Readings are spread into
/// the variant constructor in field order; a wrong count is a
/// [`TrackerError::PackageArity`] error, and a non-positive duration (or
/// walking height) is rejected before any computation divides by it.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrackerResult<Box<dyn Workout>> {
    let workout: Box<dyn Workout> = match (workout_type, data) {
        ("RUN", &[action, duration_h, weight_kg]) => {
            check_positive("RUN", "duration", duration_h)?;
            Box::new(Running::new(action, duration_h, weight_kg))
        }
        ("RUN", _) => return Err(arity("RUN", 3, data.len())),
        ("WLK", &[action, duration_h, weight_kg, height_cm]) => {
            check_positive("WLK", "duration", duration_h)?;
            check_positive("WLK", "height", height_cm)?;
            Box::new(Walking::new(action, duration_h, weight_kg, height_cm))
        }
        ("WLK", _) => return Err(arity("WLK", 4, data.len())),
        ("SWM", &[action, duration_h, weight_kg, pool_length_m, lap_count]) => {
            check_positive("SWM", "duration", duration_h)?;
            Box::new(Swimming::new(
                action,
                duration_h,
                weight_kg,
                pool_length_m,
                lap_count,
            ))
        }
        ("SWM", _) => return Err(arity("SWM", 5, data.len())),
        (other, _) => return Err(TrackerError::UnknownWorkoutType(other.to_string())),
    };
    tracing::debug!(
        "decoded {} package into {} workout",
        workout_type,
        workout.kind()
    );
    Ok(workout)
}

fn arity(kind: &'static str, expected: usize, got: usize) -> TrackerError {
    TrackerError::PackageArity {
        kind,
        expected,
        got,
    }
}

fn check_positive(kind: &'static str, field: &'static str, value: f64) -> TrackerResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidMeasurement { kind, field })
    }
}
