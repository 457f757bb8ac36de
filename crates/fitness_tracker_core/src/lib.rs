//! Core `Workout` trait, sensor-package dispatch and summary formatting.

use thiserror::Error;

pub mod package;
pub mod summary;
pub mod workout;

pub use package::{SensorPackage, read_package};
pub use summary::WorkoutSummary;
pub use workout::{Running, Swimming, Walking};

/// Meters per stride for step-based workouts.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters per stroke when swimming.
pub const STROKE_LENGTH_M: f64 = 1.38;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MINUTES_IN_HOUR: f64 = 60.0;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{kind} package expects {expected} sensor values, got {got}")]
    PackageArity {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{kind} package has non-positive {field}")]
    InvalidMeasurement {
        kind: &'static str,
        field: &'static str,
    },
}

/// A single recorded workout with its raw sensor inputs.
///
/// `distance_km`, `mean_speed_kmh` and `summary` are provided in terms of the
/// raw accessors; variants override only where their physics differ
/// (swimming derives speed from pool laps, not stride count).
pub trait Workout: Send + Sync + std::fmt::Debug {
    /// Variant name as it appears in the rendered summary.
    fn kind(&self) -> &'static str;
    /// Raw step or stroke count from the sensor.
    fn action(&self) -> f64;
    fn duration_h(&self) -> f64;
    fn weight_kg(&self) -> f64;

    fn stride_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    fn distance_km(&self) -> f64 {
        self.action() * self.stride_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    fn spent_calories(&self) -> f64;

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout_type: self.kind().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
