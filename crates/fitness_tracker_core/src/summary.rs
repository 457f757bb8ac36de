//! Rendered workout summary.

use serde::{Deserialize, Serialize};

/// Derived statistics for one workout, ready for display.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WorkoutSummary {
    pub workout_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl std::fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.workout_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}
