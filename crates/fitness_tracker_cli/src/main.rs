use fitness_tracker_core::read_package;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `FITNESS_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("FITNESS_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("fitness_tracker_cli: log filter: {}", log_env);

    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];
    tracing::info!("fitness_tracker_cli: processing {} packages", packages.len());

    for &(workout_type, data) in packages {
        match read_package(workout_type, data) {
            Ok(workout) => println!("{}", workout.summary()),
            // A bad package kills only its own computation.
            Err(err) => tracing::error!("skipping {} package: {}", workout_type, err),
        }
    }

    Ok(())
}
