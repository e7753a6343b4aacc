use mola_exercises::array::smallest_missing_positive;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mola_exercises=info,missing_positive_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut values = [0, 10, 2, -10, -20];
    info!(input = ?values, "searching");
    let missing = smallest_missing_positive(&mut values);
    println!("The smallest positive missing number is {missing}");
}
