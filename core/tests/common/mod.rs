use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing() {
    let _ = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
