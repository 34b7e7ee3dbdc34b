use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, register_histogram, CounterVec, Histogram};

pub static ACCESS_DECISIONS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shortly_access_decisions_total",
        "Access control decisions by outcome",
        &["decision"]
    )
    .unwrap()
});

pub static PROVIDER_ERRORS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shortly_provider_errors_total",
        "Identity provider calls that failed",
        &["provider"]
    )
    .unwrap()
});

pub static AUTH_LATENCY: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "shortly_auth_latency_seconds",
        "Identity provider lookup latency in seconds",
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]
    )
    .unwrap()
});
