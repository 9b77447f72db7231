use std::sync::Once;

use rand::{Rng, SeedableRng, rngs::SmallRng};

pub mod generate;

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let env = std::env::var("RUST_LOG").ok();
        let filter = match env {
            Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            None => EnvFilter::new("info"),
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

/// Deterministic generator for property-style tests; a fixed seed keeps any
/// failure reproducible.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Pick a value from `0..upper` with a bias towards the ends, where most
/// off-by-one bugs live.
pub fn edge_biased_len<R: Rng>(rng: &mut R, upper: usize) -> usize {
    match rng.random_range(0..8) {
        0 => 0,
        1 => upper.saturating_sub(1),
        _ => rng.random_range(0..upper.max(1)),
    }
}

#[cfg(feature = "auto-init")]
mod auto {
    // Use ctor to run at binary init time to avoid having to call init in every test.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}
