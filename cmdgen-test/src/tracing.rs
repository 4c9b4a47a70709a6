use tracing_subscriber::EnvFilter;

const CRATE_NAMES: &[&str] = &["cmdgen", "cmdgen_test"];

/// Routes `cmdgen` log events into the output captured by the test harness.
///
/// Everything from `cmdgen` and this crate is shown up to TRACE, other crates only at ERROR.
/// Calling this more than once is harmless; later calls keep the first subscriber.
///
/// # Example
///
/// ```
/// cmdgen_test::tracing::init();
/// ```
pub fn init() {
    let mut env_filter = EnvFilter::new("ERROR");

    for name in CRATE_NAMES {
        // Crate names are static and always form valid directives.
        env_filter = env_filter.add_directive(format!("{name}=TRACE").parse().unwrap());
    }

    tracing_subscriber::fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_test_writer()
        .compact()
        .try_init()
        .ok();
}
