use tracing::Level;

/// Install the global subscriber. Call once from the hosting process.
pub fn init(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}
