/// Scribe core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of positional column keys in table rows (`col0`, `col1`, ...).
pub const COLUMN_KEY_PREFIX: &str = "col";

/// Separator between columns when a table row is rendered for the model.
pub const COLUMN_SEPARATOR: &str = "|";

/// Highest rating accepted by the feedback loop.
pub const MAX_RATING: u8 = 5;

/// Lowest rating accepted by the feedback loop.
pub const MIN_RATING: u8 = 1;

/// Ratings kept per field for the rolling feedback statistics.
pub const RATING_WINDOW: usize = 50;

/// Global average at or above which feedback quality is reported as good.
pub const GOOD_QUALITY_THRESHOLD: f64 = 3.5;

/// Ratings needed on a field before correction patterns are worth analysing.
pub const INSIGHT_MIN_RATINGS: u64 = 5;
