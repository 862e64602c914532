//! Column names of the catalog export

pub const SHOW_ID: &str = "show_id";
pub const TYPE: &str = "type";
pub const DIRECTOR: &str = "director";
pub const CAST: &str = "cast";
pub const COUNTRY: &str = "country";
pub const DATE_ADDED: &str = "date_added";
pub const RATING: &str = "rating";
pub const DURATION: &str = "duration";
pub const RELEASE_YEAR: &str = "release_year";

/// Columns the transform and aggregation steps cannot run without.
pub const ANALYSIS_REQUIRED: [&str; 4] = [TYPE, DIRECTOR, DURATION, RELEASE_YEAR];

/// `type` value marking a film.
pub const MOVIE: &str = "Movie";

/// Placeholder written into imputed text cells.
pub const UNKNOWN: &str = "Unknown";
