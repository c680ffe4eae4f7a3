/// Constants describing the source file layout.
pub mod columns {
    /// Tweet body column.
    pub const TEXT: &str = "text";
    /// Sentiment label column (`positive`, `neutral`, `negative`).
    pub const SENTIMENT: &str = "airline_sentiment";
    /// Negative reason column, empty for non-negative rows.
    pub const NEGATIVE_REASON: &str = "negativereason";
    /// Airline name column.
    pub const AIRLINE: &str = "airline";
    /// Creation timestamp column (e.g. `2015-02-24 11:35:52 -0800`).
    pub const CREATED_AT: &str = "tweet_created";
    /// Combined coordinate column formatted as `[lat, long]`.
    pub const COORDINATES: &str = "tweet_coord";
    /// Separate latitude column, used when `tweet_coord` is absent.
    pub const LATITUDE: &str = "latitude";
    /// Separate longitude column, used when `tweet_coord` is absent.
    pub const LONGITUDE: &str = "longitude";
    /// Optional stable id column.
    pub const TWEET_ID: &str = "tweet_id";

    /// Columns that must be present in every dataset.
    pub const REQUIRED: [&str; 5] = [TEXT, SENTIMENT, NEGATIVE_REASON, AIRLINE, CREATED_AT];
}

/// Constants used by the dataset loader.
pub mod loader {
    /// Relative path read when no explicit dataset path is given.
    pub const DEFAULT_DATASET_PATH: &str = "Tweets.csv";
    /// Prefix for ids synthesized from the row position.
    pub const POSITIONAL_ID_PREFIX: &str = "row-";
    /// Timestamp layout used by the dataset.
    pub const TIMESTAMP_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S %z";
    /// Offset-less timestamp layout, interpreted as UTC.
    pub const TIMESTAMP_NAIVE: &str = "%Y-%m-%d %H:%M:%S";
}

/// Constants used by term extraction.
pub mod terms {
    /// Tokens containing this substring are treated as links and dropped.
    pub const LINK_MARKER: &str = "http";
    /// Tokens starting with this prefix are mentions and dropped.
    pub const MENTION_PREFIX: &str = "@";
    /// Exact retweet marker token that is dropped.
    pub const RETWEET_MARKER: &str = "RT";
}

/// Constants used by the dashboard snapshot.
pub mod dashboard {
    /// Number of hours in the hour-of-day slider domain.
    pub const HOURS_PER_DAY: u8 = 24;
    /// Default number of ranked terms included in a snapshot, the word
    /// cloud's own word limit.
    pub const DEFAULT_TOP_TERMS: usize = 200;
    /// Default RNG seed for reproducible snapshot sampling.
    pub const DEFAULT_SEED: u64 = 42;
}
