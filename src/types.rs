/// Stable tweet identifier.
/// Examples: `570306133677760513`, `row-42` (positional fallback)
pub type TweetId = String;
/// Airline name as it appears in the dataset.
/// Examples: `Virgin America`, `United`, `US Airways`
pub type Airline = String;
/// Category explaining a negative tweet.
/// Examples: `Late Flight`, `Customer Service Issue`, `Bad Flight`
pub type NegativeReason = String;
/// Single whitespace-delimited token from tweet text.
/// Examples: `great`, `flight`, `#fail`
pub type Token = String;
