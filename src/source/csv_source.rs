use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use super::DatasetSource;
use super::parsing::{parse_coordinate_pair, parse_coordinate_parts, parse_created_at};
use crate::constants::columns;
use crate::constants::loader::{DEFAULT_DATASET_PATH, POSITIONAL_ID_PREFIX};
use crate::data::{Coordinates, Dataset, Sentiment, TweetRecord};
use crate::errors::ViewError;

/// Configuration for the CSV-backed dataset source.
#[derive(Clone, Debug)]
pub struct CsvSourceConfig {
    /// File to read.
    pub path: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvSourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl CsvSourceConfig {
    /// Create a config reading `path` with comma delimiters.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Where coordinates live in a given file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CoordinateColumns {
    Pair(usize),
    Split { latitude: usize, longitude: usize },
}

/// Column positions resolved once from the header row.
#[derive(Clone, Copy, Debug)]
struct ColumnLayout {
    text: usize,
    sentiment: usize,
    negative_reason: usize,
    airline: usize,
    created_at: usize,
    coordinates: CoordinateColumns,
    tweet_id: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self, String> {
        let find = |name: &str| headers.iter().position(|header| header == name);

        let missing: Vec<&str> = columns::REQUIRED
            .iter()
            .copied()
            .filter(|name| find(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(format!("missing required columns: {}", missing.join(", ")));
        }

        let coordinates = match (
            find(columns::COORDINATES),
            find(columns::LATITUDE),
            find(columns::LONGITUDE),
        ) {
            (Some(idx), _, _) => CoordinateColumns::Pair(idx),
            (None, Some(latitude), Some(longitude)) => CoordinateColumns::Split {
                latitude,
                longitude,
            },
            _ => {
                return Err(format!(
                    "missing coordinate columns: expected '{}' or '{}'+'{}'",
                    columns::COORDINATES,
                    columns::LATITUDE,
                    columns::LONGITUDE
                ));
            }
        };

        // Presence was checked above.
        let required = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            text: required(columns::TEXT),
            sentiment: required(columns::SENTIMENT),
            negative_reason: required(columns::NEGATIVE_REASON),
            airline: required(columns::AIRLINE),
            created_at: required(columns::CREATED_AT),
            coordinates,
            tweet_id: find(columns::TWEET_ID),
        })
    }
}

/// Filesystem CSV source with strict schema validation.
pub struct CsvSource {
    config: CsvSourceConfig,
}

impl CsvSource {
    /// Create a CSV source from configuration.
    pub fn new(config: CsvSourceConfig) -> Self {
        Self { config }
    }

    /// Convenience constructor for a comma-delimited file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvSourceConfig::new(path))
    }

    /// Path this source reads.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn load_error(&self, reason: impl Into<String>) -> ViewError {
        ViewError::load(&self.config.path, reason)
    }

    fn row_to_record(
        &self,
        layout: &ColumnLayout,
        row: &StringRecord,
        row_index: usize,
    ) -> Result<TweetRecord, ViewError> {
        let row_number = row_index + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let sentiment = cell(layout.sentiment).parse::<Sentiment>().map_err(|_| {
            self.load_error(format!(
                "row {row_number}: unknown sentiment '{}'",
                cell(layout.sentiment)
            ))
        })?;

        let airline = cell(layout.airline).trim();
        if airline.is_empty() {
            return Err(self.load_error(format!("row {row_number}: airline is empty")));
        }

        let created_raw = cell(layout.created_at);
        let created_at = parse_created_at(created_raw).ok_or_else(|| {
            self.load_error(format!(
                "row {row_number}: unparsable timestamp '{created_raw}'"
            ))
        })?;

        let reason = cell(layout.negative_reason).trim();
        let negative_reason = match (reason.is_empty(), sentiment) {
            (true, _) => None,
            (false, Sentiment::Negative) => Some(reason.to_string()),
            (false, _) => {
                debug!(
                    row = row_number,
                    sentiment = sentiment.as_str(),
                    reason,
                    "dropping negative reason on non-negative tweet"
                );
                None
            }
        };

        let coordinates = self.row_coordinates(layout, row, row_number)?;

        let id = layout
            .tweet_id
            .map(cell)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{POSITIONAL_ID_PREFIX}{row_index}"));

        Ok(TweetRecord {
            id,
            text: cell(layout.text).to_string(),
            sentiment,
            negative_reason,
            airline: airline.to_string(),
            created_at,
            coordinates,
        })
    }

    fn row_coordinates(
        &self,
        layout: &ColumnLayout,
        row: &StringRecord,
        row_number: usize,
    ) -> Result<Option<Coordinates>, ViewError> {
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();
        match layout.coordinates {
            CoordinateColumns::Pair(idx) => {
                let raw = cell(idx);
                if raw.is_empty() {
                    return Ok(None);
                }
                parse_coordinate_pair(raw).map(Some).ok_or_else(|| {
                    self.load_error(format!("row {row_number}: malformed coordinates '{raw}'"))
                })
            }
            CoordinateColumns::Split {
                latitude,
                longitude,
            } => {
                let (lat, lon) = (cell(latitude), cell(longitude));
                if lat.is_empty() && lon.is_empty() {
                    return Ok(None);
                }
                parse_coordinate_parts(lat, lon).map(Some).ok_or_else(|| {
                    self.load_error(format!(
                        "row {row_number}: malformed coordinates '{lat}', '{lon}'"
                    ))
                })
            }
        }
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        self.config.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset, ViewError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .from_path(&self.config.path)
            .map_err(|err| {
                let not_found = matches!(
                    err.kind(),
                    csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound
                );
                if not_found {
                    self.load_error("file not found")
                } else {
                    ViewError::Csv(err)
                }
            })?;

        let headers = reader.headers()?.clone();
        let layout = ColumnLayout::resolve(&headers).map_err(|reason| self.load_error(reason))?;

        let mut records = Vec::new();
        for (row_index, row) in reader.records().enumerate() {
            let row = row.map_err(|err| self.load_error(format!("row {}: {err}", row_index + 1)))?;
            records.push(self.row_to_record(&layout, &row, row_index)?);
        }

        let with_coordinates = records
            .iter()
            .filter(|record| record.coordinates.is_some())
            .count();
        info!(
            source = %self.describe(),
            records = records.len(),
            with_coordinates,
            "loaded tweet dataset"
        );
        Ok(Dataset::new(records))
    }
}
