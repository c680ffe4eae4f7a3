use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::config::{DisplayKind, HourOfDay, QueryParameters};
use crate::constants::dashboard::{DEFAULT_SEED, DEFAULT_TOP_TERMS};
use crate::constants::loader::DEFAULT_DATASET_PATH;
use crate::dashboard::Dashboard;
use crate::data::Sentiment;
use crate::ingestion::DatasetCache;
use crate::sampler::SentimentSampler;
use crate::source::{CsvSource, CsvSourceConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SentimentArg {
    Positive,
    Neutral,
    Negative,
}

impl From<SentimentArg> for Sentiment {
    fn from(value: SentimentArg) -> Self {
        match value {
            SentimentArg::Positive => Sentiment::Positive,
            SentimentArg::Neutral => Sentiment::Neutral,
            SentimentArg::Negative => Sentiment::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayArg {
    Histogram,
    Pie,
}

impl From<DisplayArg> for DisplayKind {
    fn from(value: DisplayArg) -> Self {
        match value {
            DisplayArg::Histogram => DisplayKind::Histogram,
            DisplayArg::Pie => DisplayKind::PieChart,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sentiment_dashboard",
    disable_help_subcommand = true,
    about = "Compute airline tweet sentiment dashboard views",
    long_about = "Load the tweet dataset once and print every dashboard view for the chosen selections as JSON.",
    after_help = "Airline filters are repeatable; leaving them out skips the corresponding breakdown."
)]
/// CLI for `sentiment_dashboard`.
///
/// Common usage:
/// - Default dataset path: `Tweets.csv` in the working directory
/// - Pick a different file: `--data /tmp/Tweets.csv`
/// - Break down two airlines: `--airline Delta --airline United`
struct SentimentDashboardCli {
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATASET_PATH,
        help = "Tweet dataset CSV"
    )]
    data: PathBuf,
    #[arg(
        long = "sample-sentiment",
        value_enum,
        default_value = "positive",
        help = "Sentiment of the example tweet"
    )]
    sample_sentiment: SentimentArg,
    #[arg(
        long = "sentiment-display",
        value_enum,
        default_value = "histogram",
        help = "Chart kind for sentiment counts"
    )]
    sentiment_display: DisplayArg,
    #[arg(
        long,
        default_value = "0",
        value_parser = parse_hour,
        help = "Hour of day (0-23) for the location map"
    )]
    hour: HourOfDay,
    #[arg(
        long = "airline",
        value_name = "NAME",
        help = "Airline for the sentiment breakdown, repeat as needed"
    )]
    airlines: Vec<String>,
    #[arg(
        long = "word-cloud-sentiment",
        value_enum,
        default_value = "positive",
        help = "Sentiment whose tweets feed the word cloud"
    )]
    word_cloud_sentiment: SentimentArg,
    #[arg(
        long = "reason-display",
        value_enum,
        default_value = "histogram",
        help = "Chart kind for negative reason counts"
    )]
    reason_display: DisplayArg,
    #[arg(
        long = "reason-airline",
        value_name = "NAME",
        help = "Airline for the negative reason breakdown, repeat as needed"
    )]
    reason_airlines: Vec<String>,
    #[arg(long, default_value_t = DEFAULT_SEED, help = "Seed for example sampling")]
    seed: u64,
    #[arg(
        long = "top-terms",
        default_value_t = DEFAULT_TOP_TERMS,
        help = "Number of ranked word-cloud terms to include"
    )]
    top_terms: usize,
    #[arg(
        long = "list-airlines",
        help = "Print the airlines present in the dataset and exit"
    )]
    list_airlines: bool,
}

impl SentimentDashboardCli {
    fn parameters(&self) -> Result<QueryParameters, Box<dyn Error>> {
        let params = QueryParameters::default()
            .with_sample_sentiment(self.sample_sentiment.into())
            .with_sentiment_display(self.sentiment_display.into())
            .with_hour(self.hour)
            .with_airlines(self.airlines.iter().cloned())
            .with_word_cloud_sentiment(self.word_cloud_sentiment.into())
            .with_reason_display(self.reason_display.into())
            .with_reason_airlines(self.reason_airlines.iter().cloned());
        params.validate()?;
        Ok(params)
    }
}

/// Run the dashboard CLI over `args_iter` (program name excluded).
pub fn run_sentiment_dashboard<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<SentimentDashboardCli, _>(
        std::iter::once("sentiment_dashboard".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let params = cli.parameters()?;
    let cache = DatasetCache::new(CsvSource::new(CsvSourceConfig::new(&cli.data)));
    let dataset = cache.get_or_load()?;

    if cli.list_airlines {
        for airline in dataset.airlines() {
            println!("{airline}");
        }
        return Ok(());
    }

    let dashboard = Dashboard::new(Arc::clone(&dataset)).with_top_terms(cli.top_terms);
    let mut sampler = SentimentSampler::seeded(cli.seed);
    let snapshot = dashboard.snapshot(&params, &mut sampler)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn parse_hour(raw: &str) -> Result<HourOfDay, String> {
    let parsed = raw
        .parse::<u8>()
        .map_err(|_| format!("Could not parse --hour value '{}' as an integer", raw))?;
    HourOfDay::new(parsed).map_err(|err| err.to_string())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
