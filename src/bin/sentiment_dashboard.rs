use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    sentiment_views::example_apps::run_sentiment_dashboard(std::env::args().skip(1))
}
