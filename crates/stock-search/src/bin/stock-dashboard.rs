//! Stock Dashboard CLI
//!
//! An interactive terminal front end: type a ticker, get the quote, a price
//! chart summary and the sentiment-tagged news feed.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export STOCK_API_KEY="your-key"
//!
//! # Run the dashboard
//! cargo run --bin stock-dashboard -p stock-search -- --symbol IBM
//! ```

use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use stock_search::chart::DATASET_LABEL;
use stock_search::{
    AlphaVantageClient, ChartData, ChartRenderer, CompanyDirectory, QuoteResult, SearchConfig,
    SearchCoordinator, SearchSession, SentimentCategory,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Parser, Debug)]
#[command(name = "stock-dashboard")]
#[command(about = "Quote, price chart and news sentiment for a ticker", long_about = None)]
struct Args {
    /// Ticker to search on startup (an empty search runs otherwise)
    #[arg(short, long)]
    symbol: Option<String>,

    /// JSON file mapping symbols to company names (overrides STOCK_SYMBOLS_FILE)
    #[arg(long)]
    symbols_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn,stock_search=info")]
    log_level: String,
}

/// Keeps the most recent chart so it can be drawn after the quote block
#[derive(Default)]
struct TerminalChart {
    latest: Mutex<Option<ChartData>>,
}

impl TerminalChart {
    fn take(&self) -> Option<ChartData> {
        self.latest.lock().ok().and_then(|mut latest| latest.take())
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&self, chart: &ChartData) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(chart.clone());
        }
    }
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SPARK_WIDTH: usize = 60;

fn sparkline(chart: &ChartData) -> String {
    let (Some(min), Some(max)) = (chart.min(), chart.max()) else {
        return String::new();
    };
    let range = (max - min).max(f64::EPSILON);
    let step = chart.values.len().div_ceil(SPARK_WIDTH).max(1);

    chart
        .values
        .iter()
        .step_by(step)
        .map(|value| {
            let level = ((value - min) / range * 7.0).round() as usize;
            SPARK_LEVELS[level.min(7)]
        })
        .collect()
}

fn sentiment_color(category: SentimentCategory) -> Color {
    match category {
        SentimentCategory::Positive => Color::Green,
        SentimentCategory::Negative => Color::Red,
        SentimentCategory::Neutral => Color::Grey,
    }
}

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║                      Stock Dashboard                         ║
║                                                              ║
║  Enter a stock symbol (e.g. IBM, MSFT) to search.            ║
║  /exit  - quit                                               ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}

fn render_quote(session: &SearchSession, directory: &CompanyDirectory) {
    match session.quote() {
        Some(QuoteResult::Success(quote)) => {
            let symbol = quote.symbol.as_deref().unwrap_or(session.ticker());
            println!("{}", directory.display_name(symbol));
            match quote.price {
                Some(price) => println!("  Price: {price}"),
                None => println!("  Price: n/a"),
            }
            match quote.trading_day {
                Some(day) => println!("  As of: {day}"),
                None => println!("  As of: n/a"),
            }
        }
        Some(failure) => {
            if let Some(message) = failure.user_message() {
                println!("{message}");
            }
        }
        None => {}
    }
}

fn render_chart(chart: Option<ChartData>) {
    let Some(chart) = chart else {
        return;
    };

    println!();
    println!(
        "{DATASET_LABEL} ({} points, {} → {})",
        chart.len(),
        chart.labels.first().map_or("", String::as_str),
        chart.labels.last().map_or("", String::as_str),
    );
    println!("  {}", sparkline(&chart));
    if let (Some(min), Some(max)) = (chart.min(), chart.max()) {
        println!("  low {min:.2}  high {max:.2}");
    }
}

fn render_news(session: &SearchSession) {
    println!();
    println!("News Feed");

    let legend: Vec<String> = SentimentCategory::LEGEND
        .iter()
        .map(|category| format!("{} {}", category.symbol(), category.label()))
        .collect();
    println!("  {}", legend.join("   "));

    let views = session.article_views();
    if views.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "Title", "Source"]);

    for view in views {
        let article = view.article;
        let source = match article.source_label() {
            Some(author) => format!("{author}\n{}", article.url),
            None => article.url.clone(),
        };
        table.add_row(vec![
            Cell::new(view.sentiment.symbol()).fg(sentiment_color(view.sentiment)),
            Cell::new(format!("{}\n{}", article.title, article.summary)),
            Cell::new(source),
        ]);
    }

    println!("{table}");
}

fn render(session: &SearchSession, chart: &TerminalChart, directory: &CompanyDirectory) {
    println!();
    render_quote(session, directory);
    render_chart(chart.take());
    render_news(session);
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    stock_utils::init_tracing(&args.log_level);

    let mut builder = SearchConfig::builder().with_env();
    if let Some(path) = &args.symbols_file {
        builder = builder.company_directory(path);
    }
    let config = builder.build()?;

    if config.api_key.is_none() {
        eprintln!("Warning: STOCK_API_KEY not set, requests will be rejected by the provider");
    }

    let directory = CompanyDirectory::load(config.company_directory.as_deref())?;
    let chart = Arc::new(TerminalChart::default());
    let client = Arc::new(AlphaVantageClient::new(&config)?);
    let coordinator = SearchCoordinator::new(client).with_chart_renderer(chart.clone());

    print_banner();

    match args.symbol {
        Some(symbol) => coordinator.search(symbol).await,
        None => coordinator.mount().await,
    };
    render(&coordinator.snapshot(), &chart, &directory);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("symbol> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/exit" {
            println!("Goodbye!");
            break;
        }

        coordinator.search(input).await;
        render(&coordinator.snapshot(), &chart, &directory);
    }

    Ok(())
}
