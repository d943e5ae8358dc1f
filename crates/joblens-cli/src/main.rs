mod input;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use joblens_analysis::{
    analyze, filter_listings, keyword_frequencies, location_breakdown, parse_salary,
    salary_stats, skill_gaps, AnalysisConfig, ListingFilter, TextNormalizer,
};
use joblens_core::{AppConfig, Listing};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "joblens")]
#[command(about = "Keyword, salary, location, and skill-gap analysis of job listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run every analysis and print the full report
    Analyze {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show keyword frequencies, most frequent first
    Keywords {
        /// Listings file (.csv or .json); defaults to `JOBLENS_JOBS_PATH`
        #[arg(long)]
        jobs: Option<PathBuf>,
        /// Maximum number of keywords to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show salary statistics over listings with a parseable salary
    Salary {
        /// Listings file (.csv or .json); defaults to `JOBLENS_JOBS_PATH`
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
    /// Show remote-status and city breakdowns
    Locations {
        /// Listings file (.csv or .json); defaults to `JOBLENS_JOBS_PATH`
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
    /// Classify market keywords against your skills
    Gaps {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Parse a single salary string and print the range
    ParseSalary {
        /// Salary text, e.g. "€70k-€90k"
        text: String,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Listings file (.csv or .json); defaults to `JOBLENS_JOBS_PATH`
    #[arg(long)]
    jobs: Option<PathBuf>,
    /// Skills file (.csv or .json); defaults to `JOBLENS_SKILLS_PATH`
    #[arg(long)]
    skills: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Case-insensitive text matched against every listing field
    #[arg(long)]
    search: Option<String>,
    /// Keyword every listing must carry (repeatable)
    #[arg(long = "keyword")]
    keywords: Vec<String>,
    /// Minimum salary midpoint
    #[arg(long)]
    min_salary: Option<u64>,
    /// Maximum salary midpoint
    #[arg(long)]
    max_salary: Option<u64>,
}

impl FilterArgs {
    fn into_filter(self) -> ListingFilter {
        ListingFilter {
            search: self.search,
            keywords: self.keywords,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = joblens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Analyze {
            inputs,
            format,
            filter,
        } => run_analyze(&config, inputs, format, filter.into_filter())?,
        Commands::Keywords { jobs, limit } => run_keywords(&config, jobs, limit)?,
        Commands::Salary { jobs } => run_salary(&config, jobs)?,
        Commands::Locations { jobs } => run_locations(&config, jobs)?,
        Commands::Gaps { inputs } => run_gaps(&config, inputs)?,
        Commands::ParseSalary { text } => run_parse_salary(&text),
    }

    Ok(())
}

fn run_analyze(
    config: &AppConfig,
    inputs: InputArgs,
    format: OutputFormat,
    filter: ListingFilter,
) -> anyhow::Result<()> {
    let analysis = AnalysisConfig::from_app_config(config)?;
    let listings = input::listings(config, inputs.jobs)?;
    let skills = input::skills(config, inputs.skills)?;

    let selected: Vec<Listing> = if filter.is_empty() {
        listings
    } else {
        filter_listings(&listings, &filter)
            .into_iter()
            .cloned()
            .collect()
    };

    let report = analyze(&selected, &skills, &analysis);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => {
            let generated = chrono::Utc::now();
            print!("{}", render::markdown_report(&report, &filter, generated));
        }
    }

    Ok(())
}

fn run_keywords(
    config: &AppConfig,
    jobs: Option<PathBuf>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let normalizer = TextNormalizer::new(AnalysisConfig::from_app_config(config)?.aliases);
    let listings = input::listings(config, jobs)?;

    let mut frequencies = keyword_frequencies(&listings, &normalizer);
    if let Some(limit) = limit {
        frequencies.truncate(limit);
    }

    if frequencies.is_empty() {
        println!("no keywords found");
        return Ok(());
    }
    print!("{}", render::keyword_table(&frequencies));
    Ok(())
}

fn run_salary(config: &AppConfig, jobs: Option<PathBuf>) -> anyhow::Result<()> {
    let listings = input::listings(config, jobs)?;
    let stats = salary_stats(&listings);

    if stats.data.is_empty() {
        println!("no listings with a parseable salary");
        return Ok(());
    }
    print!("{}", render::salary_table(&stats));
    Ok(())
}

fn run_locations(config: &AppConfig, jobs: Option<PathBuf>) -> anyhow::Result<()> {
    let normalizer = TextNormalizer::new(AnalysisConfig::from_app_config(config)?.aliases);
    let listings = input::listings(config, jobs)?;
    let breakdown = location_breakdown(&listings, &normalizer);

    print!("{}", render::location_tables(&breakdown));
    Ok(())
}

fn run_gaps(config: &AppConfig, inputs: InputArgs) -> anyhow::Result<()> {
    let analysis = AnalysisConfig::from_app_config(config)?;
    let normalizer = TextNormalizer::new(analysis.aliases);
    let listings = input::listings(config, inputs.jobs)?;
    let skills = input::skills(config, inputs.skills)?;

    let frequencies = keyword_frequencies(&listings, &normalizer);
    let result = skill_gaps(&frequencies, &skills, &normalizer, analysis.demand_fraction);

    print!("{}", render::skill_gap_tables(&result));
    Ok(())
}

fn run_parse_salary(text: &str) {
    match parse_salary(text) {
        Some(range) => println!(
            "min={} max={} midpoint={}",
            range.min,
            range.max,
            range.midpoint()
        ),
        None => println!("unparseable salary: {text:?}"),
    }
}
