use clap::Parser;
use devscope_core::{extract_handle, Platform};
use devscope_profile::{AggregatedProfile, ProfileAggregator, ProfileQuery};

#[derive(Debug, Parser)]
#[command(name = "devscope")]
#[command(about = "Aggregate a developer's public profiles into one summary")]
struct Cli {
    /// GitHub username or profile URL (required source)
    github: String,

    /// LinkedIn username or profile URL
    #[arg(long)]
    linkedin: Option<String>,

    /// LeetCode username or profile URL
    #[arg(long)]
    leetcode: Option<String>,

    /// Print the full aggregated profile as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let github = extract_handle(&cli.github, Platform::GitHub);
    anyhow::ensure!(!github.is_empty(), "a GitHub username is required");

    let normalize = |input: Option<&str>, platform: Platform| -> Option<String> {
        input
            .map(|raw| extract_handle(raw, platform))
            .filter(|h| !h.is_empty())
    };
    let query = ProfileQuery {
        github,
        linkedin: normalize(cli.linkedin.as_deref(), Platform::LinkedIn),
        leetcode: normalize(cli.leetcode.as_deref(), Platform::LeetCode),
    };

    let config = devscope_core::load_app_config_from_env()?;
    let aggregator = ProfileAggregator::from_config(&config)?;
    let profile = aggregator
        .build_profile(&query)
        .await
        .map_err(|e| anyhow::anyhow!("{e}; check the handle and retry"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_report(&profile);
    }
    Ok(())
}

fn print_report(profile: &AggregatedProfile) {
    let summary = &profile.summary;
    println!("{}", summary.headline);
    println!("Level: {}", summary.professional_level);
    println!();
    println!("{}", summary.summary);
    println!();
    println!("Key skills: {}", summary.key_skills.join(", "));
    println!("Highlights:");
    for highlight in &summary.highlights {
        println!("  - {highlight}");
    }
    if profile.linkedin.is_degraded() {
        println!();
        println!("note: LinkedIn data was unavailable; defaults were used.");
    }
    if profile.leetcode.is_degraded() {
        println!();
        println!("note: LeetCode data was unavailable; defaults were used.");
    }
}
