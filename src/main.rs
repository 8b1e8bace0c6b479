mod constants;
mod course;
mod crawl;
mod error;
mod parser;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing::{error, info};

use course::Semester;
use crawl::CrawlOptions;
use store::CourseSink;

#[derive(Parser)]
#[command(name = "sage_scraper", about = "Brandeis registrar course-catalog scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape one (year, semester) term to a JSON file
    Scrape {
        year: u32,
        #[arg(value_enum)]
        semester: Semester,
        /// First search-results page to fetch
        #[arg(short, long, default_value_t = 1)]
        start_page: u32,
        /// Directory for the per-term JSON files
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        /// Skip the per-course detail fetch (faster, no descriptions)
        #[arg(long)]
        skip_descriptions: bool,
    },
    /// Scrape every semester of every year in a range
    ScrapeYears {
        from: u32,
        to: u32,
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        #[arg(long)]
        skip_descriptions: bool,
    },
    /// Print the courses in a previously scraped term file
    Show {
        file: PathBuf,
        /// Only courses with this subject code (e.g. COSI)
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// List registrar subject-area codes
    Subjects {
        /// With a year and semester, include each subject's browse URL
        #[arg(short, long, requires = "semester")]
        year: Option<u32>,
        #[arg(short = 'e', long, value_enum, requires = "year")]
        semester: Option<Semester>,
    },
    /// List university-requirement codes and their names
    Requirements,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            year,
            semester,
            start_page,
            out_dir,
            skip_descriptions,
        } => {
            let client = Client::new();
            scrape_term(&client, year, semester, start_page, &out_dir, !skip_descriptions).await
        }
        Commands::ScrapeYears {
            from,
            to,
            out_dir,
            skip_descriptions,
        } => {
            let client = Client::new();
            let mut failed = 0usize;
            for year in from..=to {
                for semester in Semester::ALL {
                    info!("==== {year} {semester} ====");
                    if let Err(e) =
                        scrape_term(&client, year, semester, 1, &out_dir, !skip_descriptions).await
                    {
                        error!("{year} {semester} failed: {e:#}");
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} term(s) failed");
            }
            Ok(())
        }
        Commands::Show { file, subject } => {
            let courses = store::load_courses(&file)?;
            let shown: Vec<_> = courses
                .iter()
                .filter(|c| {
                    subject
                        .as_deref()
                        .map_or(true, |s| c.subject.eq_ignore_ascii_case(s))
                })
                .collect();

            println!(
                "{:<14} | {:<42} | {:>9} | {:<22} | {}",
                "Course", "Title", "Enrolled", "Status", "Instructors"
            );
            println!("{}", "-".repeat(120));
            for c in &shown {
                println!(
                    "{:<14} | {:<42} | {:>4} / {:<2} | {:<22} | {}",
                    c.friendly_number(),
                    truncate(&c.name, 42),
                    c.enrolled,
                    c.limit,
                    truncate(&c.enrollment_status, 22),
                    c.instructor_str(),
                );
            }
            // Requirement legend (separate section to avoid clutter)
            let mut req_codes: Vec<&str> = shown
                .iter()
                .flat_map(|c| c.uni_reqs.iter().map(String::as_str))
                .collect();
            req_codes.sort_unstable();
            req_codes.dedup();
            if !req_codes.is_empty() {
                println!("\n--- Requirements ---");
                for code in req_codes {
                    match constants::long_req_name(code) {
                        Some(name) => println!("  {code}: {name}"),
                        None => println!("  {code}"),
                    }
                }
            }

            println!("\n{} course(s)", shown.len());
            Ok(())
        }
        Commands::Subjects { year, semester } => {
            for &(code, name) in constants::SUBJECT_AREAS {
                match (year, semester) {
                    (Some(y), Some(s)) => println!(
                        "{code:>5}  {name:<55} {}",
                        crawl::schedule_url(y, s, code, "all")
                    ),
                    _ => println!("{code:>5}  {name}"),
                }
            }
            Ok(())
        }
        Commands::Requirements => {
            for &(abbr, name) in constants::REQUIREMENTS {
                println!("{abbr:>5}  {name}");
            }
            Ok(())
        }
    }
}

async fn scrape_term(
    client: &Client,
    year: u32,
    semester: Semester,
    start_page: u32,
    out_dir: &std::path::Path,
    fetch_descriptions: bool,
) -> anyhow::Result<()> {
    let mut sink = CourseSink::create(out_dir, year, semester)?;
    let path = sink.path().to_path_buf();
    let opts = CrawlOptions {
        year,
        semester,
        start_page,
        fetch_descriptions,
    };

    let stats = crawl::crawl_term(client, &opts, &mut sink).await?;
    sink.finish()?;

    println!(
        "{year} {semester}: {} course(s) from {} page(s), {} row(s) dropped -> {}",
        stats.courses,
        stats.pages,
        stats.dropped,
        path.display()
    );
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
