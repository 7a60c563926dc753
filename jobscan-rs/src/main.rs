//! Command-line job posting scam checker
//!
//! # Usage
//!
//! ```bash
//! # Assess a posting
//! jobscan assess --text "URGENT HIRING!!!! Pay a registration fee" --email hr@gmail.com
//!
//! # Assess a posting from a file, with company and URL verification
//! jobscan assess --text-file posting.txt --company "Acme Robotics" --url https://acme.com/jobs/1
//!
//! # Show stored results
//! jobscan history --limit 5
//! jobscan last
//! jobscan export --output report.txt
//!
//! # Report a scam
//! jobscan report --link https://jobs.example.xyz/1 --details "asked for a deposit"
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use jobscan_rs::config::AppConfig;
use jobscan_rs::engine::{AssessmentRecord, AssessmentRequest, Assessor};
use jobscan_rs::extract::{PlainTextExtractor, TextExtractor};
use jobscan_rs::report::{self, portals};
use jobscan_rs::storage::{NewScamReport, ScamReport, Stores};
use jobscan_rs::logging;

#[derive(Parser)]
#[command(name = "jobscan")]
#[command(about = "Score job postings for scam risk", long_about = None)]
struct Cli {
    /// Config file (falls back to $JOBSCAN_CONFIG, then defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a job posting
    Assess {
        /// Posting text
        #[arg(long, conflicts_with = "text_file")]
        text: Option<String>,
        /// Read the posting text from a file
        #[arg(long)]
        text_file: Option<PathBuf>,
        /// Attachment whose text is appended to the posting
        #[arg(long)]
        attachment: Option<PathBuf>,
        /// Recruiter email address
        #[arg(long, default_value = "")]
        email: String,
        /// Company name
        #[arg(long, default_value = "")]
        company: String,
        /// Posting URL
        #[arg(long, default_value = "")]
        url: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
        /// Print a narrative explanation
        #[arg(long)]
        explain: bool,
        /// Do not store the result
        #[arg(long)]
        no_save: bool,
    },
    /// List stored assessments
    History {
        /// Show only the most recent N
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the most recent assessment
    Last,
    /// Write the text export of the most recent assessment
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report a scam posting
    Report {
        /// Where the posting was seen
        #[arg(long)]
        link: String,
        /// Contact email used by the scammer
        #[arg(long, default_value = "")]
        email: String,
        /// Contact phone used by the scammer
        #[arg(long, default_value = "")]
        phone: String,
        /// What happened
        #[arg(long, default_value = "")]
        details: String,
        /// Evidence is attached
        #[arg(long)]
        attachment: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    let stores = Stores::from_config(&config.storage);

    match cli.command {
        Commands::Assess {
            text,
            text_file,
            attachment,
            email,
            company,
            url,
            json,
            explain,
            no_save,
        } => {
            let text = match (text, text_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) if attachment.is_some() => String::new(),
                (None, None) => bail!("Provide --text, --text-file or --attachment"),
            };

            let extraction = attachment.map(|path| PlainTextExtractor.extract(&path));
            let request = AssessmentRequest {
                text,
                email,
                company,
                url,
            };

            let assessor = Assessor::from_config(&config)?;
            let record = assessor.assess_with_extraction(request, extraction).await?;

            if !no_save {
                stores.record(&record).await?;
                info!("Stored assessment {}", record.id);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&record, explain);
            }
        }
        Commands::History { limit } => {
            let history = stores.history.load().await;
            if history.is_empty() {
                println!("No assessments stored.");
                return Ok(());
            }

            let skip = limit.map_or(0, |n| history.len().saturating_sub(n));
            println!("{:<20} {:>5}  {:<6}  {}", "Timestamp", "Score", "Band", "Text");
            println!("{:-<72}", "");
            for record in &history[skip..] {
                println!(
                    "{:<20} {:>5}  {:<6}  {}",
                    record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    record.assessment.score,
                    record.assessment.band,
                    preview(&record.input.text)
                );
            }
            println!("\nTotal: {} assessment(s)", history.len());
        }
        Commands::Last => match stores.last_result.load().await {
            Some(record) => print_record(&record, false),
            None => println!("No assessment stored yet."),
        },
        Commands::Export { output } => {
            let Some(record) = stores.last_result.load().await else {
                bail!("No assessment stored yet");
            };
            let text = report::render_text(&record);
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("✓ Report written to {}", path.display());
                }
                None => println!("{}", text),
            }
        }
        Commands::Report {
            link,
            email,
            phone,
            details,
            attachment,
        } => {
            let report = ScamReport::new(NewScamReport {
                link,
                contact_email: email,
                contact_phone: phone,
                details,
                has_attachment: attachment,
            })?;
            stores.reports.append(report.clone()).await?;
            println!("✓ Report {} submitted", report.id);
        }
    }

    Ok(())
}

fn print_record(record: &AssessmentRecord, explain: bool) {
    let assessment = &record.assessment;
    println!(
        "Risk score: {}/100 ({})",
        assessment.score,
        assessment.band.label()
    );
    println!("Company status: {}", assessment.company_status);

    if let Some(note) = &record.extraction_note {
        println!("Note: {}", note);
    }

    if !assessment.signals.is_empty() {
        println!("\nRed flags:");
        for signal in &assessment.signals {
            println!("  • {}", signal);
        }
    }
    if !assessment.verifications.is_empty() {
        println!("\nVerification:");
        for note in &assessment.verifications {
            println!("  • {}", note);
        }
    }

    let spans = report::highlight(&record.input.text);
    if !spans.is_empty() {
        println!(
            "\nFlagged text:\n  {}",
            report::highlight::mark(&record.input.text, "[", "]")
        );
    }

    if explain {
        println!("\n{}", report::explain(assessment));
    }

    if portals::should_suggest(assessment.score) {
        let suggestions = portals::suggest(&record.input.text);
        println!("\nSearch for \"{}\" on trusted portals:", suggestions.query);
        for portal in &suggestions.portals {
            println!("  {:<14} {}", portal.name, portal.url);
        }
    }
}

fn preview(text: &str) -> String {
    const WIDTH: usize = 36;
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() > WIDTH {
        format!("{}...", line.chars().take(WIDTH).collect::<String>())
    } else {
        line
    }
}
