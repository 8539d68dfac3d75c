//! Copydesk - terminal content-generation wizard.
//!
//! Research a topic, tune the SEO settings, generate an article and send it
//! to El Director for a technical review.

#![allow(clippy::single_match_else)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use copydesk::core::{copy_to_clipboard, preview_html, send_notification, Config, SeoSettings, Tone};
use copydesk::handoff::ReviewRequest;
use copydesk::persistence::{open_gateway, InMemoryGateway, PersistenceGateway};
use copydesk::review::{ReviewEntry, ReviewSession};
use copydesk::services::Services;
use copydesk::wizard::{Wizard, WizardSession};
use copydesk::{tui, App};

/// Terminal content-generation wizard
#[derive(Parser)]
#[command(name = "copydesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip the simulated service delays
    #[arg(long, global = true)]
    instant: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive wizard (default)
    Run,

    /// Research a topic and print the result
    Research {
        /// Topic to research (at least 10 characters)
        topic: String,

        /// GitHub repository to include (owner/name)
        #[arg(short, long)]
        repo: Option<String>,

        /// Output format (text, json, yaml)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Don't store the research session
        #[arg(long)]
        no_save: bool,
    },

    /// Research a topic and generate the article in one go
    Generate {
        /// Topic to research (at least 10 characters)
        topic: String,

        /// Main SEO keyword
        #[arg(short, long)]
        keyword: String,

        /// Secondary keywords, comma separated
        #[arg(long, default_value = "")]
        secondary: String,

        /// Meta description (max 160 characters)
        #[arg(long, default_value = "")]
        meta: String,

        /// Target length in words (300-3000)
        #[arg(short, long)]
        words: Option<u32>,

        /// Tone of voice (datapizza, formale)
        #[arg(short, long)]
        tone: Option<Tone>,

        /// GitHub repository to include (owner/name)
        #[arg(short, long)]
        repo: Option<String>,

        /// Directory to write the article file into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the article instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Render the article as HTML preview
        #[arg(long)]
        html: bool,

        /// Send the article through El Director before writing it
        #[arg(long)]
        review: bool,

        /// Copy the article to the clipboard
        #[arg(long)]
        copy: bool,

        /// Don't store the session
        #[arg(long)]
        no_save: bool,
    },

    /// Run El Director's technical review on an article file
    Review {
        /// Article file to review
        file: PathBuf,

        /// Write the revised article to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List stored research sessions
    Sessions {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let mut config = Config::load()?;
    if cli.instant {
        config.timing = copydesk::core::Timing::instant();
    }

    // Handle commands
    match cli.command {
        None | Some(Commands::Run) => {
            cmd_run(config)?;
        }
        Some(Commands::Research { topic, repo, format, no_save }) => {
            cmd_research(&config, &topic, repo.as_deref(), &format, no_save)?;
        }
        Some(Commands::Generate {
            topic,
            keyword,
            secondary,
            meta,
            words,
            tone,
            repo,
            output,
            stdout,
            html,
            review,
            copy,
            no_save,
        }) => {
            let mut seo = config.default_seo();
            seo.main_keyword = keyword;
            seo.secondary_keywords = secondary;
            seo.set_meta_description(&meta);
            if let Some(words) = words {
                seo.set_word_count(words);
            }

            let options = GenerateOptions {
                tone: tone.unwrap_or_else(|| config.default_tone()),
                seo,
                repo,
                output,
                stdout,
                html,
                review,
                copy,
                no_save,
            };
            cmd_generate(&config, &topic, options)?;
        }
        Some(Commands::Review { file, output }) => {
            cmd_review(&config, &file, output.as_deref())?;
        }
        Some(Commands::Sessions { format }) => {
            cmd_sessions(&config, &format)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Run the interactive wizard.
fn cmd_run(config: Config) -> Result<()> {
    let app = App::new(config)?;
    tui::run_tui(app)
}

/// Gateway for a one-shot command.
fn gateway(config: &Config, no_save: bool) -> Arc<dyn PersistenceGateway> {
    if no_save {
        Arc::new(InMemoryGateway::new())
    } else {
        open_gateway(config)
    }
}

fn new_session(config: &Config, no_save: bool) -> WizardSession {
    let wizard = Wizard::with_settings(config.default_tone(), config.default_seo());
    WizardSession::new(wizard, Services::mock(&config.timing), gateway(config, no_save))
        .with_review_duration(config.timing.review_duration())
}

/// Print notices raised by the wizard to stderr.
fn report_notices(session: &mut WizardSession) {
    for notice in session.wizard_mut().notices_mut().drain() {
        if notice.is_error() {
            eprintln!("✗ {}: {}", notice.title, notice.description);
        } else {
            eprintln!("✓ {}", notice.title);
        }
    }
}

/// Research a topic and print the result.
fn cmd_research(
    config: &Config,
    topic: &str,
    repo: Option<&str>,
    format: &str,
    no_save: bool,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut session = new_session(config, no_save);

    let outcome = rt.block_on(session.start_research(topic, repo));
    report_notices(&mut session);
    outcome?;

    let result = session
        .wizard()
        .research()
        .ok_or_else(|| anyhow::anyhow!("Research finished without a result"))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(result)?),
        "yaml" => print!("{}", serde_yaml::to_string(result)?),
        _ => {
            println!("{}\n", result.overview);

            println!("Punti chiave:");
            for insight in &result.key_insights {
                println!("  • {insight}");
            }

            println!("\nStatistiche:");
            for stat in &result.statistics {
                println!("  • {stat}");
            }

            println!("\nTendenze:");
            for trend in &result.trends {
                println!("  • {trend}");
            }

            println!("\nFonti:");
            for source in &result.sources {
                println!("  • {} <{}>", source.title, source.url);
            }

            if let Some(github) = &result.github_data {
                println!("\nGitHub: {} (★ {}, aggiornato {})", github.repo, github.stars, github.last_update);
                for issue in &github.issues {
                    println!("  issue: {} <{}>", issue.title, issue.url);
                }
                for pr in &github.pull_requests {
                    println!("  pr:    {} <{}>", pr.title, pr.url);
                }
            }

            if let Some(id) = session.wizard().session_id() {
                println!("\nSessione: {id}");
            }
        }
    }

    Ok(())
}

/// Options of the `generate` subcommand.
struct GenerateOptions {
    tone: Tone,
    seo: SeoSettings,
    repo: Option<String>,
    output: Option<PathBuf>,
    stdout: bool,
    html: bool,
    review: bool,
    copy: bool,
    no_save: bool,
}

/// Research, generate and optionally review an article.
fn cmd_generate(config: &Config, topic: &str, options: GenerateOptions) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut session = new_session(config, options.no_save);

    let outcome = rt.block_on(async {
        session.start_research(topic, options.repo.as_deref()).await?;
        session.generate_article(options.tone, options.seo.clone()).await?;
        Ok::<_, anyhow::Error>(())
    });
    report_notices(&mut session);
    outcome?;

    if options.review {
        let round = rt.block_on(session.review(|_| {}))?;
        report_notices(&mut session);
        eprintln!("\n{}\n", round.analysis);
    }

    if config.general.desktop_notifications {
        send_notification("Articolo generato", &options.seo.main_keyword);
    }

    let article = session
        .wizard()
        .article()
        .ok_or_else(|| anyhow::anyhow!("Generation finished without an article"))?
        .to_string();

    if options.copy {
        let command = config.export.clipboard_command.as_deref();
        let copied = session.wizard_mut().copy_article(|text| copy_to_clipboard(text, command));
        report_notices(&mut session);
        copied?;
    }

    if options.stdout {
        if options.html {
            println!("{}", preview_html(&article));
        } else {
            println!("{article}");
        }
        return Ok(());
    }

    let dir = options.output.unwrap_or_else(|| config.download_dir());
    let path = session.wizard_mut().download_article(&dir);
    report_notices(&mut session);
    println!("{}", path?.display());

    Ok(())
}

/// Review an article file.
fn cmd_review(config: &Config, file: &Path, output: Option<&Path>) -> Result<()> {
    let article = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;

    let ReviewEntry::Ready(mut session) =
        ReviewSession::enter(Some(ReviewRequest::new(article)), config.timing.review_duration())
    else {
        anyhow::bail!("{} is empty, nothing to review", file.display());
    };

    let services = Services::mock(&config.timing);
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(session.run_analysis(services.review.as_ref()))?;

    println!("{}", session.analysis().unwrap_or_default());

    session.begin_edit()?;
    let handoff = session.commit_edit()?;

    match output {
        Some(path) => {
            std::fs::write(path, &handoff.modified_article)?;
            eprintln!("✓ Revisione salvata in {}", path.display());
        }
        None => {
            println!("\n---\n");
            println!("{}", handoff.modified_article);
        }
    }

    Ok(())
}

/// List stored research sessions.
fn cmd_sessions(config: &Config, format: &str) -> Result<()> {
    let gateway = open_gateway(config);
    let rt = tokio::runtime::Runtime::new()?;
    let sessions = rt.block_on(gateway.list_sessions())?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&sessions)?),
        _ => {
            for record in &sessions {
                let repo = record.github_repo.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  {:>2} insights  {}",
                    record.id,
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.key_insights.len(),
                    repo
                );
            }
            println!("\nTotal: {} sessions", sessions.len());
        }
    }

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "copydesk", &mut io::stdout());
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        match Config::resolve_path() {
            Some(path) => println!("{}", path.display()),
            None => {
                if let Some(dir) = Config::config_dir() {
                    println!("{} (not found, using defaults)", dir.join("config.toml").display());
                }
            }
        }
        return Ok(());
    }

    let config = Config::load()?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}
