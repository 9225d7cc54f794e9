use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::assistant::{AssistantGateway, SiteContext};
use crate::catalog::{LoadedProfile, ProfileSource, load_profile};
use crate::chat::ChatSession;
use crate::detail::{DetailTab, DetailView, Explanation};
use crate::filters::{ALL_TAG, filter_projects};
use crate::models::ProjectId;
use crate::utils::{AssistantConfig, format_path_with_tilde, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "portfolio-explorer")]
#[command(version)]
#[command(about = "Browse a developer portfolio and ask its AI assistant", long_about = None)]
pub struct Cli {
    /// Profile JSON to load instead of the per-user or built-in profile
    #[arg(long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio
    Browse,
    /// List projects, optionally filtered
    Projects {
        /// Case-insensitive text matched against title, description and technologies
        #[arg(short, long, default_value = "")]
        search: String,
        /// Technology tag; "All" disables tag filtering
        #[arg(short, long, default_value = ALL_TAG)]
        tag: String,
    },
    /// List every technology tag
    Tags,
    /// Ask the site assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Ask the assistant to explain one project
    Explain {
        /// Project id as shown by `projects`
        id: ProjectId,
    },
    /// Show statistics about the loaded profile
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let loaded = load_profile(cli.profile.as_deref())?;
    let config = AssistantConfig::from_env();

    match command {
        Commands::Browse => {
            let runtime = build_runtime()?;
            let gateway = AssistantGateway::from_config(&config);
            crate::tui::run_interactive(loaded, gateway, runtime.handle().clone())?;
        }
        Commands::Projects { search, tag } => list_projects(&loaded, search, tag),
        Commands::Tags => list_tags(&loaded),
        Commands::Ask { question } => {
            let runtime = build_runtime()?;
            let gateway = AssistantGateway::from_config(&config);
            ask(&runtime, &loaded, gateway, &question.join(" "))?;
        }
        Commands::Explain { id } => {
            let runtime = build_runtime()?;
            let gateway = AssistantGateway::from_config(&config);
            explain(&runtime, &loaded, gateway, *id)?;
        }
        Commands::Stats => show_stats(&loaded, &config),
    }

    Ok(())
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn list_projects(loaded: &LoadedProfile, search: &str, tag: &str) {
    let projects = filter_projects(loaded.catalog.projects(), search, tag);

    if projects.is_empty() {
        println!("No projects found matching your criteria.");
        return;
    }

    for project in projects {
        println!(
            "{:>3}  {}  [{}]",
            project.id,
            sanitize_for_terminal(&project.title),
            sanitize_for_terminal(&project.technologies.join(", "))
        );
    }
}

fn list_tags(loaded: &LoadedProfile) {
    for tag in loaded.catalog.tags() {
        println!("{}", sanitize_for_terminal(&tag));
    }
}

fn ask(
    runtime: &Runtime,
    loaded: &LoadedProfile,
    gateway: AssistantGateway,
    question: &str,
) -> Result<()> {
    let context = Arc::new(SiteContext::from_profile(&loaded.profile));
    let mut session = ChatSession::new(gateway, context, runtime.handle().clone());

    if !session.submit(question) {
        bail!("Question must not be empty");
    }
    if !runtime.block_on(session.wait_for_reply()) {
        bail!("Assistant reply was lost");
    }

    let reply = session
        .turns()
        .last()
        .filter(|turn| !turn.is_user())
        .map(|turn| turn.text.as_str())
        .context("Assistant reply was lost")?;
    println!("{}", sanitize_for_terminal(reply));
    Ok(())
}

fn explain(
    runtime: &Runtime,
    loaded: &LoadedProfile,
    gateway: AssistantGateway,
    id: ProjectId,
) -> Result<()> {
    let Some(mut view) = DetailView::open(&loaded.catalog, id, gateway, runtime.handle().clone())
    else {
        bail!("No project with id {}", id);
    };

    view.select_tab(DetailTab::Explainer);
    if !runtime.block_on(view.wait_for_explanation()) {
        bail!("Assistant reply was lost");
    }

    match view.explanation() {
        Explanation::Ready(text) => {
            println!("{}", sanitize_for_terminal(&view.project().title));
            println!();
            println!("{}", sanitize_for_terminal(text));
            Ok(())
        }
        _ => bail!("Assistant reply was lost"),
    }
}

fn show_stats(loaded: &LoadedProfile, config: &AssistantConfig) {
    let profile = &loaded.profile;
    let skills: usize = profile.skills.iter().map(|category| category.skills.len()).sum();
    // First tag is the "All" pseudo-tag
    let tags = loaded.catalog.tags().len().saturating_sub(1);

    println!("Portfolio Statistics");
    println!("====================");
    println!("Owner: {}", sanitize_for_terminal(&profile.name));
    println!("Profile version: {}", profile.version);
    match &loaded.source {
        ProfileSource::File(path) => println!("Source: {}", format_path_with_tilde(path)),
        ProfileSource::Builtin => println!("Source: built-in"),
    }
    println!();
    println!("Projects: {}", loaded.catalog.len());
    println!("  Technology tags: {}", tags);
    println!("Skill categories: {}", profile.skills.len());
    println!("  Skills: {}", skills);
    println!("Experience entries: {}", profile.experience.len());
    println!("Testimonials: {}", profile.testimonials.len());
    println!();
    if config.api_key.is_some() {
        println!("Assistant: configured ({})", config.model);
    } else {
        println!("Assistant: not configured");
    }
}
