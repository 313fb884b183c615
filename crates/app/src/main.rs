use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{DEFAULT_BASE_URL, DEFAULT_DOCUMENT_PATH};
use services::{
    FileProblemsSource, HttpProblemsSource, ProblemsLoader, ProblemsSource, SourceConfig,
    SourceConfigError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(about = "Browse a categorized problem roadmap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Open the roadmap window (default).
    Ui,
    /// Fetch the document once, print a summary and exit.
    Check,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Server the document is fetched from.
    #[arg(long, global = true, env = "ROADMAP_BASE_URL")]
    base_url: Option<String>,

    /// Path of the document, resolved against the base URL.
    #[arg(long, global = true, env = "ROADMAP_DOCUMENT_PATH")]
    document_path: Option<String>,

    /// Read the document from a local file instead of over HTTP. Takes
    /// precedence over the base URL and document path.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Page and window title.
    #[arg(long, global = true, env = "ROADMAP_TITLE")]
    title: Option<String>,
}

impl SourceArgs {
    fn build_source(&self) -> Result<Arc<dyn ProblemsSource>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.file {
            return Ok(Arc::new(FileProblemsSource::new(path)));
        }
        let config = self.source_config()?;
        Ok(Arc::new(HttpProblemsSource::new(&config)))
    }

    /// clap has already picked the flag over the environment; blank or
    /// missing values fall back to the defaults here.
    fn source_config(&self) -> Result<SourceConfig, SourceConfigError> {
        SourceConfig::new(
            non_blank(self.base_url.as_deref()).unwrap_or(DEFAULT_BASE_URL),
            non_blank(self.document_path.as_deref()).unwrap_or(DEFAULT_DOCUMENT_PATH),
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

struct DesktopApp {
    title: Option<String>,
    problems_source: Arc<dyn ProblemsSource>,
}

impl UiApp for DesktopApp {
    fn problems_source(&self) -> Arc<dyn ProblemsSource> {
        Arc::clone(&self.problems_source)
    }

    fn page_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| ui::context::DEFAULT_PAGE_TITLE.to_string())
    }

    fn link_opener(&self) -> Option<LinkOpenerRef> {
        Some(Arc::new(DesktopLinkOpener))
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn launch_ui(args: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let problems_source = args.build_source()?;
    tracing::info!(source = %problems_source.describe(), "launching roadmap window");

    let app = DesktopApp {
        title: args.title.clone(),
        problems_source,
    };
    let window_title = app.page_title();
    let context = build_app_context(Arc::new(app));

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window_title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn check(args: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = args.build_source()?;
    let location = source.describe();
    let loader = ProblemsLoader::new(source);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let document = runtime.block_on(loader.load())?;

    println!("{location}: {} categories", document.categories.len());
    for category in document.sorted_categories() {
        println!(
            "  [{order:>3}] {name} ({count} problems)",
            order = category.sort_key(),
            name = category.name,
            count = category.total_problems(),
        );
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => launch_ui(&cli.source),
        Command::Check => check(&cli.source),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
