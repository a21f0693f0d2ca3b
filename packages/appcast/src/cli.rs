//! Command-line interface for the appcast reader.

use std::fs;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    is_remote_source, FeedConfig, DEFAULT_MAX_RESPONSE_SIZE, PLATFORM_MARKER, SPARKLE_NAMESPACE,
    TEXT_WRAP_WIDTH,
};
use crate::download::download_appcast_xml;
use crate::error::Result;
use crate::http::create_client;
use crate::loader::{load_with_config, parse_releases};
use crate::types::ReleaseDescriptor;

/// Appcast reader - inspect Sparkle update feeds.
#[derive(Parser)]
#[command(name = "appcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the release offered to this platform.
    Check(FeedArgs),

    /// List the releases read from the feed.
    List(FeedArgs),
}

/// Arguments shared by all commands.
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Feed location: an http(s) URL or a file path
    pub source: String,

    /// Value of sparkle:os that marks releases for this platform
    #[arg(short, long, default_value = PLATFORM_MARKER)]
    pub platform: String,

    /// Namespace URI of the update attributes
    #[arg(long, default_value = SPARKLE_NAMESPACE)]
    pub namespace: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum download size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_RESPONSE_SIZE)]
    pub max_size: u64,
}

impl FeedArgs {
    fn feed_config(&self) -> FeedConfig {
        FeedConfig::default()
            .with_platform_marker(self.platform.as_str())
            .with_namespace(self.namespace.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => check_command(&args),
        Commands::List(args) => list_command(&args),
    }
}

/// Execute the check command.
fn check_command(args: &FeedArgs) -> Result<()> {
    let config = args.feed_config();
    config.validate()?;

    let xml = read_source(args)?;
    let release = load_with_config(&xml, &config)?;

    let output = match args.format {
        OutputFormat::Text => render_release(&release, &config.platform_marker),
        OutputFormat::Json => serde_json::to_string_pretty(&release)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(&release)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Execute the list command.
fn list_command(args: &FeedArgs) -> Result<()> {
    let config = args.feed_config();
    config.validate()?;

    let xml = read_source(args)?;
    let releases = parse_releases(&xml, &config)?;

    let output = match args.format {
        OutputFormat::Text => render_list(&releases, &config.platform_marker),
        OutputFormat::Json => serde_json::to_string_pretty(&releases)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(&releases)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Load the feed document from a URL or a file.
fn read_source(args: &FeedArgs) -> Result<String> {
    if !is_remote_source(&args.source) {
        return Ok(fs::read_to_string(&args.source)?);
    }

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Downloading {}...", args.source));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result =
        create_client().and_then(|client| download_appcast_xml(&client, &args.source, args.max_size));
    pb.finish_and_clear();
    result
}

/// Render one release as human-readable text.
fn render_release(release: &ReleaseDescriptor, platform_marker: &str) -> String {
    let mut lines = Vec::new();

    let title = release.title.trim();
    lines.push(format!(
        "{} {}",
        style("Title:").bold(),
        if title.is_empty() { "(untitled)" } else { title }
    ));

    let version = match (release.display_version(), release.version.as_deref()) {
        (Some(shown), Some(build)) if shown != build => format!("{shown} (build {build})"),
        (Some(shown), _) => shown.to_string(),
        (None, _) => "(unknown)".to_string(),
    };
    lines.push(format!("{} {}", style("Version:").bold(), style(version).green()));

    let platform = match release.os.as_deref() {
        Some(os) if release.targets(platform_marker) => style(os.to_string()).cyan().to_string(),
        Some(os) => style(format!("{os} (fallback)")).yellow().to_string(),
        None => "(any)".to_string(),
    };
    lines.push(format!("{} {}", style("Platform:").bold(), platform));

    let download = if release.has_download() {
        release.download_url.as_deref().unwrap_or_default()
    } else {
        "(none)"
    };
    lines.push(format!("{} {}", style("Download:").bold(), download));

    let notes = release.release_notes_url.trim();
    if !notes.is_empty() {
        lines.push(format!("{} {}", style("Release notes:").bold(), notes));
    }

    let description = release.description.trim();
    if !description.is_empty() {
        lines.push(String::new());
        let options = textwrap::Options::new(TEXT_WRAP_WIDTH)
            .initial_indent("  ")
            .subsequent_indent("  ");
        lines.push(textwrap::fill(description, options));
    }

    lines.join("\n")
}

/// Render all releases as human-readable text.
fn render_list(releases: &[ReleaseDescriptor], platform_marker: &str) -> String {
    let mut blocks = vec![format!(
        "{} release(s) read",
        style(releases.len()).bold()
    )];

    for (index, release) in releases.iter().enumerate() {
        blocks.push(format!(
            "{}\n{}",
            style(format!("[{}]", index + 1)).dim(),
            render_release(release, platform_marker)
        ));
    }

    blocks.join("\n\n")
}
