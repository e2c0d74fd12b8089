use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use aura_core::{Config, ConfigError, Dispatcher, ModelMap, ResultKind, ToolName, ToolRegistry, ToolResult};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "aura", version, about = "Aura AI Studio: writing and image tools from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Launch the interactive studio (default)
    Studio,
    /// Run one tool on the given text and print the result
    Run(RunArgs),
    /// List the available tools
    Tools,
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Tool name, e.g. "grammar", "ai-chat" or "Image Gen"
    #[arg(long, short = 't')]
    tool: String,

    /// Save the generated image here (image tool only)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Model for fast-tier tools
    #[arg(long)]
    fast_model: Option<String>,

    /// Model for capable-tier tools
    #[arg(long)]
    capable_model: Option<String>,

    /// Input text; read from stdin when omitted or "-"
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing - only log warnings, to stderr
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    // Optional: load .env (ignore errors if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    execute(cli.command.unwrap_or(Command::Studio), Config::from_env).await
}

/// Run a subcommand; configuration is only loaded by the ones that use it
async fn execute<F>(command: Command, load_config: F) -> Result<ExitCode>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    match command {
        Command::Studio => {
            aura_tui::run_studio(load_config()?).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run(args) => run(load_config()?, args).await,
        Command::Tools => {
            print!("{}", tool_listing(&ToolRegistry::new()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run(config: Config, args: RunArgs) -> Result<ExitCode> {
    let tool: ToolName = args.tool.parse().map_err(|err: aura_core::DispatchError| anyhow::anyhow!(err.user_message()))?;
    if args.output.is_some() && tool != ToolName::ImageGen {
        bail!("--output only applies to {}", ToolName::ImageGen);
    }

    let text = read_input(&args.text)?;
    let models = override_models(&config.models, args.fast_model, args.capable_model);
    let dispatcher = Dispatcher::from_config(&config)?.with_models(models);

    info!(tool = %tool, "running headless");
    let result = dispatcher.run(tool, &text, config.credential.as_ref()).await;

    if let (Some(path), ResultKind::ImageUrl) = (&args.output, result.kind) {
        fetch(&result.payload, path, config.request_timeout).await?;
        eprintln!("Saved image to {}", path.display());
    }

    print_result(&result);
    Ok(if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Join positional words, or read stdin when none (or "-") are given
fn read_input(words: &[String]) -> Result<String> {
    if words.is_empty() || (words.len() == 1 && words[0] == "-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read input from stdin")?;
        return Ok(buf);
    }
    Ok(words.join(" "))
}

fn override_models(base: &ModelMap, fast: Option<String>, capable: Option<String>) -> ModelMap {
    ModelMap {
        fast: fast.unwrap_or_else(|| base.fast.clone()),
        capable: capable.unwrap_or_else(|| base.capable.clone()),
    }
}

fn print_result(result: &ToolResult) {
    match result.kind {
        ResultKind::Text | ResultKind::ImageUrl => {
            println!("{}", result.payload);
            if let Some(caption) = result.caption() {
                println!("{}", caption);
            }
        }
        ResultKind::Warning | ResultKind::Error => eprintln!("{}", result.payload),
    }
}

fn tool_listing(registry: &ToolRegistry) -> String {
    let mut out = String::new();
    for definition in registry.get_all() {
        out.push_str(&format!(
            "{} {:<14} {:?}/{:?}  {}\n",
            definition.icon,
            definition.name.display_name(),
            definition.model_tier,
            definition.output_kind,
            definition.description
        ));
    }
    out
}

/// Download a generated image to `path`
async fn fetch(url: &str, path: &Path, timeout: std::time::Duration) -> Result<()> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to request {}", url))?
        .error_for_status()
        .context("image service returned an error")?;
    let bytes = response.bytes().await.context("failed to read image body")?;
    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_parse() {
        let cli = Cli::try_parse_from(["aura", "run", "--tool", "grammar", "fix", "this"]).unwrap();
        match cli.command {
            Some(Command::Run(args)) => {
                assert_eq!(args.tool, "grammar");
                assert_eq!(args.text, vec!["fix", "this"]);
                assert!(args.output.is_none());
            }
            other => panic!("Expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_studio() {
        let cli = Cli::try_parse_from(["aura"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_model_overrides() {
        let base = ModelMap::default();
        let models = override_models(&base, None, Some("custom-pro".to_string()));
        assert_eq!(models.fast, base.fast);
        assert_eq!(models.capable, "custom-pro");
    }

    #[test]
    fn test_listing_covers_every_tool() {
        let listing = tool_listing(&ToolRegistry::new());
        assert_eq!(listing.lines().count(), ToolName::ALL.len());
        for tool in ToolName::ALL {
            assert!(listing.contains(tool.display_name()));
        }
    }

    #[tokio::test]
    async fn test_tools_listing_ignores_bad_config() {
        let load = || Config::from_lookup(|name| (name == "AURA_REQUEST_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(load().is_err());

        let code = execute(Command::Tools, load).await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_run_reports_bad_config() {
        let cli = Cli::try_parse_from(["aura", "run", "--tool", "grammar", "text"]).unwrap();
        let command = cli.command.unwrap();
        let load = || Config::from_lookup(|name| (name == "AURA_REQUEST_TIMEOUT_SECS").then(|| "0".to_string()));

        assert!(execute(command, load).await.is_err());
    }

    #[test]
    fn test_positional_words_are_joined() {
        let words = vec!["a".to_string(), "red".to_string(), "fox".to_string()];
        assert_eq!(read_input(&words).unwrap(), "a red fox");
    }
}
