use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use pagemenu::config::{MenuConfig, CONFIG_FILENAME};
use pagemenu::error::Result;
use pagemenu::list::PaginatedList;
use pagemenu::options::ListOptions;
use pagemenu::render::PlainText;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PROJECT_CONFIG_DIR: &str = ".pagemenu";

struct ShowArgs {
    file: Option<PathBuf>,
    page: usize,
    per_page: Option<usize>,
    topic: Option<String>,
    command_name: Option<String>,
    strict: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config.as_deref());
    debug!(config_dir = %config_dir.display(), "using config directory");

    match cli.command {
        Commands::Show {
            file,
            page,
            per_page,
            topic,
            command_name,
            strict,
        } => handle_show(
            &config_dir,
            ShowArgs {
                file,
                page,
                per_page,
                topic,
                command_name,
                strict,
            },
        ),
        Commands::Config { init } => handle_config(&config_dir, init),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--config` wins, then a project-local `.pagemenu/`, then the per-user config dir.
fn resolve_config_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(PROJECT_CONFIG_DIR);
    if project_dir.join(CONFIG_FILENAME).exists() {
        return project_dir;
    }

    ProjectDirs::from("com", "pagemenu", "pagemenu")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(project_dir)
}

fn handle_show(config_dir: &Path, args: ShowArgs) -> Result<()> {
    let options = build_options(config_dir, &args)?;
    let items = read_items(args.file.as_deref())?;
    let list = PaginatedList::with_options(&items, &options);

    // An empty list has no page to be strict about.
    let page = if args.strict && list.total_pages() > 0 {
        Some(list.render_page(args.page, &PlainText)?)
    } else {
        list.render_nearest_valid_page(args.page, &PlainText)
    };

    match page {
        Some(page) => println!("{}", page),
        None => println!("{}", "No items.".dimmed()),
    }
    Ok(())
}

fn build_options(config_dir: &Path, args: &ShowArgs) -> Result<ListOptions> {
    let mut config = MenuConfig::load(config_dir)?;
    if let Some(per_page) = args.per_page {
        config.items_per_page = per_page;
    }
    if let Some(topic) = &args.topic {
        config.topic = topic.clone();
    }
    if let Some(command_name) = &args.command_name {
        config.command = command_name.clone();
    }
    config.to_options()
}

/// One item per non-blank line, from `file` or stdin.
fn read_items(file: Option<&Path>) -> Result<Vec<String>> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn handle_config(config_dir: &Path, init: bool) -> Result<()> {
    if init {
        let path = config_dir.join(CONFIG_FILENAME);
        if path.exists() {
            println!(
                "{}",
                format!("Config already exists at {}", path.display()).yellow()
            );
            return Ok(());
        }
        MenuConfig::default().save(config_dir)?;
        println!("{}", format!("Wrote {}", path.display()).green());
        return Ok(());
    }

    let config = MenuConfig::load(config_dir)?;
    // Reject values the renderer would refuse before printing them back.
    config.to_options()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_items_skips_blank_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("items.txt");
        std::fs::write(&path, "one\n\n  \ntwo\nthree\n").unwrap();
        assert_eq!(read_items(Some(path.as_path())).unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_items_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = read_items(Some(temp_dir.path().join("nope.txt").as_path())).unwrap_err();
        assert!(matches!(err, pagemenu::PaginationError::Io(_)));
    }

    #[test]
    fn test_explicit_config_dir_wins() {
        let dir = PathBuf::from("/some/where");
        assert_eq!(resolve_config_dir(Some(dir.as_path())), dir);
    }

    #[test]
    fn test_build_options_applies_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ShowArgs {
            file: None,
            page: 1,
            per_page: Some(3),
            topic: Some("Homes".to_string()),
            command_name: Some("home".to_string()),
            strict: false,
        };
        let options = build_options(temp_dir.path(), &args).unwrap();
        assert_eq!(options.items_per_page().get(), 3);
        assert_eq!(options.topic_template(), "Homes");
        assert_eq!(options.command_name(), "home");
    }

    #[test]
    fn test_build_options_rejects_zero_per_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ShowArgs {
            file: None,
            page: 1,
            per_page: Some(0),
            topic: None,
            command_name: None,
            strict: false,
        };
        assert!(build_options(temp_dir.path(), &args).is_err());
    }
}
