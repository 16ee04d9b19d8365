//! The `masal` command line client.
//!
//! Each invocation loads the library, replays the triggers a user would
//! press in a graphical client, and prints what the view would show.

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use masal::api::{MasalApi, StorySelector};
use masal::commands::config::ConfigAction;
use masal::config::MasalConfig;
use masal::error::{MasalError, Result};
use masal::generator::StoryFileGenerator;
use masal::model::{AppState, StoryGenerationConfig};
use masal::store::fs::FileStore;
use print::{print_library, print_messages, print_story};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: MasalApi<FileStore>,
    config: MasalConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = data_dir()?;

    // config needs no store
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, data_dir)?;
    let result = ctx.api.load()?;
    print_messages(&result.messages);

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Read { selector }) => handle_read(&mut ctx, &selector),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, &selectors),
        Some(Commands::Import {
            file,
            child,
            age,
            theme,
            keywords,
        }) => {
            let config = StoryGenerationConfig {
                child_name: child,
                age,
                theme,
                keywords,
            };
            handle_import(&mut ctx, file, config)
        }
        Some(Commands::Path) => {
            println!("{}", ctx.api.store().root().display());
            Ok(())
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("masal=debug")
    } else {
        EnvFilter::try_from_env("MASAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("MASAL_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "masal", "masal")
        .ok_or_else(|| MasalError::Config("Could not determine data dir".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli, data_dir: PathBuf) -> Result<AppContext> {
    let config = MasalConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        MasalConfig::default()
    });
    let store_dir = cli
        .store
        .clone()
        .unwrap_or_else(|| config.resolved_store_dir(&data_dir));

    let store = FileStore::open(store_dir)?;
    Ok(AppContext {
        api: MasalApi::new(store),
        config,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_library(ctx.api.stories(), ctx.config.show_summary);
    Ok(())
}

fn handle_read(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let id = resolve(ctx, selector)?;
    let result = ctx.api.open_story(&id)?;
    if let Some(story) = ctx.api.active_story() {
        print_story(story);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    // resolve everything up front so indexes refer to the listing the user saw
    let mut ids = selectors
        .iter()
        .map(|s| resolve(ctx, s))
        .collect::<Result<Vec<_>>>()?;
    // `rm 1 1` or `rm 1 <id of 1>` name the same story once
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));

    for id in ids {
        let result = ctx.api.delete_story(&id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_import(
    ctx: &mut AppContext,
    file: PathBuf,
    config: StoryGenerationConfig,
) -> Result<()> {
    let generator = StoryFileGenerator::new(file);
    ctx.api.start_new()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(MasalError::Io)?;
    let result = runtime.block_on(ctx.api.generate(&generator, &config))?;

    if let Some(story) = ctx.api.active_story() {
        print_story(story);
        println!();
    }
    print_messages(&result.messages);

    if result.has_errors() && ctx.api.state() == AppState::Library {
        return Err(MasalError::Generation("no story was added".into()));
    }
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = masal::commands::config::run(data_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn resolve(ctx: &AppContext, selector: &str) -> Result<String> {
    ctx.api.resolve(&StorySelector::from(selector))
}
