use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;
use woodshed::api::PracticeApi;
use woodshed::commands::{CmdMessage, CmdResult, MessageLevel};
use woodshed::config::{self, TrackerConfig};
use woodshed::error::{Result, WoodshedError};
use woodshed::model::{PracticeStatus, SetRecord};
use woodshed::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PracticeApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // `config library <path>` must work before any library exists.
    if let Some(Commands::Config {
        key: Some(key),
        value: Some(value),
    }) = &cli.command
    {
        if key == "library" {
            return handle_set_library(value);
        }
    }

    let mut ctx = init_context(&cli)?;

    // Scores decay on launch, mirroring a desktop session start.
    let decayed = ctx.api.apply_launch_decay()?;
    if cli.verbose {
        print_messages(&decayed.messages);
    }

    match cli.command {
        Some(Commands::Scan) => handle_scan(&mut ctx),
        Some(Commands::List { focus }) => handle_list(&ctx, focus),
        Some(Commands::Start { id, instrument }) => {
            handle_start(&mut ctx, &id, instrument.as_deref())
        }
        Some(Commands::Pass { id }) => handle_result(ctx.api.record_success(&id)),
        Some(Commands::Fail { id }) => handle_result(ctx.api.record_fail(&id)),
        Some(Commands::Reset { id }) => handle_result(ctx.api.reset_item(&id)),
        Some(Commands::Assets { id, instrument }) => {
            handle_assets(&ctx, &id, instrument.as_deref())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "woodshed=debug" } else { "woodshed=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let library_root = config::resolve_library_root(cli.library.as_deref())?;
    let data_dir = config::data_dir(&library_root);
    let store = FileStore::new(data_dir.clone());
    let api = PracticeApi::open(store, library_root, data_dir)?;
    Ok(AppContext { api })
}

fn handle_scan(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.scan()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, focus: bool) -> Result<()> {
    let result = ctx.api.list(focus)?;
    print_sets(&result.sets, ctx.api.status());
    print_messages(&result.messages);
    Ok(())
}

fn handle_start(ctx: &mut AppContext, id: &str, instrument: Option<&str>) -> Result<()> {
    // Resolve assets first: an id that discovery doesn't know must not
    // create a status entry.
    let assets = ctx.api.resolve_assets(id, instrument)?;
    let result = ctx.api.start_session(id, instrument)?;
    print_messages(&result.messages);
    for path in &assets.asset_paths {
        println!("{}", path.display());
    }
    print_messages(&assets.messages);
    Ok(())
}

fn handle_assets(ctx: &AppContext, id: &str, instrument: Option<&str>) -> Result<()> {
    let result = ctx.api.resolve_assets(id, instrument)?;
    for path in &result.asset_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let result = match (key.as_deref(), value.as_deref()) {
        (Some("library"), None) => {
            println!("library = {}", ctx.api.library_root().display());
            return Ok(());
        }
        (Some(key), Some(value)) => ctx.api.set_config(key, value)?,
        (None, Some(_)) => {
            return Err(WoodshedError::Api(
                "config value given without a key".to_string(),
            ));
        }
        (key, None) => ctx.api.get_config(key)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_set_library(value: &str) -> Result<()> {
    let root = config::resolve_library_root(Some(std::path::Path::new(value)))?;
    let config_dir = config::user_config_dir().ok_or_else(|| {
        WoodshedError::Store("could not determine user config directory".to_string())
    })?;
    let config = TrackerConfig {
        library_root: Some(root.clone()),
    };
    config.save(&config_dir)?;
    println!("{}", format!("library = {}", root.display()).green());
    Ok(())
}

fn handle_result(result: Result<CmdResult>) -> Result<()> {
    print_messages(&result?.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 56;

fn print_sets(sets: &[SetRecord], status: &PracticeStatus) {
    if sets.is_empty() {
        println!("No sets found.");
        return;
    }

    let mut last_section: Option<&str> = None;
    for set in sets {
        if last_section != Some(set.id.section.as_str()) {
            if last_section.is_some() {
                println!();
            }
            println!("{}", set.id.section.bold());
            last_section = Some(set.id.section.as_str());
        }

        println!("  {}", set.id.folder.cyan());
        for tune in &set.tunes {
            let key = tune.id.key();
            print_status_line(4, &tune.name, status, &key);
        }

        if !set.parts.is_empty() {
            println!("    {}", "Parts".dimmed());
            for part in &set.parts {
                let key = part.id.key();
                let name = format!("[{}] {}", part.label, part.short_label);
                print_status_line(6, &name, status, &key);
            }
        }
    }
}

fn print_status_line(indent: usize, name: &str, status: &PracticeStatus, key: &str) {
    let prefix = " ".repeat(indent);
    let display = truncate_to_width(name, NAME_WIDTH.saturating_sub(indent));
    let padding = NAME_WIDTH
        .saturating_sub(indent)
        .saturating_sub(display.width());

    match status.item(key) {
        Some(item) => {
            let practiced = item
                .last_practiced
                .map(format_time_ago)
                .unwrap_or_else(|| "never practiced".to_string());
            println!(
                "{}{}{}  score {:>5.1}  streak {:>2}  {}",
                prefix,
                display,
                " ".repeat(padding),
                item.score,
                item.streak,
                practiced.dimmed()
            );
        }
        None => {
            println!(
                "{}{}{}  {}",
                prefix,
                display,
                " ".repeat(padding),
                "not tracked (run `woodshed scan`)".dimmed()
            );
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    format!(
        "practiced {}",
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}
