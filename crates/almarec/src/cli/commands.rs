//! # CLI Layer
//!
//! Responsibilities:
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: layered config, stderr logger, the records API
//! 3. **Dispatch**: one handler per subcommand
//! 4. **Output**: results on stdout, errors returned to `main`

use super::render;
use super::setup::{Cli, Commands};
use crate::store::FsTransport;
use almarecords::resources::User;
use almarecords::{MergeAction, RecordsApi, RecordsConfig, Resource};
use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

struct AppContext {
    config: RecordsConfig,
    api: RecordsApi<FsTransport>,
}

impl AppContext {
    fn action(&self, flag: Option<&str>) -> Result<MergeAction> {
        match flag {
            Some(name) => name.parse().map_err(anyhow::Error::msg),
            None => Ok(self.config.default_action()?),
        }
    }

    fn print_user(&self, user: &User) {
        if self.config.pretty {
            println!("{}", user.to_wire_pretty());
        } else {
            println!("{}", user.to_wire());
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_file = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(almarecords::config::DEFAULT_CONFIG_FILE));
    let mut config = RecordsConfig::load(Some(config_file.as_path()))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    let _logger = init_logging(&config.log_level, cli.verbose)?;
    debug!("config: {:?}", config);

    let api = RecordsApi::new(FsTransport::new(&config.data_dir)).with_pretty(config.pretty);
    let ctx = AppContext { config, api };

    match cli.command {
        Commands::Show { file, raw } => handle_show(&ctx, &file, raw),
        Commands::Merge {
            stored,
            incoming,
            action,
        } => handle_merge(&ctx, &stored, &incoming, action.as_deref()),
        Commands::Get { id, field } => handle_get(&ctx, &id, field.as_deref()),
        Commands::Put { id, file, action } => handle_put(&ctx, &id, &file, action.as_deref()),
        Commands::List => handle_list(&ctx),
    }
}

fn log_spec(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(configured: &str, verbose: u8) -> Result<LoggerHandle> {
    let spec = log_spec(configured, verbose);
    Logger::try_with_str(spec)
        .with_context(|| format!("invalid log level `{spec}`"))?
        .log_to_stderr()
        .start()
        .context("failed to start logger")
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_user(path: &Path) -> Result<User> {
    let wire = read_input(path)?;
    User::from_wire(&wire).with_context(|| format!("{} is not a user document", path.display()))
}

fn handle_show(ctx: &AppContext, file: &Path, raw: bool) -> Result<()> {
    let user = read_user(file)?;
    if raw {
        ctx.print_user(&user);
    } else {
        print!("{}", render::user_summary(&user));
    }
    Ok(())
}

fn handle_merge(ctx: &AppContext, stored: &Path, incoming: &Path, action: Option<&str>) -> Result<()> {
    let action = ctx.action(action)?;
    let mut user = read_user(stored)?;
    let update = read_user(incoming)?;
    user.absorb(&update, action)?;
    ctx.print_user(&user);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str, field: Option<&str>) -> Result<()> {
    let user: User = ctx.api.fetch(id)?;
    match field {
        Some(name) => {
            let value = user.as_record().get_field(name)?;
            println!("{}", render::field_value(&value));
        }
        None => ctx.print_user(&user),
    }
    Ok(())
}

fn handle_put(ctx: &AppContext, id: &str, file: &Path, action: Option<&str>) -> Result<()> {
    let action = ctx.action(action)?;
    let incoming = read_user(file)?;

    let written = if action == MergeAction::Create || !ctx.api.exists::<User>(id)? {
        ctx.api.create_with(id, &incoming, action)?
    } else {
        ctx.api.update(id, &incoming, action)?
    };
    println!("Stored {}/{} ({})", User::SCHEMA.name, id, action);
    debug!("{}", written.to_wire());
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    for id in ctx.api.list_ids::<User>()? {
        println!("{id}");
    }
    Ok(())
}
