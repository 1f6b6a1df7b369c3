//! CLI commands.

mod read;
mod write;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use propstore_store::{SqliteStore, StoreConfig};
use tracing::debug;

use crate::output::OutputFormat;

/// propctl - Read and write typed properties in a propstore database.
#[derive(Debug, Parser)]
#[command(name = "propctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (defaults to $PROPSTORE_DB, then ./properties.db).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the value of a property.
    Get(read::GetCommand),

    /// Print the stored type of a property.
    Type(read::TypeCommand),

    /// Create or update a property.
    Set(write::SetCommand),

    /// Delete a property.
    Delete(write::DeleteCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = StoreConfig::from_env().context("Invalid store configuration")?;
        if let Some(path) = self.db {
            config.path = path;
        }

        debug!(path = %config.path.display(), "Opening property store");
        let store = SqliteStore::open_with(&config)
            .with_context(|| format!("Failed to open {}", config.path.display()))?;

        let mut ctx = CommandContext {
            store,
            format: self.format,
        };
        let mut out = io::stdout().lock();

        self.command.run(&mut ctx, &mut out)?;

        ctx.store.close().context("Failed to close property store")
    }
}

impl Commands {
    fn run(self, ctx: &mut CommandContext, out: &mut impl Write) -> Result<()> {
        match self {
            Commands::Get(cmd) => cmd.run(ctx, out),
            Commands::Type(cmd) => cmd.run(ctx, out),
            Commands::Set(cmd) => cmd.run(ctx, out),
            Commands::Delete(cmd) => cmd.run(ctx, out),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub store: SqliteStore,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    use propstore_store::{PropertyStore, Status, StoreError, TypeTag, Value};

    fn context(format: OutputFormat) -> CommandContext {
        CommandContext {
            store: SqliteStore::open_in_memory().unwrap(),
            format,
        }
    }

    fn run(ctx: &mut CommandContext, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("propctl").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        cli.command.run(ctx, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn status(err: &anyhow::Error) -> Option<Status> {
        err.downcast_ref::<StoreError>().map(StoreError::status)
    }

    #[test]
    fn test_set_then_get() {
        let mut ctx = context(OutputFormat::Text);

        run(&mut ctx, &["set", "cnt", "42", "--type", "int32"]).unwrap();
        let out = run(&mut ctx, &["get", "cnt", "--type", "int32"]).unwrap();

        assert_eq!(out, "42\n");
        assert_eq!(ctx.store.get("cnt", TypeTag::Int32).unwrap(), Value::Int32(42));
    }

    #[test]
    fn test_set_defaults_to_string() {
        let mut ctx = context(OutputFormat::Text);

        run(&mut ctx, &["set", "name", "ghost"]).unwrap();

        assert_eq!(ctx.store.type_of("name").unwrap(), TypeTag::String);
    }

    #[test]
    fn test_set_without_update_conflicts() {
        let mut ctx = context(OutputFormat::Text);
        run(&mut ctx, &["set", "flag", "true", "--type", "bool"]).unwrap();

        let err = run(&mut ctx, &["set", "flag", "false", "--type", "bool"]).unwrap_err();
        assert_eq!(status(&err), Some(Status::AlreadyExists));

        run(&mut ctx, &["set", "flag", "false", "--type", "bool", "--update"]).unwrap();
        let out = run(&mut ctx, &["get", "flag", "--type", "bool"]).unwrap();
        assert_eq!(out, "false\n");
    }

    #[test]
    fn test_invalid_value_text_is_rejected_before_write() {
        let mut ctx = context(OutputFormat::Text);

        let err = run(&mut ctx, &["set", "cnt", "forty", "--type", "int32"]).unwrap_err();

        assert_eq!(status(&err), None);
        assert!(!ctx.store.contains("cnt").unwrap());
    }

    #[test]
    fn test_get_wrong_type() {
        let mut ctx = context(OutputFormat::Text);
        run(&mut ctx, &["set", "cnt", "1", "--type", "int64"]).unwrap();

        let err = run(&mut ctx, &["get", "cnt", "--type", "double"]).unwrap_err();

        assert_eq!(status(&err), Some(Status::InvalidType));
    }

    #[test]
    fn test_type_json() {
        let mut ctx = context(OutputFormat::Json);
        run(&mut ctx, &["set", "data", "AAEC", "--type", "blob"]).unwrap();

        let out = run(&mut ctx, &["type", "data"]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!({ "key": "data", "type": "blob" }));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut ctx = context(OutputFormat::Text);
        run(&mut ctx, &["set", "k", "v"]).unwrap();

        run(&mut ctx, &["delete", "k"]).unwrap();
        run(&mut ctx, &["delete", "k"]).unwrap();

        let err = run(&mut ctx, &["type", "k"]).unwrap_err();
        assert_eq!(status(&err), Some(Status::NotFound));
    }
}
