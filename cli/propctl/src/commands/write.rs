//! Write commands (set, delete).

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use propstore_store::{PropertyStore, TypeTag, Value};

use crate::output::write_success;

use super::CommandContext;

/// Create or update a property.
#[derive(Debug, Args)]
pub struct SetCommand {
    /// Property key.
    key: String,

    /// Value text. Blobs are given as base64.
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Type to store the value as.
    #[arg(long = "type", short = 't', default_value = "string")]
    type_tag: TypeTag,

    /// Overwrite an existing value of the same type.
    #[arg(long)]
    update: bool,
}

impl SetCommand {
    pub fn run(self, ctx: &mut CommandContext, out: &mut impl Write) -> Result<()> {
        let value = Value::parse(self.type_tag, &self.value)
            .with_context(|| format!("Invalid value for --type {}", self.type_tag))?;

        ctx.store.set(&self.key, &value, self.update)?;

        write_success(
            out,
            ctx.format,
            &format!("Set {} ({})", self.key, self.type_tag),
        )?;
        Ok(())
    }
}

/// Delete a property.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Property key.
    key: String,
}

impl DeleteCommand {
    pub fn run(self, ctx: &mut CommandContext, out: &mut impl Write) -> Result<()> {
        ctx.store.delete(&self.key)?;

        write_success(out, ctx.format, &format!("Deleted {}", self.key))?;
        Ok(())
    }
}
