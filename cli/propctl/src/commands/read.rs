//! Read commands (get, type).

use std::io::Write;

use anyhow::Result;
use clap::Args;
use propstore_store::{PropertyStore, TypeTag};

use crate::output::{value_json, write_property, PropertyView};

use super::CommandContext;

/// Print the value of a property.
#[derive(Debug, Args)]
pub struct GetCommand {
    /// Property key.
    key: String,

    /// Type the property is expected to be stored as.
    #[arg(long = "type", short = 't')]
    type_tag: TypeTag,
}

impl GetCommand {
    pub fn run(self, ctx: &mut CommandContext, out: &mut impl Write) -> Result<()> {
        let value = ctx.store.get(&self.key, self.type_tag)?;

        let view = PropertyView {
            key: &self.key,
            type_tag: self.type_tag,
            value: Some(value_json(&value)),
        };
        write_property(out, &view, ctx.format, &value.to_string())?;

        Ok(())
    }
}

/// Print the stored type of a property.
#[derive(Debug, Args)]
pub struct TypeCommand {
    /// Property key.
    key: String,
}

impl TypeCommand {
    pub fn run(self, ctx: &mut CommandContext, out: &mut impl Write) -> Result<()> {
        let type_tag = ctx.store.type_of(&self.key)?;

        let view = PropertyView {
            key: &self.key,
            type_tag,
            value: None,
        };
        write_property(out, &view, ctx.format, type_tag.as_str())?;

        Ok(())
    }
}
