use std::sync::Arc;

use anyhow::Result;

use crate::dispatch::{Command, Context};
use crate::reply::{Embed, Reply};

/// Lists the commands registered before it
pub struct HelpCommand {
    fields: Vec<(String, String)>,
}

impl HelpCommand {
    pub fn new(prefix: &str, commands: &[Arc<dyn Command>]) -> Self {
        let fields = commands
            .iter()
            .map(|command| {
                let mut value = format!("{}\n`{}{}`", command.description(), prefix, command.usage());
                if !command.aliases().is_empty() {
                    value.push_str(&format!("\nAliases: {}", command.aliases().join(", ")));
                }
                (command.name().to_string(), value)
            })
            .collect();

        Self { fields }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&'static str] {
        &["h", "commands"]
    }

    fn description(&self) -> &str {
        "Lists the available commands"
    }

    fn usage(&self) -> String {
        self.name().to_string()
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[&str]) -> Result<()> {
        let embed = self
            .fields
            .iter()
            .fold(Embed::new(), |embed, (name, value)| {
                embed.field(name, value, false)
            });
        ctx.reply(Reply::with_embed("**__Commands:__**", embed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandEnv, registry};
    use crate::dispatch::Dispatcher;
    use dexbot_stats::MemoryDataSource;

    #[test]
    fn test_help_lists_commands() {
        let env = CommandEnv::new(Arc::new(MemoryDataSource::new()), "!");
        let dispatcher = Dispatcher::new("!", registry(env));
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        dispatcher.dispatch(&mut ctx, "!help");

        let embed = replies[0].embed.as_ref().unwrap();
        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "pokemon",
                "moves",
                "abilities",
                "items",
                "spreads",
                "teammates",
                "counters",
                "megas"
            ]
        );
        assert!(embed.fields[0].value.contains("`!pokemon <pokémon name> [gen] | [tier]`"));
        assert!(embed.fields[0].value.ends_with("Aliases: p, pkm, mon"));
        assert!(embed.fields[7].value.contains("`!megas [gen] | [tier]`"));
    }
}
