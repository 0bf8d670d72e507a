use anyhow::Result;
use dexbot_stats::MoveSetUsage;

use super::CommandEnv;
use super::moveset::{display_name, thumbnail_url};
use crate::dispatch::{Command, Context};
use crate::query::{TOP_USERS_LIMIT, TopUsersQuery, query_top_users};
use crate::reply::{Embed, Reply};

/// Mega-evolved holder of a Mega Stone
pub fn is_mega_user(set: &MoveSetUsage) -> bool {
    set.name.ends_with("-Mega") && set.items.iter().any(|item| item.name.ends_with("ite"))
}

/// Top Mega users of a format
pub struct MegasCommand {
    env: CommandEnv,
}

impl MegasCommand {
    pub fn new(env: CommandEnv) -> Self {
        Self { env }
    }
}

impl Command for MegasCommand {
    fn name(&self) -> &str {
        "megas"
    }

    fn aliases(&self) -> &[&'static str] {
        &["mega"]
    }

    fn description(&self) -> &str {
        "Lists the most used Mega Evolutions of a format"
    }

    fn usage(&self) -> String {
        format!("{} [gen] | [tier]", self.name())
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<()> {
        let (format, entries, representative) =
            match query_top_users(self.env.source.as_ref(), args, &is_mega_user) {
                TopUsersQuery::NotFound { format } => {
                    let text = format!(
                        "Could not find moveset for the provided data: '{}', {}!",
                        format, ctx.author
                    );
                    return ctx.reply(text);
                }
                TopUsersQuery::Found {
                    format,
                    entries,
                    representative,
                } => (format, entries, representative),
            };

        let mut embed = Embed::new();
        if let Some(pokemon) = representative {
            embed = embed
                .color(pokemon.color())
                .thumbnail(thumbnail_url(&pokemon.sprite_id()));
        }
        let embed = entries.iter().fold(embed, |embed, set| {
            embed.field(&set.name, format!("Usage: {:.2}%", set.usage), true)
        });

        let title = display_name(self.name());
        let header = format!(
            "**__{}:__** Top {} {} users of {}",
            title, TOP_USERS_LIMIT, title, format
        );
        ctx.reply(Reply::with_embed(header, embed))
    }
}
