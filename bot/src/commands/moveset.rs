//! Shared lookup and rendering for the single-Pokemon commands

use anyhow::Result;
use dexbot_stats::{Format, MoveSetUsage, Pokemon, UsageList};

use super::CommandEnv;
use crate::dispatch::Context;
use crate::query::{MovesetQuery, query_moveset};
use crate::reply::Embed;

const SPRITE_URL: &str = "https://play.pokemonshowdown.com/sprites";

/// A moveset lookup that succeeded
pub(crate) struct Found<'a> {
    pub pokemon: Option<&'a Pokemon>,
    pub moveset: &'a MoveSetUsage,
    pub format: Format,
}

impl Found<'_> {
    /// Embed color from the Pokemon's primary type, if it is in the pokedex
    pub fn color(&self) -> u32 {
        self.pokemon
            .map(|p| p.color())
            .unwrap_or(dexbot_dex::Type::Normal.color())
    }

    pub fn sprite_id(&self) -> String {
        match self.pokemon {
            Some(pokemon) => pokemon.sprite_id(),
            None => self.moveset.name.replace(' ', "").to_lowercase(),
        }
    }
}

/// Run the moveset query for `args`, replying to the author when there is
/// nothing to show. Returns `None` once such a reply has been sent.
pub(crate) fn try_get_moveset<'a>(
    env: &'a CommandEnv,
    ctx: &mut Context<'_>,
    command: &str,
    usage: &str,
    args: &[&str],
) -> Result<Option<Found<'a>>> {
    match query_moveset(env.source.as_ref(), args) {
        MovesetQuery::MissingArguments => {
            let text = missing_arguments(&env.prefix, command, usage, ctx.author);
            ctx.reply(text)?;
            Ok(None)
        }
        MovesetQuery::NotFound { name, format, .. } => {
            let text = format!(
                "Could not find moveset for the provided Pokémon: '{}' and format: {}, {}!",
                name, format, ctx.author
            );
            ctx.reply(text)?;
            Ok(None)
        }
        MovesetQuery::Found {
            pokemon,
            moveset,
            format,
        } => Ok(Some(Found {
            pokemon,
            moveset,
            format,
        })),
    }
}

pub(crate) fn missing_arguments(prefix: &str, command: &str, usage: &str, author: &str) -> String {
    let mut reply = format!("You didn't provide the Pokémon, {}!", author);
    reply.push_str(&format!("\nThe proper usage would be: `{}{}`", prefix, usage));
    reply.push_str("\neg.:");
    for example in ["magearna", "alakazam gen6", "scizor uu", "machamp gen6 uu"] {
        reply.push_str(&format!("\n{}{} {}", prefix, command, example));
    }
    reply
}

/// "moves" -> "Moves"
pub(crate) fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn thumbnail_url(sprite_id: &str) -> String {
    format!("{}/bw/{}.png", SPRITE_URL, sprite_id)
}

pub(crate) fn animated_url(sprite_id: &str) -> String {
    format!("{}/xyani/{}.gif", SPRITE_URL, sprite_id)
}

/// One field per entry
pub(crate) fn add_usage_fields(embed: Embed, list: UsageList<'_>) -> Embed {
    match list {
        UsageList::Percentage(entries) => entries.iter().fold(embed, |embed, data| {
            embed.field(&data.name, format!("Usage: {:.2}%", data.percentage), true)
        }),
        UsageList::ChecksAndCounters(entries) => entries.iter().fold(embed, |embed, data| {
            embed.field(
                &data.name,
                format!(
                    "Knocked out : {:.2}%\nSwitched out: {:.2}%",
                    data.koed, data.switched_out
                ),
                true,
            )
        }),
    }
}

/// Compact one-line-per-entry rendering, `-` when empty
pub(crate) fn usage_lines(list: UsageList<'_>) -> String {
    let lines: Vec<String> = match list {
        UsageList::Percentage(entries) => entries
            .iter()
            .map(|data| format!("{}: `{:.2}%`", data.name, data.percentage))
            .collect(),
        UsageList::ChecksAndCounters(entries) => entries
            .iter()
            .map(|data| {
                format!(
                    "`{}: KOed {:.1}% / Swed {:.1}%`",
                    data.name, data.koed, data.switched_out
                )
            })
            .collect(),
    };

    if lines.is_empty() {
        "-".to_string()
    } else {
        lines.join("\n")
    }
}
