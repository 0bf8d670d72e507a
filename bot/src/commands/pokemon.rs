use anyhow::Result;
use dexbot_dex::{BaseStats, Matchups, Pokemon, Type};
use dexbot_stats::{DataSource, Format, Section};

use super::CommandEnv;
use super::moveset::{Found, animated_url, try_get_moveset, usage_lines};
use crate::dispatch::{Command, Context};
use crate::reply::{Embed, Reply};

/// Entries shown per list on the overview card
const CARD_LIMIT: usize = 6;

/// Overview card: base stats, general info, matchups and the top of every
/// usage list
pub struct PokemonCommand {
    env: CommandEnv,
}

impl PokemonCommand {
    pub fn new(env: CommandEnv) -> Self {
        Self { env }
    }
}

impl Command for PokemonCommand {
    fn name(&self) -> &str {
        "pokemon"
    }

    fn aliases(&self) -> &[&'static str] {
        &["p", "pkm", "mon"]
    }

    fn description(&self) -> &str {
        "Shows base stats, matchups and usage statistics of a given Pokémon"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<()> {
        let usage = self.usage();
        let Some(found) = try_get_moveset(&self.env, ctx, self.name(), &usage, args)? else {
            return Ok(());
        };

        let name = found
            .pokemon
            .map(|p| p.name.as_str())
            .unwrap_or(found.moveset.name.as_str());
        let header = format!("**__{}:__** {}", name, found.format);

        let embed = card(self.env.source.as_ref(), &found);
        ctx.reply(Reply::with_embed(header, embed))
    }
}

fn card(source: &dyn DataSource, found: &Found<'_>) -> Embed {
    let set = found.moveset;
    let mut embed = Embed::new()
        .color(found.color())
        .image(animated_url(&found.sprite_id()));

    if let Some(pokemon) = found.pokemon {
        embed = embed
            .field(
                format!("Base Stats Total: {}", pokemon.base_stats.total()),
                base_stats_table(&pokemon.base_stats),
                true,
            )
            .field(
                "General Info",
                general_info(source, pokemon, found.format),
                true,
            );
    }

    embed = embed.field("Abilities", usage_lines(set.section(Section::Abilities)), true);

    if let Some(pokemon) = found.pokemon {
        embed = embed.field("Weak/Resist", matchups(pokemon), true);
    }

    embed
        .field(
            "Moves",
            usage_lines(set.section(Section::Moves).top(CARD_LIMIT)),
            true,
        )
        .field(
            "Items",
            usage_lines(set.section(Section::Items).top(CARD_LIMIT)),
            true,
        )
        .field(
            Section::Spreads.as_str(),
            usage_lines(set.section(Section::Spreads).top(CARD_LIMIT)),
            true,
        )
        .field(
            Section::ChecksAndCounters.as_str(),
            usage_lines(set.section(Section::ChecksAndCounters).top(CARD_LIMIT)),
            true,
        )
}

fn base_stats_table(stats: &BaseStats) -> String {
    let [hp, atk, def, spa, spd, spe] = stats.as_array();
    format!(
        "`HP      Atk     Def`\n`{:<8}{:<8}{}`\n`Sp.Atk  Sp.Def  Spe`\n`{:<8}{:<8}{}`",
        hp, atk, def, spa, spd, spe
    )
}

fn general_info(source: &dyn DataSource, pokemon: &Pokemon, format: Format) -> String {
    let usage = source
        .usage(&pokemon.name, format)
        .map(|u| format!("{:.2}%", u.usage_raw))
        .unwrap_or_default();

    format!(
        "Tier: `{}`\nGeneration: `{}`\nType: `{}`\nUsage: `{}`",
        pokemon.tier,
        pokemon.generation,
        pokemon.types_display(),
        usage
    )
}

fn matchups(pokemon: &Pokemon) -> String {
    let profile = Matchups::of_pokemon(pokemon);

    let with_multiplier = |entries: &[(Type, f32)]| -> String {
        if entries.is_empty() {
            return "-".to_string();
        }
        entries
            .iter()
            .map(|(t, eff)| format!("{} ({}x)", t, eff))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let immune = if profile.immune.is_empty() {
        "-".to_string()
    } else {
        profile
            .immune
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "**Weak:**\n{}\n**Resist:**\n{}\n**Immune:**\n{}",
        with_multiplier(&profile.weak),
        with_multiplier(&profile.resist),
        immune
    )
}
