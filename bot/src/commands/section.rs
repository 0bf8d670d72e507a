use anyhow::Result;
use dexbot_stats::Section;

use super::CommandEnv;
use super::moveset::{add_usage_fields, display_name, thumbnail_url, try_get_moveset};
use crate::dispatch::{Command, Context};
use crate::reply::{Embed, Reply};

/// Entries listed per section
const SECTION_LIMIT: usize = 10;

/// Lists one section (moves, items, counters, ...) of a Pokemon's moveset
pub struct SectionCommand {
    env: CommandEnv,
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    section: Section,
}

impl SectionCommand {
    pub fn new(
        env: CommandEnv,
        name: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        section: Section,
    ) -> Self {
        Self {
            env,
            name,
            aliases,
            description,
            section,
        }
    }
}

impl Command for SectionCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&'static str] {
        self.aliases
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<()> {
        let usage = self.usage();
        let Some(found) = try_get_moveset(&self.env, ctx, self.name, &usage, args)? else {
            return Ok(());
        };

        let list = found.moveset.section(self.section).top(SECTION_LIMIT);
        let embed = Embed::new()
            .color(found.color())
            .thumbnail(thumbnail_url(&found.sprite_id()));
        let embed = add_usage_fields(embed, list);

        let header = format!(
            "**__{} {}:__** {}",
            found.moveset.name,
            display_name(self.name),
            found.format
        );
        ctx.reply(Reply::with_embed(header, embed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Dispatch, Dispatcher, Registry};
    use dexbot_stats::{
        ChecksAndCountersData, Format, Generation, MemoryDataSource, MoveSetUsage, Tier,
        UsageData,
    };
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        let gen6uu = Format::new(Generation::Gen6, Tier::UU);
        let mut source = MemoryDataSource::new();
        source.insert_moveset(
            gen6uu,
            MoveSetUsage {
                moves: (0..12)
                    .map(|i| UsageData::new(format!("Move {}", i), 99.0 - i as f64))
                    .collect(),
                checks_and_counters: vec![
                    ChecksAndCountersData::new("Chandelure", 60.0, 15.5),
                    ChecksAndCountersData::new("Heatran", 55.0, 12.25),
                ],
                ..MoveSetUsage::new("Scizor", 9.0)
            },
        );

        let env = CommandEnv::new(Arc::new(source), "/");
        let mut registry = Registry::new();
        registry.register(SectionCommand::new(
            env.clone(),
            "moves",
            &["m"],
            "moves",
            Section::Moves,
        ));
        registry.register(SectionCommand::new(
            env,
            "counters",
            &["c"],
            "counters",
            Section::ChecksAndCounters,
        ));
        Dispatcher::new("/", registry)
    }

    #[test]
    fn test_moves_are_truncated_in_order() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/m scizor gen6 uu"),
            Dispatch::Executed("moves".to_string())
        );

        let reply = &replies[0];
        assert_eq!(reply.content, "**__Scizor Moves:__** Gen 6 UU");
        let embed = reply.embed.as_ref().unwrap();
        assert_eq!(embed.fields.len(), SECTION_LIMIT);
        assert_eq!(embed.fields[0].name, "Move 0");
        assert_eq!(embed.fields[0].value, "Usage: 99.00%");
        assert_eq!(embed.fields[9].name, "Move 9");
        assert_eq!(
            embed.thumbnail.as_deref(),
            Some("https://play.pokemonshowdown.com/sprites/bw/scizor.png")
        );
    }

    #[test]
    fn test_counters_render_knockout_and_switch() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        dispatcher.dispatch(&mut ctx, "/counters scizor uu gen6");

        let embed = replies[0].embed.as_ref().unwrap();
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[1].name, "Heatran");
        assert_eq!(
            embed.fields[1].value,
            "Knocked out : 55.00%\nSwitched out: 12.25%"
        );
    }

    #[test]
    fn test_not_found_in_default_format() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        dispatcher.dispatch(&mut ctx, "/moves scizor");
        assert_eq!(
            replies[0].content,
            "Could not find moveset for the provided Pokémon: 'scizor' and format: Gen 9 OU, ash!"
        );
    }
}
