//! The bot's chat commands

mod help;
mod megas;
mod moveset;
mod pokemon;
mod section;

use std::sync::Arc;

use dexbot_stats::{DataSource, Section as UsageSection};

use crate::dispatch::Registry;

pub use help::HelpCommand;
pub use megas::{MegasCommand, is_mega_user};
pub use pokemon::PokemonCommand;
pub use section::SectionCommand;

/// What every command is built with
#[derive(Clone)]
pub struct CommandEnv {
    pub source: Arc<dyn DataSource>,
    /// Command prefix, for usage text
    pub prefix: String,
}

impl CommandEnv {
    pub fn new(source: Arc<dyn DataSource>, prefix: impl Into<String>) -> Self {
        Self {
            source,
            prefix: prefix.into(),
        }
    }
}

/// Registry with every command of the bot
pub fn registry(env: CommandEnv) -> Registry {
    let mut registry = Registry::new();

    registry.register(PokemonCommand::new(env.clone()));
    registry.register(SectionCommand::new(
        env.clone(),
        "moves",
        &["m"],
        "Lists the most used moves of a given Pokémon",
        UsageSection::Moves,
    ));
    registry.register(SectionCommand::new(
        env.clone(),
        "abilities",
        &["a"],
        "Lists the most used abilities of a given Pokémon",
        UsageSection::Abilities,
    ));
    registry.register(SectionCommand::new(
        env.clone(),
        "items",
        &["i"],
        "Lists the most used items of a given Pokémon",
        UsageSection::Items,
    ));
    registry.register(SectionCommand::new(
        env.clone(),
        "spreads",
        &["s", "evs"],
        "Lists the most used nature/EV spreads of a given Pokémon",
        UsageSection::Spreads,
    ));
    registry.register(SectionCommand::new(
        env.clone(),
        "teammates",
        &["t", "team"],
        "Lists the most common teammates of a given Pokémon",
        UsageSection::Teammates,
    ));
    registry.register(SectionCommand::new(
        env.clone(),
        "counters",
        &["c", "checks"],
        "Lists the best checks and counters of a given Pokémon",
        UsageSection::ChecksAndCounters,
    ));
    registry.register(MegasCommand::new(env.clone()));

    let help = HelpCommand::new(&env.prefix, registry.commands());
    registry.register(help);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Context, Dispatch, Dispatcher};
    use crate::reply::Reply;
    use dexbot_stats::MemoryDataSource;

    const POKEDEX: &str = include_str!("../../../data/pokedex.json");
    const STATS: &str = include_str!("../../../data/stats.json");

    fn dispatcher() -> Dispatcher {
        let source = MemoryDataSource::from_json(POKEDEX, STATS).unwrap();
        Dispatcher::new("/", registry(CommandEnv::new(Arc::new(source), "/")))
    }

    fn run(dispatcher: &Dispatcher, line: &str) -> (Dispatch, Vec<Reply>) {
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);
        let result = dispatcher.dispatch(&mut ctx, line);
        (result, replies)
    }

    #[test]
    fn test_every_alias_resolves() {
        let dispatcher = dispatcher();
        let registry = dispatcher.registry();
        for command in registry.commands() {
            let by_name = registry.get(&command.name().to_uppercase()).unwrap();
            assert!(Arc::ptr_eq(by_name, command));
            for alias in command.aliases() {
                assert!(Arc::ptr_eq(registry.get(alias).unwrap(), command));
            }
        }
    }

    #[test]
    fn test_usage_examples_against_bundled_data() {
        let dispatcher = dispatcher();

        let (_, replies) = run(&dispatcher, "/pokemon magearna");
        assert_eq!(replies[0].content, "**__Magearna:__** Gen 9 OU");

        let (_, replies) = run(&dispatcher, "/p alakazam gen6");
        assert_eq!(replies[0].content, "**__Alakazam:__** Gen 6 OU");

        let (_, replies) = run(&dispatcher, "/pkm scizor uu");
        assert_eq!(replies[0].content, "**__Scizor:__** Gen 9 UU");

        let (_, replies) = run(&dispatcher, "/mon machamp gen6 uu");
        assert_eq!(replies[0].content, "**__Machamp:__** Gen 6 UU");
    }

    #[test]
    fn test_two_word_name_against_bundled_data() {
        let dispatcher = dispatcher();
        let (result, replies) = run(&dispatcher, "/items tapu koko gen7");
        assert_eq!(result, Dispatch::Executed("items".to_string()));
        assert_eq!(replies[0].content, "**__Tapu Koko Items:__** Gen 7 OU");
    }

    #[test]
    fn test_megas_against_bundled_data() {
        let dispatcher = dispatcher();
        let (_, replies) = run(&dispatcher, "/megas gen7 ou");

        let embed = replies[0].embed.as_ref().unwrap();
        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Scizor-Mega", "Alakazam-Mega", "Gyarados-Mega"]);
    }

    #[test]
    fn test_unknown_command_is_silent() {
        let dispatcher = dispatcher();
        let (result, replies) = run(&dispatcher, "/xyz magearna");
        assert_eq!(result, Dispatch::Unknown("xyz".to_string()));
        assert!(replies.is_empty());
    }
}
