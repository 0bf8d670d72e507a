//! Resolving parsed arguments against the data source

use dexbot_stats::{DataSource, Format, MoveSetUsage, Pokemon};
use tracing::debug;

use crate::args::{self, ArgData};

/// Number of entries kept by [`query_top_users`]
pub const TOP_USERS_LIMIT: usize = 10;

/// Outcome of a single-Pokemon moveset query
#[derive(Debug, Clone, PartialEq)]
pub enum MovesetQuery<'a> {
    /// No arguments were given; the caller should show usage help
    MissingArguments,

    /// Well-formed query with no moveset for this name and format.
    /// `format` is the resolved format, not what the user typed.
    NotFound {
        name: String,
        pokemon: Option<&'a Pokemon>,
        format: Format,
    },

    Found {
        pokemon: Option<&'a Pokemon>,
        moveset: &'a MoveSetUsage,
        format: Format,
    },
}

impl MovesetQuery<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, MovesetQuery::Found { .. })
    }
}

/// Outcome of a ranked, filtered query over a whole format
#[derive(Debug, Clone, PartialEq)]
pub enum TopUsersQuery<'a> {
    NotFound {
        format: Format,
    },

    Found {
        format: Format,
        /// At most [`TOP_USERS_LIMIT`] entries, in the source's ranking
        entries: Vec<&'a MoveSetUsage>,
        /// Pokedex entry of the top-ranked Pokemon, for display
        representative: Option<&'a Pokemon>,
    },
}

/// Parse `tokens` and look up the moveset they name
pub fn query_moveset<'a, S: AsRef<str>>(source: &'a dyn DataSource, tokens: &[S]) -> MovesetQuery<'a> {
    resolve_moveset(source, args::parse(tokens))
}

/// Look up the moveset for already parsed arguments
pub fn resolve_moveset(source: &dyn DataSource, args: ArgData) -> MovesetQuery<'_> {
    if !args.valid {
        return MovesetQuery::MissingArguments;
    }

    let ArgData {
        pokemon: name,
        format,
        ..
    } = args;

    // The pokedex entry does not depend on the format having usage data
    let pokemon = source.pokemon(&name);

    match source.moveset(&name, format) {
        Some(moveset) => {
            debug!(pokemon = %name, format = %format, "Moveset found");
            MovesetQuery::Found {
                pokemon,
                moveset,
                format,
            }
        }
        None => {
            debug!(pokemon = %name, format = %format, "No moveset");
            MovesetQuery::NotFound {
                name,
                pokemon,
                format,
            }
        }
    }
}

/// Rank the movesets of the format named by `tokens` that pass `filter`,
/// keeping the first [`TOP_USERS_LIMIT`].
pub fn query_top_users<'a, S: AsRef<str>>(
    source: &'a dyn DataSource,
    tokens: &[S],
    filter: &dyn Fn(&MoveSetUsage) -> bool,
) -> TopUsersQuery<'a> {
    let format = Format::resolve(tokens);
    let mut entries = source.filtered_movesets(format, filter);

    if entries.is_empty() {
        debug!(format = %format, "No movesets passed the filter");
        return TopUsersQuery::NotFound { format };
    }

    entries.truncate(TOP_USERS_LIMIT);
    let representative = source.pokemon(&entries[0].name);

    TopUsersQuery::Found {
        format,
        entries,
        representative,
    }
}
