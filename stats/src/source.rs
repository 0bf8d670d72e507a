//! Read-only statistics data source

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use dexbot_dex::Pokemon;
use serde::Deserialize;
use tracing::{debug, info};

use crate::LoadError;
use crate::format::Format;
use crate::id::to_id;
use crate::usage::{MoveSetUsage, UsageRecord};

/// Lookups the query pipeline runs against.
///
/// Absence is a normal outcome and is reported as `None` / an empty list.
/// Name arguments are free text and are matched by Showdown id.
pub trait DataSource: Send + Sync {
    /// Usage record of a Pokemon within a format
    fn moveset(&self, name: &str, format: Format) -> Option<&MoveSetUsage>;

    /// Pokedex entry, independent of any format
    fn pokemon(&self, name: &str) -> Option<&Pokemon>;

    /// Raw usage of a Pokemon within a format
    fn usage(&self, name: &str, format: Format) -> Option<&UsageRecord>;

    /// All records of a format accepted by `filter`, ranked by usage (highest first)
    fn filtered_movesets(
        &self,
        format: Format,
        filter: &dyn Fn(&MoveSetUsage) -> bool,
    ) -> Vec<&MoveSetUsage>;
}

#[derive(Debug, Default)]
struct FormatStats {
    /// Ranked by usage, highest first
    movesets: Vec<MoveSetUsage>,
    by_id: HashMap<String, usize>,
    usage: HashMap<String, UsageRecord>,
}

impl FormatStats {
    fn insert_moveset(&mut self, set: MoveSetUsage) {
        let id = to_id(&set.name);
        if let Some(&existing) = self.by_id.get(&id) {
            self.movesets.remove(existing);
        }
        let pos = self.movesets.partition_point(|m| m.usage >= set.usage);
        self.movesets.insert(pos, set);
        self.reindex();
    }

    fn extend_movesets(&mut self, sets: Vec<MoveSetUsage>) {
        for set in sets {
            let id = to_id(&set.name);
            if let Some(&existing) = self.by_id.get(&id) {
                self.movesets[existing] = set;
            } else {
                self.by_id.insert(id, self.movesets.len());
                self.movesets.push(set);
            }
        }
        // stable, so ties keep file order
        self.movesets.sort_by(|a, b| b.usage.total_cmp(&a.usage));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.by_id = self
            .movesets
            .iter()
            .enumerate()
            .map(|(i, set)| (to_id(&set.name), i))
            .collect();
    }
}

/// In-memory data source, loaded once and then only read
#[derive(Debug, Default)]
pub struct MemoryDataSource {
    pokedex: HashMap<String, Pokemon>,
    formats: HashMap<Format, FormatStats>,
}

#[derive(Deserialize)]
struct StatsFile {
    formats: HashMap<String, FormatFile>,
}

#[derive(Deserialize)]
struct FormatFile {
    #[serde(default)]
    usage: Vec<UsageRecord>,
    #[serde(default)]
    movesets: Vec<MoveSetUsage>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_pokemon(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(to_id(&pokemon.name), pokemon);
    }

    /// Insert (or replace) a record, keeping the format's ranking
    pub fn insert_moveset(&mut self, format: Format, set: MoveSetUsage) {
        self.formats.entry(format).or_default().insert_moveset(set);
    }

    pub fn insert_usage(&mut self, format: Format, record: UsageRecord) {
        self.formats
            .entry(format)
            .or_default()
            .usage
            .insert(to_id(&record.name), record);
    }

    /// Formats with at least one record
    pub fn formats(&self) -> Vec<Format> {
        self.formats.keys().copied().collect()
    }

    pub fn pokedex_len(&self) -> usize {
        self.pokedex.len()
    }

    /// Load from a pokedex JSON array and a stats JSON document
    pub fn from_json(pokedex: &str, stats: &str) -> Result<Self> {
        let mut source = Self::new();

        let entries: Vec<Pokemon> =
            serde_json::from_str(pokedex).context("Failed to parse pokedex")?;
        for pokemon in entries {
            source.insert_pokemon(pokemon);
        }

        let file: StatsFile = serde_json::from_str(stats).context("Failed to parse stats")?;
        for (id, data) in file.formats {
            let format = Format::from_id(&id).ok_or(LoadError::UnknownFormat(id))?;
            debug!(
                format = %format,
                movesets = data.movesets.len(),
                usage = data.usage.len(),
                "Loaded format"
            );

            let stats = source.formats.entry(format).or_default();
            stats.extend_movesets(data.movesets);
            for record in data.usage {
                stats.usage.insert(to_id(&record.name), record);
            }
        }

        Ok(source)
    }

    /// Load both data files from disk
    pub fn load(pokedex_path: impl AsRef<Path>, stats_path: impl AsRef<Path>) -> Result<Self> {
        let pokedex_path = pokedex_path.as_ref();
        let stats_path = stats_path.as_ref();

        let pokedex = std::fs::read_to_string(pokedex_path)
            .with_context(|| format!("Failed to read {}", pokedex_path.display()))?;
        let stats = std::fs::read_to_string(stats_path)
            .with_context(|| format!("Failed to read {}", stats_path.display()))?;

        let source = Self::from_json(&pokedex, &stats)?;
        info!(
            pokemon = source.pokedex_len(),
            formats = source.formats.len(),
            "Data source loaded"
        );
        Ok(source)
    }
}

impl DataSource for MemoryDataSource {
    fn moveset(&self, name: &str, format: Format) -> Option<&MoveSetUsage> {
        let stats = self.formats.get(&format)?;
        let index = *stats.by_id.get(&to_id(name))?;
        stats.movesets.get(index)
    }

    fn pokemon(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(&to_id(name))
    }

    fn usage(&self, name: &str, format: Format) -> Option<&UsageRecord> {
        self.formats.get(&format)?.usage.get(&to_id(name))
    }

    fn filtered_movesets(
        &self,
        format: Format,
        filter: &dyn Fn(&MoveSetUsage) -> bool,
    ) -> Vec<&MoveSetUsage> {
        self.formats
            .get(&format)
            .map(|stats| stats.movesets.iter().filter(|set| filter(set)).collect())
            .unwrap_or_default()
    }
}
