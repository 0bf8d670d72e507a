//! Chat command bot for Smogon usage statistics.
//!
//! A message such as `/pokemon machamp gen6 uu` travels through:
//!
//! ```text
//! Dispatcher (prefix, command word, fault isolation)
//!        │
//!        ▼
//! args::parse (Pokemon name vs. format tokens)
//!        │
//!        ▼
//! query (data source lookups → MovesetQuery / TopUsersQuery)
//!        │
//!        ▼
//! commands (render a Reply) → ReplySink
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dexbot::{CommandEnv, Context, Dispatcher, Reply, registry};
//! use dexbot_stats::MemoryDataSource;
//!
//! let source = MemoryDataSource::load("data/pokedex.json", "data/stats.json")?;
//! let dispatcher = Dispatcher::new("/", registry(CommandEnv::new(Arc::new(source), "/")));
//!
//! let mut replies: Vec<Reply> = Vec::new();
//! let mut ctx = Context::new("ash", &mut replies);
//! dispatcher.dispatch(&mut ctx, "/pokemon magearna gen7");
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod dispatch;
mod logging;
pub mod query;
pub mod reply;

pub use args::{ArgData, parse};
pub use commands::{CommandEnv, registry};
pub use config::{Config, ConfigError};
pub use dispatch::{Command, Context, Dispatch, Dispatcher, GENERIC_FAILURE, Registry};
pub use logging::init_logging;
pub use query::{MovesetQuery, TopUsersQuery, query_moveset, query_top_users};
pub use reply::{Embed, Field, Reply, ReplySink};
