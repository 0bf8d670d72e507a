//! Command registry and fault-isolated dispatch

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::reply::{Reply, ReplySink};

/// Reply sent when a command fails unexpectedly
pub const GENERIC_FAILURE: &str = "there was an error trying to execute that command!";

/// Who invoked a command, and where its replies go
pub struct Context<'a> {
    pub author: &'a str,
    pub is_bot: bool,
    sink: &'a mut dyn ReplySink,
}

impl<'a> Context<'a> {
    pub fn new(author: &'a str, sink: &'a mut dyn ReplySink) -> Self {
        Self {
            author,
            is_bot: false,
            sink,
        }
    }

    pub fn from_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }

    pub fn reply(&mut self, reply: impl Into<Reply>) -> Result<()> {
        self.sink.send(reply.into())
    }
}

/// A chat command
pub trait Command: Send + Sync {
    /// Primary name, matched case-insensitively
    fn name(&self) -> &str;

    /// Alternative names, matched exactly as registered
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn description(&self) -> &str;

    /// Argument synopsis, without the prefix
    fn usage(&self) -> String {
        format!("{} <pokémon name> [gen] | [tier]", self.name())
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<()>;
}

/// Commands keyed by name and alias
#[derive(Default)]
pub struct Registry {
    commands: Vec<Arc<dyn Command>>,
    by_name: HashMap<String, Arc<dyn Command>>,
    by_alias: HashMap<String, Arc<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its lower-cased name and each of its aliases
    /// as written. A later registration replaces an earlier one on the same key.
    pub fn register(&mut self, command: impl Command + 'static) {
        let command: Arc<dyn Command> = Arc::new(command);

        self.by_name
            .insert(command.name().to_lowercase(), command.clone());
        for alias in command.aliases() {
            self.by_alias.insert(alias.to_string(), command.clone());
        }

        debug!(command = command.name(), aliases = ?command.aliases(), "Registered command");
        self.commands.push(command);
    }

    /// Look up a command word as typed by the user. Names win over aliases.
    pub fn get(&self, word: &str) -> Option<&Arc<dyn Command>> {
        self.by_name
            .get(&word.to_lowercase())
            .or_else(|| self.by_alias.get(word))
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[Arc<dyn Command>] {
        &self.commands
    }
}

/// What [`Dispatcher::dispatch`] did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a command: no prefix, empty, or sent by a bot
    Ignored,
    /// Prefixed, but no command has that name
    Unknown(String),
    /// The command ran to completion
    Executed(String),
    /// The command failed; the author was sent [`GENERIC_FAILURE`]
    Failed(String),
}

pub struct Dispatcher {
    prefix: String,
    registry: Registry,
}

impl Dispatcher {
    pub fn new(prefix: impl Into<String>, registry: Registry) -> Self {
        Self {
            prefix: prefix.into(),
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle one incoming chat message.
    ///
    /// Whatever the command does, including panicking, the dispatcher stays
    /// usable for the next message.
    pub fn dispatch(&self, ctx: &mut Context<'_>, message: &str) -> Dispatch {
        if ctx.is_bot {
            return Dispatch::Ignored;
        }

        let Some(rest) = message.strip_prefix(self.prefix.as_str()) else {
            return Dispatch::Ignored;
        };

        // The command word must follow the prefix directly
        let (word, rest) = rest.split_once(' ').unwrap_or((rest, ""));
        if word.is_empty() {
            return Dispatch::Ignored;
        }
        let args: Vec<&str> = rest.split_whitespace().collect();

        let Some(command) = self.registry.get(word) else {
            debug!(command = word, "Unknown command");
            return Dispatch::Unknown(word.to_lowercase());
        };
        let name = command.name().to_string();

        debug!(command = %name, author = ctx.author, ?args, "Executing command");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| command.execute(ctx, &args)));

        let failure = match outcome {
            Ok(Ok(())) => return Dispatch::Executed(name),
            Ok(Err(e)) => format!("{:#}", e),
            Err(payload) => panic_message(payload.as_ref()),
        };

        error!(
            command = %name,
            author = ctx.author,
            ?args,
            error = %failure,
            "Command failed"
        );
        if let Err(e) = ctx.reply(GENERIC_FAILURE) {
            warn!(command = %name, error = %e, "Failed to report command failure");
        }

        Dispatch::Failed(name)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Echo;

    impl Command for Echo {
        fn name(&self) -> &str {
            "pokemon"
        }

        fn aliases(&self) -> &[&'static str] {
            &["p", "pkm", "mon"]
        }

        fn description(&self) -> &str {
            "echoes its arguments"
        }

        fn execute(&self, ctx: &mut Context<'_>, args: &[&str]) -> Result<()> {
            ctx.reply(args.join(" "))
        }
    }

    struct Failing;

    impl Command for Failing {
        fn name(&self) -> &str {
            "fail"
        }

        fn description(&self) -> &str {
            "always fails"
        }

        fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> Result<()> {
            bail!("data source exploded")
        }
    }

    struct Panicking;

    impl Command for Panicking {
        fn name(&self) -> &str {
            "panic"
        }

        fn description(&self) -> &str {
            "always panics"
        }

        fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> Result<()> {
            panic!("index out of bounds")
        }
    }

    fn dispatcher() -> Dispatcher {
        let mut registry = Registry::new();
        registry.register(Echo);
        registry.register(Failing);
        registry.register(Panicking);
        Dispatcher::new("/", registry)
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let dispatcher = dispatcher();
        let registry = dispatcher.registry();

        let by_name = registry.get("POKEMON").unwrap();
        let by_alias = registry.get("p").unwrap();
        assert!(Arc::ptr_eq(by_name, by_alias));
        assert!(Arc::ptr_eq(by_name, registry.get("mon").unwrap()));
        assert!(registry.get("P").is_none());
        assert!(registry.get("MON").is_none());
        assert!(registry.get("xyz").is_none());
    }

    #[test]
    fn test_aliases_match_as_registered() {
        struct Shouty;
        impl Command for Shouty {
            fn name(&self) -> &str {
                "Shout"
            }
            fn aliases(&self) -> &[&'static str] {
                &["SH"]
            }
            fn description(&self) -> &str {
                ""
            }
            fn execute(&self, _ctx: &mut Context<'_>, _args: &[&str]) -> Result<()> {
                Ok(())
            }
        }

        let mut registry = Registry::new();
        registry.register(Shouty);
        assert!(registry.get("shout").is_some());
        assert!(registry.get("SHOUT").is_some());
        assert!(registry.get("SH").is_some());
        assert!(registry.get("sh").is_none());
        assert!(registry.get("Sh").is_none());
    }

    #[test]
    fn test_dispatch_executes() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        let result = dispatcher.dispatch(&mut ctx, "/POKEMON  magearna   gen7");
        assert_eq!(result, Dispatch::Executed("pokemon".to_string()));
        assert_eq!(replies, vec![Reply::text("magearna gen7")]);
    }

    #[test]
    fn test_dispatch_ignores_non_commands() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        assert_eq!(dispatcher.dispatch(&mut ctx, "pokemon magearna"), Dispatch::Ignored);
        assert_eq!(dispatcher.dispatch(&mut ctx, "/"), Dispatch::Ignored);
        assert_eq!(dispatcher.dispatch(&mut ctx, "/   "), Dispatch::Ignored);
        assert_eq!(dispatcher.dispatch(&mut ctx, "/ pokemon magearna"), Dispatch::Ignored);
        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/xyz magearna"),
            Dispatch::Unknown("xyz".to_string())
        );
        assert!(replies.is_empty());
    }

    #[test]
    fn test_dispatch_ignores_bots() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("otherbot", &mut replies).from_bot();

        assert_eq!(dispatcher.dispatch(&mut ctx, "/pokemon magearna"), Dispatch::Ignored);
        assert!(replies.is_empty());
    }

    #[test]
    fn test_error_is_isolated() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/fail"),
            Dispatch::Failed("fail".to_string())
        );
        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/pokemon scizor"),
            Dispatch::Executed("pokemon".to_string())
        );
        assert_eq!(
            replies,
            vec![Reply::text(GENERIC_FAILURE), Reply::text("scizor")]
        );
    }

    #[test]
    fn test_panic_is_isolated() {
        let dispatcher = dispatcher();
        let mut replies: Vec<Reply> = Vec::new();
        let mut ctx = Context::new("ash", &mut replies);

        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/panic"),
            Dispatch::Failed("panic".to_string())
        );
        assert_eq!(
            dispatcher.dispatch(&mut ctx, "/mon machamp"),
            Dispatch::Executed("pokemon".to_string())
        );
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].content, GENERIC_FAILURE);
        assert_eq!(replies[1].content, "machamp");
    }
}
