//! Splitting command arguments into a Pokemon name and a format

use dexbot_stats::{Format, is_format_token};

/// Result of parsing the arguments of a moveset command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgData {
    /// False when no arguments were given at all
    pub valid: bool,
    pub pokemon: String,
    pub format: Format,
}

impl ArgData {
    fn missing() -> Self {
        Self {
            valid: false,
            pokemon: String::new(),
            format: Format::default(),
        }
    }
}

/// Parse `<name-1-or-2-words> [gen] [tier]`.
///
/// The second token decides the split: if it is a generation or a tier it
/// starts the format, otherwise it is the second word of the name. The
/// decision is never revisited, so names of three or more words, or
/// two-word names whose second word is itself a format token, cannot be
/// expressed.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ArgData {
    match tokens {
        [] => ArgData::missing(),
        [name] => ArgData {
            valid: true,
            pokemon: name.as_ref().to_string(),
            format: Format::default(),
        },
        [first, second, rest @ ..] => {
            if is_format_token(second.as_ref()) {
                ArgData {
                    valid: true,
                    pokemon: first.as_ref().to_string(),
                    format: Format::resolve(&tokens[1..]),
                }
            } else {
                ArgData {
                    valid: true,
                    pokemon: format!("{} {}", first.as_ref(), second.as_ref()),
                    format: Format::resolve(rest),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexbot_stats::{DEFAULT_FORMAT, Generation, Tier};

    #[test]
    fn test_no_tokens_is_invalid() {
        let empty: [&str; 0] = [];
        assert!(!parse(&empty).valid);
    }

    #[test]
    fn test_single_token_is_the_name() {
        let args = parse(&["magearna"]);
        assert!(args.valid);
        assert_eq!(args.pokemon, "magearna");
        assert_eq!(args.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_single_token_that_looks_like_a_format_is_still_a_name() {
        let args = parse(&["uu"]);
        assert_eq!(args.pokemon, "uu");
        assert_eq!(args.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_second_token_generation() {
        let args = parse(&["alakazam", "gen6"]);
        assert_eq!(args.pokemon, "alakazam");
        assert_eq!(args.format, Format::new(Generation::Gen6, Tier::DEFAULT));
    }

    #[test]
    fn test_second_token_tier() {
        let args = parse(&["scizor", "uu"]);
        assert_eq!(args.pokemon, "scizor");
        assert_eq!(args.format, Format::new(Generation::LATEST, Tier::UU));
    }

    #[test]
    fn test_two_word_name() {
        let args = parse(&["tapu", "koko"]);
        assert_eq!(args.pokemon, "tapu koko");
        assert_eq!(args.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_two_word_name_with_format() {
        let args = parse(&["tapu", "koko", "gen7", "uu"]);
        assert_eq!(args.pokemon, "tapu koko");
        assert_eq!(args.format, Format::new(Generation::Gen7, Tier::UU));
    }

    #[test]
    fn test_name_gen_tier() {
        let args = parse(&["machamp", "gen6", "uu"]);
        assert_eq!(args.pokemon, "machamp");
        assert_eq!(args.format, Format::new(Generation::Gen6, Tier::UU));
    }

    #[test]
    fn test_name_tier_gen() {
        let args = parse(&["machamp", "uu", "gen6"]);
        assert_eq!(args.pokemon, "machamp");
        assert_eq!(args.format, Format::new(Generation::Gen6, Tier::UU));
    }

    #[test]
    fn test_third_word_is_not_part_of_the_name() {
        // names longer than two words are not supported
        let args = parse(&["a", "b", "c"]);
        assert_eq!(args.pokemon, "a b");
        assert_eq!(args.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_owned_tokens() {
        let tokens = vec!["scizor".to_string(), "gen4".to_string()];
        let args = parse(&tokens);
        assert_eq!(args.pokemon, "scizor");
        assert_eq!(args.format.generation, Generation::Gen4);
    }
}
