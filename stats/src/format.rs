//! Query scope: generation × tier

use std::fmt;

/// Numbered game generation covered by the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Generation {
    Gen1 = 1,
    Gen2 = 2,
    Gen3 = 3,
    Gen4 = 4,
    Gen5 = 5,
    Gen6 = 6,
    Gen7 = 7,
    Gen8 = 8,
    Gen9 = 9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Gen1,
        Generation::Gen2,
        Generation::Gen3,
        Generation::Gen4,
        Generation::Gen5,
        Generation::Gen6,
        Generation::Gen7,
        Generation::Gen8,
        Generation::Gen9,
    ];

    /// Latest generation in the dataset, used when none is given
    pub const LATEST: Generation = Generation::Gen9;

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.number() == n)
    }

    /// Parse a user token of the form `genN` (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();
        let digits = lower.strip_prefix("gen")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gen {}", self.number())
    }
}

/// Competitive tier supported by the usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Ubers,
    OU,
    UU,
    RU,
    NU,
    PU,
    ZU,
    LC,
    Monotype,
    DoublesOU,
    AG,
}

impl Tier {
    pub const ALL: [Tier; 11] = [
        Tier::Ubers,
        Tier::OU,
        Tier::UU,
        Tier::RU,
        Tier::NU,
        Tier::PU,
        Tier::ZU,
        Tier::LC,
        Tier::Monotype,
        Tier::DoublesOU,
        Tier::AG,
    ];

    pub const DEFAULT: Tier = Tier::OU;

    /// Smogon id, as used in format ids ("gen7ou")
    pub fn id(&self) -> &'static str {
        match self {
            Tier::Ubers => "ubers",
            Tier::OU => "ou",
            Tier::UU => "uu",
            Tier::RU => "ru",
            Tier::NU => "nu",
            Tier::PU => "pu",
            Tier::ZU => "zu",
            Tier::LC => "lc",
            Tier::Monotype => "monotype",
            Tier::DoublesOU => "doublesou",
            Tier::AG => "anythinggoes",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ubers => "Ubers",
            Tier::OU => "OU",
            Tier::UU => "UU",
            Tier::RU => "RU",
            Tier::NU => "NU",
            Tier::PU => "PU",
            Tier::ZU => "ZU",
            Tier::LC => "LC",
            Tier::Monotype => "Monotype",
            Tier::DoublesOU => "Doubles OU",
            Tier::AG => "Anything Goes",
        }
    }

    /// Parse a user token (case-insensitive). Accepts the Smogon id and a
    /// couple of common short forms.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "uber" => Some(Tier::Ubers),
            "ag" => Some(Tier::AG),
            lower => Self::ALL.iter().copied().find(|t| t.id() == lower),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_valid_generation(token: &str) -> bool {
    Generation::from_token(token).is_some()
}

pub fn is_valid_tier(token: &str) -> bool {
    Tier::from_token(token).is_some()
}

/// True if the token names either a generation or a tier
pub fn is_format_token(token: &str) -> bool {
    is_valid_generation(token) || is_valid_tier(token)
}

/// Scope of a usage query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    pub generation: Generation,
    pub tier: Tier,
}

/// Format used when the user gives none
pub const DEFAULT_FORMAT: Format = Format {
    generation: Generation::LATEST,
    tier: Tier::DEFAULT,
};

impl Default for Format {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

impl Format {
    pub fn new(generation: Generation, tier: Tier) -> Self {
        Self { generation, tier }
    }

    /// Build a format from the trailing tokens of a command.
    ///
    /// Each token is tested against both enumerations independently of its
    /// position. Tokens that are neither a generation nor a tier are ignored,
    /// and any field left unset falls back to [`DEFAULT_FORMAT`]. Never fails.
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut generation = None;
        let mut tier = None;

        for token in tokens {
            let token = token.as_ref();
            if let Some(g) = Generation::from_token(token) {
                generation = Some(g);
            } else if let Some(t) = Tier::from_token(token) {
                tier = Some(t);
            }
        }

        Self {
            generation: generation.unwrap_or(DEFAULT_FORMAT.generation),
            tier: tier.unwrap_or(DEFAULT_FORMAT.tier),
        }
    }

    /// Smogon format id ("gen7ou")
    pub fn id(&self) -> String {
        format!("gen{}{}", self.generation.number(), self.tier.id())
    }

    /// Parse a Smogon format id ("gen7ou", "gen6doublesou")
    pub fn from_id(id: &str) -> Option<Self> {
        let lower = id.to_ascii_lowercase();
        let rest = lower.strip_prefix("gen")?;
        let split = rest.find(|c: char| !c.is_ascii_digit())?;
        let (number, tier) = rest.split_at(split);
        let generation = number.parse::<u8>().ok().and_then(Generation::from_number)?;
        let tier = Tier::ALL.iter().copied().find(|t| t.id() == tier)?;
        Some(Self { generation, tier })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.generation, self.tier)
    }
}
