/// The fixed battery of structural checks run over every batch.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Check {
    /// total cards equals bingos times cards per bingo
    Count,
    /// every card has exactly k numbers
    Size,
    /// no two cards share a signature
    Unique,
    /// every number lies in 1..=N
    Range,
    /// no card repeats a number
    Distinct,
    /// paired layout arithmetic holds
    Layout,
}

impl Check {
    pub const fn all() -> [Self; 6] {
        [
            Self::Count,
            Self::Size,
            Self::Unique,
            Self::Range,
            Self::Distinct,
            Self::Layout,
        ]
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Count => "card count",
                Self::Size => "numbers per card",
                Self::Unique => "unique cards",
                Self::Range => "number range",
                Self::Distinct => "no repeats in card",
                Self::Layout => "paired layout",
            }
        )
    }
}

/// Outcome of one check, with a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub check: Check,
    pub ok: bool,
    pub detail: String,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:<24}{}",
            if self.ok { "ok" } else { "!!" },
            self.check,
            self.detail
        )
    }
}
