/// Anchoring applied to a rendered pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// No anchors.
    #[default]
    Anywhere,
    /// `^` prefix.
    StartsWith,
    /// `$` suffix.
    EndsWith,
    /// Both `^` and `$`.
    FullLine,
}

impl Scope {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::StartsWith | Self::FullLine => "^",
            Self::Anywhere | Self::EndsWith => "",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::EndsWith | Self::FullLine => "$",
            Self::Anywhere | Self::StartsWith => "",
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anywhere" => Ok(Self::Anywhere),
            "starts-with" => Ok(Self::StartsWith),
            "ends-with" => Ok(Self::EndsWith),
            "full-line" => Ok(Self::FullLine),
            _ => anyhow::bail!("Unknown scope '{}'.", s),
        }
    }
}
