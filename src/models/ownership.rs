use clap::ValueEnum;

/// Who owns the installation being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Ownership {
    #[value(name = "government", alias = "government-owned")]
    GovernmentOwned,
    #[value(name = "private")]
    Private,
}

impl Ownership {
    pub fn label(&self) -> &'static str {
        match self {
            Ownership::GovernmentOwned => "Government-owned",
            Ownership::Private => "Private",
        }
    }

    /// Parse a configured or typed value. Empty input means "not selected".
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "government-owned" | "government" => Some(Ownership::GovernmentOwned),
            "private" => Some(Ownership::Private),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ownership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
