use matchplay_core::fixture::FixtureError;

#[derive(Debug)]
pub enum CliError {
    Fixture(FixtureError),
    /// A `--set` edit that could not be parsed.
    BadEdit(String),
    /// A `--set` edit addressing a cell that isn't on the card.
    CellOutOfRange(String),
    Output(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixture(e) => write!(f, "{e}"),
            Self::BadEdit(m) => write!(f, "bad score edit: {m}"),
            Self::CellOutOfRange(m) => write!(f, "score edit off the card: {m}"),
            Self::Output(m) => write!(f, "cannot write output: {m}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fixture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FixtureError> for CliError {
    fn from(e: FixtureError) -> Self {
        Self::Fixture(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e.to_string())
    }
}
