use std::fmt;

/// A legacy option that must appear in every option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredOption {
    /// `-w` / `--utf8`
    Utf8Output,
    /// `-W` / `--utf8-input`
    Utf8Input,
    /// `-m0`
    NoMimeDecode,
}

impl RequiredOption {
    pub fn flag(self) -> &'static str {
        match self {
            Self::Utf8Output => "-w",
            Self::Utf8Input => "-W",
            Self::NoMimeDecode => "-m0",
        }
    }
}

impl fmt::Display for RequiredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// Not an option, an unknown long name, or a short group outside the
    /// supported subset. Carries the offending text as written.
    #[error("invalid option: {0}")]
    InvalidOption(String),
    #[error("{0} is required")]
    MissingRequired(RequiredOption),
}
