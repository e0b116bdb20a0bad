use std::{collections::BTreeMap, error::Error, fmt};

/// One entry of the structured diagnostics attached to a [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Text(String),
    Texts(Vec<String>),
    Number(usize),
    Positions(Vec<usize>),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}")?,
            Self::Texts(v) => write!(f, "{v:?}")?,
            Self::Number(n) => write!(f, "{n}")?,
            Self::Positions(v) => write!(f, "{v:?}")?,
        };
        Ok(())
    }
}

pub type FailureData = BTreeMap<String, Detail>;

/// Merges two optional diagnostic maps, `None` counting as empty.
/// On a key collision the entry from `data2` wins.
pub fn merge_data(data1: Option<FailureData>, data2: Option<FailureData>) -> Option<FailureData> {
    match (data1, data2) {
        (None, d) | (d, None) => d,
        (Some(mut d1), Some(d2)) => {
            d1.extend(d2);
            Some(d1)
        }
    }
}

/// A parse that did not match.
///
/// `pos` is the byte offset at which matching broke down, which may lie past
/// the offset where the failing parser started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub pos: usize,
    pub data: Option<FailureData>,
}

impl Failure {
    pub fn new(message: impl Into<String>, pos: usize) -> Self {
        Self {
            message: message.into(),
            pos,
            data: None,
        }
    }

    /// Adds (or replaces) one diagnostic entry.
    pub fn with(mut self, key: &str, detail: Detail) -> Self {
        self.data
            .get_or_insert_with(FailureData::new)
            .insert(key.to_string(), detail);
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Detail> {
        self.data.as_ref().and_then(|d| d.get(key))
    }

    /// Prefixes the message, keeping position and data.
    pub fn context(self, prefix: impl fmt::Display) -> Self {
        Self {
            message: format!("{prefix}{msg}", msg = self.message),
            ..self
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{msg} at {pos}", msg = self.message, pos = self.pos)?;
        if let Some(data) = &self.data {
            let entries: Vec<String> = data.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            if !entries.is_empty() {
                write!(f, " {{{}}}", entries.join(", "))?;
            }
        }
        Ok(())
    }
}

impl Error for Failure {}

/// A grammar that cannot be built.
#[derive(Debug)]
pub enum GrammarError {
    Pattern(regex::Error),
    Group {
        group: usize,
        groups: usize,
    },
    Delimiters {
        opening: String,
        closing: String,
    },
}

impl From<regex::Error> for GrammarError {
    fn from(e: regex::Error) -> Self {
        Self::Pattern(e)
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "invalid pattern: {e}")?,
            Self::Group { group, groups } => write!(
                f,
                "capture group {group} requested but the pattern has {groups}"
            )?,
            Self::Delimiters { opening, closing } => write!(
                f,
                "delimiters must be non-empty and distinct: '{opening}' '{closing}'"
            )?,
        };
        Ok(())
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Group { .. } | Self::Delimiters { .. } => None,
        }
    }
}
