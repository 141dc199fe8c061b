use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NOT_MEASURED: &str = "--";

/// Self-reported effectiveness of a project, as a percentage.
///
/// The textual form is either `"--"` for a project whose impact has not been
/// measured yet, or a non-negative number optionally followed by `%`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Impact {
    Measured(f64),
    NotMeasured,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ImpactError {
    #[error("impact {0:?} is not a percentage")]
    NotANumber(String),
    #[error("impact {0:?} must be a finite non-negative percentage")]
    OutOfRange(String),
}

impl Impact {
    pub fn percent(self) -> Option<f64> {
        match self {
            Impact::Measured(p) => Some(p),
            Impact::NotMeasured => None,
        }
    }

    pub fn is_measured(self) -> bool {
        matches!(self, Impact::Measured(_))
    }
}

impl FromStr for Impact {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == NOT_MEASURED {
            return Ok(Impact::NotMeasured);
        }
        let number = s.strip_suffix('%').unwrap_or(s).trim_end();
        let value = number
            .parse::<f64>()
            .map_err(|_| ImpactError::NotANumber(s.to_owned()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ImpactError::OutOfRange(s.to_owned()));
        }
        Ok(Impact::Measured(value))
    }
}

impl TryFrom<String> for Impact {
    type Error = ImpactError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Impact> for String {
    fn from(impact: Impact) -> String {
        impact.to_string()
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Measured(p) => write!(f, "{p}%"),
            Impact::NotMeasured => f.write_str(NOT_MEASURED),
        }
    }
}
