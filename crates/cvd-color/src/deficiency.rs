//! Deficiency and operation selectors.
//!
//! Both are closed enums: once a string has been parsed into one of them,
//! an invalid deficiency or operation cannot be represented.

use crate::{ColorError, ColorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which cone class is reduced or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Long-wavelength (red-associated) cones.
    #[serde(alias = "protanope")]
    Protan,
    /// Medium-wavelength (green-associated) cones.
    #[serde(alias = "deuteranope")]
    Deutan,
    /// Short-wavelength (blue-associated) cones.
    #[serde(alias = "tritanope")]
    Tritan,
}

impl Deficiency {
    /// All variants, in channel order.
    pub const ALL: [Self; 3] = [Self::Protan, Self::Deutan, Self::Tritan];

    /// Index of the affected LMS channel (L=0, M=1, S=2).
    #[inline]
    pub const fn channel(self) -> usize {
        match self {
            Self::Protan => 0,
            Self::Deutan => 1,
            Self::Tritan => 2,
        }
    }

    /// Lowercase identifier, as used on the command line and in file names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protan => "protan",
            Self::Deutan => "deutan",
            Self::Tritan => "tritan",
        }
    }

    /// Display label for titles.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protan => "Protan",
            Self::Deutan => "Deutan",
            Self::Tritan => "Tritan",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protan" | "protanope" => Ok(Self::Protan),
            "deutan" | "deuteranope" => Ok(Self::Deutan),
            "tritan" | "tritanope" => Ok(Self::Tritan),
            _ => Err(ColorError::validation(
                "deficiency",
                format!("unknown value '{}', expected one of protan, deutan, tritan", s),
            )),
        }
    }
}

/// Which transform algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Show how a color looks to a viewer with the deficiency.
    Simulate,
    /// Fidaner error redistribution into the visible channels.
    #[serde(alias = "daltonise")]
    Daltonize,
    /// Blend of hue-shift redistribution and affected-channel brightening.
    Correct,
}

impl Operation {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::Simulate, Self::Daltonize, Self::Correct];

    /// Lowercase identifier, as used on the command line and in file names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simulate => "simulate",
            Self::Daltonize => "daltonize",
            Self::Correct => "correct",
        }
    }

    /// Display label for titles.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simulate => "Simulate",
            Self::Daltonize => "Daltonize",
            Self::Correct => "Correct",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulate" => Ok(Self::Simulate),
            "daltonize" | "daltonise" => Ok(Self::Daltonize),
            "correct" => Ok(Self::Correct),
            _ => Err(ColorError::validation(
                "operation",
                format!(
                    "unknown value '{}', expected one of simulate, daltonize, correct",
                    s
                ),
            )),
        }
    }
}
