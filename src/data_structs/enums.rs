use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
    Deserialize,
    Serialize,
};

/// Kind of alternate name carried by a Synonym.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum SynonymType {
    /// Database-style accession or annotation id (`CG3702`, `FBgn0000001`).
    Identifier,
    /// Human-readable gene symbol.
    Symbol,
}

impl SynonymType {
    /// Prefixes that mark a synonym candidate as an identifier.
    pub const IDENTIFIER_PREFIXES: [&'static str; 3] = ["CG", "CR", "FB"];

    /// Classifies a new synonym candidate by its prefix.
    pub fn classify(value: &str) -> Self {
        if Self::IDENTIFIER_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
        {
            SynonymType::Identifier
        }
        else {
            SynonymType::Symbol
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SynonymType::Identifier => "identifier",
            SynonymType::Symbol => "symbol",
        }
    }
}

impl Display for SynonymType {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SynonymType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identifier" => Ok(SynonymType::Identifier),
            "symbol" => Ok(SynonymType::Symbol),
            other => Err(anyhow!("unknown synonym type: {}", other)),
        }
    }
}

impl Serialize for SynonymType {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SynonymType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Organisms a syntenic region may point at.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum TargetSpecies {
    /// Drosophila melanogaster.
    Dmel,
    /// Drosophila pseudoobscura.
    Dpse,
}

impl TargetSpecies {
    pub fn taxon_id(&self) -> &'static str {
        match self {
            TargetSpecies::Dmel => "7227",
            TargetSpecies::Dpse => "7237",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            TargetSpecies::Dmel => "dmel",
            TargetSpecies::Dpse => "dpse",
        }
    }
}

impl Display for TargetSpecies {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for TargetSpecies {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dmel" => Ok(TargetSpecies::Dmel),
            "dpse" => Ok(TargetSpecies::Dpse),
            other => Err(anyhow!("unknown organism abbreviation: {}", other)),
        }
    }
}

/// Cardinality of a reference field in the target model.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub enum ReferenceKind {
    Single,
    Collection,
}
