//! Snapshot payload types for the dashboard data endpoint.
//!
//! A snapshot is received wholesale per load and discarded after rendering;
//! nothing here is persisted or mutated after receipt. The shapes mirror what
//! the endpoint actually emits, and unknown extra fields are ignored rather
//! than rejected.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

/// One timeline entry: reflection text, a sentiment label, and trait tags.
#[derive(Debug, Clone, Deserialize)]
pub struct Reflection {
    pub text: String,
    pub sentiment: String,
    pub traits: Vec<String>,
}

/// A display-verbatim scalar. The endpoint emits these as either JSON numbers
/// or strings depending on which upstream signal produced them, so both forms
/// are accepted and rendered without alteration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

/// The JSON document returned by the data endpoint.
///
/// `trait_cloud` keeps the document's key order; iteration order over the
/// cloud must match the order the endpoint wrote the keys in.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub reflections: Vec<Reflection>,
    pub integrity_score: Scalar,
    pub trait_cloud: IndexMap<String, u64>,
    pub vaultfire_yield: Scalar,
}
