//! Resolves design-token documents into CSS custom-property declarations.
//!
//! A token document is a set of collections, each declaring a list of modes
//! and a tree of nested token groups. Leaves carry one raw value per mode.
//! [`StyleMap`] accumulates the resolved variables grouped by selector and
//! interaction state, and [`StyleMap::to_css`] renders the result.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

mod css;
mod error;
mod resolve;
mod value;

pub use css::Flavor;
pub use error::Error;
pub use resolve::{State, StyleMap};
pub use value::transform;

/// One token document as loaded from disk.
#[derive(Debug, Deserialize)]
pub struct TokenFile {
    pub collections: Vec<Collection>,
}

impl TokenFile {
    pub fn parse(data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(data)?)
    }
}

/// A named group of variables sharing one list of modes.
#[derive(Debug, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub name: String,
    pub modes: Vec<String>,
    pub variables: TokenTree,
}

pub type TokenTree = IndexMap<String, TokenNode>;

/// A tree node is a leaf as soon as it carries a `values` mapping; anything
/// else that deserializes as a mapping is a nested group.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenTree),
}

/// Leaf values keyed by mode name. Extra leaf fields (type metadata from
/// token exports) are ignored.
#[derive(Debug, Deserialize)]
pub struct TokenLeaf {
    pub values: IndexMap<String, RawValue>,
}

/// Raw leaf value before transformation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(v) => write!(f, "{v}"),
            RawValue::Number(v) => write!(f, "{v}"),
            RawValue::String(v) => f.write_str(v),
        }
    }
}
