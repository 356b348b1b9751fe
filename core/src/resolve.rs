//! Walks a token tree and accumulates resolved variables per selector.

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::value::{css_name, transform};
use crate::{Collection, Error, RawValue, TokenLeaf, TokenNode, TokenTree};

/// Interaction state attached to a subtree by a reserved group key.
/// The innermost marker on the path to a leaf wins outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Default,
    Hover,
    Focus,
    Active,
    Disabled,
}

impl State {
    fn from_key(key: &str) -> Option<State> {
        match key.to_ascii_lowercase().as_str() {
            "default" => Some(State::Default),
            "hover" => Some(State::Hover),
            "focus" => Some(State::Focus),
            "active" => Some(State::Active),
            "disabled" => Some(State::Disabled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            State::Default => "default",
            State::Hover => "hover",
            State::Focus => "focus",
            State::Active => "active",
            State::Disabled => "disabled",
        }
    }
}

/// One leaf value resolved against a single mode.
struct Record<'a> {
    mode: &'a str,
    state: State,
    path: String,
    value: &'a RawValue,
}

/// Resolved variables grouped by mode selector, then interaction state, then
/// variable name. All three levels keep first-appearance order.
#[derive(Debug, Default)]
pub struct StyleMap {
    pub(crate) groups: IndexMap<String, IndexMap<State, IndexMap<String, String>>>,
}

impl StyleMap {
    pub fn new() -> StyleMap {
        StyleMap::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolves one collection into the map. Collections processed earlier
    /// win naming collisions, within one collection the earlier leaf wins.
    pub fn add_collection(&mut self, collection: &Collection, prefix: &str) -> Result<(), Error> {
        if collection.modes.is_empty() {
            return Err(Error::EmptyModes {
                collection: collection.name.clone(),
            });
        }
        for (i, mode) in collection.modes.iter().enumerate() {
            if collection.modes[..i].contains(mode) {
                return Err(Error::DuplicateMode {
                    collection: collection.name.clone(),
                    mode: mode.clone(),
                });
            }
        }

        let mut records = Vec::new();
        walk(
            &collection.variables,
            &collection.modes,
            "",
            State::Default,
            &mut records,
        );
        for record in records {
            self.insert(
                mode_selector(record.mode, collection.modes.len()),
                record.state,
                css_name(&record.path, prefix),
                transform(record.value, prefix),
            );
        }
        Ok(())
    }

    fn insert(&mut self, selector: String, state: State, name: String, value: String) {
        let bucket = self
            .groups
            .entry(selector)
            .or_insert_with(IndexMap::new)
            .entry(state)
            .or_insert_with(IndexMap::new);
        match bucket.entry(name) {
            Entry::Occupied(entry) => warn!(
                variable = entry.key().as_str(),
                state = state.as_str(),
                "duplicate variable, keeping the first value"
            ),
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }
}

/// A single mode maps onto `:root` directly; multiple modes are scoped by a
/// theme attribute.
fn mode_selector(mode: &str, mode_count: usize) -> String {
    if mode_count == 1 {
        ":root".to_string()
    } else {
        format!(":root[data-theme=\"{mode}\"]")
    }
}

/// Depth-first walk in document order. A state marker applies to its own
/// subtree only; a nested marker replaces the ancestor's.
fn walk<'a>(
    tree: &'a TokenTree,
    modes: &'a [String],
    path: &str,
    state: State,
    out: &mut Vec<Record<'a>>,
) {
    for (key, node) in tree {
        if let Some(next) = State::from_key(key) {
            match node {
                TokenNode::Leaf(leaf) => emit(leaf, modes, path, next, out),
                TokenNode::Group(group) => walk(group, modes, path, next, out),
            }
            continue;
        }
        let path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}-{key}")
        };
        match node {
            TokenNode::Leaf(leaf) => emit(leaf, modes, &path, state, out),
            TokenNode::Group(group) => walk(group, modes, &path, state, out),
        }
    }
}

fn emit<'a>(
    leaf: &'a TokenLeaf,
    modes: &'a [String],
    path: &str,
    state: State,
    out: &mut Vec<Record<'a>>,
) {
    for mode in modes {
        match leaf.values.get(mode) {
            Some(value) => out.push(Record {
                mode,
                state,
                path: path.to_string(),
                value,
            }),
            None => debug!(
                token = path,
                mode = mode.as_str(),
                "no value for mode, skipping"
            ),
        }
    }
}
