//! Renders a [`StyleMap`] into CSS text.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::resolve::{State, StyleMap};

/// Output formatting variant. [`Flavor::Tailwind`] wraps the rules in the
/// framework's base layer; the declarations themselves are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Plain,
    Tailwind,
}

impl StyleMap {
    /// Renders every selector block in first-appearance order. Non-default
    /// states hang off the selector as a pseudo-class.
    pub fn to_css(&self, flavor: Flavor) -> String {
        let blocks = self
            .groups
            .iter()
            .flat_map(|(selector, states)| {
                states
                    .iter()
                    .map(move |(state, vars)| block(selector, *state, vars))
            })
            .join("\n");
        match flavor {
            Flavor::Plain => blocks,
            Flavor::Tailwind => format!(
                "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n@layer base {{\n{}}}\n",
                indent(&blocks)
            ),
        }
    }
}

fn block(selector: &str, state: State, vars: &IndexMap<String, String>) -> String {
    let header = match state {
        State::Default => selector.to_string(),
        other => format!("{selector}:{}", other.as_str()),
    };
    let declarations = vars
        .iter()
        .map(|(name, value)| format!("\t--{name}: {value};\n"))
        .join("");
    format!("{header} {{\n{declarations}}}\n")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("\t{line}")
            }
        })
        .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::TokenFile;

    fn styles(data: &str, prefix: &str) -> StyleMap {
        let file = TokenFile::parse(data).unwrap();
        let mut styles = StyleMap::new();
        for collection in &file.collections {
            styles.add_collection(collection, prefix).unwrap();
        }
        styles
    }

    #[test]
    fn renders_a_single_mode_document() {
        let styles = styles(
            r##"{"collections": [{
                "modes": ["light"],
                "variables": {
                    "colors": { "primary": { "values": { "light": "rgb(10,20,30)" } } }
                }
            }]}"##,
            "app",
        );
        assert_eq!(
            styles.to_css(Flavor::Plain),
            ":root {\n\t--app-colors-primary: 10 20 30;\n}\n"
        );
    }

    #[test]
    fn renders_one_block_per_mode_and_state() {
        let styles = styles(
            r##"{"collections": [{
                "modes": ["light", "dark"],
                "variables": {
                    "colors": {
                        "primary": { "values": { "light": "#fff", "dark": "#000" } },
                        "hover": {
                            "primary": { "values": { "light": "#eee", "dark": "#111" } }
                        }
                    }
                }
            }]}"##,
            "",
        );
        assert_eq!(
            styles.to_css(Flavor::Plain),
            ":root[data-theme=\"light\"] {\n\
             \t--colors-primary: #fff;\n\
             }\n\
             \n\
             :root[data-theme=\"light\"]:hover {\n\
             \t--colors-primary: #eee;\n\
             }\n\
             \n\
             :root[data-theme=\"dark\"] {\n\
             \t--colors-primary: #000;\n\
             }\n\
             \n\
             :root[data-theme=\"dark\"]:hover {\n\
             \t--colors-primary: #111;\n\
             }\n"
        );
    }

    #[test]
    fn tailwind_flavor_wraps_the_blocks() {
        let styles = styles(
            r##"{"collections": [{
                "modes": ["light"],
                "variables": {
                    "colors": { "primary": { "values": { "light": "#336699" } } }
                }
            }]}"##,
            "",
        );
        assert_eq!(
            styles.to_css(Flavor::Tailwind),
            "@tailwind base;\n\
             @tailwind components;\n\
             @tailwind utilities;\n\
             \n\
             @layer base {\n\
             \t:root {\n\
             \t\t--colors-primary: #336699;\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn alias_references_line_up_with_emitted_names() {
        let styles = styles(
            r##"{"collections": [{
                "modes": ["light"],
                "variables": {
                    "colors": { "primary": { "values": { "light": "#336699" } } },
                    "button": { "background": { "values": { "light": "colors:colors/primary" } } }
                }
            }]}"##,
            "app",
        );
        assert_eq!(
            styles.to_css(Flavor::Plain),
            ":root {\n\
             \t--app-colors-primary: #336699;\n\
             \t--app-button-background: var(--app-colors-primary);\n\
             }\n"
        );
    }
}
