//! Classifies raw token values and rewrites them into CSS.
//!
//! Three string shapes are recognized: `collection:name` alias references,
//! `hsl(h, s, l)` and `rgb(r, g, b)` literals. Aliases become `var()`
//! references into the flat variable namespace; the color literals are
//! rewritten to the space-separated channel syntax. Everything else passes
//! through untouched.

use crate::RawValue;

/// Rewrites one raw leaf value into its CSS text. Pure; alias detection
/// takes precedence over the color rewrites.
pub fn transform(raw: &RawValue, prefix: &str) -> String {
    match raw {
        RawValue::String(s) => transform_str(s, prefix),
        other => other.to_string(),
    }
}

fn transform_str(raw: &str, prefix: &str) -> String {
    if let Ok(target) = token_value::alias(raw) {
        return format!("var(--{})", css_name(target, prefix));
    }
    if let Ok((h, s, l)) = token_value::hsl(raw) {
        return format!("{h}deg {s} {l}");
    }
    if let Ok((r, g, b)) = token_value::rgb(raw) {
        return format!("{r} {g} {b}");
    }
    raw.to_string()
}

/// Normalizes a token path into a CSS custom-property name: `/` becomes `-`,
/// everything is lowercased, stray separators are trimmed, and the configured
/// prefix is prepended when non-empty. Walked paths and alias targets go
/// through the same rule.
pub(crate) fn css_name(path: &str, prefix: &str) -> String {
    let name = path.replace('/', "-").to_ascii_lowercase();
    let name = name.trim_matches('-');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}-{name}")
    }
}

peg::parser! {
  grammar token_value() for str {
    rule _ = quiet!{[' ']*}
    rule word() = ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']
    rule int() -> &'input str = $(['0'..='9']+)
    // saturation/lightness keep their % sign when the source has one
    rule channel() -> &'input str = $(['0'..='9']+ "%"?)

    // `collection:name` with no space on either side of the colon; the
    // collection part is discarded, the name may contain `/` separators.
    pub(crate) rule alias() -> &'input str
        = (word() / [' '] !":")+ ":" target:$(word() (word() / [' ' | '/'])*) ![_]
          { target }

    pub(crate) rule hsl() -> (&'input str, &'input str, &'input str)
        = "hsl(" _ h:int() _ "," _ s:channel() _ "," _ l:channel() _ ")" ![_]
          { (h, s, l) }

    pub(crate) rule rgb() -> (&'input str, &'input str, &'input str)
        = "rgb(" _ r:int() _ "," _ g:int() _ "," _ b:int() _ ")" ![_]
          { (r, g, b) }
  }
}
