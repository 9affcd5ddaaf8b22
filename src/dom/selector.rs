//! Parser for the CSS selector subset understood by the in-memory DOM.
//!
//! Supported: `*`, type selectors, `#id`, `.class`, compounds of those,
//! selector lists (`a, b`), descendant (whitespace) and child (`>`)
//! combinators. Attribute selectors, pseudo-classes and sibling combinators
//! are rejected as invalid rather than silently ignored.

use crate::error::{NavResult, NavToggleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CompoundSelector {
    pub universal: bool,
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
}

impl CompoundSelector {
    fn is_empty(&self) -> bool {
        !self.universal && self.tag.is_none() && self.ids.is_empty() && self.classes.is_empty()
    }
}

/// One selector of a list: compounds left to right, `combinators[i]` sits
/// between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

pub(crate) fn parse_selector_list(input: &str) -> NavResult<Vec<ComplexSelector>> {
    input
        .split(',')
        .map(|group| parse_complex(input, group))
        .collect()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// CSS identifiers may not start with a digit, a lone `-`, or `-` + digit
fn check_ident(full: &str, ident: &str) -> NavResult<()> {
    let mut chars = ident.chars();
    let valid = match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(first), _) if first.is_ascii_digit() => false,
        (Some('-'), None) => false,
        (Some('-'), Some(second)) => !second.is_ascii_digit(),
        _ => true,
    };
    if !valid {
        return Err(NavToggleError::invalid_selector(
            full,
            format!("'{ident}' is not a valid identifier"),
        ));
    }
    Ok(())
}

fn read_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn parse_complex(full: &str, group: &str) -> NavResult<ComplexSelector> {
    let group = group.trim_matches(|c: char| c.is_ascii_whitespace());
    if group.is_empty() {
        return Err(NavToggleError::invalid_selector(full, "empty selector"));
    }

    let mut chars = group.chars().peekable();
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    let mut combinators = Vec::new();
    let mut current: Option<CompoundSelector> = None;
    let mut pending: Option<Combinator> = None;

    while let Some(c) = chars.next() {
        if c.is_ascii_whitespace() || c == '>' {
            if let Some(done) = current.take() {
                compounds.push(done);
                pending = Some(Combinator::Descendant);
            }
            if c == '>' {
                if compounds.is_empty() || pending == Some(Combinator::Child) {
                    return Err(NavToggleError::invalid_selector(full, "misplaced '>'"));
                }
                pending = Some(Combinator::Child);
            }
            continue;
        }

        if current.is_none() {
            if let Some(combinator) = pending.take() {
                combinators.push(combinator);
            }
        }
        let compound = current.get_or_insert_with(CompoundSelector::default);

        match c {
            '*' => {
                if !compound.is_empty() {
                    return Err(NavToggleError::invalid_selector(full, "misplaced '*'"));
                }
                compound.universal = true;
            }
            '.' => {
                let name = read_ident(&mut chars);
                if name.is_empty() {
                    return Err(NavToggleError::invalid_selector(full, "expected class name after '.'"));
                }
                check_ident(full, &name)?;
                compound.classes.push(name);
            }
            '#' => {
                let name = read_ident(&mut chars);
                if name.is_empty() {
                    return Err(NavToggleError::invalid_selector(full, "expected id after '#'"));
                }
                check_ident(full, &name)?;
                compound.ids.push(name);
            }
            c if is_ident_char(c) => {
                if !compound.is_empty() {
                    return Err(NavToggleError::invalid_selector(
                        full,
                        "type selector must come first in a compound",
                    ));
                }
                let mut name = c.to_string();
                name.push_str(&read_ident(&mut chars));
                check_ident(full, &name)?;
                compound.tag = Some(name.to_ascii_lowercase());
            }
            other => {
                return Err(NavToggleError::invalid_selector(
                    full,
                    format!("unsupported character '{other}'"),
                ));
            }
        }
    }

    match current {
        Some(done) => compounds.push(done),
        None => return Err(NavToggleError::invalid_selector(full, "dangling combinator")),
    }

    Ok(ComplexSelector {
        compounds,
        combinators,
    })
}
