//! Syntactic categories: atomic tokens and directional function types.
//!
//! A category is a binary tree. Leaves are atomic tokens (`dp`, `s`, `n`);
//! inner nodes are directional function types written `(A\B)` (argument `A`
//! consumed on the left) or `(A/B)` (argument `B` consumed on the right).
//!
//! # Key Concepts
//!
//! - **Full parenthesization**: the string grammar has no operator
//!   precedence. `(dp\s)/dp` is a function from `dp` (on the right) to
//!   `dp\s`; the parser finds the outermost unbracketed slash and recurses.
//! - **Argument and result**: for `A\B` the argument is `A` and the result
//!   `B`; for `A/B` the argument is `B` and the result `A`.
//! - **Gap atoms**: displacement inserts paired binder/site placeholder
//!   atoms that share a numeric gap id. The parser never produces them;
//!   only the search engine does.
//!
//! # Example
//!
//! ```rust
//! use lambek_core::category::{Category, Slash};
//!
//! let tv = Category::parse("(dp\\s)/dp").unwrap();
//! assert_eq!(tv.slash(), Some(Slash::Right));
//! assert_eq!(tv.argument().unwrap(), &Category::atomic("dp"));
//! assert_eq!(tv.to_string(), "((dp\\s)/dp)");
//! ```

use std::fmt;

use crate::error::GrammarError;
use crate::ids::GapId;

/// Direction of a function category's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slash {
    /// `A\B`: the argument `A` is consumed on the left.
    Left,
    /// `A/B`: the argument `B` is consumed on the right.
    Right,
}

impl fmt::Display for Slash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slash::Left => write!(f, "\\"),
            Slash::Right => write!(f, "/"),
        }
    }
}

/// Which half of a displacement pair a gap atom marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapKind {
    /// The abstraction marker left behind next to the displaced constituent.
    Binder,
    /// The placeholder standing where the constituent originally stood.
    Site,
}

/// Displacement marker carried by a gap atom. A binder and its site share
/// one id for the lifetime of a proof branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap {
    pub kind: GapKind,
    pub id: GapId,
}

/// A syntactic category: an atomic token or a directional function type.
///
/// Categories are immutable once built. Equality is structural and includes
/// the slash direction: `(a\b)` and `(a/b)` are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// An atomic leaf: a name token, optionally tagged as a displacement gap.
    Atomic { name: String, gap: Option<Gap> },
    /// A directional function type.
    Function {
        left: Box<Category>,
        right: Box<Category>,
        slash: Slash,
    },
}

impl Category {
    /// Create a plain atomic category.
    pub fn atomic(name: impl Into<String>) -> Self {
        Category::Atomic {
            name: name.into(),
            gap: None,
        }
    }

    /// Create a function category from parts.
    pub fn function(left: Category, slash: Slash, right: Category) -> Self {
        Category::Function {
            left: Box::new(left),
            right: Box::new(right),
            slash,
        }
    }

    /// Create the binder half of a displacement pair.
    pub fn binder(id: GapId) -> Self {
        Category::Atomic {
            name: "^".to_string(),
            gap: Some(Gap {
                kind: GapKind::Binder,
                id,
            }),
        }
    }

    /// Create the site half of a displacement pair.
    pub fn site(id: GapId) -> Self {
        Category::Atomic {
            name: "_".to_string(),
            gap: Some(Gap {
                kind: GapKind::Site,
                id,
            }),
        }
    }

    /// Parse a fully parenthesized category string.
    ///
    /// Spaces are ignored. One redundant outer bracket pair spanning the
    /// whole string is stripped. Fails fast on unbalanced parentheses and on
    /// strings that contain a slash but no top-level one.
    pub fn parse(input: &str) -> Result<Category, GrammarError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        Self::parse_compact(&compact)
    }

    fn parse_compact(src: &str) -> Result<Category, GrammarError> {
        let src = strip_outer_brackets(src)?;
        if src.is_empty() {
            return Err(GrammarError::EmptyCategory);
        }
        if !src.contains('\\') && !src.contains('/') {
            return Ok(Category::atomic(src));
        }

        // Find the outermost unbracketed slash, skipping balanced sub-spans.
        let bytes = src.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'(' => i = matching_paren(src, i)? + 1,
                b')' => {
                    return Err(GrammarError::UnbalancedParentheses {
                        input: src.to_string(),
                    })
                }
                b'\\' | b'/' => {
                    let slash = if bytes[i] == b'\\' {
                        Slash::Left
                    } else {
                        Slash::Right
                    };
                    let left = Self::parse_compact(&src[..i])?;
                    let right = Self::parse_compact(&src[i + 1..])?;
                    return Ok(Category::function(left, slash, right));
                }
                _ => i += 1,
            }
        }
        Err(GrammarError::MissingTopLevelSlash {
            input: src.to_string(),
        })
    }

    /// Whether this is a function category.
    pub fn is_function(&self) -> bool {
        matches!(self, Category::Function { .. })
    }

    /// Whether this is an atomic category.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Category::Atomic { .. })
    }

    /// The slash direction, for function categories.
    pub fn slash(&self) -> Option<Slash> {
        match self {
            Category::Function { slash, .. } => Some(*slash),
            Category::Atomic { .. } => None,
        }
    }

    /// The argument sub-category a function consumes.
    pub fn argument(&self) -> Option<&Category> {
        match self {
            Category::Function {
                left,
                slash: Slash::Left,
                ..
            } => Some(left),
            Category::Function {
                right,
                slash: Slash::Right,
                ..
            } => Some(right),
            Category::Atomic { .. } => None,
        }
    }

    /// The result sub-category a function produces.
    pub fn result(&self) -> Option<&Category> {
        match self {
            Category::Function {
                right,
                slash: Slash::Left,
                ..
            } => Some(right),
            Category::Function {
                left,
                slash: Slash::Right,
                ..
            } => Some(left),
            Category::Atomic { .. } => None,
        }
    }

    /// The gap tag, if this is a displacement placeholder atom.
    pub fn gap(&self) -> Option<Gap> {
        match self {
            Category::Atomic { gap, .. } => *gap,
            Category::Function { .. } => None,
        }
    }

    /// The gap id, if this is a binder placeholder.
    pub fn binder_id(&self) -> Option<GapId> {
        match self.gap() {
            Some(Gap {
                kind: GapKind::Binder,
                id,
            }) => Some(id),
            _ => None,
        }
    }

    /// The gap id, if this is a site placeholder.
    pub fn site_id(&self) -> Option<GapId> {
        match self.gap() {
            Some(Gap {
                kind: GapKind::Site,
                id,
            }) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Atomic { name, gap: None } => write!(f, "{}", name),
            Category::Atomic {
                name,
                gap: Some(gap),
            } => write!(f, "{}{}", name, gap.id),
            Category::Function { left, right, slash } => {
                write!(f, "({}{}{})", left, slash, right)
            }
        }
    }
}

/// Index of the parenthesis matching the `(` at `open`.
fn matching_paren(src: &str, open: usize) -> Result<usize, GrammarError> {
    let bytes = src.as_bytes();
    debug_assert_eq!(bytes[open], b'(');
    let mut score = 1;
    let mut i = open;
    while score > 0 {
        i += 1;
        if i >= bytes.len() {
            return Err(GrammarError::UnbalancedParentheses {
                input: src.to_string(),
            });
        }
        match bytes[i] {
            b'(' => score += 1,
            b')' => score -= 1,
            _ => {}
        }
    }
    Ok(i)
}

/// Strip one redundant outer bracket pair spanning the whole string.
fn strip_outer_brackets(src: &str) -> Result<&str, GrammarError> {
    if src.starts_with('(') && src.ends_with(')') && matching_paren(src, 0)? == src.len() - 1 {
        Ok(&src[1..src.len() - 1])
    } else {
        Ok(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_atomic() {
        let cat = Category::parse("dp").unwrap();
        assert_eq!(cat, Category::atomic("dp"));
        assert!(cat.is_atomic());
        assert_eq!(cat.to_string(), "dp");
    }

    #[test]
    fn test_parse_simple_function() {
        let cat = Category::parse("dp\\s").unwrap();
        assert_eq!(cat.slash(), Some(Slash::Left));
        assert_eq!(cat.argument().unwrap(), &Category::atomic("dp"));
        assert_eq!(cat.result().unwrap(), &Category::atomic("s"));
    }

    #[test]
    fn test_parse_nested_function() {
        // Transitive verb: needs its object on the right first.
        let cat = Category::parse("(dp\\s)/dp").unwrap();
        assert_eq!(cat.slash(), Some(Slash::Right));
        assert_eq!(cat.argument().unwrap(), &Category::atomic("dp"));
        assert_eq!(
            cat.result().unwrap(),
            &Category::parse("dp\\s").unwrap()
        );
    }

    #[test]
    fn test_parse_strips_spaces_and_outer_brackets() {
        let spaced = Category::parse("( dp \\ s )").unwrap();
        assert_eq!(spaced, Category::parse("dp\\s").unwrap());
    }

    #[test]
    fn test_parse_unbalanced_is_an_error() {
        assert!(matches!(
            Category::parse("(dp\\s"),
            Err(GrammarError::UnbalancedParentheses { .. })
        ));
        assert!(matches!(
            Category::parse("dp)\\s("),
            Err(GrammarError::UnbalancedParentheses { .. })
        ));
    }

    #[test]
    fn test_parse_slash_hidden_in_brackets_is_an_error() {
        // Contains slashes, but every one of them is bracketed away.
        assert!(matches!(
            Category::parse("(dp\\s)(s/dp)"),
            Err(GrammarError::MissingTopLevelSlash { .. })
        ));
    }

    #[test]
    fn test_parse_empty_is_an_error() {
        assert_eq!(Category::parse(""), Err(GrammarError::EmptyCategory));
        assert!(Category::parse("\\s").is_err());
    }

    #[test]
    fn test_direction_is_part_of_equality() {
        let left = Category::parse("dp\\s").unwrap();
        let right = Category::parse("dp/s").unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn test_gap_atoms_pair_by_id() {
        let binder = Category::binder(7);
        let site = Category::site(7);
        assert_eq!(binder.binder_id(), Some(7));
        assert_eq!(site.site_id(), Some(7));
        assert_eq!(binder.site_id(), None);
        assert_ne!(binder, site);
        assert_ne!(Category::binder(7), Category::binder(8));
        assert_eq!(binder.to_string(), "^7");
        assert_eq!(site.to_string(), "_7");
    }

    #[test]
    fn test_display_round_trip() {
        let src = "((dp\\s)/dp)";
        let cat = Category::parse(src).unwrap();
        assert_eq!(cat.to_string(), src);
        assert_eq!(Category::parse(&cat.to_string()).unwrap(), cat);
    }
}
