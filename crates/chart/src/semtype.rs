//! Semantic types derived from syntactic categories.
//!
//! The baseline checks function application against simple e/t types: an
//! atom map sends atomic categories to semantic types, and a function
//! category `A\B` or `A/B` becomes the function type from its argument's
//! type to its result's type.

use std::collections::HashMap;
use std::fmt;

use lambek_core::{Category, Slash};

use crate::error::ChartError;

/// A simple semantic type over entities and truth values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemType {
    /// Entities.
    E,
    /// Truth values.
    T,
    /// Functions, argument to result.
    Fun(Box<SemType>, Box<SemType>),
}

impl SemType {
    /// Build a function type.
    pub fn fun(argument: SemType, result: SemType) -> SemType {
        SemType::Fun(Box::new(argument), Box::new(result))
    }

    /// The argument type, for function types.
    pub fn argument(&self) -> Option<&SemType> {
        match self {
            SemType::Fun(argument, _) => Some(argument),
            _ => None,
        }
    }

    /// The result type, for function types.
    pub fn result(&self) -> Option<&SemType> {
        match self {
            SemType::Fun(_, result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for SemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemType::E => write!(f, "e"),
            SemType::T => write!(f, "t"),
            SemType::Fun(argument, result) => write!(f, "({},{})", argument, result),
        }
    }
}

/// Atom → semantic type assignments.
#[derive(Debug, Clone)]
pub struct SemTypeMap {
    atoms: HashMap<String, SemType>,
}

impl SemTypeMap {
    /// An empty map.
    pub fn empty() -> Self {
        Self {
            atoms: HashMap::new(),
        }
    }

    /// Assign a type to an atom.
    pub fn insert(&mut self, atom: &str, semtype: SemType) {
        self.atoms.insert(atom.to_string(), semtype);
    }

    /// The semantic type of a category.
    ///
    /// Function categories type as argument → result; unknown atoms are an
    /// error rather than a silent default.
    pub fn of(&self, category: &Category) -> Result<SemType, ChartError> {
        match category {
            Category::Atomic { name, .. } => {
                self.atoms
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ChartError::UntypedAtom { name: name.clone() })
            }
            Category::Function { left, right, slash } => {
                let (argument, result) = match slash {
                    Slash::Left => (left, right),
                    Slash::Right => (right, left),
                };
                Ok(SemType::fun(self.of(argument)?, self.of(result)?))
            }
        }
    }
}

impl Default for SemTypeMap {
    /// The standard assignments: `dp→e`, `s→t`, `n→(e,t)`, `q→t`.
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert("dp", SemType::E);
        map.insert("s", SemType::T);
        map.insert("n", SemType::fun(SemType::E, SemType::T));
        map.insert("q", SemType::T);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atoms_map_to_base_types() {
        let map = SemTypeMap::default();
        assert_eq!(map.of(&Category::atomic("dp")).unwrap(), SemType::E);
        assert_eq!(map.of(&Category::atomic("s")).unwrap(), SemType::T);
    }

    #[test]
    fn test_function_category_types_argument_to_result() {
        let map = SemTypeMap::default();
        let iv = Category::parse("dp\\s").unwrap();
        let typed = map.of(&iv).unwrap();
        assert_eq!(typed, SemType::fun(SemType::E, SemType::T));
        assert_eq!(typed.to_string(), "(e,t)");
        assert_eq!(typed.argument(), Some(&SemType::E));
        assert_eq!(typed.result(), Some(&SemType::T));
    }

    #[test]
    fn test_transitive_verb_type_nests() {
        let map = SemTypeMap::default();
        let tv = Category::parse("(dp\\s)/dp").unwrap();
        assert_eq!(
            map.of(&tv).unwrap().to_string(),
            "(e,(e,t))"
        );
    }

    #[test]
    fn test_unknown_atom_is_an_error() {
        let map = SemTypeMap::default();
        assert_eq!(
            map.of(&Category::atomic("pp")),
            Err(ChartError::UntypedAtom {
                name: "pp".to_string()
            })
        );
    }
}
