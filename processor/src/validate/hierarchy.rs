use std::collections::HashSet;

use shared::traits::MapVec;

use crate::decl::TypeName;

/// Outcome of walking a base-type chain towards a target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ascent {
    /// The target was found `depth` steps above the start (0 = the start itself).
    Reached { depth: usize },
    /// The chain ended without meeting the target.
    Exhausted { chain: Vec<TypeName> },
    /// A type was visited twice.
    Cycle { at: TypeName },
    TooDeep { limit: usize },
}

impl Ascent {
    pub fn reached(&self) -> bool {
        matches!(self, Ascent::Reached { .. })
    }

    /// Human-readable note for diagnostics, None when the target was reached.
    pub fn note(&self) -> Option<String> {
        match self {
            Ascent::Reached { .. } => None,
            Ascent::Exhausted { chain } => Some(format!(
                "base-type chain: {}",
                chain.join_map(|ty| ty.to_string(), " -> ")
            )),
            Ascent::Cycle { at } => Some(format!("base-type chain loops back to {at}")),
            Ascent::TooDeep { limit } => {
                Some(format!("base-type chain is deeper than {limit} levels"))
            }
        }
    }
}

/// Walks upward from `start` one level at a time until `target` is met.
/// A type reaches itself.
pub fn ascend(
    start: &TypeName,
    target: &TypeName,
    max_depth: usize,
    mut parent: impl FnMut(&TypeName) -> Option<TypeName>,
) -> Ascent {
    let mut visited = HashSet::new();
    let mut chain = Vec::new();
    let mut current = start.clone();
    loop {
        if &current == target {
            return Ascent::Reached { depth: chain.len() };
        }
        if chain.len() >= max_depth {
            return Ascent::TooDeep { limit: max_depth };
        }
        if !visited.insert(current.clone()) {
            return Ascent::Cycle { at: current };
        }
        let next = parent(&current);
        chain.push(current);
        match next {
            Some(ty) => current = ty,
            None => return Ascent::Exhausted { chain },
        }
    }
}

/// Types above `start`, nearest first. Stops at the end of the chain, on a
/// revisited type, or after `max_depth` steps.
pub fn ancestors(
    start: &TypeName,
    max_depth: usize,
    mut parent: impl FnMut(&TypeName) -> Option<TypeName>,
) -> Vec<TypeName> {
    let mut visited = HashSet::from([start.clone()]);
    let mut chain = Vec::new();
    let mut current = start.clone();
    while chain.len() < max_depth {
        match parent(&current) {
            Some(ty) if visited.insert(ty.clone()) => {
                chain.push(ty.clone());
                current = ty;
            }
            _ => break,
        }
    }
    chain
}
