//! Effect trees.
//!
//! Each card owns an immutable tree of effects: either a single atomic
//! effect or a compound node combining children under AND or OR semantics.
//! Atomic effects are identified by an `EffectId` unique within the owning
//! card's tree; that identifier is the key space for a move's target map.
//!
//! The tree carries no behavior. What an atomic effect *does* lives behind
//! the `EffectHandler` seam; the tree only says which effects exist, how
//! they combine, and how to describe them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier of an atomic effect within a card's tree.
///
/// Unique per card, not globally. Target maps are keyed by this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Parameter stored on an atomic effect and substituted into its template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectParam {
    /// Numeric parameter (card counts, honor amounts).
    Int(i64),
    /// Text parameter (card names, faction names).
    Text(String),
}

impl EffectParam {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EffectParam::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EffectParam::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for EffectParam {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for EffectParam {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<&str> for EffectParam {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl std::fmt::Display for EffectParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectParam::Int(v) => write!(f, "{v}"),
            EffectParam::Text(s) => write!(f, "{s}"),
        }
    }
}

/// How a compound node combines its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundKind {
    /// Every selected child fires, in declaration order.
    And,
    /// Exactly one child must be selected.
    Or,
}

/// A leaf effect with fixed semantics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicEffect {
    /// Identifier within the owning card's tree.
    pub id: EffectId,

    /// Human-readable description. A `{}` placeholder is substituted with
    /// `param` when rendering.
    pub template: String,

    /// Fixed parameter for this effect, if any.
    pub param: Option<EffectParam>,

    /// Whether the effect may be skipped when its id has no entry in the
    /// target map. Mandatory effects missing an entry are a resolution
    /// error, not a silent skip.
    pub optional: bool,
}

impl AtomicEffect {
    /// Create a mandatory atomic effect.
    #[must_use]
    pub fn new(id: EffectId, template: impl Into<String>) -> Self {
        Self {
            id,
            template: template.into(),
            param: None,
            optional: false,
        }
    }

    /// Attach a parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, param: impl Into<EffectParam>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Mark the effect optional (builder pattern).
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Render the template, substituting the parameter when present.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.param {
            Some(param) => self.template.replacen("{}", &param.to_string(), 1),
            None => self.template.clone(),
        }
    }
}

/// A card's effect tree.
///
/// Either a single atomic effect or a compound combinator over an ordered
/// list of children, each itself atomic or compound. Trees are static card
/// data: immutable, non-cyclic, owned by the card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A leaf with fixed semantics and an identifier.
    Atomic(AtomicEffect),

    /// An AND/OR combinator over child effects.
    Compound {
        kind: CompoundKind,
        children: Vec<Effect>,
    },
}

impl Effect {
    /// Create an atomic leaf.
    #[must_use]
    pub fn atomic(id: EffectId, template: impl Into<String>) -> Self {
        Self::Atomic(AtomicEffect::new(id, template))
    }

    /// Attach a parameter to an atomic leaf (builder pattern).
    ///
    /// Panics when called on a compound node; parameters belong to leaves.
    #[must_use]
    pub fn with_param(self, param: impl Into<EffectParam>) -> Self {
        match self {
            Effect::Atomic(atomic) => Effect::Atomic(atomic.with_param(param)),
            Effect::Compound { .. } => panic!("with_param called on a compound effect"),
        }
    }

    /// Mark an atomic leaf optional (builder pattern).
    ///
    /// Panics when called on a compound node; the optional flag belongs to
    /// leaves.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Effect::Atomic(atomic) => Effect::Atomic(atomic.optional()),
            Effect::Compound { .. } => panic!("optional called on a compound effect"),
        }
    }

    /// Create an AND node.
    #[must_use]
    pub fn all(children: impl IntoIterator<Item = Effect>) -> Self {
        Self::Compound {
            kind: CompoundKind::And,
            children: children.into_iter().collect(),
        }
    }

    /// Create an OR node.
    #[must_use]
    pub fn one_of(children: impl IntoIterator<Item = Effect>) -> Self {
        Self::Compound {
            kind: CompoundKind::Or,
            children: children.into_iter().collect(),
        }
    }

    /// Flatten the tree into its atomic effects, depth-first, preserving
    /// declaration order.
    #[must_use]
    pub fn flatten(&self) -> SmallVec<[&AtomicEffect; 8]> {
        let mut out = SmallVec::new();
        self.collect_atomics(&mut out);
        out
    }

    fn collect_atomics<'a>(&'a self, out: &mut SmallVec<[&'a AtomicEffect; 8]>) {
        match self {
            Effect::Atomic(atomic) => out.push(atomic),
            Effect::Compound { children, .. } => {
                for child in children {
                    child.collect_atomics(out);
                }
            }
        }
    }

    /// Find the atomic effect with the given id, searching the full subtree.
    #[must_use]
    pub fn find_atomic(&self, id: EffectId) -> Option<&AtomicEffect> {
        self.flatten().into_iter().find(|e| e.id == id)
    }
}
