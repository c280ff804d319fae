//! The symbol model — immutable values describing a found symbol.
//!
//! A [`Symbol`] is created fresh from a syntax node during traversal and
//! handed to the caller; it never outlives the query result. Two symbols
//! denote the same logical symbol when the kind-compatible predicate in
//! [`matching`] says so — never by extent equality, since a declaration and
//! a use of one symbol sit at different extents.

pub mod extract;
pub mod matching;

use smol_str::SmolStr;

use crate::base::Extent;

/// What kind of named construct a symbol is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Could not be classified.
    Unknown,
    /// A function declaration or command invocation.
    Function,
    /// A `$name` variable.
    Variable,
    /// A `-Name` parameter at a command call site.
    Parameter,
    /// A class (type) declaration or type-name expression.
    Class,
    /// A class constructor.
    Constructor,
    /// A class method.
    Method,
    /// A class property.
    Property,
    /// A string-literal key of a hashtable literal.
    HashtableKey,
    /// A `workflow` declaration.
    Workflow,
    /// A `configuration` declaration.
    Configuration,
}

impl SymbolKind {
    /// True for member-like kinds that carry a [`MemberInfo`] payload.
    pub fn is_member(self) -> bool {
        matches!(
            self,
            SymbolKind::Method | SymbolKind::Constructor | SymbolKind::Property
        )
    }

    /// True for kinds that name a callable invoked command-style.
    pub fn is_callable(self) -> bool {
        matches!(
            self,
            SymbolKind::Function | SymbolKind::Workflow | SymbolKind::Configuration
        )
    }
}

/// Kind-specific payload for member symbols (methods, constructors,
/// properties).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberInfo {
    /// Owning type name, or the wildcard sentinel when unresolved.
    pub owner: SmolStr,
    /// Declared or accessed as `static`.
    pub is_static: bool,
    /// Parameter type names in declaration order; the length is the arity.
    /// Call-site symbols carry one entry per argument.
    pub parameter_types: Vec<SmolStr>,
    /// Declared return/property type, if known.
    pub return_type: Option<SmolStr>,
    /// True for constructors.
    pub is_constructor: bool,
}

impl MemberInfo {
    /// The arity used for overload discrimination — a pure count.
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// True when the owner is the wildcard sentinel.
    pub fn owner_is_wildcard(&self) -> bool {
        crate::infer::is_wildcard_owner(&self.owner)
    }
}

/// A resolved reference to a named construct: kind, name, location, and
/// kind-specific metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// The symbol kind.
    pub kind: SymbolKind,
    /// The symbol name. Variables keep their sigil (`$name`), command
    /// parameters their dash (`-Name`); constructors are named after the
    /// owning type.
    pub name: SmolStr,
    /// Where the symbol occurrence sits in the document.
    pub extent: Extent,
    /// Member payload, present only for member-like kinds.
    pub member: Option<MemberInfo>,
}

impl Symbol {
    /// Create a plain (non-member) symbol.
    pub fn new(kind: SymbolKind, name: impl Into<SmolStr>, extent: Extent) -> Self {
        Self {
            kind,
            name: name.into(),
            extent,
            member: None,
        }
    }

    /// Create a member symbol with its payload.
    pub fn member(
        kind: SymbolKind,
        name: impl Into<SmolStr>,
        extent: Extent,
        member: MemberInfo,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            extent,
            member: Some(member),
        }
    }

    /// A `Name(type, type)` display signature for methods/constructors,
    /// the plain name otherwise.
    pub fn display_signature(&self) -> String {
        match &self.member {
            Some(info) if matches!(self.kind, SymbolKind::Method | SymbolKind::Constructor) => {
                let types: Vec<&str> = info.parameter_types.iter().map(SmolStr::as_str).collect();
                format!("{}({})", self.name, types.join(", "))
            }
            _ => self.name.to_string(),
        }
    }
}
