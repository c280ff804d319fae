//! Node kinds for the parsed syntax tree.
//!
//! The tree is produced by an external parser; this crate only inspects the
//! shape captured here. Node kinds form a closed tagged union and the
//! traversal engine dispatches on the discriminant — there is no visitor
//! hierarchy.

use smol_str::SmolStr;

use super::NodeId;

/// A declared parameter of a method or constructor.
///
/// Only the name and the declared type name are kept; a missing type means
/// the parameter is untyped (`object`). The parameter *count* is what
/// matching uses — types are carried for display only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, without sigil.
    pub name: SmolStr,
    /// Declared type name, if any.
    pub type_name: Option<SmolStr>,
}

impl Parameter {
    /// Create a parameter with an optional declared type.
    pub fn new(name: impl Into<SmolStr>, type_name: Option<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name,
        }
    }
}

/// One `key = value` entry of a hashtable literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashtableEntry {
    /// The key node — a [`NodeKind::StringLiteral`] for literal keys.
    pub key: NodeId,
    /// The value node.
    pub value: NodeId,
}

/// The kind of a syntax node, with kind-specific children.
///
/// Children are stored as [`NodeId`]s into the owning tree's arena. Optional
/// children that the parser could not produce (a command with no arguments,
/// a property with no type) are simply absent; traversal treats them as
/// empty.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Whole-document root; statements in source order.
    Script {
        /// Top-level statements.
        statements: Vec<NodeId>,
    },
    /// A nested statement block (function body, loop body, scriptblock).
    Block {
        /// Statements in source order.
        statements: Vec<NodeId>,
    },
    /// A pipeline of commands/expressions joined by `|`.
    Pipeline {
        /// Pipeline elements in source order.
        elements: Vec<NodeId>,
    },
    /// A command invocation. `elements[0]` is the command name token.
    Command {
        /// Name token followed by arguments and switches.
        elements: Vec<NodeId>,
        /// True when invoked with the dot-source operator (`. ./file.ps1`).
        is_dot_sourced: bool,
    },
    /// A `-Name` style switch/parameter at a command call site.
    CommandParameter {
        /// Parameter name including the leading dash, as written.
        name: SmolStr,
    },
    /// A `$name` or `${name}` variable reference; `name` has no sigil.
    Variable {
        /// Bare variable name.
        name: SmolStr,
    },
    /// An assignment statement.
    Assignment {
        /// Left-hand side.
        target: NodeId,
        /// Right-hand side, absent for degenerate parses.
        value: Option<NodeId>,
    },
    /// A `function` or `workflow` declaration.
    FunctionDecl {
        /// Declared name.
        name: SmolStr,
        /// True for `workflow` declarations.
        is_workflow: bool,
        /// Body block.
        body: Option<NodeId>,
    },
    /// A `configuration` declaration.
    ConfigurationDecl {
        /// Declared name.
        name: SmolStr,
        /// Body block.
        body: Option<NodeId>,
    },
    /// A class declaration.
    ClassDecl {
        /// Declared type name.
        name: SmolStr,
        /// Member declarations in source order.
        members: Vec<NodeId>,
    },
    /// A method or constructor declaration inside a class.
    MethodDecl {
        /// Method name; constructors are named after the class.
        name: SmolStr,
        /// Declared `static`.
        is_static: bool,
        /// True when this member is a constructor.
        is_constructor: bool,
        /// Declared parameters; the count is the arity.
        parameters: Vec<Parameter>,
        /// Declared return type, if any.
        return_type: Option<SmolStr>,
        /// Body block.
        body: Option<NodeId>,
    },
    /// A property declaration inside a class.
    PropertyDecl {
        /// Property name, without sigil.
        name: SmolStr,
        /// Declared `static`.
        is_static: bool,
        /// Declared type name, if any.
        type_name: Option<SmolStr>,
    },
    /// `receiver.Member` or `[Type]::Member` access.
    MemberAccess {
        /// The receiver expression.
        receiver: NodeId,
        /// The member name token (a string literal for literal names).
        member: NodeId,
        /// True for `::` (static) access.
        is_static: bool,
    },
    /// `receiver.Member(args)` or `[Type]::Member(args)` invocation.
    MemberInvoke {
        /// The receiver expression.
        receiver: NodeId,
        /// The member name token.
        member: NodeId,
        /// Call-site arguments; the count is the arity.
        arguments: Vec<NodeId>,
        /// True for `::` (static) invocation.
        is_static: bool,
    },
    /// A literal type name expression such as `[MyType]`.
    TypeName {
        /// The named type.
        name: SmolStr,
    },
    /// A `@{ key = value; ... }` mapping literal.
    Hashtable {
        /// Entries in source order.
        entries: Vec<HashtableEntry>,
    },
    /// A bare or quoted string token.
    StringLiteral {
        /// The string value, without quotes.
        value: SmolStr,
    },
    /// Any node the queries never inspect; contributes only its children.
    Other {
        /// Child nodes in source order.
        children: Vec<NodeId>,
    },
}

impl NodeKind {
    /// Collect this node's children in source order.
    ///
    /// Absent optional children contribute nothing.
    pub fn child_ids(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Script { statements } | NodeKind::Block { statements } => statements.clone(),
            NodeKind::Pipeline { elements } => elements.clone(),
            NodeKind::Command { elements, .. } => elements.clone(),
            NodeKind::Assignment { target, value } => {
                let mut ids = vec![*target];
                ids.extend(*value);
                ids
            }
            NodeKind::FunctionDecl { body, .. }
            | NodeKind::ConfigurationDecl { body, .. }
            | NodeKind::MethodDecl { body, .. } => body.iter().copied().collect(),
            NodeKind::ClassDecl { members, .. } => members.clone(),
            NodeKind::MemberAccess {
                receiver, member, ..
            } => vec![*receiver, *member],
            NodeKind::MemberInvoke {
                receiver,
                member,
                arguments,
                ..
            } => {
                let mut ids = vec![*receiver, *member];
                ids.extend_from_slice(arguments);
                ids
            }
            NodeKind::Hashtable { entries } => entries
                .iter()
                .flat_map(|entry| [entry.key, entry.value])
                .collect(),
            NodeKind::Other { children } => children.clone(),
            NodeKind::CommandParameter { .. }
            | NodeKind::Variable { .. }
            | NodeKind::PropertyDecl { .. }
            | NodeKind::TypeName { .. }
            | NodeKind::StringLiteral { .. } => Vec::new(),
        }
    }

    /// True for declaration-shaped nodes (hit-tested by name sub-extent).
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDecl { .. }
                | NodeKind::ConfigurationDecl { .. }
                | NodeKind::ClassDecl { .. }
                | NodeKind::MethodDecl { .. }
                | NodeKind::PropertyDecl { .. }
        )
    }
}
