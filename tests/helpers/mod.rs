//! Shared tree fixtures for the integration suites.
//!
//! Trees are assembled by hand the way the external parser would produce
//! them, with every extent carved out of a real source snippet so the
//! positions used in tests always agree with the text.

#![allow(dead_code)]

use shellsym::infer::TypeInference;
use shellsym::smol_str::SmolStr;
use shellsym::syntax::{HashtableEntry, NodeId, NodeKind, Parameter, SyntaxTree, TreeBuilder};

/// Inference stub keyed on the expression's literal text.
///
/// `TextTypes(vec![("$hero", "SuperHero")])` resolves every node whose
/// extent text is `$hero` to `SuperHero`; everything else stays unknown.
pub struct TextTypes(pub Vec<(&'static str, &'static str)>);

impl TypeInference for TextTypes {
    fn infer_type(&self, tree: &SyntaxTree, node: NodeId) -> Option<SmolStr> {
        let text = tree.node(node).extent.text.as_str();
        self.0
            .iter()
            .find(|(needle, _)| *needle == text)
            .map(|(_, type_name)| SmolStr::new(type_name))
    }
}

pub fn literal(b: &mut TreeBuilder, line: u32, text: &str) -> NodeId {
    let extent = b.token_extent(line, text).expect("literal token on line");
    b.push(NodeKind::StringLiteral { value: text.into() }, extent)
}

pub fn variable(b: &mut TreeBuilder, line: u32, text: &str) -> NodeId {
    let extent = b.token_extent(line, text).expect("variable token on line");
    b.push(
        NodeKind::Variable {
            name: text.trim_start_matches('$').into(),
        },
        extent,
    )
}

pub fn type_name(b: &mut TreeBuilder, line: u32, bracketed: &str) -> NodeId {
    let extent = b.token_extent(line, bracketed).expect("type token on line");
    b.push(
        NodeKind::TypeName {
            name: bracketed
                .trim_start_matches('[')
                .trim_end_matches(']')
                .into(),
        },
        extent,
    )
}

/// A `name args...` command whose extent covers the whole written text.
pub fn command(b: &mut TreeBuilder, line: u32, written: &str, name: &str) -> NodeId {
    let name_node = literal(b, line, name);
    let extent = b.token_extent(line, written).expect("command text on line");
    b.push(
        NodeKind::Command {
            elements: vec![name_node],
            is_dot_sourced: false,
        },
        extent,
    )
}

/// Wrap pipeline elements; the extent is the first element's.
pub fn pipeline(b: &mut TreeBuilder, elements: Vec<NodeId>) -> NodeId {
    let extent = b.node_extent(elements[0]);
    b.push(NodeKind::Pipeline { elements }, extent)
}

/// Scenario: a function declaration and a bare call to it.
///
/// ```text
/// 1: function Get-Foo { }
/// 2: Get-Foo
/// ```
pub fn simple_script() -> SyntaxTree {
    let src = "function Get-Foo { }\nGet-Foo";
    let mut b = SyntaxTree::builder(src);
    let body = b.push(
        NodeKind::Block {
            statements: Vec::new(),
        },
        b.token_extent(1, "{ }").unwrap(),
    );
    let decl = b.push(
        NodeKind::FunctionDecl {
            name: "Get-Foo".into(),
            is_workflow: false,
            body: Some(body),
        },
        b.span_extent(1, 1, 1, 21).unwrap(),
    );
    let call = command(&mut b, 2, "Get-Foo", "Get-Foo");
    let pipe = pipeline(&mut b, vec![call]);
    let root = b.push(
        NodeKind::Script {
            statements: vec![decl, pipe],
        },
        b.span_extent(1, 1, 2, 8).unwrap(),
    );
    b.finish(root)
}

/// Two commands sharing one pipeline and one line.
///
/// ```text
/// 1: Get-Foo   | Get-Bar
/// ```
pub fn pipeline_line() -> SyntaxTree {
    let src = "Get-Foo   | Get-Bar";
    let mut b = SyntaxTree::builder(src);
    let first = command(&mut b, 1, "Get-Foo", "Get-Foo");
    let bar_name = {
        let extent = b.token_extent_from(1, 9, "Get-Bar").unwrap();
        b.push(
            NodeKind::StringLiteral {
                value: "Get-Bar".into(),
            },
            extent,
        )
    };
    let second = b.push(
        NodeKind::Command {
            elements: vec![bar_name],
            is_dot_sourced: false,
        },
        b.token_extent_from(1, 9, "Get-Bar").unwrap(),
    );
    let pipe = b.push(
        NodeKind::Pipeline {
            elements: vec![first, second],
        },
        b.span_extent(1, 1, 1, 20).unwrap(),
    );
    let root = b.push(
        NodeKind::Script {
            statements: vec![pipe],
        },
        b.span_extent(1, 1, 1, 20).unwrap(),
    );
    b.finish(root)
}

/// A class with properties, constructor overloads, a method, and uses.
///
/// ```text
///  1: class SuperHero {
///  2:     [string] $AlterEgoName
///  3:     static [int] $UniverseId
///  4:
///  5:     SuperHero() { }
///  6:     SuperHero([string] $name) { }
///  7:
///  8:     [string] GetAlterEgoName() {
///  9:         return $this.AlterEgoName
/// 10:     }
/// 11: }
/// 12:
/// 13: $hero = [SuperHero]::new()
/// 14: $hero.GetAlterEgoName()
/// 15: $hero.AlterEgoName
/// 16: [SuperHero]::UniverseId
/// ```
pub fn class_script() -> SyntaxTree {
    let src = "\
class SuperHero {
    [string] $AlterEgoName
    static [int] $UniverseId

    SuperHero() { }
    SuperHero([string] $name) { }

    [string] GetAlterEgoName() {
        return $this.AlterEgoName
    }
}

$hero = [SuperHero]::new()
$hero.GetAlterEgoName()
$hero.AlterEgoName
[SuperHero]::UniverseId";
    let mut b = SyntaxTree::builder(src);

    let alter_ego = b.push(
        NodeKind::PropertyDecl {
            name: "AlterEgoName".into(),
            is_static: false,
            type_name: Some("string".into()),
        },
        b.span_extent(2, 5, 2, 27).unwrap(),
    );
    let universe_id = b.push(
        NodeKind::PropertyDecl {
            name: "UniverseId".into(),
            is_static: true,
            type_name: Some("int".into()),
        },
        b.span_extent(3, 5, 3, 29).unwrap(),
    );

    let ctor0_body = b.push(
        NodeKind::Block {
            statements: Vec::new(),
        },
        b.token_extent(5, "{ }").unwrap(),
    );
    let ctor0 = b.push(
        NodeKind::MethodDecl {
            name: "SuperHero".into(),
            is_static: false,
            is_constructor: true,
            parameters: Vec::new(),
            return_type: None,
            body: Some(ctor0_body),
        },
        b.span_extent(5, 5, 5, 20).unwrap(),
    );
    let ctor1_body = b.push(
        NodeKind::Block {
            statements: Vec::new(),
        },
        b.token_extent(6, "{ }").unwrap(),
    );
    let ctor1 = b.push(
        NodeKind::MethodDecl {
            name: "SuperHero".into(),
            is_static: false,
            is_constructor: true,
            parameters: vec![Parameter::new("name", Some("string".into()))],
            return_type: None,
            body: Some(ctor1_body),
        },
        b.span_extent(6, 5, 6, 34).unwrap(),
    );

    let this_var = variable(&mut b, 9, "$this");
    let member_tok = literal(&mut b, 9, "AlterEgoName");
    let this_access = b.push(
        NodeKind::MemberAccess {
            receiver: this_var,
            member: member_tok,
            is_static: false,
        },
        b.token_extent(9, "$this.AlterEgoName").unwrap(),
    );
    let method_body = b.push(
        NodeKind::Block {
            statements: vec![this_access],
        },
        b.span_extent(8, 32, 10, 6).unwrap(),
    );
    let method = b.push(
        NodeKind::MethodDecl {
            name: "GetAlterEgoName".into(),
            is_static: false,
            is_constructor: false,
            parameters: Vec::new(),
            return_type: Some("string".into()),
            body: Some(method_body),
        },
        b.span_extent(8, 5, 10, 6).unwrap(),
    );

    let class = b.push(
        NodeKind::ClassDecl {
            name: "SuperHero".into(),
            members: vec![alter_ego, universe_id, ctor0, ctor1, method],
        },
        b.span_extent(1, 1, 11, 2).unwrap(),
    );

    // $hero = [SuperHero]::new()
    let hero = variable(&mut b, 13, "$hero");
    let new_receiver = type_name(&mut b, 13, "[SuperHero]");
    let new_tok = literal(&mut b, 13, "new");
    let new_invoke = b.push(
        NodeKind::MemberInvoke {
            receiver: new_receiver,
            member: new_tok,
            arguments: Vec::new(),
            is_static: true,
        },
        b.token_extent(13, "[SuperHero]::new()").unwrap(),
    );
    let assignment = b.push(
        NodeKind::Assignment {
            target: hero,
            value: Some(new_invoke),
        },
        b.span_extent(13, 1, 13, 27).unwrap(),
    );

    // $hero.GetAlterEgoName()
    let hero_14 = variable(&mut b, 14, "$hero");
    let method_tok = literal(&mut b, 14, "GetAlterEgoName");
    let method_invoke = b.push(
        NodeKind::MemberInvoke {
            receiver: hero_14,
            member: method_tok,
            arguments: Vec::new(),
            is_static: false,
        },
        b.token_extent(14, "$hero.GetAlterEgoName()").unwrap(),
    );

    // $hero.AlterEgoName
    let hero_15 = variable(&mut b, 15, "$hero");
    let alter_tok = literal(&mut b, 15, "AlterEgoName");
    let property_access = b.push(
        NodeKind::MemberAccess {
            receiver: hero_15,
            member: alter_tok,
            is_static: false,
        },
        b.token_extent(15, "$hero.AlterEgoName").unwrap(),
    );

    // [SuperHero]::UniverseId
    let static_receiver = type_name(&mut b, 16, "[SuperHero]");
    let universe_tok = literal(&mut b, 16, "UniverseId");
    let static_access = b.push(
        NodeKind::MemberAccess {
            receiver: static_receiver,
            member: universe_tok,
            is_static: true,
        },
        b.token_extent(16, "[SuperHero]::UniverseId").unwrap(),
    );

    let root = b.push(
        NodeKind::Script {
            statements: vec![
                class,
                assignment,
                method_invoke,
                property_access,
                static_access,
            ],
        },
        b.span_extent(1, 1, 16, 24).unwrap(),
    );
    b.finish(root)
}

/// Inference that resolves the class fixture's receivers.
pub fn hero_types() -> TextTypes {
    TextTypes(vec![
        ("$hero", "SuperHero"),
        ("[SuperHero]::new()", "SuperHero"),
    ])
}

/// A constructor call chained straight into a method call.
///
/// ```text
/// 1: [SuperHero]::new().GetAlterEgoName()
/// ```
pub fn chained_call_script() -> SyntaxTree {
    let src = "[SuperHero]::new().GetAlterEgoName()";
    let mut b = SyntaxTree::builder(src);
    let receiver = type_name(&mut b, 1, "[SuperHero]");
    let new_tok = literal(&mut b, 1, "new");
    let new_invoke = b.push(
        NodeKind::MemberInvoke {
            receiver,
            member: new_tok,
            arguments: Vec::new(),
            is_static: true,
        },
        b.token_extent(1, "[SuperHero]::new()").unwrap(),
    );
    let method_tok = literal(&mut b, 1, "GetAlterEgoName");
    let chained = b.push(
        NodeKind::MemberInvoke {
            receiver: new_invoke,
            member: method_tok,
            arguments: Vec::new(),
            is_static: false,
        },
        b.span_extent(1, 1, 1, 37).unwrap(),
    );
    let root = b.push(
        NodeKind::Script {
            statements: vec![chained],
        },
        b.span_extent(1, 1, 1, 37).unwrap(),
    );
    b.finish(root)
}

/// A command used once by name and once through an alias.
///
/// ```text
/// 1: Get-ChildItem -Recurse
/// 2: gci -Recurse
/// ```
pub fn alias_script() -> SyntaxTree {
    let src = "Get-ChildItem -Recurse\ngci -Recurse";
    let mut b = SyntaxTree::builder(src);

    let full_name = literal(&mut b, 1, "Get-ChildItem");
    let switch_1 = b.push(
        NodeKind::CommandParameter {
            name: "-Recurse".into(),
        },
        b.token_extent(1, "-Recurse").unwrap(),
    );
    let full_call = b.push(
        NodeKind::Command {
            elements: vec![full_name, switch_1],
            is_dot_sourced: false,
        },
        b.span_extent(1, 1, 1, 23).unwrap(),
    );
    let pipe_1 = pipeline(&mut b, vec![full_call]);

    let alias_name = literal(&mut b, 2, "gci");
    let switch_2 = b.push(
        NodeKind::CommandParameter {
            name: "-Recurse".into(),
        },
        b.token_extent(2, "-Recurse").unwrap(),
    );
    let alias_call = b.push(
        NodeKind::Command {
            elements: vec![alias_name, switch_2],
            is_dot_sourced: false,
        },
        b.span_extent(2, 1, 2, 13).unwrap(),
    );
    let pipe_2 = pipeline(&mut b, vec![alias_call]);

    let root = b.push(
        NodeKind::Script {
            statements: vec![pipe_1, pipe_2],
        },
        b.span_extent(1, 1, 2, 13).unwrap(),
    );
    b.finish(root)
}

/// A two-entry hashtable literal standing alone, manifest style.
///
/// ```text
/// 1: @{ Key1 = 1; Key2 = 2 }
/// ```
pub fn hashtable_script() -> SyntaxTree {
    let src = "@{ Key1 = 1; Key2 = 2 }";
    let mut b = SyntaxTree::builder(src);
    let key_1 = literal(&mut b, 1, "Key1");
    let value_1 = b.push(
        NodeKind::Other {
            children: Vec::new(),
        },
        b.token_extent_from(1, 9, "1").unwrap(),
    );
    let key_2 = literal(&mut b, 1, "Key2");
    let value_2 = b.push(
        NodeKind::Other {
            children: Vec::new(),
        },
        b.token_extent_from(1, 19, "2").unwrap(),
    );
    let table = b.push(
        NodeKind::Hashtable {
            entries: vec![
                HashtableEntry {
                    key: key_1,
                    value: value_1,
                },
                HashtableEntry {
                    key: key_2,
                    value: value_2,
                },
            ],
        },
        b.span_extent(1, 1, 1, 24).unwrap(),
    );
    let pipe = b.push(
        NodeKind::Pipeline {
            elements: vec![table],
        },
        b.span_extent(1, 1, 1, 24).unwrap(),
    );
    let root = b.push(
        NodeKind::Script {
            statements: vec![pipe],
        },
        b.span_extent(1, 1, 1, 24).unwrap(),
    );
    b.finish(root)
}

/// One top-level assignment and one inside a function body.
///
/// ```text
/// 1: $topLevel = 1
/// 2: function Set-Thing {
/// 3:     $inner = 2
/// 4: }
/// ```
pub fn scoped_variables_script() -> SyntaxTree {
    let src = "$topLevel = 1\nfunction Set-Thing {\n    $inner = 2\n}";
    let mut b = SyntaxTree::builder(src);

    let top = variable(&mut b, 1, "$topLevel");
    let top_value = b.push(
        NodeKind::Other {
            children: Vec::new(),
        },
        b.token_extent(1, "1").unwrap(),
    );
    let top_assignment = b.push(
        NodeKind::Assignment {
            target: top,
            value: Some(top_value),
        },
        b.span_extent(1, 1, 1, 14).unwrap(),
    );

    let inner = variable(&mut b, 3, "$inner");
    let inner_value = b.push(
        NodeKind::Other {
            children: Vec::new(),
        },
        b.token_extent(3, "2").unwrap(),
    );
    let inner_assignment = b.push(
        NodeKind::Assignment {
            target: inner,
            value: Some(inner_value),
        },
        b.span_extent(3, 5, 3, 15).unwrap(),
    );
    let body = b.push(
        NodeKind::Block {
            statements: vec![inner_assignment],
        },
        b.span_extent(2, 20, 4, 2).unwrap(),
    );
    let decl = b.push(
        NodeKind::FunctionDecl {
            name: "Set-Thing".into(),
            is_workflow: false,
            body: Some(body),
        },
        b.span_extent(2, 1, 4, 2).unwrap(),
    );

    let root = b.push(
        NodeKind::Script {
            statements: vec![top_assignment, decl],
        },
        b.span_extent(1, 1, 4, 2).unwrap(),
    );
    b.finish(root)
}

/// A workflow and a configuration declaration.
///
/// ```text
/// 1: workflow Invoke-Parallel { }
/// 2: configuration WebServer { }
/// ```
pub fn mixed_decls_script() -> SyntaxTree {
    let src = "workflow Invoke-Parallel { }\nconfiguration WebServer { }";
    let mut b = SyntaxTree::builder(src);
    let workflow_body = b.push(
        NodeKind::Block {
            statements: Vec::new(),
        },
        b.token_extent(1, "{ }").unwrap(),
    );
    let workflow = b.push(
        NodeKind::FunctionDecl {
            name: "Invoke-Parallel".into(),
            is_workflow: true,
            body: Some(workflow_body),
        },
        b.span_extent(1, 1, 1, 29).unwrap(),
    );
    let config_body = b.push(
        NodeKind::Block {
            statements: Vec::new(),
        },
        b.token_extent(2, "{ }").unwrap(),
    );
    let configuration = b.push(
        NodeKind::ConfigurationDecl {
            name: "WebServer".into(),
            body: Some(config_body),
        },
        b.span_extent(2, 1, 2, 28).unwrap(),
    );
    let root = b.push(
        NodeKind::Script {
            statements: vec![workflow, configuration],
        },
        b.span_extent(1, 1, 2, 28).unwrap(),
    );
    b.finish(root)
}

/// A dot-sourced include followed by an ordinary command.
///
/// ```text
/// 1: . ./helpers.ps1
/// 2: Get-Helper
/// ```
pub fn dot_source_script() -> SyntaxTree {
    let src = ". ./helpers.ps1\nGet-Helper";
    let mut b = SyntaxTree::builder(src);
    let path = literal(&mut b, 1, "./helpers.ps1");
    let include = b.push(
        NodeKind::Command {
            elements: vec![path],
            is_dot_sourced: true,
        },
        b.span_extent(1, 1, 1, 16).unwrap(),
    );
    let pipe_1 = pipeline(&mut b, vec![include]);
    let call = command(&mut b, 2, "Get-Helper", "Get-Helper");
    let pipe_2 = pipeline(&mut b, vec![call]);
    let root = b.push(
        NodeKind::Script {
            statements: vec![pipe_1, pipe_2],
        },
        b.span_extent(1, 1, 2, 11).unwrap(),
    );
    b.finish(root)
}
