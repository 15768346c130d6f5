//! The double-dispatch visitor protocol and its traversal-order contract.
//!
//! Dispatch happens in two steps: [`Accept::accept`] selects the handler
//! matching the node's concrete kind, then the handler's [`Visit`] result
//! decides whether the node's children are descended into. Children are
//! visited in a fixed, kind-specific order that mirrors *evaluation* order,
//! not declaration order, wherever the two differ - an assignment's value is
//! visited before its targets, a for loop's iterable before its target, a
//! dict comprehension's generator clauses before its value and key.
//!
//! [`StmtVisitor`] is the narrower single-level interface: one handler per
//! statement kind, invoked exactly once for exactly that node, with no
//! recursion and no skip signal.
//!
//! The node set is closed, so an exhaustive match in each dispatch point is
//! the corruption backstop: a tree can't carry a kind these matches don't
//! cover.

use crate::ast::{
    Alias, Arguments, Assert, Assign, Attribute, AugAssign, AugBinOp, BinOp, BoolOp, Break, Call, ClassDef,
    ClsAttribute, Compare, Comprehension, Continue, Delete, Dict, DictComp, Ellipsis, ExceptHandler, Exec, Expr,
    ExprStmt, Expression, ExtSlice, For, FunctionDef, GeneratorExp, Global, If, IfExp, Import, ImportFrom, Index,
    Invoke, Keyword, Lambda, LangPrimitive, List, ListComp, Module, Name, Num, Pass, Print, Raise, Repr, Return, Set,
    SetComp, Slice, Stmt, Str, Subscript, Suite, TryExcept, TryFinally, Tuple, UnaryOp, While, With, Yield,
};

/// A handler's verdict on descending into the visited node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the node's children, in the kind-specific order.
    Continue,
    /// Do not descend into this node's children.
    SkipChildren,
}

/// The full visitor: one handler per concrete node kind.
///
/// The `'ast` lifetime ties handler arguments to the visited tree, so
/// visitors may collect node references outliving the individual calls.
pub trait AstVisitor<'ast> {
    fn visit_alias(&mut self, node: &'ast Alias) -> Visit;
    fn visit_arguments(&mut self, node: &'ast Arguments) -> Visit;
    fn visit_assert(&mut self, node: &'ast Assert) -> Visit;
    fn visit_assign(&mut self, node: &'ast Assign) -> Visit;
    fn visit_attribute(&mut self, node: &'ast Attribute) -> Visit;
    fn visit_augassign(&mut self, node: &'ast AugAssign) -> Visit;
    fn visit_augbinop(&mut self, node: &'ast AugBinOp) -> Visit;
    fn visit_binop(&mut self, node: &'ast BinOp) -> Visit;
    fn visit_boolop(&mut self, node: &'ast BoolOp) -> Visit;
    fn visit_break(&mut self, node: &'ast Break) -> Visit;
    fn visit_call(&mut self, node: &'ast Call) -> Visit;
    fn visit_classdef(&mut self, node: &'ast ClassDef) -> Visit;
    fn visit_clsattribute(&mut self, node: &'ast ClsAttribute) -> Visit;
    fn visit_compare(&mut self, node: &'ast Compare) -> Visit;
    fn visit_comprehension(&mut self, node: &'ast Comprehension) -> Visit;
    fn visit_continue(&mut self, node: &'ast Continue) -> Visit;
    fn visit_delete(&mut self, node: &'ast Delete) -> Visit;
    fn visit_dict(&mut self, node: &'ast Dict) -> Visit;
    fn visit_dictcomp(&mut self, node: &'ast DictComp) -> Visit;
    fn visit_ellipsis(&mut self, node: &'ast Ellipsis) -> Visit;
    fn visit_excepthandler(&mut self, node: &'ast ExceptHandler) -> Visit;
    fn visit_exec(&mut self, node: &'ast Exec) -> Visit;
    fn visit_expr(&mut self, node: &'ast ExprStmt) -> Visit;
    fn visit_expression(&mut self, node: &'ast Expression) -> Visit;
    fn visit_extslice(&mut self, node: &'ast ExtSlice) -> Visit;
    fn visit_for(&mut self, node: &'ast For) -> Visit;
    fn visit_functiondef(&mut self, node: &'ast FunctionDef) -> Visit;
    fn visit_generatorexp(&mut self, node: &'ast GeneratorExp) -> Visit;
    fn visit_global(&mut self, node: &'ast Global) -> Visit;
    fn visit_if(&mut self, node: &'ast If) -> Visit;
    fn visit_ifexp(&mut self, node: &'ast IfExp) -> Visit;
    fn visit_import(&mut self, node: &'ast Import) -> Visit;
    fn visit_importfrom(&mut self, node: &'ast ImportFrom) -> Visit;
    fn visit_index(&mut self, node: &'ast Index) -> Visit;
    fn visit_invoke(&mut self, node: &'ast Invoke) -> Visit;
    fn visit_keyword(&mut self, node: &'ast Keyword) -> Visit;
    fn visit_lambda(&mut self, node: &'ast Lambda) -> Visit;
    fn visit_langprimitive(&mut self, node: &'ast LangPrimitive) -> Visit;
    fn visit_list(&mut self, node: &'ast List) -> Visit;
    fn visit_listcomp(&mut self, node: &'ast ListComp) -> Visit;
    fn visit_module(&mut self, node: &'ast Module) -> Visit;
    fn visit_name(&mut self, node: &'ast Name) -> Visit;
    fn visit_num(&mut self, node: &'ast Num) -> Visit;
    fn visit_pass(&mut self, node: &'ast Pass) -> Visit;
    fn visit_print(&mut self, node: &'ast Print) -> Visit;
    fn visit_raise(&mut self, node: &'ast Raise) -> Visit;
    fn visit_repr(&mut self, node: &'ast Repr) -> Visit;
    fn visit_return(&mut self, node: &'ast Return) -> Visit;
    fn visit_set(&mut self, node: &'ast Set) -> Visit;
    fn visit_setcomp(&mut self, node: &'ast SetComp) -> Visit;
    fn visit_slice(&mut self, node: &'ast Slice) -> Visit;
    fn visit_str(&mut self, node: &'ast Str) -> Visit;
    fn visit_subscript(&mut self, node: &'ast Subscript) -> Visit;
    fn visit_suite(&mut self, node: &'ast Suite) -> Visit;
    fn visit_tryexcept(&mut self, node: &'ast TryExcept) -> Visit;
    fn visit_tryfinally(&mut self, node: &'ast TryFinally) -> Visit;
    fn visit_tuple(&mut self, node: &'ast Tuple) -> Visit;
    fn visit_unaryop(&mut self, node: &'ast UnaryOp) -> Visit;
    fn visit_while(&mut self, node: &'ast While) -> Visit;
    fn visit_with(&mut self, node: &'ast With) -> Visit;
    fn visit_yield(&mut self, node: &'ast Yield) -> Visit;
}

/// The statement-only visitor: one handler per statement kind.
///
/// Used by callers that need single-level dispatch on statements without a
/// whole-tree traversal contract. [`Stmt::accept_stmt`] invokes exactly one
/// handler for exactly the given node and never recurses.
pub trait StmtVisitor<'ast> {
    fn visit_assert(&mut self, node: &'ast Assert);
    fn visit_assign(&mut self, node: &'ast Assign);
    fn visit_augassign(&mut self, node: &'ast AugAssign);
    fn visit_break(&mut self, node: &'ast Break);
    fn visit_classdef(&mut self, node: &'ast ClassDef);
    fn visit_continue(&mut self, node: &'ast Continue);
    fn visit_delete(&mut self, node: &'ast Delete);
    fn visit_exec(&mut self, node: &'ast Exec);
    fn visit_expr(&mut self, node: &'ast ExprStmt);
    fn visit_for(&mut self, node: &'ast For);
    fn visit_functiondef(&mut self, node: &'ast FunctionDef);
    fn visit_global(&mut self, node: &'ast Global);
    fn visit_if(&mut self, node: &'ast If);
    fn visit_import(&mut self, node: &'ast Import);
    fn visit_importfrom(&mut self, node: &'ast ImportFrom);
    fn visit_invoke(&mut self, node: &'ast Invoke);
    fn visit_pass(&mut self, node: &'ast Pass);
    fn visit_print(&mut self, node: &'ast Print);
    fn visit_raise(&mut self, node: &'ast Raise);
    fn visit_return(&mut self, node: &'ast Return);
    fn visit_suite(&mut self, node: &'ast Suite);
    fn visit_tryexcept(&mut self, node: &'ast TryExcept);
    fn visit_tryfinally(&mut self, node: &'ast TryFinally);
    fn visit_while(&mut self, node: &'ast While);
    fn visit_with(&mut self, node: &'ast With);
}

/// Entry point of the double dispatch: every node kind knows how to hand
/// itself to a visitor and, unless told to skip, its children after it.
pub trait Accept {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V);
}

fn visit_vec<'ast, T: Accept, V: AstVisitor<'ast>>(nodes: &'ast [T], visitor: &mut V) {
    for node in nodes {
        node.accept(visitor);
    }
}

fn visit_opt<'ast, T: Accept, V: AstVisitor<'ast>>(node: Option<&'ast T>, visitor: &mut V) {
    if let Some(node) = node {
        node.accept(visitor);
    }
}

impl Accept for Expr {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        match self {
            Self::Attribute(node) => node.accept(visitor),
            Self::AugBinOp(node) => node.accept(visitor),
            Self::BinOp(node) => node.accept(visitor),
            Self::BoolOp(node) => node.accept(visitor),
            Self::Call(node) => node.accept(visitor),
            Self::ClsAttribute(node) => node.accept(visitor),
            Self::Compare(node) => node.accept(visitor),
            Self::Dict(node) => node.accept(visitor),
            Self::DictComp(node) => node.accept(visitor),
            Self::Ellipsis(node) => node.accept(visitor),
            Self::ExtSlice(node) => node.accept(visitor),
            Self::GeneratorExp(node) => node.accept(visitor),
            Self::IfExp(node) => node.accept(visitor),
            Self::Index(node) => node.accept(visitor),
            Self::Lambda(node) => node.accept(visitor),
            Self::LangPrimitive(node) => node.accept(visitor),
            Self::List(node) => node.accept(visitor),
            Self::ListComp(node) => node.accept(visitor),
            Self::Name(node) => node.accept(visitor),
            Self::Num(node) => node.accept(visitor),
            Self::Repr(node) => node.accept(visitor),
            Self::Set(node) => node.accept(visitor),
            Self::SetComp(node) => node.accept(visitor),
            Self::Slice(node) => node.accept(visitor),
            Self::Str(node) => node.accept(visitor),
            Self::Subscript(node) => node.accept(visitor),
            Self::Tuple(node) => node.accept(visitor),
            Self::UnaryOp(node) => node.accept(visitor),
            Self::Yield(node) => node.accept(visitor),
        }
    }
}

impl Accept for Stmt {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        match self {
            Self::Assert(node) => node.accept(visitor),
            Self::Assign(node) => node.accept(visitor),
            Self::AugAssign(node) => node.accept(visitor),
            Self::Break(node) => node.accept(visitor),
            Self::ClassDef(node) => node.accept(visitor),
            Self::Continue(node) => node.accept(visitor),
            Self::Delete(node) => node.accept(visitor),
            Self::Exec(node) => node.accept(visitor),
            Self::Expr(node) => node.accept(visitor),
            Self::For(node) => node.accept(visitor),
            Self::FunctionDef(node) => node.accept(visitor),
            Self::Global(node) => node.accept(visitor),
            Self::If(node) => node.accept(visitor),
            Self::Import(node) => node.accept(visitor),
            Self::ImportFrom(node) => node.accept(visitor),
            Self::Invoke(node) => node.accept(visitor),
            Self::Pass(node) => node.accept(visitor),
            Self::Print(node) => node.accept(visitor),
            Self::Raise(node) => node.accept(visitor),
            Self::Return(node) => node.accept(visitor),
            Self::Suite(node) => node.accept(visitor),
            Self::TryExcept(node) => node.accept(visitor),
            Self::TryFinally(node) => node.accept(visitor),
            Self::While(node) => node.accept(visitor),
            Self::With(node) => node.accept(visitor),
        }
    }
}

impl Stmt {
    /// Single-level statement dispatch: invokes the matching [`StmtVisitor`]
    /// handler exactly once and does not recurse.
    pub fn accept_stmt<'ast, V: StmtVisitor<'ast>>(&'ast self, visitor: &mut V) {
        match self {
            Self::Assert(node) => visitor.visit_assert(node),
            Self::Assign(node) => visitor.visit_assign(node),
            Self::AugAssign(node) => visitor.visit_augassign(node),
            Self::Break(node) => visitor.visit_break(node),
            Self::ClassDef(node) => visitor.visit_classdef(node),
            Self::Continue(node) => visitor.visit_continue(node),
            Self::Delete(node) => visitor.visit_delete(node),
            Self::Exec(node) => visitor.visit_exec(node),
            Self::Expr(node) => visitor.visit_expr(node),
            Self::For(node) => visitor.visit_for(node),
            Self::FunctionDef(node) => visitor.visit_functiondef(node),
            Self::Global(node) => visitor.visit_global(node),
            Self::If(node) => visitor.visit_if(node),
            Self::Import(node) => visitor.visit_import(node),
            Self::ImportFrom(node) => visitor.visit_importfrom(node),
            Self::Invoke(node) => visitor.visit_invoke(node),
            Self::Pass(node) => visitor.visit_pass(node),
            Self::Print(node) => visitor.visit_print(node),
            Self::Raise(node) => visitor.visit_raise(node),
            Self::Return(node) => visitor.visit_return(node),
            Self::Suite(node) => visitor.visit_suite(node),
            Self::TryExcept(node) => visitor.visit_tryexcept(node),
            Self::TryFinally(node) => visitor.visit_tryfinally(node),
            Self::While(node) => visitor.visit_while(node),
            Self::With(node) => visitor.visit_with(node),
        }
    }
}

impl Accept for Alias {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        let _ = visitor.visit_alias(self);
    }
}

impl Accept for Arguments {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_arguments(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.defaults, visitor);
        visit_vec(&self.args, visitor);
        visit_opt(self.kwarg.as_deref(), visitor);
        visit_opt(self.vararg.as_deref(), visitor);
    }
}

impl Accept for Assert {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_assert(self) == Visit::SkipChildren {
            return;
        }
        self.test.accept(visitor);
        visit_opt(self.msg.as_ref(), visitor);
    }
}

impl Accept for Assign {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_assign(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
        // Targets are assigned to left-to-right, so this is valid:
        // x = x.a = object()
        // but this is not:
        // x.a = x = object()
        visit_vec(&self.targets, visitor);
    }
}

impl Accept for Attribute {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_attribute(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for AugAssign {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_augassign(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
        self.target.accept(visitor);
    }
}

impl Accept for AugBinOp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_augbinop(self) == Visit::SkipChildren {
            return;
        }
        self.left.accept(visitor);
        self.right.accept(visitor);
    }
}

impl Accept for BinOp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_binop(self) == Visit::SkipChildren {
            return;
        }
        self.left.accept(visitor);
        self.right.accept(visitor);
    }
}

impl Accept for BoolOp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_boolop(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.values, visitor);
    }
}

impl Accept for Break {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        let _ = visitor.visit_break(self);
    }
}

impl Accept for Call {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_call(self) == Visit::SkipChildren {
            return;
        }
        self.func.accept(visitor);
        visit_vec(&self.args, visitor);
        visit_vec(&self.keywords, visitor);
        visit_opt(self.starargs.as_deref(), visitor);
        visit_opt(self.kwargs.as_deref(), visitor);
    }
}

impl Accept for ClassDef {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_classdef(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.bases, visitor);
        visit_vec(&self.decorator_list, visitor);
        visit_vec(&self.body, visitor);
    }
}

impl Accept for ClsAttribute {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_clsattribute(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for Compare {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_compare(self) == Visit::SkipChildren {
            return;
        }
        self.left.accept(visitor);
        visit_vec(&self.comparators, visitor);
    }
}

impl Accept for Comprehension {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_comprehension(self) == Visit::SkipChildren {
            return;
        }
        self.target.accept(visitor);
        self.iter.accept(visitor);
        visit_vec(&self.ifs, visitor);
    }
}

impl Accept for Continue {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        let _ = visitor.visit_continue(self);
    }
}

impl Accept for Delete {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_delete(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.targets, visitor);
    }
}

impl Accept for Dict {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_dict(self) == Visit::SkipChildren {
            return;
        }
        // each key immediately followed by its value, pair by pair
        for (key, value) in self.keys.iter().zip(&self.values) {
            key.accept(visitor);
            value.accept(visitor);
        }
    }
}

impl Accept for DictComp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_dictcomp(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.generators, visitor);
        self.value.accept(visitor);
        self.key.accept(visitor);
    }
}

impl Accept for Ellipsis {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        let _ = visitor.visit_ellipsis(self);
    }
}

impl Accept for ExceptHandler {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_excepthandler(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.typ.as_ref(), visitor);
        visit_opt(self.name.as_ref(), visitor);
        visit_vec(&self.body, visitor);
    }
}

impl Accept for Exec {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_exec(self) == Visit::SkipChildren {
            return;
        }
        self.body.accept(visitor);
        visit_opt(self.globals.as_ref(), visitor);
        visit_opt(self.locals.as_ref(), visitor);
    }
}

impl Accept for ExprStmt {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_expr(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for Expression {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_expression(self) == Visit::SkipChildren {
            return;
        }
        self.body.accept(visitor);
    }
}

impl Accept for ExtSlice {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_extslice(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.dims, visitor);
    }
}

impl Accept for For {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_for(self) == Visit::SkipChildren {
            return;
        }
        // the iterable is computed before the loop target is bound
        self.iter.accept(visitor);
        self.target.accept(visitor);
        visit_vec(&self.body, visitor);
        visit_vec(&self.orelse, visitor);
    }
}

impl Accept for FunctionDef {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_functiondef(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.decorator_list, visitor);
        self.args.accept(visitor);
        visit_vec(&self.body, visitor);
    }
}

impl Accept for GeneratorExp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_generatorexp(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.generators, visitor);
        self.elt.accept(visitor);
    }
}

impl Accept for Global {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        let _ = visitor.visit_global(self);
    }
}

impl Accept for If {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_if(self) == Visit::SkipChildren {
            return;
        }
        self.test.accept(visitor);
        visit_vec(&self.body, visitor);
        visit_vec(&self.orelse, visitor);
    }
}

impl Accept for IfExp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_ifexp(self) == Visit::SkipChildren {
            return;
        }
        self.test.accept(visitor);
        self.body.accept(visitor);
        self.orelse.accept(visitor);
    }
}

impl Accept for Import {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_import(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.names, visitor);
    }
}

impl Accept for ImportFrom {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_importfrom(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.names, visitor);
    }
}

impl Accept for Index {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_index(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for Invoke {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_invoke(self) == Visit::SkipChildren {
            return;
        }
        self.stmt.accept(visitor);
    }
}

impl Accept for Keyword {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_keyword(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for Lambda {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_lambda(self) == Visit::SkipChildren {
            return;
        }
        self.args.accept(visitor);
        self.body.accept(visitor);
    }
}

impl Accept for LangPrimitive {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_langprimitive(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.args, visitor);
    }
}

impl Accept for List {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_list(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.elts, visitor);
    }
}

impl Accept for ListComp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_listcomp(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.generators, visitor);
        self.elt.accept(visitor);
    }
}

impl Accept for Module {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_module(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.body, visitor);
    }
}

impl Accept for Name {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        // No children to skip: the handler's Visit result is deliberately
        // ignored. Dependents rely on descent never happening here, so this
        // stays as documented behavior rather than being "fixed".
        let _ = visitor.visit_name(self);
    }
}

impl Accept for Num {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        // Same ignored-result contract as Name.
        let _ = visitor.visit_num(self);
    }
}

impl Accept for Pass {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        // Same ignored-result contract as Name.
        let _ = visitor.visit_pass(self);
    }
}

impl Accept for Print {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_print(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.dest.as_ref(), visitor);
        visit_vec(&self.values, visitor);
    }
}

impl Accept for Raise {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_raise(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.arg0.as_ref(), visitor);
        visit_opt(self.arg1.as_ref(), visitor);
        visit_opt(self.arg2.as_ref(), visitor);
    }
}

impl Accept for Repr {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_repr(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
    }
}

impl Accept for Return {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_return(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.value.as_ref(), visitor);
    }
}

impl Accept for Set {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_set(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.elts, visitor);
    }
}

impl Accept for SetComp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_setcomp(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.generators, visitor);
        self.elt.accept(visitor);
    }
}

impl Accept for Slice {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_slice(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.lower.as_deref(), visitor);
        visit_opt(self.upper.as_deref(), visitor);
        visit_opt(self.step.as_deref(), visitor);
    }
}

impl Accept for Str {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_str(self) == Visit::SkipChildren {
            return;
        }
    }
}

impl Accept for Subscript {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_subscript(self) == Visit::SkipChildren {
            return;
        }
        self.value.accept(visitor);
        self.slice.accept(visitor);
    }
}

impl Accept for Suite {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_suite(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.body, visitor);
    }
}

impl Accept for TryExcept {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_tryexcept(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.body, visitor);
        visit_vec(&self.orelse, visitor);
        visit_vec(&self.handlers, visitor);
    }
}

impl Accept for TryFinally {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_tryfinally(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.body, visitor);
        visit_vec(&self.finalbody, visitor);
    }
}

impl Accept for Tuple {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_tuple(self) == Visit::SkipChildren {
            return;
        }
        visit_vec(&self.elts, visitor);
    }
}

impl Accept for UnaryOp {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_unaryop(self) == Visit::SkipChildren {
            return;
        }
        self.operand.accept(visitor);
    }
}

impl Accept for While {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_while(self) == Visit::SkipChildren {
            return;
        }
        self.test.accept(visitor);
        visit_vec(&self.body, visitor);
        visit_vec(&self.orelse, visitor);
    }
}

impl Accept for With {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_with(self) == Visit::SkipChildren {
            return;
        }
        self.context_expr.accept(visitor);
        visit_opt(self.optional_vars.as_ref(), visitor);
        visit_vec(&self.body, visitor);
    }
}

impl Accept for Yield {
    fn accept<'ast, V: AstVisitor<'ast>>(&'ast self, visitor: &mut V) {
        if visitor.visit_yield(self) == Visit::SkipChildren {
            return;
        }
        visit_opt(self.value.as_deref(), visitor);
    }
}

impl<'ast> crate::ast::AstRef<'ast> {
    /// Dispatches `accept` on whichever concrete node this reference holds.
    pub fn accept<V: AstVisitor<'ast>>(self, visitor: &mut V) {
        match self {
            Self::Alias(node) => node.accept(visitor),
            Self::Arguments(node) => node.accept(visitor),
            Self::Assert(node) => node.accept(visitor),
            Self::Assign(node) => node.accept(visitor),
            Self::Attribute(node) => node.accept(visitor),
            Self::AugAssign(node) => node.accept(visitor),
            Self::AugBinOp(node) => node.accept(visitor),
            Self::BinOp(node) => node.accept(visitor),
            Self::BoolOp(node) => node.accept(visitor),
            Self::Break(node) => node.accept(visitor),
            Self::Call(node) => node.accept(visitor),
            Self::ClassDef(node) => node.accept(visitor),
            Self::ClsAttribute(node) => node.accept(visitor),
            Self::Compare(node) => node.accept(visitor),
            Self::Comprehension(node) => node.accept(visitor),
            Self::Continue(node) => node.accept(visitor),
            Self::Delete(node) => node.accept(visitor),
            Self::Dict(node) => node.accept(visitor),
            Self::DictComp(node) => node.accept(visitor),
            Self::Ellipsis(node) => node.accept(visitor),
            Self::ExceptHandler(node) => node.accept(visitor),
            Self::Exec(node) => node.accept(visitor),
            Self::Expr(node) => node.accept(visitor),
            Self::Expression(node) => node.accept(visitor),
            Self::ExtSlice(node) => node.accept(visitor),
            Self::For(node) => node.accept(visitor),
            Self::FunctionDef(node) => node.accept(visitor),
            Self::GeneratorExp(node) => node.accept(visitor),
            Self::Global(node) => node.accept(visitor),
            Self::If(node) => node.accept(visitor),
            Self::IfExp(node) => node.accept(visitor),
            Self::Import(node) => node.accept(visitor),
            Self::ImportFrom(node) => node.accept(visitor),
            Self::Index(node) => node.accept(visitor),
            Self::Invoke(node) => node.accept(visitor),
            Self::Keyword(node) => node.accept(visitor),
            Self::Lambda(node) => node.accept(visitor),
            Self::LangPrimitive(node) => node.accept(visitor),
            Self::List(node) => node.accept(visitor),
            Self::ListComp(node) => node.accept(visitor),
            Self::Module(node) => node.accept(visitor),
            Self::Name(node) => node.accept(visitor),
            Self::Num(node) => node.accept(visitor),
            Self::Pass(node) => node.accept(visitor),
            Self::Print(node) => node.accept(visitor),
            Self::Raise(node) => node.accept(visitor),
            Self::Repr(node) => node.accept(visitor),
            Self::Return(node) => node.accept(visitor),
            Self::Set(node) => node.accept(visitor),
            Self::SetComp(node) => node.accept(visitor),
            Self::Slice(node) => node.accept(visitor),
            Self::Str(node) => node.accept(visitor),
            Self::Subscript(node) => node.accept(visitor),
            Self::Suite(node) => node.accept(visitor),
            Self::TryExcept(node) => node.accept(visitor),
            Self::TryFinally(node) => node.accept(visitor),
            Self::Tuple(node) => node.accept(visitor),
            Self::UnaryOp(node) => node.accept(visitor),
            Self::While(node) => node.accept(visitor),
            Self::With(node) => node.accept(visitor),
            Self::Yield(node) => node.accept(visitor),
        }
    }
}
