//! Pre-order flattening of a tree into an eager node listing.
//!
//! `flatten_stmts`/`flatten_expr` produce the full pre-order sequence of all
//! nodes reachable from the given root(s) under the visitor protocol's
//! traversal order. The `expand_scopes` policy controls whether traversal
//! descends into scope-opening nodes: when disabled, the scope-opening node
//! itself is still listed but its contents are not, which is what passes
//! operating on one lexical unit at a time want.

use crate::{
    ast::{
        Alias, Arguments, Assert, Assign, AstRef, Attribute, AugAssign, AugBinOp, BinOp, BoolOp, Break, Call,
        ClassDef, ClsAttribute, Compare, Comprehension, Continue, Delete, Dict, DictComp, Ellipsis, ExceptHandler,
        Exec, Expr, ExprStmt, Expression, ExtSlice, For, FunctionDef, GeneratorExp, Global, If, IfExp, Import,
        ImportFrom, Index, Invoke, Keyword, Lambda, LangPrimitive, List, ListComp, Module, Name, Num, Pass, Print,
        Raise, Repr, Return, Set, SetComp, Slice, Stmt, Str, Subscript, Suite, TryExcept, TryFinally, Tuple, UnaryOp,
        While, With, Yield,
    },
    visit::{Accept, AstVisitor, Visit},
};

/// Generates the listing handlers that always descend.
macro_rules! flatten_listed {
    ($($method:ident($kind:ty) => $variant:ident;)*) => {
        $(
            fn $method(&mut self, node: &'ast $kind) -> Visit {
                self.output.push(AstRef::$variant(node));
                Visit::Continue
            }
        )*
    };
}

/// Generates the listing handlers for scope-opening kinds, which descend
/// only when the expansion policy says to.
macro_rules! flatten_scoped {
    ($($method:ident($kind:ty) => $variant:ident;)*) => {
        $(
            fn $method(&mut self, node: &'ast $kind) -> Visit {
                self.output.push(AstRef::$variant(node));
                self.scope_policy()
            }
        )*
    };
}

/// Collects every visited node in pre-order.
struct FlattenVisitor<'ast> {
    output: Vec<AstRef<'ast>>,
    expand_scopes: bool,
}

impl FlattenVisitor<'_> {
    fn new(expand_scopes: bool) -> Self {
        Self {
            output: Vec::new(),
            expand_scopes,
        }
    }

    fn scope_policy(&self) -> Visit {
        if self.expand_scopes {
            Visit::Continue
        } else {
            Visit::SkipChildren
        }
    }
}

impl<'ast> AstVisitor<'ast> for FlattenVisitor<'ast> {
    flatten_listed! {
        visit_alias(Alias) => Alias;
        visit_arguments(Arguments) => Arguments;
        visit_assert(Assert) => Assert;
        visit_assign(Assign) => Assign;
        visit_attribute(Attribute) => Attribute;
        visit_augassign(AugAssign) => AugAssign;
        visit_augbinop(AugBinOp) => AugBinOp;
        visit_binop(BinOp) => BinOp;
        visit_boolop(BoolOp) => BoolOp;
        visit_break(Break) => Break;
        visit_call(Call) => Call;
        visit_clsattribute(ClsAttribute) => ClsAttribute;
        visit_compare(Compare) => Compare;
        visit_comprehension(Comprehension) => Comprehension;
        visit_continue(Continue) => Continue;
        visit_delete(Delete) => Delete;
        visit_dict(Dict) => Dict;
        visit_dictcomp(DictComp) => DictComp;
        visit_ellipsis(Ellipsis) => Ellipsis;
        visit_excepthandler(ExceptHandler) => ExceptHandler;
        visit_exec(Exec) => Exec;
        visit_expr(ExprStmt) => Expr;
        visit_extslice(ExtSlice) => ExtSlice;
        visit_global(Global) => Global;
        visit_if(If) => If;
        visit_ifexp(IfExp) => IfExp;
        visit_import(Import) => Import;
        visit_importfrom(ImportFrom) => ImportFrom;
        visit_index(Index) => Index;
        visit_invoke(Invoke) => Invoke;
        visit_keyword(Keyword) => Keyword;
        visit_langprimitive(LangPrimitive) => LangPrimitive;
        visit_list(List) => List;
        visit_listcomp(ListComp) => ListComp;
        visit_name(Name) => Name;
        visit_num(Num) => Num;
        visit_pass(Pass) => Pass;
        visit_print(Print) => Print;
        visit_raise(Raise) => Raise;
        visit_repr(Repr) => Repr;
        visit_return(Return) => Return;
        visit_set(Set) => Set;
        visit_setcomp(SetComp) => SetComp;
        visit_slice(Slice) => Slice;
        visit_str(Str) => Str;
        visit_subscript(Subscript) => Subscript;
        visit_suite(Suite) => Suite;
        visit_tryexcept(TryExcept) => TryExcept;
        visit_tryfinally(TryFinally) => TryFinally;
        visit_tuple(Tuple) => Tuple;
        visit_unaryop(UnaryOp) => UnaryOp;
        visit_while(While) => While;
        visit_with(With) => With;
        visit_yield(Yield) => Yield;
    }

    flatten_scoped! {
        visit_classdef(ClassDef) => ClassDef;
        visit_expression(Expression) => Expression;
        visit_for(For) => For;
        visit_functiondef(FunctionDef) => FunctionDef;
        visit_generatorexp(GeneratorExp) => GeneratorExp;
        visit_lambda(Lambda) => Lambda;
        visit_module(Module) => Module;
    }
}

/// Flattens a sequence of statement roots into a single pre-order listing.
#[must_use]
pub fn flatten_stmts<'ast>(roots: &'ast [Stmt], expand_scopes: bool) -> Vec<AstRef<'ast>> {
    let mut visitor = FlattenVisitor::new(expand_scopes);
    for root in roots {
        root.accept(&mut visitor);
    }
    visitor.output
}

/// Flattens an expression root into a pre-order listing.
#[must_use]
pub fn flatten_expr(root: &Expr, expand_scopes: bool) -> Vec<AstRef<'_>> {
    let mut visitor = FlattenVisitor::new(expand_scopes);
    root.accept(&mut visitor);
    visitor.output
}
