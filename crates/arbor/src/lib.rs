//! Arbor is the surface-grammar AST core of a Python (2.x dialect) compiler
//! front end: the in-memory tree node model, its double-dispatch visitor
//! protocol, a pre-order flattening utility, a best-effort source renderer,
//! and the operator tables that map syntactic operators to the special
//! method names the runtime dispatches operator overloading through.
//!
//! Trees come from an external parser (or from desugaring passes that
//! synthesize the internal-only node kinds) and are consumed by later
//! compiler phases through the visitor interfaces; this crate never executes
//! code or allocates runtime values. Contract violations - accessors invoked
//! on structurally incompatible node kinds, operator lookups outside their
//! documented domain - are fatal panics, not recoverable errors: they signal
//! a bug in the tree producer, and there is no recovery path.

pub mod ast;
pub mod flatten;
pub mod intern;
pub mod op;
pub mod render;
pub mod visit;

pub use crate::{
    ast::{AstRef, CodeLoc, CodeRange, Expr, Module, Stmt, docstring},
    flatten::{flatten_expr, flatten_stmts},
    intern::{InternPool, StaticNames, StringId},
    op::{Op, inplace_op_name, inplace_op_symbol, op_name, op_symbol, reverse_cmp_op, reverse_op_name},
    render::{AstPrintVisitor, CollectString, DiscardSink, RenderSink, StdoutSink, print_ast},
    visit::{Accept, AstVisitor, StmtVisitor, Visit},
};
