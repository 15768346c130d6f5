//! Tests for the visitor protocol's dispatch and traversal-order contract.
//!
//! These build small trees by hand, giving each node a distinct source line,
//! and record the (handler, line) sequence a visitor observes. The expected
//! sequences encode the evaluation-order rules: assignment value before
//! targets, for-loop iterable before target, dict keys interleaved with
//! values, dict-comprehension generators before value before key.

use arbor::{
    ast::{
        Alias, Arguments, Assert, Assign, Attribute, AugAssign, AugBinOp, BinOp, BoolOp, Break, Call, ClassDef,
        ClsAttribute, CodeLoc, CodeRange, Compare, Comprehension, Continue, Delete, Dict, DictComp, Ellipsis,
        ExceptHandler, Exec, Expr, ExprStmt, Expression, ExtSlice, For, FunctionDef, GeneratorExp, Global, If, IfExp,
        Import, ImportFrom, Index, Invoke, Keyword, Lambda, LangPrimitive, List, ListComp, Module, Name, Num, NumKind,
        Pass, Print, Raise, Repr, Return, Set, SetComp, Slice, Stmt, Str, Subscript, Suite, TryExcept, TryFinally,
        Tuple, UnaryOp, While, With, Yield,
    },
    flatten::{flatten_expr, flatten_stmts},
    intern::StringId,
    op::Op,
    visit::{Accept, AstVisitor, StmtVisitor, Visit},
};

fn mark(line: u32) -> CodeRange {
    CodeRange::new(CodeLoc { line, col: 0 }, CodeLoc { line, col: 0 })
}

fn name(line: u32) -> Expr {
    Expr::Name(Name {
        position: mark(line),
        id: StringId::from_ascii(b'x'),
    })
}

fn num(line: u32, n: i64) -> Expr {
    Expr::Num(Num {
        position: mark(line),
        value: NumKind::Int(n),
    })
}

fn pass(line: u32) -> Stmt {
    Stmt::Pass(Pass { position: mark(line) })
}

/// Records every handler invocation as (handler name, node line), optionally
/// answering `SkipChildren` for a chosen set of handlers.
#[derive(Default)]
struct Recorder {
    events: Vec<(&'static str, u32)>,
    skip: &'static [&'static str],
}

impl Recorder {
    fn record(&mut self, handler: &'static str, position: CodeRange) -> Visit {
        self.events.push((handler, position.start().line));
        if self.skip.contains(&handler) {
            Visit::SkipChildren
        } else {
            Visit::Continue
        }
    }
}

macro_rules! recorder_handlers {
    ($($method:ident($kind:ty);)*) => {
        $(
            fn $method(&mut self, node: &'ast $kind) -> Visit {
                self.record(stringify!($method), node.position)
            }
        )*
    };
}

impl<'ast> AstVisitor<'ast> for Recorder {
    recorder_handlers! {
        visit_alias(Alias);
        visit_arguments(Arguments);
        visit_assert(Assert);
        visit_assign(Assign);
        visit_attribute(Attribute);
        visit_augassign(AugAssign);
        visit_augbinop(AugBinOp);
        visit_binop(BinOp);
        visit_boolop(BoolOp);
        visit_break(Break);
        visit_call(Call);
        visit_classdef(ClassDef);
        visit_clsattribute(ClsAttribute);
        visit_compare(Compare);
        visit_comprehension(Comprehension);
        visit_continue(Continue);
        visit_delete(Delete);
        visit_dict(Dict);
        visit_dictcomp(DictComp);
        visit_ellipsis(Ellipsis);
        visit_excepthandler(ExceptHandler);
        visit_exec(Exec);
        visit_expr(ExprStmt);
        visit_expression(Expression);
        visit_extslice(ExtSlice);
        visit_for(For);
        visit_functiondef(FunctionDef);
        visit_generatorexp(GeneratorExp);
        visit_global(Global);
        visit_if(If);
        visit_ifexp(IfExp);
        visit_import(Import);
        visit_importfrom(ImportFrom);
        visit_index(Index);
        visit_invoke(Invoke);
        visit_keyword(Keyword);
        visit_lambda(Lambda);
        visit_langprimitive(LangPrimitive);
        visit_list(List);
        visit_listcomp(ListComp);
        visit_module(Module);
        visit_name(Name);
        visit_num(Num);
        visit_pass(Pass);
        visit_print(Print);
        visit_raise(Raise);
        visit_repr(Repr);
        visit_return(Return);
        visit_set(Set);
        visit_setcomp(SetComp);
        visit_slice(Slice);
        visit_str(Str);
        visit_subscript(Subscript);
        visit_suite(Suite);
        visit_tryexcept(TryExcept);
        visit_tryfinally(TryFinally);
        visit_tuple(Tuple);
        visit_unaryop(UnaryOp);
        visit_while(While);
        visit_with(With);
        visit_yield(Yield);
    }
}

/// Records statement-only dispatch events.
#[derive(Default)]
struct StmtRecorder {
    events: Vec<&'static str>,
}

macro_rules! stmt_recorder_handlers {
    ($($method:ident($kind:ty);)*) => {
        $(
            fn $method(&mut self, _node: &'ast $kind) {
                self.events.push(stringify!($method));
            }
        )*
    };
}

impl<'ast> StmtVisitor<'ast> for StmtRecorder {
    stmt_recorder_handlers! {
        visit_assert(Assert);
        visit_assign(Assign);
        visit_augassign(AugAssign);
        visit_break(Break);
        visit_classdef(ClassDef);
        visit_continue(Continue);
        visit_delete(Delete);
        visit_exec(Exec);
        visit_expr(ExprStmt);
        visit_for(For);
        visit_functiondef(FunctionDef);
        visit_global(Global);
        visit_if(If);
        visit_import(Import);
        visit_importfrom(ImportFrom);
        visit_invoke(Invoke);
        visit_pass(Pass);
        visit_print(Print);
        visit_raise(Raise);
        visit_return(Return);
        visit_suite(Suite);
        visit_tryexcept(TryExcept);
        visit_tryfinally(TryFinally);
        visit_while(While);
        visit_with(With);
    }
}

/// The assignment rule: value first, then targets left to right, each node
/// exactly once.
#[test]
fn assign_visits_value_before_targets() {
    let stmt = Stmt::Assign(Assign {
        position: mark(0),
        targets: vec![name(2), name(3)],
        value: num(1, 7),
    });

    let mut recorder = Recorder::default();
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_assign", 0),
            ("visit_num", 1),
            ("visit_name", 2),
            ("visit_name", 3),
        ]
    );
}

/// Augmented assignment also computes the value before touching the target.
#[test]
fn augassign_visits_value_before_target() {
    let stmt = Stmt::AugAssign(AugAssign {
        position: mark(0),
        target: name(2),
        op: Op::Add,
        value: num(1, 1),
    });

    let mut recorder = Recorder::default();
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![("visit_augassign", 0), ("visit_num", 1), ("visit_name", 2)]
    );
}

/// Comparison chains: the left operand, then each comparator in order (the
/// operator kinds are not nodes and produce no events).
#[test]
fn compare_visits_left_then_comparators() {
    let expr = Expr::Compare(Compare {
        position: mark(0),
        left: Box::new(name(1)),
        ops: [Op::Lt, Op::LtE].into_iter().collect(),
        comparators: vec![num(2, 2), num(3, 3)],
    });

    let mut recorder = Recorder::default();
    expr.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_compare", 0),
            ("visit_name", 1),
            ("visit_num", 2),
            ("visit_num", 3),
        ]
    );
}

/// Dict literals interleave each key with its value, pair by pair.
#[test]
fn dict_interleaves_keys_and_values() {
    let expr = Expr::Dict(Dict {
        position: mark(0),
        keys: vec![num(1, 1), num(3, 3)],
        values: vec![num(2, 2), num(4, 4)],
    });

    let mut recorder = Recorder::default();
    expr.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_dict", 0),
            ("visit_num", 1),
            ("visit_num", 2),
            ("visit_num", 3),
            ("visit_num", 4),
        ]
    );
}

/// Dict comprehensions visit the generator clauses first, then the value,
/// then the key - not source order.
#[test]
fn dictcomp_visits_generators_then_value_then_key() {
    let expr = Expr::DictComp(DictComp {
        position: mark(0),
        key: Box::new(name(6)),
        value: Box::new(name(5)),
        generators: vec![Comprehension {
            position: mark(1),
            target: name(2),
            iter: name(3),
            ifs: vec![name(4)],
        }],
    });

    let mut recorder = Recorder::default();
    expr.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_dictcomp", 0),
            ("visit_comprehension", 1),
            ("visit_name", 2),
            ("visit_name", 3),
            ("visit_name", 4),
            ("visit_name", 5),
            ("visit_name", 6),
        ]
    );
}

/// For loops compute the iterable before binding the target.
#[test]
fn for_visits_iter_before_target() {
    let stmt = Stmt::For(For {
        position: mark(0),
        target: name(2),
        iter: name(1),
        body: vec![pass(3)],
        orelse: vec![pass(4)],
    });

    let mut recorder = Recorder::default();
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_for", 0),
            ("visit_name", 1),
            ("visit_name", 2),
            ("visit_pass", 3),
            ("visit_pass", 4),
        ]
    );
}

/// Argument lists visit defaults, then parameters, then the kwarg and
/// vararg names.
#[test]
fn arguments_visit_order() {
    let args = Arguments {
        position: mark(0),
        args: vec![name(2)],
        defaults: vec![num(1, 1)],
        vararg: Some(Box::new(name(4))),
        kwarg: Some(Box::new(name(3))),
    };

    let mut recorder = Recorder::default();
    args.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_arguments", 0),
            ("visit_num", 1),
            ("visit_name", 2),
            ("visit_name", 3),
            ("visit_name", 4),
        ]
    );
}

/// Try/except visits the body, then the else branch, then the handlers.
#[test]
fn tryexcept_visits_body_orelse_handlers() {
    let stmt = Stmt::TryExcept(TryExcept {
        position: mark(0),
        body: vec![pass(1)],
        orelse: vec![pass(2)],
        handlers: vec![ExceptHandler {
            position: mark(3),
            typ: Some(name(4)),
            name: Some(name(5)),
            body: vec![pass(6)],
        }],
    });

    let mut recorder = Recorder::default();
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            ("visit_tryexcept", 0),
            ("visit_pass", 1),
            ("visit_pass", 2),
            ("visit_excepthandler", 3),
            ("visit_name", 4),
            ("visit_name", 5),
            ("visit_pass", 6),
        ]
    );
}

/// A `SkipChildren` verdict suppresses the whole subtree but not siblings.
#[test]
fn skip_children_prunes_subtree_only() {
    let stmt = Stmt::Assign(Assign {
        position: mark(0),
        targets: vec![name(4)],
        value: Expr::BinOp(BinOp {
            position: mark(1),
            op: Op::Add,
            left: Box::new(name(2)),
            right: Box::new(name(3)),
        }),
    });

    let mut recorder = Recorder {
        skip: &["visit_binop"],
        ..Recorder::default()
    };
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![("visit_assign", 0), ("visit_binop", 1), ("visit_name", 4)]
    );
}

/// Name and Num handlers have their verdict ignored: answering SkipChildren
/// changes nothing, and each leaf is still visited exactly once.
#[test]
fn leaf_verdicts_are_ignored() {
    let stmt = Stmt::Assign(Assign {
        position: mark(0),
        targets: vec![name(2)],
        value: num(1, 1),
    });

    let mut recorder = Recorder {
        skip: &["visit_name", "visit_num"],
        ..Recorder::default()
    };
    stmt.accept(&mut recorder);
    assert_eq!(
        recorder.events,
        vec![("visit_assign", 0), ("visit_num", 1), ("visit_name", 2)]
    );
}

/// Statement-only dispatch invokes exactly one handler and never recurses
/// into nested statements or expressions.
#[test]
fn stmt_visitor_is_single_level() {
    let stmt = Stmt::If(If {
        position: mark(0),
        test: name(1),
        body: vec![pass(2), Stmt::Return(Return {
            position: mark(3),
            value: Some(name(4)),
        })],
        orelse: vec![pass(5)],
    });

    let mut recorder = StmtRecorder::default();
    stmt.accept_stmt(&mut recorder);
    assert_eq!(recorder.events, vec!["visit_if"]);
}

/// Flatten lists every reachable node in pre-order.
#[test]
fn flatten_expr_is_preorder() {
    let expr = Expr::BinOp(BinOp {
        position: mark(0),
        op: Op::Mult,
        left: Box::new(name(1)),
        right: Box::new(num(2, 2)),
    });

    let listed = flatten_expr(&expr, true);
    let kinds: Vec<&str> = listed.iter().map(|node| node.kind()).collect();
    assert_eq!(kinds, vec!["BinOp", "Name", "Num"]);
}

/// With scope expansion disabled the function-definition node itself is
/// listed but nothing inside it; enabling expansion lists the whole body.
#[test]
fn flatten_scope_expansion_policy() {
    let func = Stmt::FunctionDef(FunctionDef {
        position: mark(0),
        name: Some(StringId::from_ascii(b'f')),
        args: Arguments {
            position: mark(1),
            ..Arguments::default()
        },
        decorator_list: vec![],
        body: vec![Stmt::Expr(ExprStmt {
            position: mark(2),
            value: num(3, 3),
        })],
    });
    let roots = vec![pass(9), func];

    let unexpanded = flatten_stmts(&roots, false);
    let kinds: Vec<&str> = unexpanded.iter().map(|node| node.kind()).collect();
    assert_eq!(kinds, vec!["Pass", "FunctionDef"]);

    let expanded = flatten_stmts(&roots, true);
    let kinds: Vec<&str> = expanded.iter().map(|node| node.kind()).collect();
    assert_eq!(kinds, vec!["Pass", "FunctionDef", "Arguments", "Expr", "Num"]);
}

/// Lambdas and generator expressions are scope-opening for flatten too.
#[test]
fn flatten_skips_lambda_and_genexp_bodies() {
    let expr = Expr::Call(Call {
        position: mark(0),
        func: Box::new(Expr::Lambda(Lambda {
            position: mark(1),
            args: Arguments {
                position: mark(2),
                ..Arguments::default()
            },
            body: Box::new(name(3)),
        })),
        args: vec![Expr::GeneratorExp(GeneratorExp {
            position: mark(4),
            elt: Box::new(name(5)),
            generators: vec![Comprehension {
                position: mark(6),
                target: name(7),
                iter: name(8),
                ifs: vec![],
            }],
        })],
        keywords: vec![],
        starargs: None,
        kwargs: None,
    });

    let unexpanded = flatten_expr(&expr, false);
    let kinds: Vec<&str> = unexpanded.iter().map(|node| node.kind()).collect();
    assert_eq!(kinds, vec!["Call", "Lambda", "GeneratorExp"]);

    let expanded = flatten_expr(&expr, true);
    let kinds: Vec<&str> = expanded.iter().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "Call",
            "Lambda",
            "Arguments",
            "Name",
            "GeneratorExp",
            "Comprehension",
            "Name",
            "Name",
            "Name",
        ]
    );
}
