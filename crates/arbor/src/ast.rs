//! The AST node model: a closed, tagged-variant tree of the surface grammar.
//!
//! Nodes come in two top-level families - [`Expr`] and [`Stmt`] - plus a
//! handful of auxiliary kinds (argument lists, comprehension clauses, import
//! aliases, keyword arguments, exception handlers) that are neither but still
//! participate in traversal. Every node carries its concrete kind as the enum
//! discriminant and a [`CodeRange`] source position; children are exclusively
//! owned, and ordered sequences preserve source (and where it differs,
//! evaluation) order.
//!
//! Trees are built by an external parser, or by desugaring passes that
//! synthesize the internal-only kinds ([`LangPrimitive`], [`Invoke`],
//! [`ClsAttribute`], [`Suite`]) which have no surface syntax. The two root
//! kinds ([`Module`] and [`Expression`]) each own the [`InternPool`] that
//! canonicalizes every identifier beneath them.

use std::fmt;

use num_bigint::BigInt;
use smallvec::SmallVec;

use crate::{
    intern::{InternPool, StaticNames, StringId},
    op::Op,
};

/// A line/column pair, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct CodeLoc {
    pub line: u32,
    pub col: u32,
}

/// The source span a node was parsed from.
#[derive(Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct CodeRange {
    start: CodeLoc,
    end: CodeLoc,
}

/// Custom Debug implementation to make displaying nodes much less verbose.
impl fmt::Debug for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl CodeRange {
    /// Creates a new code range from start/end locations.
    #[must_use]
    pub const fn new(start: CodeLoc, end: CodeLoc) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> CodeLoc {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> CodeLoc {
        self.end
    }
}

/// Index of a basic block in an externally-owned block table.
///
/// [`Invoke`] carries two of these as its successor references. This core
/// never allocates, resolves, or frees blocks - the indices are opaque here
/// and meaningful only to the control-flow layer that owns the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockId(u32);

impl BlockId {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The value of a numeric literal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NumKind {
    /// A machine integer literal.
    Int(i64),
    /// An arbitrary-precision integer literal (`10000000000000000000L`).
    Long(BigInt),
    Float(f64),
    /// An imaginary literal (`2.5j`); the real part is implied zero.
    Complex(f64),
}

/// The value of a string literal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrKind {
    /// A plain byte-string literal, data carried inline (not interned - string
    /// literal data is distinct from identifier names).
    Str(String),
    /// A unicode literal. The decoded data is carried but the renderer shows
    /// only a placeholder for it.
    Unicode(String),
}

/// Opcodes for [`LangPrimitive`]: operations with no surface syntax that
/// desugaring passes insert into statement position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Opcode {
    /// Test whether a raised exception matches a handler's type.
    CheckExcMatch,
    /// Materialize the in-flight exception triple at an exceptional edge.
    Landingpad,
    /// The `locals()` namespace snapshot.
    Locals,
    /// Fetch the loop iterator for a desugared `for`.
    GetIter,
    ImportFrom,
    ImportName,
    /// `from module import *`.
    ImportStar,
    /// The `None` constant.
    None,
    /// Truth-test a value.
    Nonzero,
    SetExcInfo,
    UncacheExcInfo,
    /// Probe a loop iterator for a next element.
    Hasnext,
    /// Display an expression-statement result at the interactive prompt.
    PrintExpr,
}

// ---------------------------------------------------------------------------
// Auxiliary node kinds
// ---------------------------------------------------------------------------

/// One name in an import list: `name` or `name as asname`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Alias {
    pub position: CodeRange,
    pub name: StringId,
    pub asname: Option<StringId>,
}

/// A function parameter list.
///
/// Defaults align with the *tail* of `args`: with `nargs` parameters and
/// `ndefault` defaults, parameter `i` takes `defaults[i - (nargs - ndefault)]`
/// when `i >= nargs - ndefault`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Arguments {
    pub position: CodeRange,
    /// Parameter targets, in declaration order (names or unpacking tuples).
    pub args: Vec<Expr>,
    /// Default value expressions for the trailing parameters.
    pub defaults: Vec<Expr>,
    /// The `*args` parameter name node, if present.
    pub vararg: Option<Box<Expr>>,
    /// The `**kwargs` parameter name node, if present.
    pub kwarg: Option<Box<Expr>>,
}

/// A generator clause in a comprehension: `for target in iter [if cond]...`
///
/// One `for` clause with zero or more `if` filters. Multiple clauses nest,
/// the rightmost varying fastest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Comprehension {
    pub position: CodeRange,
    pub target: Expr,
    pub iter: Expr,
    /// Filter conditions, all of which must hold for the element.
    pub ifs: Vec<Expr>,
}

/// One `except` clause of a try/except statement.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExceptHandler {
    pub position: CodeRange,
    /// The exception type to match; a bare `except:` has none.
    pub typ: Option<Expr>,
    /// The `as name` binding target, if present.
    pub name: Option<Expr>,
    pub body: Vec<Stmt>,
}

/// A keyword argument at a call site: `arg=value`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Keyword {
    pub position: CodeRange,
    pub arg: StringId,
    pub value: Box<Expr>,
}

// ---------------------------------------------------------------------------
// Expression node kinds
// ---------------------------------------------------------------------------

/// Attribute access: `value.attr`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    pub position: CodeRange,
    pub value: Box<Expr>,
    pub attr: StringId,
}

/// The binary operation inside an augmented assignment.
///
/// Distinct from [`BinOp`] because the runtime dispatches it through the
/// in-place method name first (`__iadd__` before `__add__`).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AugBinOp {
    pub position: CodeRange,
    pub op: Op,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A binary operation: `left op right`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BinOp {
    pub position: CodeRange,
    pub op: Op,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A boolean connective chain: `a and b and c`.
///
/// `op` must be `Op::And` or `Op::Or`; the operand sequence is ordered and
/// short-circuits left to right at evaluation time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BoolOp {
    pub position: CodeRange,
    pub op: Op,
    pub values: Vec<Expr>,
}

/// A call: `func(args, keywords, *starargs, **kwargs)`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Call {
    pub position: CodeRange,
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
    pub starargs: Option<Box<Expr>>,
    pub kwargs: Option<Box<Expr>>,
}

/// Desugared class-attribute access (`value:attr` in rendered output).
///
/// Internal-only: produced when lowering class bodies, never by the parser.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClsAttribute {
    pub position: CodeRange,
    pub value: Box<Expr>,
    pub attr: StringId,
}

/// A comparison chain: `left op1 c1 op2 c2 ...`.
///
/// `ops` and `comparators` are parallel sequences of equal length. Chains are
/// nearly always a single comparison, so the operator sequence is inlined.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Compare {
    pub position: CodeRange,
    pub left: Box<Expr>,
    pub ops: SmallVec<[Op; 2]>,
    pub comparators: Vec<Expr>,
}

/// A dict literal: `{k1: v1, k2: v2}`.
///
/// `keys` and `values` are parallel sequences; evaluation interleaves them
/// key-then-value, pair by pair, in declaration order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Dict {
    pub position: CodeRange,
    pub keys: Vec<Expr>,
    pub values: Vec<Expr>,
}

/// A dict comprehension: `{key: value for ...}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DictComp {
    pub position: CodeRange,
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// The `...` literal.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Ellipsis {
    pub position: CodeRange,
}

/// An extended (multi-dimensional) subscript: `a[i, 1:2]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtSlice {
    pub position: CodeRange,
    pub dims: Vec<Expr>,
}

/// A generator expression: `(elt for target in iter ...)`.
///
/// Opens a nested scope like a function body does.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneratorExp {
    pub position: CodeRange,
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// A conditional expression: `body if test else orelse`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IfExp {
    pub position: CodeRange,
    pub test: Box<Expr>,
    pub body: Box<Expr>,
    pub orelse: Box<Expr>,
}

/// A plain (non-slice) subscript index wrapper.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Index {
    pub position: CodeRange,
    pub value: Box<Expr>,
}

/// An anonymous function: `lambda args: body`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Lambda {
    pub position: CodeRange,
    pub args: Arguments,
    pub body: Box<Expr>,
}

/// An internal opcode with no surface syntax, rendered `:OPCODE(args...)`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LangPrimitive {
    pub position: CodeRange,
    pub opcode: Opcode,
    pub args: Vec<Expr>,
}

/// A list literal: `[a, b, c]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct List {
    pub position: CodeRange,
    pub elts: Vec<Expr>,
}

/// A list comprehension: `[elt for ...]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListComp {
    pub position: CodeRange,
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// An identifier reference.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Name {
    pub position: CodeRange,
    /// Interned name id - look up in the owning root's pool for the text.
    pub id: StringId,
}

/// A numeric literal.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Num {
    pub position: CodeRange,
    pub value: NumKind,
}

/// A backquote repr expression: `` `value` ``.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Repr {
    pub position: CodeRange,
    pub value: Box<Expr>,
}

/// A set literal: `{a, b}`.
///
/// The empty form is not writable in source (`{}` is a dict) but desugaring
/// produces it; the renderer tags it `SET{}` to keep that visible.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Set {
    pub position: CodeRange,
    pub elts: Vec<Expr>,
}

/// A set comprehension: `{elt for ...}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SetComp {
    pub position: CodeRange,
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// A slice: `lower:upper:step`, each part optional.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Slice {
    pub position: CodeRange,
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
    pub step: Option<Box<Expr>>,
}

/// A string literal.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Str {
    pub position: CodeRange,
    pub value: StrKind,
}

/// A subscript: `value[slice]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Subscript {
    pub position: CodeRange,
    pub value: Box<Expr>,
    pub slice: Box<Expr>,
}

/// A tuple literal: `(a, b)`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Tuple {
    pub position: CodeRange,
    pub elts: Vec<Expr>,
}

/// A unary operation: `op operand`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UnaryOp {
    pub position: CodeRange,
    pub op: Op,
    pub operand: Box<Expr>,
}

/// A yield expression: `yield` or `yield value`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Yield {
    pub position: CodeRange,
    pub value: Option<Box<Expr>>,
}

/// An expression node.
#[derive(Debug, Clone, strum::IntoStaticStr, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    Attribute(Attribute),
    AugBinOp(AugBinOp),
    BinOp(BinOp),
    BoolOp(BoolOp),
    Call(Call),
    ClsAttribute(ClsAttribute),
    Compare(Compare),
    Dict(Dict),
    DictComp(DictComp),
    Ellipsis(Ellipsis),
    ExtSlice(ExtSlice),
    GeneratorExp(GeneratorExp),
    IfExp(IfExp),
    Index(Index),
    Lambda(Lambda),
    LangPrimitive(LangPrimitive),
    List(List),
    ListComp(ListComp),
    Name(Name),
    Num(Num),
    Repr(Repr),
    Set(Set),
    SetComp(SetComp),
    Slice(Slice),
    Str(Str),
    Subscript(Subscript),
    Tuple(Tuple),
    UnaryOp(UnaryOp),
    Yield(Yield),
}

// ---------------------------------------------------------------------------
// Statement node kinds
// ---------------------------------------------------------------------------

/// An assert statement: `assert test` or `assert test, msg`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Assert {
    pub position: CodeRange,
    pub test: Expr,
    pub msg: Option<Expr>,
}

/// An assignment: `target1 = target2 = value`.
///
/// Targets are assigned left to right after the value is computed, so
/// `x = x.a = object()` is valid while the reverse dependency is not;
/// traversal mirrors that by visiting `value` before `targets`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Assign {
    pub position: CodeRange,
    pub targets: Vec<Expr>,
    pub value: Expr,
}

/// An augmented assignment: `target op= value`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AugAssign {
    pub position: CodeRange,
    pub target: Expr,
    pub op: Op,
    pub value: Expr,
}

/// A break statement.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Break {
    pub position: CodeRange,
}

/// A class definition.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClassDef {
    pub position: CodeRange,
    pub name: StringId,
    pub bases: Vec<Expr>,
    pub decorator_list: Vec<Expr>,
    pub body: Vec<Stmt>,
}

/// A continue statement.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Continue {
    pub position: CodeRange,
}

/// A delete statement: `del a, b.c, d[0]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Delete {
    pub position: CodeRange,
    pub targets: Vec<Expr>,
}

/// An exec statement: `exec body in globals, locals`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Exec {
    pub position: CodeRange,
    pub body: Expr,
    pub globals: Option<Expr>,
    pub locals: Option<Expr>,
}

/// A bare expression in statement position.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExprStmt {
    pub position: CodeRange,
    pub value: Expr,
}

/// A for loop: `for target in iter: body [else: orelse]`.
///
/// The iterable is evaluated before the target is bound; traversal follows
/// that order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct For {
    pub position: CodeRange,
    pub target: Expr,
    pub iter: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// A function definition.
///
/// `name` is `None` for anonymous functions synthesized from lambdas; the
/// display-name accessor reports `<lambda>` for those.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionDef {
    pub position: CodeRange,
    pub name: Option<StringId>,
    pub args: Arguments,
    pub decorator_list: Vec<Expr>,
    pub body: Vec<Stmt>,
}

/// A global declaration: `global a, b`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Global {
    pub position: CodeRange,
    pub names: Vec<StringId>,
}

/// An if statement: `if test: body [else: orelse]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct If {
    pub position: CodeRange,
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// An import statement: `import a, b as c`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Import {
    pub position: CodeRange,
    pub names: Vec<Alias>,
}

/// A from-import statement: `from module import a, b as c`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ImportFrom {
    pub position: CodeRange,
    pub module: StringId,
    pub names: Vec<Alias>,
    /// Relative-import depth (number of leading dots); 0 for absolute.
    pub level: u32,
}

/// A statement wrapper attaching control-flow successors.
///
/// Internal-only: produced after control-flow construction to record where
/// execution continues on the normal and the exceptional edge. The block ids
/// index an externally-owned table; this core never resolves them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Invoke {
    pub position: CodeRange,
    pub stmt: Box<Stmt>,
    pub normal_dest: BlockId,
    pub exc_dest: BlockId,
}

/// A pass statement.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Pass {
    pub position: CodeRange,
}

/// A print statement: `print >>dest, values` with optional trailing comma.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Print {
    pub position: CodeRange,
    pub dest: Option<Expr>,
    pub values: Vec<Expr>,
    /// False when the statement ends with a comma (suppresses the newline).
    pub nl: bool,
}

/// A raise statement in the legacy three-argument form:
/// `raise type, value, traceback`, each part optional left to right.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Raise {
    pub position: CodeRange,
    pub arg0: Option<Expr>,
    pub arg1: Option<Expr>,
    pub arg2: Option<Expr>,
}

/// A return statement.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Return {
    pub position: CodeRange,
    pub value: Option<Expr>,
}

/// An internal statement-sequence wrapper used by desugaring passes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Suite {
    pub position: CodeRange,
    pub body: Vec<Stmt>,
}

/// A try/except block with an optional else branch.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TryExcept {
    pub position: CodeRange,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
    pub handlers: Vec<ExceptHandler>,
}

/// A try/finally block.
///
/// `try/except/finally` parses as a `TryFinally` whose body is a single
/// [`TryExcept`]; the renderer fuses that shape back together.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TryFinally {
    pub position: CodeRange,
    pub body: Vec<Stmt>,
    pub finalbody: Vec<Stmt>,
}

/// A while loop: `while test: body [else: orelse]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct While {
    pub position: CodeRange,
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// A with statement: `with context_expr as optional_vars: body`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct With {
    pub position: CodeRange,
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
    pub body: Vec<Stmt>,
}

/// A statement node.
#[derive(Debug, Clone, strum::IntoStaticStr, serde::Serialize, serde::Deserialize)]
pub enum Stmt {
    Assert(Assert),
    Assign(Assign),
    AugAssign(AugAssign),
    Break(Break),
    ClassDef(ClassDef),
    Continue(Continue),
    Delete(Delete),
    Exec(Exec),
    Expr(ExprStmt),
    For(For),
    FunctionDef(FunctionDef),
    Global(Global),
    If(If),
    Import(Import),
    ImportFrom(ImportFrom),
    Invoke(Invoke),
    Pass(Pass),
    Print(Print),
    Raise(Raise),
    Return(Return),
    Suite(Suite),
    TryExcept(TryExcept),
    TryFinally(TryFinally),
    While(While),
    With(With),
}

// ---------------------------------------------------------------------------
// Root node kinds
// ---------------------------------------------------------------------------

/// A module root: a statement sequence plus the identifier pool for
/// everything beneath it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub position: CodeRange,
    pub body: Vec<Stmt>,
    /// Owns every identifier interned under this module; lives exactly as
    /// long as the module does.
    pub interned_strings: InternPool,
}

impl Module {
    #[must_use]
    pub fn new(body: Vec<Stmt>, interned_strings: InternPool) -> Self {
        Self {
            position: CodeRange::default(),
            body,
            interned_strings,
        }
    }
}

/// An eval-mode root: wraps a single statement (normally a bare expression
/// statement) and owns its identifier pool, like [`Module`] does.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Expression {
    pub position: CodeRange,
    pub body: Box<Stmt>,
    /// Owns every identifier interned under this root.
    pub interned_strings: InternPool,
}

impl Expression {
    #[must_use]
    pub fn new(body: Stmt, interned_strings: InternPool) -> Self {
        Self {
            position: CodeRange::default(),
            body: Box::new(body),
            interned_strings,
        }
    }
}

// ---------------------------------------------------------------------------
// The umbrella reference type and uniform accessors
// ---------------------------------------------------------------------------

/// A borrowed reference to any concrete node kind.
///
/// This is the heterogeneous currency of the flatten listing and of the
/// uniform accessors below: later passes receive `AstRef`s and match on the
/// kind they care about, the way the original consumers switched on a node's
/// type tag.
#[derive(Debug, Clone, Copy, strum::IntoStaticStr)]
pub enum AstRef<'ast> {
    Alias(&'ast Alias),
    Arguments(&'ast Arguments),
    Assert(&'ast Assert),
    Assign(&'ast Assign),
    Attribute(&'ast Attribute),
    AugAssign(&'ast AugAssign),
    AugBinOp(&'ast AugBinOp),
    BinOp(&'ast BinOp),
    BoolOp(&'ast BoolOp),
    Break(&'ast Break),
    Call(&'ast Call),
    ClassDef(&'ast ClassDef),
    ClsAttribute(&'ast ClsAttribute),
    Compare(&'ast Compare),
    Comprehension(&'ast Comprehension),
    Continue(&'ast Continue),
    Delete(&'ast Delete),
    Dict(&'ast Dict),
    DictComp(&'ast DictComp),
    Ellipsis(&'ast Ellipsis),
    ExceptHandler(&'ast ExceptHandler),
    Exec(&'ast Exec),
    Expr(&'ast ExprStmt),
    Expression(&'ast Expression),
    ExtSlice(&'ast ExtSlice),
    For(&'ast For),
    FunctionDef(&'ast FunctionDef),
    GeneratorExp(&'ast GeneratorExp),
    Global(&'ast Global),
    If(&'ast If),
    IfExp(&'ast IfExp),
    Import(&'ast Import),
    ImportFrom(&'ast ImportFrom),
    Index(&'ast Index),
    Invoke(&'ast Invoke),
    Keyword(&'ast Keyword),
    Lambda(&'ast Lambda),
    LangPrimitive(&'ast LangPrimitive),
    List(&'ast List),
    ListComp(&'ast ListComp),
    Module(&'ast Module),
    Name(&'ast Name),
    Num(&'ast Num),
    Pass(&'ast Pass),
    Print(&'ast Print),
    Raise(&'ast Raise),
    Repr(&'ast Repr),
    Return(&'ast Return),
    Set(&'ast Set),
    SetComp(&'ast SetComp),
    Slice(&'ast Slice),
    Str(&'ast Str),
    Subscript(&'ast Subscript),
    Suite(&'ast Suite),
    TryExcept(&'ast TryExcept),
    TryFinally(&'ast TryFinally),
    Tuple(&'ast Tuple),
    UnaryOp(&'ast UnaryOp),
    While(&'ast While),
    With(&'ast With),
    Yield(&'ast Yield),
}

impl<'ast> AstRef<'ast> {
    /// The concrete kind name, for diagnostics.
    #[must_use]
    pub fn kind(self) -> &'static str {
        self.into()
    }

    /// Returns the owned statement body of a definition or root node.
    ///
    /// Defined for class definitions, function definitions, modules, and
    /// expression roots.
    ///
    /// # Panics
    ///
    /// Panics for every other node kind: asking a node without a body for one
    /// is a bug in the calling pass, not a data condition.
    #[must_use]
    pub fn body(self) -> &'ast [Stmt] {
        match self {
            Self::ClassDef(node) => &node.body,
            Self::Expression(node) => std::slice::from_ref(&*node.body),
            Self::FunctionDef(node) => &node.body,
            Self::Module(node) => &node.body,
            _ => panic!("no statement body on {} node", self.kind()),
        }
    }

    /// Returns the display name of a definition or root node.
    ///
    /// Class and function definitions report their own name (anonymous
    /// functions report the `<lambda>` placeholder); modules, expression
    /// roots, and suites report `<module>`.
    ///
    /// # Panics
    ///
    /// Panics for every other node kind.
    #[must_use]
    pub fn name(self) -> StringId {
        match self {
            Self::ClassDef(node) => node.name,
            Self::FunctionDef(node) => node.name.unwrap_or_else(|| StaticNames::Lambda.into()),
            Self::Module(_) | Self::Expression(_) | Self::Suite(_) => StaticNames::Module.into(),
            _ => panic!("no display name on {} node", self.kind()),
        }
    }

    /// Returns the intern pool owned by a scope-root node.
    ///
    /// Only modules and expression roots own a pool; every descendant shares
    /// the nearest root's pool by reference.
    ///
    /// # Panics
    ///
    /// Panics for every other node kind.
    #[must_use]
    pub fn string_pool(self) -> &'ast InternPool {
        match self {
            Self::Expression(node) => &node.interned_strings,
            Self::Module(node) => &node.interned_strings,
            _ => panic!("no intern pool on {} node", self.kind()),
        }
    }
}

/// Extracts the leading docstring from a statement body.
///
/// Returns the string data if and only if the first statement is a bare
/// expression statement whose value is a string literal; `None` otherwise
/// (including for an empty body).
#[must_use]
pub fn docstring(body: &[Stmt]) -> Option<&str> {
    if let Some(Stmt::Expr(expr)) = body.first()
        && let Expr::Str(s) = &expr.value
    {
        let (StrKind::Str(data) | StrKind::Unicode(data)) = &s.value;
        return Some(data);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr_stmt(value: Expr) -> Stmt {
        Stmt::Expr(ExprStmt {
            position: CodeRange::default(),
            value,
        })
    }

    fn str_lit(data: &str) -> Expr {
        Expr::Str(Str {
            position: CodeRange::default(),
            value: StrKind::Str(data.to_owned()),
        })
    }

    fn int_lit(n: i64) -> Expr {
        Expr::Num(Num {
            position: CodeRange::default(),
            value: NumKind::Int(n),
        })
    }

    /// Tests that a leading bare string expression is reported as the
    /// docstring.
    #[test]
    fn docstring_present() {
        let body = vec![
            expr_stmt(str_lit("hi")),
            Stmt::Pass(Pass {
                position: CodeRange::default(),
            }),
        ];
        assert_eq!(docstring(&body), Some("hi"));
    }

    /// Tests the no-docstring cases: non-string first statement, non-Expr
    /// first statement, and an empty body.
    #[test]
    fn docstring_absent() {
        assert_eq!(docstring(&[expr_stmt(int_lit(1))]), None);
        assert_eq!(
            docstring(&[Stmt::Pass(Pass {
                position: CodeRange::default(),
            })]),
            None
        );
        assert_eq!(docstring(&[]), None);
    }

    /// Tests the display-name accessor over every kind that has one.
    #[test]
    fn name_accessor() {
        let mut pool = InternPool::new();
        let f_name = pool.intern("factorial");

        let func = FunctionDef {
            position: CodeRange::default(),
            name: Some(f_name),
            args: Arguments::default(),
            decorator_list: vec![],
            body: vec![],
        };
        assert_eq!(AstRef::FunctionDef(&func).name(), f_name);

        let anon = FunctionDef { name: None, ..func };
        assert_eq!(pool.get_str(AstRef::FunctionDef(&anon).name()), "<lambda>");

        let module = Module::new(vec![], pool);
        assert_eq!(
            module.interned_strings.get_str(AstRef::Module(&module).name()),
            "<module>"
        );
    }

    /// Tests that the body accessor covers the expression root's single
    /// wrapped statement.
    #[test]
    fn body_accessor_on_expression_root() {
        let root = Expression::new(expr_stmt(int_lit(3)), InternPool::new());
        assert_eq!(AstRef::Expression(&root).body().len(), 1);
    }

    /// Tests that asking a structurally incompatible node for a body is
    /// fatal.
    #[test]
    #[should_panic(expected = "no statement body on BinOp node")]
    fn body_accessor_wrong_kind_panics() {
        let node = BinOp {
            position: CodeRange::default(),
            op: Op::Add,
            left: Box::new(int_lit(1)),
            right: Box::new(int_lit(2)),
        };
        let _ = AstRef::BinOp(&node).body();
    }

    /// Tests that only scope roots own an intern pool.
    #[test]
    #[should_panic(expected = "no intern pool on FunctionDef node")]
    fn string_pool_wrong_kind_panics() {
        let func = FunctionDef {
            position: CodeRange::default(),
            name: None,
            args: Arguments::default(),
            decorator_list: vec![],
            body: vec![],
        };
        let _ = AstRef::FunctionDef(&func).string_pool();
    }
}
