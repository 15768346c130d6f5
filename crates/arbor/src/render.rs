//! Best-effort source rendering of a tree, for diagnostics.
//!
//! [`AstPrintVisitor`] is a concrete full visitor that reconstructs
//! approximate surface syntax into a caller-supplied [`RenderSink`]. The
//! output is a debugging aid, not a serialization format: internal node
//! kinds render with markers that are not valid surface syntax (`:OPCODE`,
//! `invoke`, `SET{}`, `<for loop>`), and no round-trip is guaranteed.
//!
//! The only mutable rendering state is the indentation level, incremented
//! and decremented symmetrically around each nested block.

use crate::{
    ast::{
        Alias, Arguments, Assert, Assign, AstRef, Attribute, AugAssign, AugBinOp, BinOp, BoolOp, Break, Call,
        ClassDef, ClsAttribute, Compare, Comprehension, Continue, Delete, Dict, DictComp, Ellipsis, ExceptHandler,
        Exec, ExprStmt, Expression, ExtSlice, For, FunctionDef, GeneratorExp, Global, If, IfExp, Import, ImportFrom,
        Index, Invoke, Keyword, Lambda, LangPrimitive, List, ListComp, Module, Name, Num, NumKind, Pass, Print, Raise,
        Repr, Return, Set, SetComp, Slice, Stmt, Str, StrKind, Subscript, Suite, TryExcept, TryFinally, Tuple,
        UnaryOp, While, With, Yield,
    },
    intern::InternPool,
    op::{Op, op_symbol},
    visit::{Accept, AstVisitor, Visit},
};

/// Where rendered text goes.
///
/// Implement this to capture or redirect renderer output. Rendering is
/// infallible: sinks buffer or discard, they don't report errors.
pub trait RenderSink {
    /// Appends a string fragment to the sink.
    fn write_str(&mut self, s: &str);

    /// Appends a single character to the sink.
    ///
    /// Generally called for separators, indentation, and newlines.
    fn write_char(&mut self, c: char);
}

/// Default sink that buffers output and writes it to stdout when dropped.
#[derive(Debug, Default)]
pub struct StdoutSink {
    buffer: String,
}

impl StdoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the buffered output to stdout and clears the buffer.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        print!("{}", self.buffer);
        self.buffer.clear();
    }
}

impl RenderSink for StdoutSink {
    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.buffer.push(c);
    }
}

impl Drop for StdoutSink {
    fn drop(&mut self) {
        self.flush();
    }
}

/// A sink that collects all output into a string.
///
/// Useful for testing or capturing rendered output programmatically.
#[derive(Debug, Default)]
pub struct CollectString(String);

impl CollectString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected output as a string slice.
    #[must_use]
    pub fn output(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the sink and returns the collected output.
    #[must_use]
    pub fn into_output(self) -> String {
        self.0
    }
}

impl RenderSink for CollectString {
    fn write_str(&mut self, s: &str) {
        self.0.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.0.push(c);
    }
}

/// A sink that ignores all output.
#[derive(Debug, Default)]
pub struct DiscardSink;

impl RenderSink for DiscardSink {
    fn write_str(&mut self, _s: &str) {}

    fn write_char(&mut self, _c: char) {}
}

/// Renders a node (and everything beneath it) to stdout.
pub fn print_ast(node: AstRef<'_>, pool: &InternPool) {
    let mut visitor = AstPrintVisitor::new(pool, StdoutSink::new());
    node.accept(&mut visitor);
    visitor.into_sink().flush();
}

/// The source-rendering visitor.
///
/// Holds the intern pool of the tree's scope root (to resolve identifier
/// ids back to text) and the current indentation level. Uses the operator
/// tables only for display symbols, never for dispatch names.
pub struct AstPrintVisitor<'pool, S: RenderSink> {
    pool: &'pool InternPool,
    sink: S,
    indent: usize,
}

impl<'pool, S: RenderSink> AstPrintVisitor<'pool, S> {
    #[must_use]
    pub fn new(pool: &'pool InternPool, sink: S) -> Self {
        Self { pool, sink, indent: 0 }
    }

    /// Consumes the visitor and returns its sink with the rendered output.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn write(&mut self, s: &str) {
        self.sink.write_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.sink.write_char(c);
    }

    fn print_indent(&mut self) {
        for _ in 0..self.indent {
            self.sink.write_char(' ');
        }
    }

    /// Writes the compact symbol for the operators that appear in augmented
    /// and binary operation rendering; other kinds fall back to a bracketed
    /// debug marker.
    fn print_op(&mut self, op: Op) {
        match op {
            Op::Add => self.write_char('+'),
            Op::BitAnd => self.write_char('&'),
            Op::BitOr => self.write_char('|'),
            Op::BitXor => self.write_char('^'),
            Op::Div => self.write_char('/'),
            Op::LShift => self.write("<<"),
            Op::RShift => self.write(">>"),
            Op::Pow => self.write("**"),
            Op::Mod => self.write_char('%'),
            Op::Mult => self.write_char('*'),
            Op::Sub => self.write_char('-'),
            other => self.write(&format!("<{other:?}>")),
        }
    }

    /// Renders a statement sequence as an indented block, one line each.
    fn print_block(&mut self, body: &[Stmt]) {
        self.indent += 4;
        for stmt in body {
            self.print_indent();
            stmt.accept(self);
            self.write_char('\n');
        }
        self.indent -= 4;
    }
}

impl<'ast, S: RenderSink> AstVisitor<'ast> for AstPrintVisitor<'_, S> {
    fn visit_alias(&mut self, node: &'ast Alias) -> Visit {
        self.write(self.pool.get_str(node.name));
        if let Some(asname) = node.asname {
            self.write(" as ");
            self.write(self.pool.get_str(asname));
        }
        Visit::SkipChildren
    }

    fn visit_arguments(&mut self, node: &'ast Arguments) -> Visit {
        let nargs = node.args.len();
        let ndefault = node.defaults.len();
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            arg.accept(self);
            if i >= nargs - ndefault {
                self.write_char('=');
                node.defaults[i - (nargs - ndefault)].accept(self);
            }
        }
        Visit::SkipChildren
    }

    fn visit_assert(&mut self, node: &'ast Assert) -> Visit {
        self.write("assert ");
        node.test.accept(self);
        if let Some(msg) = &node.msg {
            self.write(", ");
            msg.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_assign(&mut self, node: &'ast Assign) -> Visit {
        for target in &node.targets {
            target.accept(self);
            self.write(" = ");
        }
        node.value.accept(self);
        Visit::SkipChildren
    }

    fn visit_attribute(&mut self, node: &'ast Attribute) -> Visit {
        node.value.accept(self);
        self.write_char('.');
        self.write(self.pool.get_str(node.attr));
        Visit::SkipChildren
    }

    fn visit_augassign(&mut self, node: &'ast AugAssign) -> Visit {
        node.target.accept(self);
        self.print_op(node.op);
        self.write_char('=');
        node.value.accept(self);
        Visit::SkipChildren
    }

    fn visit_augbinop(&mut self, node: &'ast AugBinOp) -> Visit {
        node.left.accept(self);
        self.write_char('=');
        self.print_op(node.op);
        node.right.accept(self);
        Visit::SkipChildren
    }

    fn visit_binop(&mut self, node: &'ast BinOp) -> Visit {
        node.left.accept(self);
        self.print_op(node.op);
        node.right.accept(self);
        Visit::SkipChildren
    }

    fn visit_boolop(&mut self, node: &'ast BoolOp) -> Visit {
        let last = node.values.len().saturating_sub(1);
        for (i, value) in node.values.iter().enumerate() {
            value.accept(self);
            if i == last {
                continue;
            }
            match node.op {
                Op::And => self.write(" and "),
                Op::Or => self.write(" or "),
                other => panic!("boolean operation carries non-boolean operator {other:?}"),
            }
        }
        Visit::SkipChildren
    }

    fn visit_break(&mut self, _node: &'ast Break) -> Visit {
        self.write("break");
        Visit::SkipChildren
    }

    fn visit_call(&mut self, node: &'ast Call) -> Visit {
        node.func.accept(self);
        self.write_char('(');

        let mut prevarg = false;
        for arg in &node.args {
            if prevarg {
                self.write(", ");
            }
            arg.accept(self);
            prevarg = true;
        }
        for keyword in &node.keywords {
            if prevarg {
                self.write(", ");
            }
            keyword.accept(self);
            prevarg = true;
        }
        if let Some(starargs) = &node.starargs {
            if prevarg {
                self.write(", ");
            }
            starargs.accept(self);
            prevarg = true;
        }
        if let Some(kwargs) = &node.kwargs {
            if prevarg {
                self.write(", ");
            }
            kwargs.accept(self);
        }
        self.write_char(')');
        Visit::SkipChildren
    }

    fn visit_classdef(&mut self, node: &'ast ClassDef) -> Visit {
        for decorator in &node.decorator_list {
            self.write_char('@');
            decorator.accept(self);
            self.write_char('\n');
            self.print_indent();
        }
        self.write("class ");
        self.write(self.pool.get_str(node.name));
        self.write_char('(');
        for (i, base) in node.bases.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            base.accept(self);
        }
        self.write_char(')');

        self.indent += 4;
        for stmt in &node.body {
            self.write_char('\n');
            self.print_indent();
            stmt.accept(self);
        }
        self.indent -= 4;
        Visit::SkipChildren
    }

    fn visit_clsattribute(&mut self, node: &'ast ClsAttribute) -> Visit {
        node.value.accept(self);
        self.write_char(':');
        self.write(self.pool.get_str(node.attr));
        Visit::SkipChildren
    }

    fn visit_compare(&mut self, node: &'ast Compare) -> Visit {
        node.left.accept(self);

        for (op, comparator) in node.ops.iter().zip(&node.comparators) {
            self.write_char(' ');
            self.write(op_symbol(*op));
            self.write_char(' ');
            comparator.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_comprehension(&mut self, node: &'ast Comprehension) -> Visit {
        self.write("for ");
        node.target.accept(self);
        self.write(" in ");
        node.iter.accept(self);

        for cond in &node.ifs {
            self.write(" if ");
            cond.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_continue(&mut self, _node: &'ast Continue) -> Visit {
        self.write("continue");
        Visit::SkipChildren
    }

    fn visit_delete(&mut self, node: &'ast Delete) -> Visit {
        self.write("del ");
        for (i, target) in node.targets.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            target.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_dict(&mut self, node: &'ast Dict) -> Visit {
        self.write_char('{');
        for (i, (key, value)) in node.keys.iter().zip(&node.values).enumerate() {
            if i > 0 {
                self.write(", ");
            }
            key.accept(self);
            self.write_char(':');
            value.accept(self);
        }
        self.write_char('}');
        Visit::SkipChildren
    }

    fn visit_dictcomp(&mut self, node: &'ast DictComp) -> Visit {
        self.write_char('{');
        node.key.accept(self);
        self.write_char(':');
        node.value.accept(self);
        for generator in &node.generators {
            self.write_char(' ');
            generator.accept(self);
        }
        self.write_char('}');
        Visit::SkipChildren
    }

    fn visit_ellipsis(&mut self, _node: &'ast Ellipsis) -> Visit {
        self.write("...");
        Visit::SkipChildren
    }

    fn visit_excepthandler(&mut self, node: &'ast ExceptHandler) -> Visit {
        self.write("except");
        if let Some(typ) = &node.typ {
            self.write_char(' ');
            typ.accept(self);
        }
        if let Some(name) = &node.name {
            self.write(" as ");
            name.accept(self);
        }
        self.write(":\n");
        self.print_block(&node.body);
        Visit::SkipChildren
    }

    fn visit_exec(&mut self, node: &'ast Exec) -> Visit {
        self.write("exec ");

        node.body.accept(self);
        if let Some(globals) = &node.globals {
            self.write(" in ");
            globals.accept(self);

            if let Some(locals) = &node.locals {
                self.write(", ");
                locals.accept(self);
            }
        }
        self.write_char('\n');
        Visit::SkipChildren
    }

    fn visit_expr(&mut self, _node: &'ast ExprStmt) -> Visit {
        Visit::Continue
    }

    fn visit_expression(&mut self, node: &'ast Expression) -> Visit {
        node.body.accept(self);
        self.write_char('\n');
        Visit::SkipChildren
    }

    fn visit_extslice(&mut self, node: &'ast ExtSlice) -> Visit {
        for (i, dim) in node.dims.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            dim.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_for(&mut self, _node: &'ast For) -> Visit {
        self.write("<for loop>\n");
        Visit::SkipChildren
    }

    fn visit_functiondef(&mut self, node: &'ast FunctionDef) -> Visit {
        for decorator in &node.decorator_list {
            self.write_char('@');
            decorator.accept(self);
            self.write_char('\n');
            self.print_indent();
        }

        self.write("def ");
        match node.name {
            Some(name) => self.write(self.pool.get_str(name)),
            None => self.write("<lambda>"),
        }
        self.write_char('(');
        node.args.accept(self);
        self.write_char(')');

        self.indent += 4;
        for stmt in &node.body {
            self.write_char('\n');
            self.print_indent();
            stmt.accept(self);
        }
        self.indent -= 4;
        Visit::SkipChildren
    }

    fn visit_generatorexp(&mut self, node: &'ast GeneratorExp) -> Visit {
        self.write_char('[');
        node.elt.accept(self);
        for generator in &node.generators {
            self.write_char(' ');
            generator.accept(self);
        }
        self.write_char(']');
        Visit::SkipChildren
    }

    fn visit_global(&mut self, node: &'ast Global) -> Visit {
        self.write("global ");
        for (i, name) in node.names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(self.pool.get_str(*name));
        }
        Visit::SkipChildren
    }

    fn visit_if(&mut self, node: &'ast If) -> Visit {
        self.write("if ");
        node.test.accept(self);
        self.write(":\n");
        self.print_block(&node.body);

        if !node.orelse.is_empty() {
            self.print_indent();
            // A sole trailing `if` in the else branch collapses to `elif`.
            let elif = node.orelse.len() == 1 && matches!(node.orelse[0], Stmt::If(_));

            if elif {
                self.write("el");
            } else {
                self.write("else:\n");
                self.indent += 4;
            }
            for (i, stmt) in node.orelse.iter().enumerate() {
                if i > 0 {
                    self.write_char('\n');
                }
                self.print_indent();
                stmt.accept(self);
            }
            if !elif {
                self.indent -= 4;
            }
        }
        Visit::SkipChildren
    }

    fn visit_ifexp(&mut self, node: &'ast IfExp) -> Visit {
        node.body.accept(self);
        self.write(" if ");
        node.test.accept(self);
        self.write(" else ");
        node.orelse.accept(self);
        Visit::SkipChildren
    }

    fn visit_import(&mut self, node: &'ast Import) -> Visit {
        self.write("import ");
        for (i, alias) in node.names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            alias.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_importfrom(&mut self, node: &'ast ImportFrom) -> Visit {
        self.write("from ");
        self.write(self.pool.get_str(node.module));
        self.write(" import ");
        for (i, alias) in node.names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            alias.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_index(&mut self, _node: &'ast Index) -> Visit {
        Visit::Continue
    }

    fn visit_invoke(&mut self, node: &'ast Invoke) -> Visit {
        self.write(&format!(
            "invoke {} {}: ",
            node.normal_dest.index(),
            node.exc_dest.index()
        ));
        node.stmt.accept(self);
        Visit::SkipChildren
    }

    fn visit_keyword(&mut self, node: &'ast Keyword) -> Visit {
        self.write(self.pool.get_str(node.arg));
        self.write_char('=');
        node.value.accept(self);
        Visit::SkipChildren
    }

    fn visit_lambda(&mut self, node: &'ast Lambda) -> Visit {
        self.write("lambda ");
        node.args.accept(self);
        self.write(": ");
        node.body.accept(self);
        Visit::SkipChildren
    }

    fn visit_langprimitive(&mut self, node: &'ast LangPrimitive) -> Visit {
        self.write_char(':');
        self.write(<&'static str>::from(node.opcode));
        self.write_char('(');
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            arg.accept(self);
        }
        self.write_char(')');
        Visit::SkipChildren
    }

    fn visit_list(&mut self, node: &'ast List) -> Visit {
        self.write_char('[');
        for (i, elt) in node.elts.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            elt.accept(self);
        }
        self.write_char(']');
        Visit::SkipChildren
    }

    fn visit_listcomp(&mut self, node: &'ast ListComp) -> Visit {
        self.write_char('[');
        node.elt.accept(self);
        for generator in &node.generators {
            self.write_char(' ');
            generator.accept(self);
        }
        self.write_char(']');
        Visit::SkipChildren
    }

    fn visit_module(&mut self, node: &'ast Module) -> Visit {
        for stmt in &node.body {
            stmt.accept(self);
            self.write_char('\n');
        }
        Visit::SkipChildren
    }

    fn visit_name(&mut self, node: &'ast Name) -> Visit {
        self.write(self.pool.get_str(node.id));
        Visit::Continue
    }

    fn visit_num(&mut self, node: &'ast Num) -> Visit {
        match &node.value {
            NumKind::Int(n) => self.write(&n.to_string()),
            NumKind::Long(n) => {
                self.write(&n.to_string());
                self.write_char('L');
            }
            NumKind::Float(f) => self.write(&f.to_string()),
            NumKind::Complex(f) => {
                self.write(&f.to_string());
                self.write_char('j');
            }
        }
        Visit::Continue
    }

    fn visit_pass(&mut self, _node: &'ast Pass) -> Visit {
        self.write("pass");
        Visit::SkipChildren
    }

    fn visit_print(&mut self, node: &'ast Print) -> Visit {
        self.write("print ");
        if let Some(dest) = &node.dest {
            self.write(">>");
            dest.accept(self);
            self.write(", ");
        }
        for (i, value) in node.values.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            value.accept(self);
        }
        if !node.nl {
            self.write_char(',');
        }
        Visit::SkipChildren
    }

    fn visit_raise(&mut self, node: &'ast Raise) -> Visit {
        self.write("raise");
        if let Some(arg0) = &node.arg0 {
            self.write_char(' ');
            arg0.accept(self);
        }
        if let Some(arg1) = &node.arg1 {
            self.write(", ");
            arg1.accept(self);
        }
        if let Some(arg2) = &node.arg2 {
            self.write(", ");
            arg2.accept(self);
        }
        Visit::SkipChildren
    }

    fn visit_repr(&mut self, node: &'ast Repr) -> Visit {
        self.write_char('`');
        node.value.accept(self);
        self.write_char('`');
        Visit::SkipChildren
    }

    fn visit_return(&mut self, _node: &'ast Return) -> Visit {
        self.write("return ");
        Visit::Continue
    }

    fn visit_set(&mut self, node: &'ast Set) -> Visit {
        // An empty set literal is not writeable in the surface syntax (it's
        // a dictionary), but desugaring sometimes generates it (ex in set
        // comprehension lowering). Just to make it clear when printing,
        // print empty set literals as "SET{}".
        if node.elts.is_empty() {
            self.write("SET");
        }

        self.write_char('{');

        for (i, elt) in node.elts.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            elt.accept(self);
        }

        self.write_char('}');
        Visit::SkipChildren
    }

    fn visit_setcomp(&mut self, node: &'ast SetComp) -> Visit {
        self.write_char('{');
        node.elt.accept(self);
        for generator in &node.generators {
            self.write_char(' ');
            generator.accept(self);
        }
        self.write_char('}');
        Visit::SkipChildren
    }

    fn visit_slice(&mut self, node: &'ast Slice) -> Visit {
        self.write("<slice>(");
        if let Some(lower) = &node.lower {
            lower.accept(self);
        }
        if node.upper.is_some() || node.step.is_some() {
            self.write_char(':');
        }
        if let Some(upper) = &node.upper {
            upper.accept(self);
        }
        if let Some(step) = &node.step {
            self.write_char(':');
            step.accept(self);
        }
        self.write_char(')');
        Visit::SkipChildren
    }

    fn visit_str(&mut self, node: &'ast Str) -> Visit {
        match &node.value {
            StrKind::Str(data) => {
                self.write_char('"');
                self.write(data);
                self.write_char('"');
            }
            StrKind::Unicode(_) => self.write("<unicode value>"),
        }
        Visit::Continue
    }

    fn visit_subscript(&mut self, node: &'ast Subscript) -> Visit {
        node.value.accept(self);
        self.write_char('[');
        node.slice.accept(self);
        self.write_char(']');
        Visit::SkipChildren
    }

    fn visit_suite(&mut self, node: &'ast Suite) -> Visit {
        for stmt in &node.body {
            self.print_indent();
            stmt.accept(self);
            self.write_char('\n');
        }
        Visit::SkipChildren
    }

    fn visit_tryexcept(&mut self, node: &'ast TryExcept) -> Visit {
        self.write("try:\n");
        self.print_block(&node.body);
        for handler in &node.handlers {
            self.print_indent();
            handler.accept(self);
        }

        if !node.orelse.is_empty() {
            self.print_indent();
            self.write("else:\n");
            self.print_block(&node.orelse);
        }
        Visit::SkipChildren
    }

    fn visit_tryfinally(&mut self, node: &'ast TryFinally) -> Visit {
        // try/except/finally parses as a TryFinally wrapping a single
        // TryExcept; render that shape back as one fused statement.
        if node.body.len() == 1 && matches!(node.body[0], Stmt::TryExcept(_)) {
            node.body[0].accept(self);
            self.print_indent();
            self.write("finally:\n");
            self.print_block(&node.finalbody);
        } else {
            self.write("try:\n");
            self.print_block(&node.body);

            self.print_indent();
            self.write("finally:\n");
            self.print_block(&node.finalbody);
        }
        Visit::SkipChildren
    }

    fn visit_tuple(&mut self, node: &'ast Tuple) -> Visit {
        self.write_char('(');
        for (i, elt) in node.elts.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            elt.accept(self);
        }
        if node.elts.len() == 1 {
            self.write_char(',');
        }
        self.write_char(')');
        Visit::SkipChildren
    }

    fn visit_unaryop(&mut self, node: &'ast UnaryOp) -> Visit {
        match node.op {
            Op::Invert => self.write_char('~'),
            Op::Not => self.write("not "),
            Op::UAdd => self.write_char('+'),
            Op::USub => self.write_char('-'),
            other => panic!("unary operation carries non-unary operator {other:?}"),
        }
        self.write_char('(');
        node.operand.accept(self);
        self.write_char(')');
        Visit::SkipChildren
    }

    fn visit_while(&mut self, node: &'ast While) -> Visit {
        self.write("while ");
        node.test.accept(self);
        self.write_char('\n');
        self.print_block(&node.body);

        if !node.orelse.is_empty() {
            self.print_indent();
            self.write("else\n");
            self.print_block(&node.orelse);
        }
        Visit::SkipChildren
    }

    fn visit_with(&mut self, node: &'ast With) -> Visit {
        self.write("with ");
        node.context_expr.accept(self);
        if let Some(vars) = &node.optional_vars {
            self.write(" as ");
            vars.accept(self);
            self.write(":\n");
        }

        self.indent += 4;
        for (i, stmt) in node.body.iter().enumerate() {
            if i > 0 {
                self.write_char('\n');
            }
            self.print_indent();
            stmt.accept(self);
        }
        self.indent -= 4;
        Visit::SkipChildren
    }

    fn visit_yield(&mut self, node: &'ast Yield) -> Visit {
        self.write("yield ");
        if let Some(value) = &node.value {
            value.accept(self);
        }
        Visit::SkipChildren
    }
}
