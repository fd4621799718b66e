use std::fmt::{self, Display, Write};

use crate::ast::ast::Expr;

/// Writes the canonical, fully parenthesized form of `expr`.
///
/// Every node except names and calls is wrapped in parentheses. Binary forms
/// put single spaces around the operator; prefix and postfix operators sit
/// directly against their operand. Calls print as `callee(arg, arg)`.
pub fn write_expr<W: Write>(w: &mut W, expr: &Expr) -> fmt::Result {
    // Deep trees continue on heap-allocated stack segments.
    stacker::maybe_grow(64 * 1024, 1024 * 1024, || write_node(w, expr))
}

fn write_node<W: Write>(w: &mut W, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Name(name) => w.write_str(name.as_str()),
        Expr::Assign { target, value } => {
            write!(w, "({} = ", target.as_str())?;
            write_expr(w, value)?;
            w.write_char(')')
        }
        Expr::Call { callee, args } => {
            write_expr(w, callee)?;
            w.write_char('(')?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write_expr(w, arg)?;
            }
            w.write_char(')')
        }
        Expr::Cond {
            cond,
            then,
            otherwise,
        } => {
            w.write_char('(')?;
            write_expr(w, cond)?;
            w.write_str(" ? ")?;
            write_expr(w, then)?;
            w.write_str(" : ")?;
            write_expr(w, otherwise)?;
            w.write_char(')')
        }
        Expr::Operator { op, left, right } => {
            w.write_char('(')?;
            write_expr(w, left)?;
            write!(w, " {} ", op)?;
            write_expr(w, right)?;
            w.write_char(')')
        }
        Expr::Postfix { op, operand } => {
            w.write_char('(')?;
            write_expr(w, operand)?;
            write!(w, "{})", op)
        }
        Expr::Prefix { op, operand } => {
            write!(w, "({}", op)?;
            write_expr(w, operand)?;
            w.write_char(')')
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

/// Renders `expr` to its canonical string.
pub fn print(expr: &Expr) -> String {
    expr.to_string()
}
