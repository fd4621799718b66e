use super::operators::{BinaryOp, PostfixOp, PrefixOp};

/// A bare identifier.
///
/// Kept as its own type so that an assignment target can only ever be a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Expression node.
///
/// Every node owns its children, so a parsed expression is always a tree.
/// Nodes are only built by the parser once all of their children have been
/// parsed, and nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(Name),
    Assign {
        target: Name,
        value: Box<Expr>,
    },
    /// `args` is never empty when produced by the parser.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Cond {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Operator {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Expr>,
    },
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
    },
}

/// Tears the tree down with an explicit work list instead of recursion, so
/// dropping a deeply nested expression cannot overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            // Left with only leaves, `expr` drops without recursing.
            expr.take_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves every child out of this node, leaving empty leaves behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        fn take(slot: &mut Expr) -> Expr {
            std::mem::replace(slot, Expr::Name(Name(String::new())))
        }

        match self {
            Expr::Name(_) => {}
            Expr::Assign { value, .. } => out.push(take(value)),
            Expr::Call { callee, args } => {
                out.push(take(callee));
                out.append(args);
            }
            Expr::Cond {
                cond,
                then,
                otherwise,
            } => {
                out.push(take(cond));
                out.push(take(then));
                out.push(take(otherwise));
            }
            Expr::Operator { left, right, .. } => {
                out.push(take(left));
                out.push(take(right));
            }
            Expr::Postfix { operand, .. } | Expr::Prefix { operand, .. } => out.push(take(operand)),
        }
    }
}

// Constructors, mostly for building expected trees in tests.
impl Expr {
    pub fn name(value: impl Into<String>) -> Self {
        Expr::Name(Name(value.into()))
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            target: Name(target.into()),
            value: Box::new(value),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn cond(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::Cond {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn postfix(op: PostfixOp, operand: Expr) -> Self {
        Expr::Postfix {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn prefix(op: PrefixOp, operand: Expr) -> Self {
        Expr::Prefix {
            op,
            operand: Box::new(operand),
        }
    }
}
