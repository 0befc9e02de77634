// AST definitions for the expression interpreter

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Variable types supported by the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Bool,
}

impl VarType {
    pub fn name(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Bool => "bool",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,     // -x
    Not,     // !x
    PreInc,  // ++x
    PreDec,  // --x
    PostInc, // x++
    PostDec, // x--
}

impl UnOp {
    /// Whether this operator mutates its operand.
    pub fn is_step(&self) -> bool {
        matches!(
            self,
            UnOp::PreInc | UnOp::PreDec | UnOp::PostInc | UnOp::PostDec
        )
    }
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i32, SourceLocation),
    BoolLiteral(bool, SourceLocation),
    StringLiteral(String, SourceLocation),
    Variable(String, SourceLocation),
    Assignment {
        name: String,
        rhs: Box<Expr>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },
    TernaryOp {
        condition: Box<Expr>,
        true_expr: Box<Expr>,
        false_expr: Box<Expr>,
        location: SourceLocation,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Returns the source location where this expression begins.
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::IntLiteral(_, loc)
            | Expr::BoolLiteral(_, loc)
            | Expr::StringLiteral(_, loc)
            | Expr::Variable(_, loc) => *loc,
            Expr::Assignment { location, .. }
            | Expr::BinaryOp { location, .. }
            | Expr::UnaryOp { location, .. }
            | Expr::TernaryOp { location, .. }
            | Expr::FunctionCall { location, .. } => *location,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration {
        name: String,
        var_type: VarType,
        initializer: Option<Expr>,
        location: SourceLocation,
    },
    Expression(Expr),
    Return {
        value: Option<Expr>,
        location: SourceLocation,
    },
}

/// A function definition. Only `main` is ever executed; the parser accepts
/// the definition form so the demonstration source reads as real C.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
    pub location: SourceLocation,
}

/// A parsed program: a list of function definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    /// Find a function by name.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}
