// Nodes are plain owned data. Equality is structural and derived, so two trees compare equal
// exactly when they would print the same.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Ident(String),
    // the literal source text, never converted to a number
    Num(String),
    Tuple(Vec<Expr>),
    New { type_name: String, args: Vec<Expr> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    VarDecl { name: String, init: Expr },
    Return(Expr),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn num(text: impl Into<String>) -> Self {
        Expr::Num(text.into())
    }

    pub fn tuple(elements: Vec<Expr>) -> Self {
        Expr::Tuple(elements)
    }

    pub fn new_call(type_name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::New {
            type_name: type_name.into(),
            args,
        }
    }

    /// Number of tuple literals in this expression, at any depth.
    pub fn tuple_count(&self) -> usize {
        match self {
            Expr::Ident(_) | Expr::Num(_) => 0,
            Expr::Tuple(elements) => 1 + elements.iter().map(Expr::tuple_count).sum::<usize>(),
            Expr::New { args, .. } => args.iter().map(Expr::tuple_count).sum(),
        }
    }
}

impl Stmt {
    pub fn var_decl(name: impl Into<String>, init: Expr) -> Self {
        Stmt::VarDecl {
            name: name.into(),
            init,
        }
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::Return(value)
    }

    pub fn tuple_count(&self) -> usize {
        match self {
            Stmt::VarDecl { init, .. } => init.tuple_count(),
            Stmt::Return(value) => value.tuple_count(),
            Stmt::Block(block) => block.tuple_count(),
        }
    }
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn tuple_count(&self) -> usize {
        self.statements.iter().map(Stmt::tuple_count).sum()
    }
}

impl From<Block> for Stmt {
    fn from(block: Block) -> Self {
        Stmt::Block(block)
    }
}
