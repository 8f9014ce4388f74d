extern crate lex_parse;

use itertools::Itertools;

use lex_parse::ast::*;

/// Replaces every tuple literal with a constructor call of one type. The input tree is left alone;
/// a new tree is built.
pub trait RewriteTuples {
    fn rewrite_tuples(&self, type_name: &str) -> Self;
}

fn rewrite_all<T: RewriteTuples>(l: &[T], type_name: &str) -> Vec<T> {
    l.iter().map(|v| v.rewrite_tuples(type_name)).collect_vec()
}

impl RewriteTuples for Expr {
    fn rewrite_tuples(&self, type_name: &str) -> Self {
        match self {
            Expr::Ident(_) | Expr::Num(_) => self.clone(),
            Expr::Tuple(elements) => Expr::New {
                type_name: type_name.to_string(),
                args: rewrite_all(elements, type_name),
            },
            // the constructor keeps its own type, but tuples among its arguments are converted
            Expr::New { type_name: own_type, args } => Expr::New {
                type_name: own_type.clone(),
                args: rewrite_all(args, type_name),
            },
        }
    }
}

impl RewriteTuples for Stmt {
    fn rewrite_tuples(&self, type_name: &str) -> Self {
        match self {
            Stmt::VarDecl { name, init } => Stmt::VarDecl {
                name: name.clone(),
                init: init.rewrite_tuples(type_name),
            },
            Stmt::Return(value) => Stmt::Return(value.rewrite_tuples(type_name)),
            Stmt::Block(block) => Stmt::Block(block.rewrite_tuples(type_name)),
        }
    }
}

impl RewriteTuples for Block {
    fn rewrite_tuples(&self, type_name: &str) -> Self {
        Block::new(rewrite_all(&self.statements, type_name))
    }
}

pub fn rewrite(root: &Block, type_name: &str) -> Block {
    let rewritten = root.rewrite_tuples(type_name);
    tracing::debug!(type_name, tuples = root.tuple_count(), "rewrote tuple literals");
    rewritten
}
