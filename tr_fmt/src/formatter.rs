extern crate lex_parse;

use itertools::Itertools;
use pretty::RcDoc;

use lex_parse::ast::*;

// https://docs.rs/pretty/latest/pretty/

pub type Doc<'a> = RcDoc<'a, ()>;

const INDENT: isize = 4;

// No soft line breaks are ever emitted, so the output does not depend on the width.
const WIDTH: usize = 80;

pub trait PrAble {
    fn pr(&self) -> Doc<'_>;
}

#[inline]
fn text(s: &str) -> Doc<'_> {
    RcDoc::text(s)
}

#[inline]
fn hard_line<'a>() -> Doc<'a> {
    RcDoc::hardline()
}

#[inline]
fn concat_sep<'a, O: PrAble>(l: &'a [O], sep: &'static str) -> Doc<'a> {
    RcDoc::concat(itertools::intersperse(l.iter().map(|v| v.pr()), text(sep)))
}

/// `(a, b, c)`, or `()` for an empty list.
#[inline]
fn parened_list<O: PrAble>(l: &[O]) -> Doc<'_> {
    text("(").append(concat_sep(l, ", ")).append(text(")"))
}

impl PrAble for Expr {
    fn pr(&self) -> Doc<'_> {
        match self {
            Expr::Ident(name) => text(name),
            Expr::Num(num) => text(num),
            Expr::Tuple(elements) => parened_list(elements),
            Expr::New { type_name, args } => text("new ").append(text(type_name)).append(parened_list(args)),
        }
    }
}

impl PrAble for Stmt {
    fn pr(&self) -> Doc<'_> {
        match self {
            Stmt::VarDecl { name, init } => text("var ")
                .append(text(name))
                .append(text(" = "))
                .append(init.pr())
                .append(text(";")),
            Stmt::Return(value) => text("return ").append(value.pr()).append(text(";")),
            Stmt::Block(block) => block.pr(),
        }
    }
}

impl PrAble for Block {
    fn pr(&self) -> Doc<'_> {
        // every child starts on a fresh line one level deeper; the closing brace goes back out
        let items = RcDoc::concat(self.statements.iter().map(|v| hard_line().append(v.pr())).collect_vec());
        text("{").append(items.nest(INDENT)).append(hard_line()).append(text("}"))
    }
}

/// Render a block in canonical form: four spaces per nesting level, one statement per line, no
/// trailing newline.
pub fn print(ast: &Block) -> String {
    ast.pr().pretty(WIDTH).to_string()
}
