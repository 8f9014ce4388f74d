//! Parse a tiny block language, turn every tuple literal into a constructor call, and print it
//! back in canonical form.
//!
//! ```text
//! { var p = (1, 2); }   --parse-->   Block[VarDecl(p, Tuple[1, 2])]
//!                       --rewrite(Point)-->   Block[VarDecl(p, New(Point, [1, 2]))]
//!                       --print-->   "{\n    var p = new Point(1, 2);\n}"
//! ```

pub use lex_parse::{ast, is_identifier, parse, tokenize, ParseError, StrSpan};
pub use rewriter::{rewrite, RewriteTuples};
pub use tr_fmt::print;

/// The whole pipeline on source text.
pub fn rewrite_source(src: &str, type_name: &str) -> Result<String, ParseError> {
    let ast = parse(src)?;
    Ok(print(&rewrite(&ast, type_name)))
}
