use crate::ast::*;
use crate::error::ParseError;
use crate::token::{lex, Token, TokenKind};

/// Recursive-descent parser. Every decision is made from the current token alone; there is no
/// backtracking and no error recovery.
pub struct Parser<'a> {
    data: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a str) -> Self {
        Parser {
            data,
            tokens: lex(data),
            position: 0,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Parse the root block. The block must be the whole input: anything after its closing brace
    /// is an error.
    pub fn parse_program(&mut self) -> Result<Block, ParseError> {
        let block = self.parse_block()?;
        match self.tokens.get(self.position) {
            Some(tok) => Err(ParseError::expected("end of input", tok)),
            None => Ok(block),
        }
    }

    // ===== Helper methods =====

    fn eof(&self) -> ParseError {
        ParseError::UnexpectedEof { at: self.data.len() }
    }

    fn peek(&self) -> Result<&Token<'a>, ParseError> {
        self.tokens.get(self.position).ok_or_else(|| self.eof())
    }

    fn peek_str(&self) -> Result<&'a str, ParseError> {
        self.peek().map(|tok| tok.str_)
    }

    fn advance(&mut self) -> Result<&'a str, ParseError> {
        let str_ = self.peek_str()?;
        self.position += 1;
        Ok(str_)
    }

    fn expect(&mut self, expected: &str) -> Result<(), ParseError> {
        let tok = self.peek()?;
        if tok.str_ != expected {
            return Err(ParseError::expected(expected, tok));
        }
        self.position += 1;
        Ok(())
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let tok = self.peek()?;
        if tok.kind != TokenKind::Ident {
            return Err(ParseError::expected("identifier", tok));
        }
        let name = tok.str_.to_string();
        self.position += 1;
        Ok(name)
    }

    // ===== Statements =====

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect("{")?;
        let mut statements = Vec::new();
        while self.peek_str()? != "}" {
            let stmt = self.parse_stmt()?;
            // blocks close themselves, everything else needs a semicolon
            if !matches!(stmt, Stmt::Block(_)) {
                self.expect(";")?;
            }
            statements.push(stmt);
        }
        self.expect("}")?;
        Ok(Block::new(statements))
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_str()? {
            "var" => self.parse_var_decl(),
            "return" => self.parse_return(),
            "{" => self.parse_block().map(Stmt::Block),
            _ => Err(ParseError::invalid("statement", self.peek()?)),
        }
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect("var")?;
        let name = self.expect_ident()?;
        self.expect("=")?;
        let init = self.parse_expr()?;
        Ok(Stmt::VarDecl { name, init })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.expect("return")?;
        Ok(Stmt::Return(self.parse_expr()?))
    }

    // ===== Expressions =====

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek()?;
        match (tok.kind, tok.str_) {
            (_, "new") => self.parse_new_expr(),
            (TokenKind::Ident, _) => Ok(Expr::Ident(self.advance()?.to_string())),
            (TokenKind::Num, _) => Ok(Expr::Num(self.advance()?.to_string())),
            (_, "(") => Ok(Expr::Tuple(self.parse_arg_list()?)),
            _ => Err(ParseError::invalid("expression", tok)),
        }
    }

    fn parse_new_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect("new")?;
        let type_name = self.expect_ident()?;
        let args = self.parse_arg_list()?;
        Ok(Expr::New { type_name, args })
    }

    /// `( )` or `( e (, e)* )`. Shared by tuple literals and constructor arguments.
    fn parse_arg_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect("(")?;
        let mut items = Vec::new();
        if self.peek_str()? != ")" {
            items.push(self.parse_expr()?);
            while self.peek_str()? != ")" {
                self.expect(",")?;
                items.push(self.parse_expr()?);
            }
        }
        self.expect(")")?;
        Ok(items)
    }
}
