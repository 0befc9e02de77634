//! Recursive descent parser for the C demonstration subset
//!
//! Expressions use the teacher-book C precedence ladder: assignment
//! (right-associative) above ternary, ternary above comparison, comparison
//! above arithmetic, with prefix and postfix `++`/`--` binding tightest.
//!
//! The ternary follows C's grammar exactly: the true arm is a full
//! expression, the false arm only a conditional-expression. That asymmetry is
//! why `cond ? a = 3 : (a = 2)` needs its parentheses, which is one of the
//! precedence points the demonstration program exists to make.

use std::fmt;

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token};

/// Parse error with source location
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parser over a token stream
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Tokenize the source and create a parser over it.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize().map_err(|e| ParseError {
            message: e.message,
            location: e.location,
        })?;

        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse a whole program: a sequence of function definitions.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut functions = Vec::new();

        while !self.at_eof() {
            functions.push(self.parse_function()?);
        }

        Ok(Program { functions })
    }

    /// Parse `type name ( [void] ) { stmt* }`
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let location = self.current_location();

        if self.parse_type_keyword().is_none() {
            return Err(ParseError {
                message: format!("Expected function return type, found {}", self.peek()),
                location,
            });
        }

        let name = self.expect_identifier()?;

        self.expect(|t| matches!(t, Token::LParen(_)), "Expected '('")?;
        // `int main(void)` and `int main()` both occur in the sources
        self.match_token(|t| matches!(t, Token::Void(_)));
        self.expect(|t| matches!(t, Token::RParen(_)), "Expected ')'")?;
        self.expect(|t| matches!(t, Token::LBrace(_)), "Expected '{'")?;

        let mut body = Vec::new();
        while !self.match_token(|t| matches!(t, Token::RBrace(_))) {
            if self.at_eof() {
                return Err(ParseError {
                    message: "Unexpected end of file in function body".to_string(),
                    location: self.current_location(),
                });
            }
            body.push(self.parse_statement()?);
        }

        Ok(Function {
            name,
            body,
            location,
        })
    }

    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();

        if self.match_token(|t| matches!(t, Token::Return(_))) {
            let value = if self.check(|t| matches!(t, Token::Semicolon(_))) {
                None
            } else {
                Some(self.parse_expression()?)
            };
            self.expect(
                |t| matches!(t, Token::Semicolon(_)),
                "Expected ';' after return",
            )?;
            return Ok(Stmt::Return { value, location });
        }

        if let Some(var_type) = self.parse_type_keyword() {
            let name = self.expect_identifier()?;

            let initializer = if self.match_token(|t| matches!(t, Token::Eq(_))) {
                Some(self.parse_expression()?)
            } else {
                None
            };

            self.expect(
                |t| matches!(t, Token::Semicolon(_)),
                "Expected ';' after declaration",
            )?;

            return Ok(Stmt::Declaration {
                name,
                var_type,
                initializer,
                location,
            });
        }

        let expr = self.parse_expression()?;
        self.expect(
            |t| matches!(t, Token::Semicolon(_)),
            "Expected ';' after expression",
        )?;
        Ok(Stmt::Expression(expr))
    }

    /// Consume a type keyword if one is next. `void` is accepted only in
    /// function signatures, not here.
    fn parse_type_keyword(&mut self) -> Option<VarType> {
        if self.match_token(|t| matches!(t, Token::Int(_))) {
            Some(VarType::Int)
        } else if self.match_token(|t| matches!(t, Token::Bool(_))) {
            Some(VarType::Bool)
        } else {
            None
        }
    }

    /// Parse expression (top-level entry point)
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_ternary()?;

        let loc = self.current_location();
        if self.match_token(|t| matches!(t, Token::Eq(_))) {
            let rhs = Box::new(self.parse_assignment()?);

            let name = match expr {
                Expr::Variable(name, _) => name,
                _ => {
                    return Err(ParseError {
                        message: "Assignment target must be a variable".to_string(),
                        location: loc,
                    });
                }
            };

            return Ok(Expr::Assignment {
                name,
                rhs,
                location: loc,
            });
        }

        Ok(expr)
    }

    /// Parse ternary: condition ? true_expr : false_expr
    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_equality()?;

        let loc = self.current_location();
        if self.match_token(|t| matches!(t, Token::Question(_))) {
            let true_expr = Box::new(self.parse_expression()?);
            self.expect(
                |t| matches!(t, Token::Colon(_)),
                "Expected ':' in ternary expression",
            )?;
            let false_expr = Box::new(self.parse_ternary()?);

            return Ok(Expr::TernaryOp {
                condition: Box::new(expr),
                true_expr,
                false_expr,
                location: loc,
            });
        }

        Ok(expr)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(|t| matches!(t, Token::EqEq(_))) {
                BinOp::Eq
            } else if self.match_token(|t| matches!(t, Token::NotEq(_))) {
                BinOp::Ne
            } else {
                break;
            };

            let right = Box::new(self.parse_relational()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(|t| matches!(t, Token::Lt(_))) {
                BinOp::Lt
            } else if self.match_token(|t| matches!(t, Token::Le(_))) {
                BinOp::Le
            } else if self.match_token(|t| matches!(t, Token::Gt(_))) {
                BinOp::Gt
            } else if self.match_token(|t| matches!(t, Token::Ge(_))) {
                BinOp::Ge
            } else {
                break;
            };

            let right = Box::new(self.parse_additive()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(|t| matches!(t, Token::Plus(_))) {
                BinOp::Add
            } else if self.match_token(|t| matches!(t, Token::Minus(_))) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(|t| matches!(t, Token::Star(_))) {
                BinOp::Mul
            } else if self.match_token(|t| matches!(t, Token::Slash(_))) {
                BinOp::Div
            } else if self.match_token(|t| matches!(t, Token::Percent(_))) {
                BinOp::Mod
            } else {
                break;
            };

            let right = Box::new(self.parse_unary()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse unary (! - + ++ --)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        if self.match_token(|t| matches!(t, Token::Bang(_))) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::Not,
                operand,
                location: loc,
            });
        }

        if self.match_token(|t| matches!(t, Token::Minus(_))) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::Neg,
                operand,
                location: loc,
            });
        }

        if self.match_token(|t| matches!(t, Token::Plus(_))) {
            // Unary plus: just return the operand
            return self.parse_unary();
        }

        if self.match_token(|t| matches!(t, Token::PlusPlus(_))) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::PreInc,
                operand,
                location: loc,
            });
        }

        if self.match_token(|t| matches!(t, Token::MinusMinus(_))) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::PreDec,
                operand,
                location: loc,
            });
        }

        self.parse_postfix()
    }

    /// Parse postfix (++ -- and calls)
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let loc = self.current_location();

            if self.match_token(|t| matches!(t, Token::PlusPlus(_))) {
                expr = Expr::UnaryOp {
                    op: UnOp::PostInc,
                    operand: Box::new(expr),
                    location: loc,
                };
            } else if self.match_token(|t| matches!(t, Token::MinusMinus(_))) {
                expr = Expr::UnaryOp {
                    op: UnOp::PostDec,
                    operand: Box::new(expr),
                    location: loc,
                };
            } else if self.match_token(|t| matches!(t, Token::LParen(_))) {
                let args = self.parse_argument_list()?;
                self.expect(
                    |t| matches!(t, Token::RParen(_)),
                    "Expected ')' after function arguments",
                )?;

                let name = if let Expr::Variable(n, _) = expr {
                    n
                } else {
                    return Err(ParseError {
                        message: "Function call must be on identifier".to_string(),
                        location: loc,
                    });
                };

                expr = Expr::FunctionCall {
                    name,
                    args,
                    location: loc,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse argument list: expr, expr, ...
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(|t| matches!(t, Token::RParen(_))) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if !self.match_token(|t| matches!(t, Token::Comma(_))) {
                break;
            }
        }

        Ok(args)
    }

    /// Parse primary (literals, variables, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        if let Token::IntLiteral(n, loc) = self.peek() {
            let (n, loc) = (*n, *loc);
            self.advance();
            return Ok(Expr::IntLiteral(n, loc));
        }

        if let Token::StringLiteral(s, loc) = self.peek() {
            let (s, loc) = (s.clone(), *loc);
            self.advance();
            return Ok(Expr::StringLiteral(s, loc));
        }

        if self.match_token(|t| matches!(t, Token::True(_))) {
            return Ok(Expr::BoolLiteral(true, loc));
        }

        if self.match_token(|t| matches!(t, Token::False(_))) {
            return Ok(Expr::BoolLiteral(false, loc));
        }

        if let Token::Ident(name, loc) = self.peek() {
            let (name, loc) = (name.clone(), *loc);
            self.advance();
            return Ok(Expr::Variable(name, loc));
        }

        if self.match_token(|t| matches!(t, Token::LParen(_))) {
            let expr = self.parse_expression()?;
            self.expect(
                |t| matches!(t, Token::RParen(_)),
                "Expected ')' after expression",
            )?;
            return Ok(expr);
        }

        Err(ParseError {
            message: format!("Unexpected token: {}", self.peek()),
            location: loc,
        })
    }

    // --- token stream helpers ---

    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn at_eof(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    fn check(&self, pred: impl Fn(&Token) -> bool) -> bool {
        pred(self.peek())
    }

    /// Consume the next token if it matches.
    fn match_token(&mut self, pred: impl Fn(&Token) -> bool) -> bool {
        if pred(self.peek()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the next token or fail with a message.
    fn expect(
        &mut self,
        pred: impl Fn(&Token) -> bool,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.match_token(pred) {
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expr(source: &str) -> Expr {
        let mut parser = Parser::new(source).expect("lexing failed");
        parser.parse_expression().expect("parsing failed")
    }

    #[test]
    fn test_ternary_with_assignment_arms() {
        let expr = parse_expr("2 > 1 ? a = 3 : (a = 2)");

        match expr {
            Expr::TernaryOp {
                condition,
                true_expr,
                false_expr,
                ..
            } => {
                assert!(matches!(
                    *condition,
                    Expr::BinaryOp { op: BinOp::Gt, .. }
                ));
                assert!(matches!(*true_expr, Expr::Assignment { ref name, .. } if name == "a"));
                assert!(matches!(*false_expr, Expr::Assignment { ref name, .. } if name == "a"));
            }
            other => panic!("Expected ternary, got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_binds_tighter_than_comparison() {
        let expr = parse_expr("b-- < 1");

        match expr {
            Expr::BinaryOp {
                op: BinOp::Lt,
                left,
                ..
            } => {
                assert!(matches!(
                    *left,
                    Expr::UnaryOp {
                        op: UnOp::PostDec,
                        ..
                    }
                ));
            }
            other => panic!("Expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let expr = parse_expr("a = b = 1");

        match expr {
            Expr::Assignment { name, rhs, .. } => {
                assert_eq!(name, "a");
                assert!(matches!(*rhs, Expr::Assignment { ref name, .. } if name == "b"));
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_to_literal_rejected() {
        let mut parser = Parser::new("2 = 3").unwrap();
        assert!(parser.parse_expression().is_err());
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        let expr = parse_expr("1 + 2 * 3");

        match expr {
            Expr::BinaryOp {
                op: BinOp::Add,
                right,
                ..
            } => {
                assert!(matches!(
                    *right,
                    Expr::BinaryOp { op: BinOp::Mul, .. }
                ));
            }
            other => panic!("Expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_main_function() {
        let source = r#"
            int main() {
                int a = 0;
                a = 3;
                return 0;
            }
        "#;

        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();

        let main = program.function("main").expect("main not found");
        assert_eq!(main.body.len(), 3);
        assert!(matches!(
            main.body[0],
            Stmt::Declaration {
                var_type: VarType::Int,
                ..
            }
        ));
    }
}
