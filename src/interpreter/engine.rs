//! Tree-walking execution engine
//!
//! The interpreter executes `main` statement by statement and evaluates
//! expressions with C's semantics for the constructs it supports. Two rules
//! carry the whole demonstration:
//!
//! - Postfix `++`/`--` yield the value captured *before* the store.
//! - On a `bool` lvalue, `--` flips the stored state and `++` stores `true`
//!   unconditionally. This matches what compilers emit for `_Bool` (an
//!   `xor 1` versus a plain store of 1), so starting from `false`, repeated
//!   `b--` prints `0 1 0 ...` while repeated `b++` prints `1 1 1 ...` once
//!   the flag is set.
//!
//! Everything else is ordinary C: the ternary evaluates exactly one arm and
//! takes its value, an assignment's value is the value stored, and call
//! arguments evaluate left to right.

use crate::interpreter::console::Console;
use crate::interpreter::errors::RuntimeError;
use crate::memory::scope::Scope;
use crate::memory::value::Value;
use crate::parser::ast::*;

/// Statement-level control flow
enum Flow {
    Next,
    Return,
}

/// The expression interpreter
pub struct Interpreter {
    program: Program,
    scope: Scope,
    console: Console,
}

impl Interpreter {
    pub fn new(program: Program) -> Self {
        Interpreter {
            program,
            scope: Scope::new(),
            console: Console::new(),
        }
    }

    /// Execute `main` to completion.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let body = self
            .program
            .function("main")
            .ok_or(RuntimeError::NoMainFunction)?
            .body
            .clone();

        for stmt in &body {
            match self.execute_stmt(stmt)? {
                Flow::Next => {}
                Flow::Return => break,
            }
        }

        Ok(())
    }

    /// Everything the program printed.
    pub fn console(&self) -> &Console {
        &self.console
    }

    fn execute_stmt(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Declaration {
                name,
                var_type,
                initializer,
                location,
            } => {
                self.scope.declare(name, *var_type);
                if let Some(init) = initializer {
                    let value = self.evaluate_expr(init)?;
                    self.store(name, value, *location)?;
                }
                Ok(Flow::Next)
            }
            Stmt::Expression(expr) => {
                self.evaluate_expr(expr)?;
                Ok(Flow::Next)
            }
            Stmt::Return { value, .. } => {
                if let Some(expr) = value {
                    self.evaluate_expr(expr)?;
                }
                Ok(Flow::Return)
            }
        }
    }

    /// Evaluate an expression to a value.
    pub(crate) fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::IntLiteral(n, _) => Ok(Value::Int(*n)),
            Expr::BoolLiteral(b, _) => Ok(Value::Bool(*b)),
            Expr::StringLiteral(_, location) => Err(RuntimeError::TypeError {
                expected: "int or bool".to_string(),
                got: "string literal".to_string(),
                location: *location,
            }),
            Expr::Variable(name, location) => self.read_variable(name, *location),
            Expr::Assignment {
                name,
                rhs,
                location,
            } => {
                let value = self.evaluate_expr(rhs)?;
                self.store(name, value, *location)
            }
            Expr::BinaryOp {
                op,
                left,
                right,
                location,
            } => self.evaluate_binary_op(*op, left, right, *location),
            Expr::UnaryOp {
                op,
                operand,
                location,
            } => self.evaluate_unary_op(*op, operand, *location),
            Expr::TernaryOp {
                condition,
                true_expr,
                false_expr,
                location,
            } => {
                let cond = self.evaluate_expr(condition)?;
                let taken = cond.is_truthy().ok_or_else(|| RuntimeError::TypeError {
                    expected: "scalar condition".to_string(),
                    got: format!("{:?}", cond),
                    location: *location,
                })?;

                // Exactly one arm is evaluated
                if taken {
                    self.evaluate_expr(true_expr)
                } else {
                    self.evaluate_expr(false_expr)
                }
            }
            Expr::FunctionCall {
                name,
                args,
                location,
            } => match name.as_str() {
                "printf" => self.builtin_printf(args, *location),
                _ => Err(RuntimeError::UndefinedFunction {
                    name: name.clone(),
                    location: *location,
                }),
            },
        }
    }

    fn read_variable(
        &self,
        name: &str,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let slot = self
            .scope
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
                location,
            })?;

        if !slot.value.is_initialized() {
            return Err(RuntimeError::UninitializedRead {
                var: name.to_string(),
                location,
            });
        }

        Ok(slot.value)
    }

    /// Store into a declared variable, converting to the slot's type.
    fn store(
        &mut self,
        name: &str,
        value: Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let slot = self
            .scope
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
                location,
            })?;
        let expected = slot.var_type.name().to_string();

        self.scope
            .assign(name, value)
            .map_err(|_| RuntimeError::TypeError {
                expected,
                got: format!("{:?}", value),
                location,
            })
    }

    fn evaluate_binary_op(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let lhs = self.evaluate_expr(left)?;
        let rhs = self.evaluate_expr(right)?;

        // Usual arithmetic conversions: bool operands become 0 or 1
        let l = self.arith_operand(lhs, location)?;
        let r = self.arith_operand(rhs, location)?;

        let result = match op {
            BinOp::Add => l.checked_add(r).ok_or(RuntimeError::IntegerOverflow {
                operation: format!("{} + {}", l, r),
                location,
            })?,
            BinOp::Sub => l.checked_sub(r).ok_or(RuntimeError::IntegerOverflow {
                operation: format!("{} - {}", l, r),
                location,
            })?,
            BinOp::Mul => l.checked_mul(r).ok_or(RuntimeError::IntegerOverflow {
                operation: format!("{} * {}", l, r),
                location,
            })?,
            BinOp::Div => {
                if r == 0 {
                    return Err(RuntimeError::DivisionError {
                        operation: format!("Division by zero: {} / {}", l, r),
                        location,
                    });
                }
                l.checked_div(r).ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} / {}", l, r),
                    location,
                })?
            }
            BinOp::Mod => {
                if r == 0 {
                    return Err(RuntimeError::DivisionError {
                        operation: format!("Modulo by zero: {} % {}", l, r),
                        location,
                    });
                }
                l.checked_rem(r).ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} % {}", l, r),
                    location,
                })?
            }
            // C comparisons yield int 0 or 1
            BinOp::Eq => i32::from(l == r),
            BinOp::Ne => i32::from(l != r),
            BinOp::Lt => i32::from(l < r),
            BinOp::Le => i32::from(l <= r),
            BinOp::Gt => i32::from(l > r),
            BinOp::Ge => i32::from(l >= r),
        };

        Ok(Value::Int(result))
    }

    fn evaluate_unary_op(
        &mut self,
        op: UnOp,
        operand: &Expr,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        if op.is_step() {
            return self.evaluate_inc_dec(op, operand, location);
        }

        let val = self.evaluate_expr(operand)?;
        match op {
            UnOp::Neg => {
                let n = self.arith_operand(val, location)?;
                n.checked_neg()
                    .ok_or(RuntimeError::IntegerOverflow {
                        operation: format!("-{}", n),
                        location,
                    })
                    .map(Value::Int)
            }
            UnOp::Not => {
                let b = val.is_truthy().ok_or_else(|| RuntimeError::TypeError {
                    expected: "scalar".to_string(),
                    got: format!("{:?}", val),
                    location,
                })?;
                Ok(Value::Int(i32::from(!b)))
            }
            _ => unreachable!(),
        }
    }

    /// `++`/`--` in both prefix and postfix form.
    ///
    /// The postfix result is the value read before the store; that ordering
    /// is the observable property everything downstream depends on.
    fn evaluate_inc_dec(
        &mut self,
        op: UnOp,
        operand: &Expr,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let name = match operand {
            Expr::Variable(name, _) => name.clone(),
            _ => return Err(RuntimeError::NotAnLvalue { location }),
        };

        let current = self.read_variable(&name, location)?;

        let new_val = match current {
            // _Bool: decrement is an xor with 1, increment a plain store of 1
            Value::Bool(b) => match op {
                UnOp::PreDec | UnOp::PostDec => Value::Bool(!b),
                UnOp::PreInc | UnOp::PostInc => Value::Bool(true),
                _ => unreachable!(),
            },
            Value::Int(n) => match op {
                UnOp::PreInc | UnOp::PostInc => {
                    Value::Int(n.checked_add(1).ok_or(RuntimeError::IntegerOverflow {
                        operation: format!("{} + 1", n),
                        location,
                    })?)
                }
                UnOp::PreDec | UnOp::PostDec => {
                    Value::Int(n.checked_sub(1).ok_or(RuntimeError::IntegerOverflow {
                        operation: format!("{} - 1", n),
                        location,
                    })?)
                }
                _ => unreachable!(),
            },
            Value::Uninitialized => unreachable!(), // read_variable rejects it
        };

        let stored = self.store(&name, new_val, location)?;

        match op {
            UnOp::PreInc | UnOp::PreDec => Ok(stored),
            UnOp::PostInc | UnOp::PostDec => Ok(current),
            _ => unreachable!(),
        }
    }

    fn arith_operand(
        &self,
        val: Value,
        location: SourceLocation,
    ) -> Result<i32, RuntimeError> {
        val.as_arith_int().ok_or_else(|| RuntimeError::TypeError {
            expected: "int or bool".to_string(),
            got: format!("{:?}", val),
            location,
        })
    }

    // --- built-ins ---

    fn builtin_printf(
        &mut self,
        args: &[Expr],
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        if args.is_empty() {
            return Err(RuntimeError::InvalidPrintfFormat {
                message: "printf requires at least one argument".to_string(),
                location,
            });
        }

        let format_str = match &args[0] {
            Expr::StringLiteral(s, _) => s.clone(),
            _ => {
                return Err(RuntimeError::InvalidPrintfFormat {
                    message: "printf format must be a string literal".to_string(),
                    location,
                });
            }
        };

        // Arguments evaluate left to right; side effects in earlier
        // arguments are visible to later ones
        let mut arg_values = Vec::new();
        for arg in &args[1..] {
            arg_values.push(self.evaluate_expr(arg)?);
        }

        let output = self.format_printf(&format_str, &arg_values, location)?;
        self.console.print(&output);

        Ok(Value::Int(output.len() as i32))
    }

    fn format_printf(
        &self,
        format: &str,
        args: &[Value],
        location: SourceLocation,
    ) -> Result<String, RuntimeError> {
        let mut output = String::new();
        let mut chars = format.chars().peekable();
        let mut arg_index = 0;

        while let Some(ch) = chars.next() {
            if ch != '%' {
                output.push(ch);
                continue;
            }

            match chars.next() {
                Some('%') => output.push('%'),
                Some('d') => {
                    let arg = args.get(arg_index).ok_or_else(|| {
                        RuntimeError::InvalidPrintfFormat {
                            message: "Not enough arguments for format string".to_string(),
                            location,
                        }
                    })?;
                    let n = arg.as_arith_int().ok_or_else(|| {
                        RuntimeError::InvalidPrintfFormat {
                            message: format!("%d expects int or bool, got {:?}", arg),
                            location,
                        }
                    })?;
                    output.push_str(&n.to_string());
                    arg_index += 1;
                }
                Some(other) => {
                    return Err(RuntimeError::InvalidPrintfFormat {
                        message: format!("Unsupported format specifier: %{}", other),
                        location,
                    });
                }
                None => output.push('%'),
            }
        }

        Ok(output)
    }
}
