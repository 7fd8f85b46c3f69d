//! Interpreter: an arithmetic expression tree evaluated by recursive descent.

use std::fmt;
use std::io::Write;

use thiserror::Error;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn num(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Expr::Sub(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Box::new(left), Box::new(right))
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Expr::Div(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Add(l, r) => write!(f, "({} + {})", l, r),
            Expr::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expr::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expr::Div(l, r) => write!(f, "({} / {})", l, r),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("division by zero in {0}")]
    DivisionByZero(String),

    #[error("arithmetic overflow in {0}")]
    Overflow(String),
}

#[derive(Debug, Default)]
pub struct ArithmeticInterpreter;

impl ArithmeticInterpreter {
    pub fn interpret(&self, expr: &Expr) -> std::result::Result<i64, InterpretError> {
        let overflow = || InterpretError::Overflow(expr.to_string());
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Add(l, r) => self
                .interpret(l)?
                .checked_add(self.interpret(r)?)
                .ok_or_else(overflow),
            Expr::Sub(l, r) => self
                .interpret(l)?
                .checked_sub(self.interpret(r)?)
                .ok_or_else(overflow),
            Expr::Mul(l, r) => self
                .interpret(l)?
                .checked_mul(self.interpret(r)?)
                .ok_or_else(overflow),
            Expr::Div(l, r) => {
                let divisor = self.interpret(r)?;
                if divisor == 0 {
                    return Err(InterpretError::DivisionByZero(expr.to_string()));
                }
                self.interpret(l)?.checked_div(divisor).ok_or_else(overflow)
            }
        }
    }
}

pub struct InterpreterPattern;

impl Pattern for InterpreterPattern {
    fn name(&self) -> &'static str {
        "interpreter"
    }

    fn title(&self) -> &'static str {
        "Interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "An expression tree is evaluated by a recursive interpreter"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let expression = Expr::add(
            Expr::num(2),
            Expr::mul(Expr::add(Expr::num(3), Expr::num(2)), Expr::num(4)),
        );

        let interpreter = ArithmeticInterpreter;
        let result = interpreter.interpret(&expression)?;
        writeln!(out, "{}", result)?;
        Ok(())
    }
}
