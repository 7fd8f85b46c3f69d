//! Proxy: callers talk to a stand-in that forwards to the real account.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait BankAccount {
    fn deposit(&mut self, amount: f64) -> String;
    fn withdraw(&mut self, amount: f64) -> String;
    fn balance(&self) -> f64;
}

/// Amounts print with `{:?}`, which keeps a trailing `.0` but writes large
/// magnitudes as `1e16` rather than `1e+16`.
#[derive(Debug, Default)]
pub struct BankAccountImpl {
    balance: f64,
}

impl BankAccount for BankAccountImpl {
    fn deposit(&mut self, amount: f64) -> String {
        self.balance += amount;
        format!("Deposited {:?}, account balance now {:?}", amount, self.balance)
    }

    /// Overdrafts are refused and leave the balance untouched.
    fn withdraw(&mut self, amount: f64) -> String {
        if self.balance >= amount {
            self.balance -= amount;
            format!("Withdrew {:?}, account balance now {:?}", amount, self.balance)
        } else {
            "Insufficient funds".to_string()
        }
    }

    fn balance(&self) -> f64 {
        self.balance
    }
}

/// Owns the real account and forwards every call. Also counts calls, which
/// is the kind of bookkeeping a proxy is good for.
#[derive(Debug, Default)]
pub struct BankAccountProxy {
    real: BankAccountImpl,
    calls: usize,
}

impl BankAccountProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl BankAccount for BankAccountProxy {
    fn deposit(&mut self, amount: f64) -> String {
        self.calls += 1;
        self.real.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> String {
        self.calls += 1;
        self.real.withdraw(amount)
    }

    fn balance(&self) -> f64 {
        self.real.balance()
    }
}

pub struct ProxyPattern;

impl Pattern for ProxyPattern {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn title(&self) -> &'static str {
        "Proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "A proxy forwards deposits and withdrawals to the real bank account"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut bank_account: Box<dyn BankAccount> = Box::new(BankAccountProxy::new());
        writeln!(out, "{}", bank_account.deposit(1000.0))?;
        writeln!(out, "{}", bank_account.withdraw(500.0))?;
        writeln!(out, "Account balance: {:?}", bank_account.balance())?;
        Ok(())
    }
}
