//! Mediator: buyer and seller never talk directly; the agent carries the offer.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub const ACCEPTANCE_THRESHOLD: f64 = 190_000.0;

#[derive(Debug, Default)]
pub struct PersonMediator {
    pub name: String,
    counterparts: Vec<String>,
    offer: f64,
    accepted_offer: bool,
}

impl PersonMediator {
    pub fn new(name: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.into(),
            ..Self::default()
        }))
    }

    pub fn register(&mut self, counterpart: &str) {
        self.counterparts.push(counterpart.to_string());
    }

    pub fn counterparts(&self) -> &[String] {
        &self.counterparts
    }

    pub fn offer(&self) -> f64 {
        self.offer
    }

    pub fn accepted_offer(&self) -> bool {
        self.accepted_offer
    }

    /// Relays the seller's answer and records whether the deal went through.
    pub fn complete_transaction(&mut self, seller: &Seller) -> String {
        self.accepted_offer = Seller::accepts(self.offer);
        seller.answer(self.offer)
    }
}

pub type SharedMediator = Rc<RefCell<PersonMediator>>;

pub struct Buyer {
    pub name: String,
    mediator: SharedMediator,
}

impl Buyer {
    /// Creates the buyer and registers it with the mediator.
    pub fn new(name: impl Into<String>, mediator: &SharedMediator) -> Self {
        let name = name.into();
        mediator.borrow_mut().register(&name);
        Self {
            name,
            mediator: Rc::clone(mediator),
        }
    }

    pub fn send_offer(&self, offer: f64) -> String {
        let mut mediator = self.mediator.borrow_mut();
        mediator.offer = offer;
        mediator.accepted_offer = false;
        format!("I am sending an offer of {:?} dollars", offer)
    }
}

pub struct Seller {
    pub name: String,
    mediator: SharedMediator,
}

impl Seller {
    pub fn new(name: impl Into<String>, mediator: &SharedMediator) -> Self {
        let name = name.into();
        mediator.borrow_mut().register(&name);
        Self {
            name,
            mediator: Rc::clone(mediator),
        }
    }

    fn accepts(offer: f64) -> bool {
        offer > ACCEPTANCE_THRESHOLD
    }

    fn answer(&self, offer: f64) -> String {
        if Self::accepts(offer) {
            format!("I will accept your offer of {:?} dollars", offer)
        } else {
            format!("I will not accept your offer of {:?} dollars", offer)
        }
    }

    /// The seller's reply to whatever offer the mediator currently holds.
    pub fn message(&self) -> String {
        self.answer(self.mediator.borrow().offer)
    }
}

pub struct MediatorPattern;

impl Pattern for MediatorPattern {
    fn name(&self) -> &'static str {
        "mediator"
    }

    fn title(&self) -> &'static str {
        "Mediator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "An agent relays offers between a buyer and a seller"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mediator = PersonMediator::new("Agent Smith");
        let buyer = Buyer::new("Marina Mitchell", &mediator);
        let seller = Seller::new("Dillan Grimes", &mediator);

        for offer in [100_000.0, 200_000.0] {
            writeln!(out, "{}", buyer.send_offer(offer))?;
            let answer = mediator.borrow_mut().complete_transaction(&seller);
            writeln!(out, "{}", answer)?;
        }
        Ok(())
    }
}
