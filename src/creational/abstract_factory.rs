//! Abstract Factory: a garage produces a matching family of vehicles.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub trait Car {
    fn kind(&self) -> &str;
    fn start(&self) -> String;
}

pub trait Motorcycle {
    fn kind(&self) -> &str;
    fn start(&self) -> String;
}

/// A factory for one family of vehicles. A garage may not stock every kind.
pub trait Garage {
    fn create_car(&self) -> Option<Box<dyn Car>>;
    fn create_motorcycle(&self) -> Option<Box<dyn Motorcycle>>;
}

pub struct MotorMagazine;

impl Garage for MotorMagazine {
    fn create_car(&self) -> Option<Box<dyn Car>> {
        Some(Box::new(SportsCar { kind: "Ferrari".to_string() }))
    }

    fn create_motorcycle(&self) -> Option<Box<dyn Motorcycle>> {
        Some(Box::new(SportsMotorcycle { kind: "Yamaha".to_string() }))
    }
}

struct SportsCar {
    kind: String,
}

impl Car for SportsCar {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> String {
        format!("Starting a {} car", self.kind)
    }
}

struct SportsMotorcycle {
    kind: String,
}

impl Motorcycle for SportsMotorcycle {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> String {
        format!("Starting a {} motorcycle", self.kind)
    }
}

pub struct MyGarage;

impl Garage for MyGarage {
    fn create_car(&self) -> Option<Box<dyn Car>> {
        Some(Box::new(FavoriteCar { kind: "Mercedes".to_string() }))
    }

    fn create_motorcycle(&self) -> Option<Box<dyn Motorcycle>> {
        Some(Box::new(FavoriteMotorcycle { kind: "Honda CBR".to_string() }))
    }
}

struct FavoriteCar {
    kind: String,
}

impl Car for FavoriteCar {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> String {
        format!("I like to drive my {}", self.kind)
    }
}

struct FavoriteMotorcycle {
    kind: String,
}

impl Motorcycle for FavoriteMotorcycle {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> String {
        format!("I like to drive fast with my {}", self.kind)
    }
}

/// A car-only dealer; asking it for a motorcycle yields nothing.
pub struct CarDealer;

impl Garage for CarDealer {
    fn create_car(&self) -> Option<Box<dyn Car>> {
        Some(Box::new(FavoriteCar { kind: "Volvo".to_string() }))
    }

    fn create_motorcycle(&self) -> Option<Box<dyn Motorcycle>> {
        None
    }
}

/// Starts whatever the garage produces, silently skipping missing products.
pub fn start_all(garage: &dyn Garage) -> Vec<String> {
    let car = garage.create_car().map(|c| c.start());
    let motorcycle = garage.create_motorcycle().map(|m| m.start());
    car.into_iter().chain(motorcycle).collect()
}

pub struct AbstractFactoryPattern;

impl Pattern for AbstractFactoryPattern {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn title(&self) -> &'static str {
        "Abstract Factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Garages build matching families of cars and motorcycles"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let garages: [&dyn Garage; 2] = [&MotorMagazine, &MyGarage];
        for garage in garages {
            for line in start_all(garage) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_garage_builds_its_own_family() {
        assert_eq!(MotorMagazine.create_car().unwrap().kind(), "Ferrari");
        assert_eq!(MotorMagazine.create_motorcycle().unwrap().kind(), "Yamaha");
        assert_eq!(MyGarage.create_car().unwrap().kind(), "Mercedes");
        assert_eq!(MyGarage.create_motorcycle().unwrap().kind(), "Honda CBR");
    }

    #[test]
    fn test_missing_product_is_skipped() {
        assert_eq!(start_all(&CarDealer), vec!["I like to drive my Volvo"]);
    }

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        AbstractFactoryPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting a Ferrari car\n\
             Starting a Yamaha motorcycle\n\
             I like to drive my Mercedes\n\
             I like to drive fast with my Honda CBR\n"
        );
    }
}
