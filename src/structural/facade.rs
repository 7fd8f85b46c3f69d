//! Facade: one call starts or stops every subsystem of the car.

use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

pub const DEFAULT_STATION: &str = "FM 102.5";

#[derive(Debug, Default)]
pub struct Car {
    running: bool,
}

impl Car {
    pub fn start(&mut self) -> String {
        self.running = true;
        "Starting the car.".to_string()
    }

    pub fn stop(&mut self) -> String {
        self.running = false;
        "Stopping the car.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct AirConditioner {
    on: bool,
}

impl AirConditioner {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "Turning on the air conditioner.".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        "Turning off the air conditioner.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Radio {
    on: bool,
    station: Option<String>,
}

impl Radio {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "Turning on the radio.".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        "Turning off the radio.".to_string()
    }

    pub fn set_station(&mut self, station: &str) -> String {
        self.station = Some(station.to_string());
        format!("Setting the radio station to {}.", station)
    }

    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct CarSystem {
    car: Car,
    air_conditioner: AirConditioner,
    radio: Radio,
}

impl CarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_car(&mut self) -> Vec<String> {
        vec![
            self.car.start(),
            self.air_conditioner.turn_on(),
            self.radio.turn_on(),
            self.radio.set_station(DEFAULT_STATION),
        ]
    }

    /// Shuts down in reverse order of `start_car`.
    pub fn stop_car(&mut self) -> Vec<String> {
        vec![
            self.radio.turn_off(),
            self.air_conditioner.turn_off(),
            self.car.stop(),
        ]
    }

    pub fn is_running(&self) -> bool {
        self.car.running && self.air_conditioner.on && self.radio.on
    }

    pub fn radio(&self) -> &Radio {
        &self.radio
    }
}

pub struct FacadePattern;

impl Pattern for FacadePattern {
    fn name(&self) -> &'static str {
        "facade"
    }

    fn title(&self) -> &'static str {
        "Facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "A car system hides the car, air conditioner and radio behind two calls"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut car_system = CarSystem::new();
        for line in car_system.start_car().into_iter().chain(car_system.stop_car()) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
