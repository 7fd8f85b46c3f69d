//! Builder: assemble a house part by part with a consuming, chainable builder.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Pattern};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseType {
    Home,
    Villa,
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseType::Home => f.write_str("home"),
            HouseType::Villa => f.write_str("villa"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Garden {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pool {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantType {
    Tree,
    Flower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plant {
    pub kind: PlantType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct House {
    pub kind: Option<HouseType>,
    pub garden: Option<Garden>,
    pub pool: Option<Pool>,
    pub plants: Vec<Plant>,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::create()
    }

    pub fn describe(&self) -> Vec<String> {
        let kind = match self.kind {
            Some(kind) => format!("House type is {}", kind),
            None => "-".to_string(),
        };
        let garden = match self.garden {
            Some(g) => format!("garden width: {:?} - length: {:?}", g.width, g.length),
            None => "garden: none".to_string(),
        };
        let pool = match self.pool {
            Some(p) => format!("pool width: {:?} - length: {:?}", p.width, p.length),
            None => "pool: none".to_string(),
        };
        vec![kind, garden, pool, format!("plants count: {}", self.plants.len())]
    }
}

#[derive(Debug, Default)]
pub struct HouseBuilder {
    house: House,
}

impl HouseBuilder {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: HouseType) -> Self {
        self.house.kind = Some(kind);
        self
    }

    pub fn garden(mut self, garden: Garden) -> Self {
        self.house.garden = Some(garden);
        self
    }

    pub fn pool(mut self, pool: Pool) -> Self {
        self.house.pool = Some(pool);
        self
    }

    pub fn plants(mut self, plants: impl IntoIterator<Item = Plant>) -> Self {
        self.house.plants = plants.into_iter().collect();
        self
    }

    pub fn build(self) -> House {
        self.house
    }
}

pub struct BuilderPattern;

impl Pattern for BuilderPattern {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn title(&self) -> &'static str {
        "Builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A chainable builder assembles a house with garden, pool and plants"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let house = House::builder()
            .kind(HouseType::Villa)
            .garden(Garden { length: 123.0, width: 450.0 })
            .pool(Pool { length: 87.0, width: 65.0 })
            .plants([
                Plant { kind: PlantType::Tree },
                Plant { kind: PlantType::Tree },
                Plant { kind: PlantType::Flower },
            ])
            .build();

        for line in house.describe() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_output() {
        let mut out = Vec::new();
        BuilderPattern.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "House type is villa\n\
             garden width: 450.0 - length: 123.0\n\
             pool width: 65.0 - length: 87.0\n\
             plants count: 3\n"
        );
    }

    #[test]
    fn test_empty_builder_describes_missing_parts() {
        let house = HouseBuilder::create().build();
        assert_eq!(
            house.describe(),
            vec!["-", "garden: none", "pool: none", "plants count: 0"]
        );
    }

    #[test]
    fn test_later_setter_wins() {
        let house = House::builder()
            .kind(HouseType::Villa)
            .kind(HouseType::Home)
            .build();
        assert_eq!(house.kind, Some(HouseType::Home));
    }
}
