//! Tank identity and the fixed fleet monitored by a session.

use serde::Serialize;

/// Grouping for tanks of the same growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TankCategory {
    Grower,
    Nursery,
}

impl TankCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TankCategory::Grower => "Grower",
            TankCategory::Nursery => "Nursery",
        }
    }
}

/// A named physical enclosure being monitored.
///
/// Purely a label: tanks have no lifecycle of their own, and the set of
/// tanks is fixed when the session starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tank {
    pub name: String,
    pub category: TankCategory,
}

/// The fixed, ordered set of tanks for one monitoring session.
#[derive(Debug, Clone)]
pub struct Fleet {
    tanks: Vec<Tank>,
}

impl Fleet {
    /// Build a fleet of numbered grower and nursery tanks.
    pub fn new(grower: usize, nursery: usize) -> Self {
        let mut tanks = Vec::with_capacity(grower + nursery);
        for i in 1..=grower {
            tanks.push(Tank {
                name: format!("Grower Tank {}", i),
                category: TankCategory::Grower,
            });
        }
        for i in 1..=nursery {
            tanks.push(Tank {
                name: format!("Nursery Tank {}", i),
                category: TankCategory::Nursery,
            });
        }
        Self { tanks }
    }

    /// Tanks in their stable display/evaluation order.
    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tanks.iter().any(|t| t.name == name)
    }
}

impl Default for Fleet {
    /// The standard farm layout: four grower and four nursery tanks.
    fn default() -> Self {
        Self::new(4, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fleet_layout() {
        let fleet = Fleet::default();
        assert_eq!(fleet.len(), 8);
        assert_eq!(fleet.tanks()[0].name, "Grower Tank 1");
        assert_eq!(fleet.tanks()[0].category, TankCategory::Grower);
        assert_eq!(fleet.tanks()[4].name, "Nursery Tank 1");
        assert_eq!(fleet.tanks()[7].name, "Nursery Tank 4");
        assert_eq!(fleet.tanks()[7].category, TankCategory::Nursery);
    }

    #[test]
    fn test_fleet_order_is_grower_then_nursery() {
        let fleet = Fleet::new(2, 1);
        let names: Vec<&str> = fleet.tanks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["Grower Tank 1", "Grower Tank 2", "Nursery Tank 1"]
        );
        assert!(fleet.contains("Grower Tank 2"));
        assert!(!fleet.contains("Grower Tank 3"));
    }
}
