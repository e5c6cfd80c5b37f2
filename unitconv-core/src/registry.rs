//! Unit registry: name ↔ unit type lookup

use std::collections::HashMap;
use tracing::debug;
use crate::{ConversionError, Result, UnitInfo, UnitType};

/// Registry of all known units and the names they answer to
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitInfo>,
    lookup: HashMap<String, UnitType>,
    names: Vec<String>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a new unit and register its canonical name
    pub fn define(&mut self, info: UnitInfo) -> Result<UnitType> {
        let key = normalize(&info.name);
        if self.lookup.contains_key(&key) {
            return Err(ConversionError::duplicate_unit_name(key));
        }

        let unit = UnitType::from_index(self.units.len());
        debug!(%unit, name = %key, symbol = %info.symbol, "defined unit");
        self.units.push(info);
        self.insert_name(key, unit);
        Ok(unit)
    }

    /// Map another name onto an existing unit.
    ///
    /// Re-registering the same name for the same unit is a no-op.
    pub fn register(&mut self, name: &str, unit: UnitType) -> Result<()> {
        if unit.index() >= self.units.len() {
            return Err(ConversionError::unknown_unit(unit.to_string()));
        }

        let key = normalize(name);
        match self.lookup.get(&key) {
            Some(&existing) if existing == unit => Ok(()),
            Some(_) => Err(ConversionError::duplicate_unit_name(key)),
            None => {
                self.insert_name(key, unit);
                Ok(())
            }
        }
    }

    fn insert_name(&mut self, key: String, unit: UnitType) {
        self.names.push(key.clone());
        self.lookup.insert(key, unit);
    }

    /// Case-insensitive lookup
    pub fn resolve(&self, name: &str) -> Result<UnitType> {
        self.lookup
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| ConversionError::unknown_unit(name))
    }

    /// Resolve a name together with the unit's metadata
    pub fn resolve_info(&self, name: &str) -> Result<(UnitType, &UnitInfo)> {
        let unit = self.resolve(name)?;
        // every id in `lookup` was handed out by `define`
        Ok((unit, &self.units[unit.index()]))
    }

    /// All registered names, in registration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Every name mapped to `unit`, canonical name first
    pub fn names_for(&self, unit: UnitType) -> Vec<&str> {
        self.names
            .iter()
            .filter(|n| self.lookup.get(n.as_str()) == Some(&unit))
            .map(|n| n.as_str())
            .collect()
    }

    pub fn info(&self, unit: UnitType) -> Option<&UnitInfo> {
        self.units.get(unit.index())
    }

    /// All units in definition order
    pub fn units(&self) -> impl Iterator<Item = (UnitType, &UnitInfo)> {
        self.units
            .iter()
            .enumerate()
            .map(|(i, info)| (UnitType::from_index(i), info))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
