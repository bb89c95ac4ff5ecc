//! Static emission factor table and the emission formula.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;

/// CO2 coefficients for one travel category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactor {
    pub unit: &'static str,
    pub per_unit_kg: f64,
    pub per_hour_kg: f64,
}

const CAR: EmissionFactor = EmissionFactor {
    unit: "km",
    per_unit_kg: 0.192,
    per_hour_kg: 0.20,
};
const BUS: EmissionFactor = EmissionFactor {
    unit: "km",
    per_unit_kg: 0.105,
    per_hour_kg: 0.10,
};
const METRO_TRAIN: EmissionFactor = EmissionFactor {
    unit: "km",
    per_unit_kg: 0.041,
    per_hour_kg: 0.05,
};
const MOTORCYCLE: EmissionFactor = EmissionFactor {
    unit: "km",
    per_unit_kg: 0.09,
    per_hour_kg: 0.08,
};
const CYCLE: EmissionFactor = EmissionFactor {
    unit: "km",
    per_unit_kg: 0.005,
    per_hour_kg: 0.0,
};

pub fn factor_for(category: Category) -> EmissionFactor {
    match category {
        Category::Car => CAR,
        Category::Bus => BUS,
        Category::MetroTrain => METRO_TRAIN,
        Category::Motorcycle => MOTORCYCLE,
        Category::Cycle => CYCLE,
    }
}

/// The whole table, in display order.
pub fn factor_table() -> Vec<(Category, EmissionFactor)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, factor_for(c)))
        .collect()
}

/// Round to 3 decimal places (half away from zero).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Category {
    /// `distance * per_unit + hours * per_hour`, rounded to grams.
    /// Inputs are expected to be already validated (>= 0).
    pub fn emission(&self, distance: f64, hours: f64) -> f64 {
        let f = factor_for(*self);
        round3(distance * f.per_unit_kg + hours * f.per_hour_kg)
    }
}

/// Compute kg of CO2 for a category label as stored in the database.
pub fn compute_emission(category: &str, distance: f64, hours: f64) -> AppResult<f64> {
    let cat = Category::from_db_str(category)
        .ok_or_else(|| AppError::InvalidCategory(category.to_string()))?;
    Ok(cat.emission(distance, hours))
}
