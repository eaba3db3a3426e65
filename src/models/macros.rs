use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distribution::constants::*;
use crate::distribution::input::round_to;

/// One of the three energy-bearing macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKey {
    Protein,
    Carbs,
    Fat,
}

impl MacroKey {
    /// Fixed iteration order; also the tie-break order for rounding correction.
    pub const ALL: [MacroKey; 3] = [MacroKey::Protein, MacroKey::Carbs, MacroKey::Fat];

    /// Energy density in kcal per gram.
    #[inline]
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            MacroKey::Protein => PROTEIN_KCAL_PER_GRAM,
            MacroKey::Carbs => CARBS_KCAL_PER_GRAM,
            MacroKey::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MacroKey::Protein => "protein",
            MacroKey::Carbs => "carbs",
            MacroKey::Fat => "fat",
        }
    }

    /// The two macros that are not `self`, in canonical order.
    pub fn others(self) -> [MacroKey; 2] {
        match self {
            MacroKey::Protein => [MacroKey::Carbs, MacroKey::Fat],
            MacroKey::Carbs => [MacroKey::Protein, MacroKey::Fat],
            MacroKey::Fat => [MacroKey::Protein, MacroKey::Carbs],
        }
    }
}

impl fmt::Display for MacroKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacroKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protein" | "p" => Ok(MacroKey::Protein),
            "carbs" | "carb" | "carbohydrates" | "c" => Ok(MacroKey::Carbs),
            "fat" | "fats" | "f" => Ok(MacroKey::Fat),
            other => Err(format!("unknown macro '{}'", other)),
        }
    }
}

/// Which representation a macro edit is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MacroInput {
    Percentage,
    Grams,
    GramsPerKg,
}

impl FromStr for MacroInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage" | "pct" | "%" => Ok(MacroInput::Percentage),
            "grams" | "g" => Ok(MacroInput::Grams),
            "grams-per-kg" | "gkg" | "g/kg" => Ok(MacroInput::GramsPerKg),
            other => Err(format!("unknown macro input '{}'", other)),
        }
    }
}

/// Target for a single macronutrient in all three representations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub percentage: f64,

    pub grams: u32,

    #[serde(rename = "gramsPerKg")]
    pub grams_per_kg: f64,

    #[serde(default)]
    pub locked: bool,
}

impl MacroTarget {
    /// Set `percentage` and derive grams and grams-per-kg from it.
    pub fn apply_percentage(&mut self, key: MacroKey, percentage: f64, kcal: u32, weight_kg: f64) {
        self.percentage = round_to(percentage, MACRO_PCT_DECIMALS);
        self.grams = grams_from_percentage(key, self.percentage, kcal);
        self.grams_per_kg = grams_per_kg(self.grams, weight_kg);
    }

    /// Energy carried by this target in kcal.
    pub fn kcal(&self, key: MacroKey) -> f64 {
        self.grams as f64 * key.kcal_per_gram()
    }
}

/// Grams needed to supply `percentage` of `kcal`. Zero when `kcal` is zero.
pub fn grams_from_percentage(key: MacroKey, percentage: f64, kcal: u32) -> u32 {
    let grams = (percentage / 100.0 * kcal as f64 / key.kcal_per_gram()).round();
    if grams.is_finite() && grams > 0.0 {
        grams as u32
    } else {
        0
    }
}

/// Share of `kcal` supplied by `grams`, unclamped and rounded to three decimals.
pub fn percentage_from_grams(key: MacroKey, grams: u32, kcal: u32) -> f64 {
    if kcal == 0 {
        return 0.0;
    }
    round_to(
        grams as f64 * key.kcal_per_gram() / kcal as f64 * 100.0,
        MACRO_PCT_DECIMALS,
    )
}

/// Grams normalized by body weight. Zero for a missing or non-positive weight.
pub fn grams_per_kg(grams: u32, weight_kg: f64) -> f64 {
    if weight_kg > 0.0 && weight_kg.is_finite() {
        round_to(grams as f64 / weight_kg, GRAMS_PER_KG_DECIMALS)
    } else {
        0.0
    }
}

/// A protein/carbs/fat percentage split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn get(&self, key: MacroKey) -> f64 {
        match key {
            MacroKey::Protein => self.protein,
            MacroKey::Carbs => self.carbs,
            MacroKey::Fat => self.fat,
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein: DEFAULT_PROTEIN_PCT,
            carbs: DEFAULT_CARBS_PCT,
            fat: DEFAULT_FAT_PCT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_densities() {
        assert_eq!(MacroKey::Protein.kcal_per_gram(), 4.0);
        assert_eq!(MacroKey::Carbs.kcal_per_gram(), 4.0);
        assert_eq!(MacroKey::Fat.kcal_per_gram(), 9.0);
    }

    #[test]
    fn test_target_kcal_uses_rounded_grams() {
        let mut fat = MacroTarget::default();
        fat.apply_percentage(MacroKey::Fat, 30.0, 2000, 0.0);
        assert_eq!(fat.kcal(MacroKey::Fat), 603.0);
    }

    #[test]
    fn test_grams_from_percentage() {
        assert_eq!(grams_from_percentage(MacroKey::Protein, 30.0, 2000), 150);
        assert_eq!(grams_from_percentage(MacroKey::Carbs, 40.0, 2000), 200);
        assert_eq!(grams_from_percentage(MacroKey::Fat, 30.0, 2000), 67);
        assert_eq!(grams_from_percentage(MacroKey::Fat, 30.0, 0), 0);
    }

    #[test]
    fn test_percentage_from_grams_zero_calories() {
        assert_eq!(percentage_from_grams(MacroKey::Protein, 150, 0), 0.0);
    }

    #[test]
    fn test_grams_per_kg_without_weight() {
        assert_eq!(grams_per_kg(150, 0.0), 0.0);
        assert_eq!(grams_per_kg(150, -3.0), 0.0);
        assert_eq!(grams_per_kg(150, 75.0), 2.0);
    }

    #[test]
    fn test_parse_keys_and_inputs() {
        assert_eq!("Protein".parse::<MacroKey>().unwrap(), MacroKey::Protein);
        assert_eq!("carb".parse::<MacroKey>().unwrap(), MacroKey::Carbs);
        assert!("fiber".parse::<MacroKey>().is_err());
        assert_eq!("g/kg".parse::<MacroInput>().unwrap(), MacroInput::GramsPerKg);
        assert_eq!("%".parse::<MacroInput>().unwrap(), MacroInput::Percentage);
    }

    #[test]
    fn test_others_excludes_self() {
        for key in MacroKey::ALL {
            assert!(!key.others().contains(&key));
        }
    }
}
