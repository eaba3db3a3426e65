use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distribution::constants::*;
use crate::distribution::input::{clamp_percentage, non_negative, round_to, whole_number};
use crate::models::macros::{grams_from_percentage, grams_per_kg, percentage_from_grams};
use crate::models::{MacroInput, MacroKey, MacroSplit, MacroTarget};

/// Result of a macro edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MacroOutcome {
    Applied,

    /// The edit would push the other macros below zero, or leave a gap no
    /// unlocked macro can fill. Nothing was changed.
    Rejected { available: f64 },
}

impl MacroOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MacroOutcome::Applied)
    }
}

/// Protein/carbs/fat targets whose percentages are kept summing to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: MacroTarget,
    pub carbs: MacroTarget,
    pub fat: MacroTarget,

    /// Most recent split that summed to 100 within tolerance.
    #[serde(rename = "lastGood", default, skip_serializing_if = "Option::is_none")]
    pub last_good: Option<MacroSplit>,
}

impl MacroDistribution {
    /// The 30/40/30 default split at `kcal`.
    pub fn with_default_split(kcal: u32, weight_kg: f64) -> Self {
        let mut distribution = Self::default();
        distribution.reset_to_default(kcal, weight_kg);
        distribution
    }

    pub fn get(&self, key: MacroKey) -> &MacroTarget {
        match key {
            MacroKey::Protein => &self.protein,
            MacroKey::Carbs => &self.carbs,
            MacroKey::Fat => &self.fat,
        }
    }

    pub fn get_mut(&mut self, key: MacroKey) -> &mut MacroTarget {
        match key {
            MacroKey::Protein => &mut self.protein,
            MacroKey::Carbs => &mut self.carbs,
            MacroKey::Fat => &mut self.fat,
        }
    }

    pub fn split(&self) -> MacroSplit {
        MacroSplit {
            protein: self.protein.percentage,
            carbs: self.carbs.percentage,
            fat: self.fat.percentage,
        }
    }

    pub fn total_percentage(&self) -> f64 {
        self.split().total()
    }

    /// No grams assigned to any macro yet.
    pub fn is_empty(&self) -> bool {
        MacroKey::ALL.iter().all(|&k| self.get(k).grams == 0)
    }

    /// Percentages account for the whole day.
    pub fn is_complete(&self) -> bool {
        (100.0 - self.total_percentage()).abs() < MACRO_PCT_TOLERANCE
    }

    /// Flip a macro's lock. Returns the new state.
    pub fn toggle_lock(&mut self, key: MacroKey) -> bool {
        let target = self.get_mut(key);
        target.locked = !target.locked;
        target.locked
    }

    /// Set one macro from any of its representations and rebalance the others.
    ///
    /// Locked macros keep their values. Unlocked ones share what is left in
    /// proportion to their current percentages, or equally when both are at zero.
    pub fn set_macro(
        &mut self,
        key: MacroKey,
        input: MacroInput,
        value: f64,
        kcal: u32,
        weight_kg: f64,
    ) -> MacroOutcome {
        let weight_kg = non_negative(weight_kg);
        let mut target = self.get(key).clone();

        match input {
            MacroInput::Percentage => {
                target.apply_percentage(key, clamp_percentage(value), kcal, weight_kg);
            }
            MacroInput::Grams => {
                target.grams = whole_number(value);
                target.percentage = percentage_from_grams(key, target.grams, kcal);
                target.grams_per_kg = grams_per_kg(target.grams, weight_kg);
            }
            MacroInput::GramsPerKg => {
                let per_kg = non_negative(value);
                target.grams = whole_number(per_kg * weight_kg);
                target.percentage = percentage_from_grams(key, target.grams, kcal);
                target.grams_per_kg = if weight_kg > 0.0 {
                    round_to(per_kg, GRAMS_PER_KG_DECIMALS)
                } else {
                    0.0
                };
            }
        }

        let others = key.others();
        let locked_total: f64 = others
            .iter()
            .filter(|&&k| self.get(k).locked)
            .map(|&k| self.get(k).percentage)
            .sum();
        let available = 100.0 - target.percentage - locked_total;

        if available < -MACRO_CORRECTION_EPSILON {
            warn!(
                macro_key = %key,
                percentage = target.percentage,
                locked_total,
                "macro edit leaves no room for the other macros; ignoring"
            );
            return MacroOutcome::Rejected { available };
        }
        let available = available.max(0.0);

        let unlocked: Vec<MacroKey> = others
            .into_iter()
            .filter(|&k| !self.get(k).locked)
            .collect();

        // With every macro locked nothing can take up the gap to 100%.
        if unlocked.is_empty() && target.locked && available > MACRO_CORRECTION_EPSILON {
            warn!(
                macro_key = %key,
                available,
                "every macro is locked; ignoring edit that leaves a gap"
            );
            return MacroOutcome::Rejected { available };
        }

        *self.get_mut(key) = target;

        if !unlocked.is_empty() {
            let current: f64 = unlocked.iter().map(|&k| self.get(k).percentage).sum();
            let share = available / unlocked.len() as f64;
            debug!(macro_key = %key, available, current, "rebalancing unlocked macros");

            for k in unlocked {
                let percentage = if current > 0.0 {
                    self.get(k).percentage / current * available
                } else {
                    share
                };
                self.get_mut(k).apply_percentage(k, percentage, kcal, weight_kg);
            }
        }

        self.correct_rounding(kcal, weight_kg);
        self.remember_if_good();
        MacroOutcome::Applied
    }

    /// Push the gap to 100% into the largest unlocked macro.
    fn correct_rounding(&mut self, kcal: u32, weight_kg: f64) {
        let diff = 100.0 - self.total_percentage();
        if diff.abs() <= MACRO_CORRECTION_EPSILON {
            return;
        }

        let largest = MacroKey::ALL
            .into_iter()
            .filter(|&k| !self.get(k).locked)
            .fold(None, |best: Option<MacroKey>, k| match best {
                Some(b) if self.get(b).percentage >= self.get(k).percentage => best,
                _ => Some(k),
            });

        if let Some(k) = largest {
            let percentage = (self.get(k).percentage + diff).max(0.0);
            debug!(macro_key = %k, diff, "applying macro rounding correction");
            self.get_mut(k).apply_percentage(k, percentage, kcal, weight_kg);
        }
    }

    fn remember_if_good(&mut self) {
        if (100.0 - self.total_percentage()).abs() <= LAST_GOOD_TOLERANCE {
            self.last_good = Some(self.split());
        }
    }

    fn apply_split(&mut self, split: MacroSplit, kcal: u32, weight_kg: f64) {
        let weight_kg = non_negative(weight_kg);
        for key in MacroKey::ALL {
            self.get_mut(key)
                .apply_percentage(key, split.get(key), kcal, weight_kg);
        }
        self.remember_if_good();
    }

    /// Reset to the 30/40/30 default split. Lock flags are kept.
    pub fn reset_to_default(&mut self, kcal: u32, weight_kg: f64) {
        self.apply_split(MacroSplit::default(), kcal, weight_kg);
    }

    /// Restore the last split that summed to 100. Returns false when there is none.
    pub fn reset_to_last_good(&mut self, kcal: u32, weight_kg: f64) -> bool {
        match self.last_good {
            Some(split) => {
                self.apply_split(split, kcal, weight_kg);
                true
            }
            None => false,
        }
    }

    /// Keep percentages and recompute grams after calories or body weight change.
    pub fn recompute(&mut self, kcal: u32, weight_kg: f64) {
        self.apply_split(self.split(), kcal, weight_kg);
    }

    /// Reset to the default split when calories are known and the stored grams
    /// are missing or far off the default. Returns whether a reset happened.
    pub fn ensure_initialized(&mut self, kcal: u32, weight_kg: f64) -> bool {
        if kcal == 0 {
            return false;
        }
        if self.is_empty() || self.deviates_from_default(kcal) {
            debug!(kcal, "initializing macro split to default");
            self.reset_to_default(kcal, weight_kg);
            return true;
        }
        false
    }

    fn deviates_from_default(&self, kcal: u32) -> bool {
        let defaults = MacroSplit::default();
        MacroKey::ALL.into_iter().any(|key| {
            let expected = grams_from_percentage(key, defaults.get(key), kcal) as f64;
            if expected == 0.0 {
                return false;
            }
            let actual = self.get(key).grams as f64;
            (actual - expected).abs() / expected > INIT_DEVIATION_THRESHOLD
        })
    }
}
