use std::collections::HashMap;

use tracing::debug;

use crate::entities::common::Sex;
use crate::entities::diet::{
    ActivityLevel, DietPatient, DietPlan, DiseasePreset, FoodItem, MacroPreset, MacroTargets, MealPlan, Region,
};

/// Energy density of protein and carbohydrate, kcal per gram
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy density of fat, kcal per gram
const KCAL_PER_GRAM_FAT: f64 = 9.0;

fn food(name: &str, kcal: f64, carbs: f64, protein: f64, fat: f64, fibre: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        kcal,
        carbs,
        protein,
        fat,
        fibre,
    }
}

/// Regional food tables, immutable once built
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    regions: HashMap<Region, Vec<FoodItem>>,
}

impl FoodCatalog {
    pub fn new(regions: HashMap<Region, Vec<FoodItem>>) -> Self {
        Self { regions }
    }

    /// Foods of a region; empty when the region has no table
    pub fn foods(&self, region: Region) -> &[FoodItem] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for FoodCatalog {
    /// South and north Indian tables, one serving per entry
    fn default() -> Self {
        let mut regions = HashMap::new();
        regions.insert(
            Region::South,
            vec![
                food("Idli (2)", 160.0, 30.0, 6.0, 2.5, 2.0),
                food("Ragi Dosa (2)", 220.0, 40.0, 6.0, 4.5, 4.0),
                food("Sambar (1 cup)", 120.0, 16.0, 6.0, 3.0, 5.0),
                food("Brown Rice (1 cup)", 216.0, 45.0, 5.0, 1.8, 3.5),
                food("Curd (1 cup)", 100.0, 8.0, 6.0, 4.0, 0.0),
                food("Sprouts (1/2 cup)", 70.0, 10.0, 6.0, 1.0, 4.0),
            ],
        );
        regions.insert(
            Region::North,
            vec![
                food("Phulka (1)", 70.0, 12.0, 3.0, 1.0, 1.5),
                food("Poha (1 cup)", 250.0, 45.0, 6.0, 5.0, 3.0),
                food("Paratha (1)", 250.0, 30.0, 5.0, 10.0, 2.0),
                food("Dal (1 cup)", 180.0, 20.0, 10.0, 6.0, 6.0),
                food("Raita (1/2 cup)", 60.0, 4.0, 3.0, 3.0, 0.5),
                food("Chole (1 cup)", 240.0, 35.0, 12.0, 6.0, 8.0),
            ],
        );
        Self::new(regions)
    }
}

/// Macro split per disease preset, immutable once built
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: HashMap<DiseasePreset, MacroPreset>,
}

impl PresetTable {
    pub fn new(presets: HashMap<DiseasePreset, MacroPreset>) -> Self {
        Self { presets }
    }

    /// Preset for a condition, falling back to the `None` preset
    pub fn get(&self, disease: DiseasePreset) -> MacroPreset {
        self.presets
            .get(&disease)
            .or_else(|| self.presets.get(&DiseasePreset::None))
            .copied()
            .unwrap_or(DEFAULT_PRESET)
    }
}

const DEFAULT_PRESET: MacroPreset = MacroPreset {
    carbs_pct: 50.0,
    protein_pct: 20.0,
    fat_pct: 30.0,
    fiber_goal: 25.0,
    calorie_adj: 0.0,
};

fn preset(carbs_pct: f64, protein_pct: f64, fat_pct: f64, fiber_goal: f64, calorie_adj: f64) -> MacroPreset {
    MacroPreset {
        carbs_pct,
        protein_pct,
        fat_pct,
        fiber_goal,
        calorie_adj,
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        let presets = HashMap::from([
            (DiseasePreset::None, DEFAULT_PRESET),
            (DiseasePreset::Diabetes, preset(45.0, 25.0, 30.0, 30.0, 0.0)),
            (DiseasePreset::Hypertension, preset(50.0, 20.0, 30.0, 28.0, 0.0)),
            (DiseasePreset::Obesity, preset(40.0, 30.0, 30.0, 30.0, -0.2)),
            (DiseasePreset::Ckd, preset(50.0, 15.0, 35.0, 20.0, 0.0)),
            (DiseasePreset::HeartFailure, preset(50.0, 20.0, 30.0, 25.0, 0.0)),
            (DiseasePreset::WeightLoss, preset(40.0, 30.0, 30.0, 30.0, -0.2)),
            (DiseasePreset::WeightGain, preset(55.0, 20.0, 25.0, 20.0, 0.15)),
        ]);
        Self::new(presets)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Basal metabolic rate by Mifflin-St Jeor, kcal/day
pub fn mifflin_st_jeor_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let sex_offset = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + sex_offset
}

/// Total daily energy expenditure, rounded to whole kcal
pub fn total_daily_energy(bmr: f64, activity: ActivityLevel) -> f64 {
    (bmr * activity.factor()).round()
}

/// Calorie and gram targets of a preset for a given energy expenditure
pub fn macro_targets(tdee: f64, preset: MacroPreset) -> MacroTargets {
    let calories = (tdee * (1.0 + preset.calorie_adj)).round();
    let grams = |pct: f64, density: f64| round_to(pct * calories / (100.0 * density), 1);

    MacroTargets {
        calories,
        protein_g: grams(preset.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(preset.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_g: grams(preset.fat_pct, KCAL_PER_GRAM_FAT),
        fiber_g: preset.fiber_goal,
        preset,
    }
}

/// Diet prescription calculator over immutable food and preset tables
#[derive(Debug, Clone, Default)]
pub struct DietCalculator {
    catalog: FoodCatalog,
    presets: PresetTable,
}

impl DietCalculator {
    pub fn new(catalog: FoodCatalog, presets: PresetTable) -> Self {
        Self { catalog, presets }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    /// Region foods followed by the session's custom foods.
    ///
    /// `custom_foods` is expected newest first.
    pub fn food_list(&self, region: Region, custom_foods: &[FoodItem]) -> Vec<FoodItem> {
        self.catalog
            .foods(region)
            .iter()
            .chain(custom_foods)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over the food list
    pub fn search_foods(&self, region: Region, custom_foods: &[FoodItem], query: &str) -> Vec<FoodItem> {
        let needle = query.to_lowercase();
        self.food_list(region, custom_foods)
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Compute energy targets, macros and a positional meal plan
    pub fn compute_diet_plan(&self, patient: &DietPatient, custom_foods: &[FoodItem]) -> DietPlan {
        let bmr = mifflin_st_jeor_bmr(patient.weight_kg, patient.height_cm, patient.age, patient.sex);
        let tdee = total_daily_energy(bmr, patient.activity);
        let macros = macro_targets(tdee, self.presets.get(patient.disease));

        let foods = self.food_list(patient.region, custom_foods);
        let slot = |index: usize| foods.get(index).cloned();

        let plan = MealPlan {
            breakfast: slot(0),
            lunch: slot(1),
            dinner: slot(2),
            mid_morning_snack: slot(3),
            evening_snack: slot(4),
            notes: format!(
                "Adjust portions to meet {} kcal/day. Prioritise whole grains, legumes, vegetables, and fruits. For {}.",
                macros.calories,
                patient.disease.as_str().replace('_', " ")
            ),
        };

        debug!(
            "Diet plan: bmr={}, tdee={}, calories={}, preset={}",
            bmr,
            tdee,
            macros.calories,
            patient.disease.as_str()
        );

        DietPlan {
            bmr,
            tdee,
            macros,
            plan,
        }
    }
}
