use tracing::debug;

use crate::entities::diabetes::{DiabetesAnswers, DiabetesRiskBand, DiabetesScore, HealthyHabit, RiskFactor};

/// Upper score bound of each band, first match wins
const BANDS: [(u32, DiabetesRiskBand); 4] = [
    (6, DiabetesRiskBand::Low),
    (11, DiabetesRiskBand::SlightlyElevated),
    (14, DiabetesRiskBand::Moderate),
    (20, DiabetesRiskBand::High),
];

fn activity_points(answer: HealthyHabit) -> u32 {
    match answer {
        HealthyHabit::Yes => 0,
        HealthyHabit::No => 2,
    }
}

fn fruit_vegetable_points(answer: HealthyHabit) -> u32 {
    match answer {
        HealthyHabit::Yes => 0,
        HealthyHabit::No => 1,
    }
}

fn bp_medication_points(answer: RiskFactor) -> u32 {
    match answer {
        RiskFactor::No => 0,
        RiskFactor::Yes => 2,
    }
}

fn high_glucose_points(answer: RiskFactor) -> u32 {
    match answer {
        RiskFactor::No => 0,
        RiskFactor::Yes => 5,
    }
}

/// Band of a FINDRISC score
pub fn categorize_diabetes_score(score: u32) -> DiabetesRiskBand {
    BANDS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map(|(_, band)| *band)
        .unwrap_or(DiabetesRiskBand::VeryHigh)
}

/// Score the FINDRISC questionnaire
pub fn compute_diabetes_score(answers: &DiabetesAnswers) -> DiabetesScore {
    let score = answers.age.points()
        + answers.bmi.points()
        + answers.waist.points()
        + activity_points(answers.daily_activity)
        + fruit_vegetable_points(answers.daily_fruit_vegetables)
        + bp_medication_points(answers.bp_medication)
        + high_glucose_points(answers.high_glucose_history)
        + answers.family_history.points();

    let band = categorize_diabetes_score(score);
    debug!("FINDRISC score {} ({:?})", score, band);

    DiabetesScore {
        score,
        band,
        label: band.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::diabetes::{AgeBracket, BmiBracket, FamilyHistory, WaistBracket};

    #[test]
    fn test_default_answers_score_zero() {
        let result = compute_diabetes_score(&DiabetesAnswers::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.band, DiabetesRiskBand::Low);
        assert_eq!(result.label, "Low Risk (~1%)");
    }

    #[test]
    fn test_maximum_score() {
        let answers = DiabetesAnswers {
            age: AgeBracket::Over64,
            bmi: BmiBracket::Over30,
            waist: WaistBracket::High,
            daily_activity: HealthyHabit::No,
            daily_fruit_vegetables: HealthyHabit::No,
            bp_medication: RiskFactor::Yes,
            high_glucose_history: RiskFactor::Yes,
            family_history: FamilyHistory::FirstDegree,
        };
        let result = compute_diabetes_score(&answers);
        assert_eq!(result.score, 26);
        assert_eq!(result.band, DiabetesRiskBand::VeryHigh);
        assert_eq!(result.label, "Very High Risk (~50%)");
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (6, DiabetesRiskBand::Low),
            (7, DiabetesRiskBand::SlightlyElevated),
            (11, DiabetesRiskBand::SlightlyElevated),
            (12, DiabetesRiskBand::Moderate),
            (14, DiabetesRiskBand::Moderate),
            (15, DiabetesRiskBand::High),
            (20, DiabetesRiskBand::High),
            (21, DiabetesRiskBand::VeryHigh),
        ];
        for (score, band) in cases {
            assert_eq!(categorize_diabetes_score(score), band, "score {}", score);
        }
    }

    #[test]
    fn test_bands_are_ordered() {
        let mut previous = categorize_diabetes_score(0);
        for score in 1..=26 {
            let band = categorize_diabetes_score(score);
            assert!(band >= previous);
            previous = band;
        }
    }

    #[test]
    fn test_per_field_points() {
        let answers = DiabetesAnswers {
            age: AgeBracket::From55To64,
            waist: WaistBracket::Moderate,
            daily_activity: HealthyHabit::No,
            ..Default::default()
        };
        assert_eq!(compute_diabetes_score(&answers).score, 3 + 3 + 2);

        let answers = DiabetesAnswers {
            bmi: BmiBracket::From25To30,
            daily_fruit_vegetables: HealthyHabit::No,
            bp_medication: RiskFactor::Yes,
            family_history: FamilyHistory::SecondDegree,
            ..Default::default()
        };
        assert_eq!(compute_diabetes_score(&answers).score, 1 + 1 + 2 + 3);
    }

    #[test]
    fn test_missing_and_unknown_answers_score_zero() {
        let answers: DiabetesAnswers =
            serde_json::from_str(r#"{"age": "45_54", "waist": "enormous"}"#).unwrap();
        assert_eq!(answers.age, AgeBracket::From45To54);
        assert_eq!(answers.waist, WaistBracket::Low);
        assert_eq!(compute_diabetes_score(&answers).score, 2);
    }

    type Answer = fn(&mut DiabetesAnswers);

    fn risky_answers() -> [Answer; 6] {
        [
            |a| a.age = AgeBracket::From45To54,
            |a| a.bmi = BmiBracket::Over30,
            |a| a.waist = WaistBracket::Moderate,
            |a| a.daily_activity = HealthyHabit::No,
            |a| a.bp_medication = RiskFactor::Yes,
            |a| a.family_history = FamilyHistory::SecondDegree,
        ]
    }

    #[test]
    fn test_score_independent_of_answer_order() {
        let per_answer: Vec<u32> = risky_answers()
            .iter()
            .map(|answer| {
                let mut single = DiabetesAnswers::default();
                answer(&mut single);
                compute_diabetes_score(&single).score
            })
            .collect();
        let total: u32 = per_answer.iter().sum();
        assert_eq!(total, 2 + 3 + 3 + 2 + 2 + 3);
        assert_eq!(per_answer.iter().rev().sum::<u32>(), total);

        for order in [[0, 1, 2, 3, 4, 5], [5, 4, 3, 2, 1, 0], [3, 0, 5, 1, 4, 2]] {
            let mut answers = DiabetesAnswers::default();
            for index in order {
                risky_answers()[index](&mut answers);
            }
            assert_eq!(compute_diabetes_score(&answers).score, total, "order {:?}", order);
        }
    }

    #[test]
    fn test_repeated_scoring_is_stable() {
        let mut answers = DiabetesAnswers::default();
        for answer in risky_answers() {
            answer(&mut answers);
        }

        let first = compute_diabetes_score(&answers);
        let second = compute_diabetes_score(&answers);
        assert_eq!(first, second);
        assert_eq!(first.band, DiabetesRiskBand::High);
    }
}
