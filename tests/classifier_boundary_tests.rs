// Property tests over the full score space of each built-in table.

mod common;

use riskmatrix::matrix::classifier::builtin_level;
use riskmatrix::matrix::{classify_score, MatrixType, RiskLevel};

#[test]
fn three_by_three_names_are_limited_and_monotonic() {
    let config = common::builtin(MatrixType::ThreeByThree);
    let mut previous = RiskLevel::VeryLow;
    for score in 1..=9 {
        let result = classify_score(score, &config);
        assert!(
            ["Baixo", "Medio", "Alto"].contains(&result.name.as_str()),
            "unexpected name {} for score {}",
            result.name,
            score
        );
        let level = result.level.unwrap();
        assert!(level >= previous, "score {} dropped to {}", score, level);
        previous = level;
    }
}

#[test]
fn every_builtin_table_is_monotonic() {
    for matrix_type in MatrixType::ALL {
        let mut previous = RiskLevel::VeryLow;
        for score in 0..=matrix_type.max_score() + 5 {
            let level = builtin_level(score, matrix_type);
            assert!(level >= previous, "{} score {} dropped", matrix_type, score);
            previous = level;
        }
    }
}

#[test]
fn only_five_by_five_uses_muito_baixo() {
    for score in 0..=16 {
        assert_ne!(builtin_level(score, MatrixType::FourByFour), RiskLevel::VeryLow);
    }
    for score in 0..=9 {
        assert_ne!(builtin_level(score, MatrixType::ThreeByThree), RiskLevel::VeryLow);
    }
    assert_eq!(builtin_level(0, MatrixType::FiveByFive), RiskLevel::VeryLow);
}

#[test]
fn three_by_three_never_reaches_muito_alto() {
    assert_eq!(builtin_level(u32::MAX, MatrixType::ThreeByThree), RiskLevel::High);
}

#[test]
fn highest_cell_is_top_level() {
    assert_eq!(builtin_level(25, MatrixType::FiveByFive), RiskLevel::VeryHigh);
    assert_eq!(builtin_level(16, MatrixType::FourByFour), RiskLevel::VeryHigh);
    assert_eq!(builtin_level(9, MatrixType::ThreeByThree), RiskLevel::High);
}

#[test]
fn all_five_by_five_scores_covered() {
    let config = common::builtin(MatrixType::FiveByFive);
    for score in 0..=25u32 {
        let name = classify_score(score, &config).name;
        let expected = match score {
            17.. => "Muito Alto",
            9..=16 => "Alto",
            5..=8 => "Medio",
            3..=4 => "Baixo",
            _ => "Muito Baixo",
        };
        assert_eq!(name, expected, "score {}", score);
    }
}
