mod common;

use riskmatrix::matrix::{classify_pair, classify_score, CustomBand, MatrixConfig, MatrixType, RiskLevel};

#[test]
fn five_by_five_thresholds() {
    let config = common::builtin(MatrixType::FiveByFive);
    assert_eq!(classify_score(17, &config).name, "Muito Alto");
    assert_eq!(classify_score(16, &config).name, "Alto");
    assert_eq!(classify_score(9, &config).name, "Alto");
    assert_eq!(classify_score(8, &config).name, "Medio");
    assert_eq!(classify_score(5, &config).name, "Medio");
    assert_eq!(classify_score(4, &config).name, "Baixo");
    assert_eq!(classify_score(3, &config).name, "Baixo");
    assert_eq!(classify_score(2, &config).name, "Muito Baixo");
    assert_eq!(classify_score(1, &config).name, "Muito Baixo");
}

#[test]
fn four_by_four_thresholds() {
    let config = common::builtin(MatrixType::FourByFour);
    assert_eq!(classify_score(16, &config).name, "Muito Alto");
    assert_eq!(classify_score(10, &config).name, "Muito Alto");
    assert_eq!(classify_score(9, &config).name, "Alto");
    assert_eq!(classify_score(7, &config).name, "Alto");
    assert_eq!(classify_score(6, &config).name, "Medio");
    assert_eq!(classify_score(3, &config).name, "Medio");
    assert_eq!(classify_score(2, &config).name, "Baixo");
}

#[test]
fn three_by_three_thresholds() {
    let config = common::builtin(MatrixType::ThreeByThree);
    assert_eq!(classify_score(9, &config).name, "Alto");
    assert_eq!(classify_score(5, &config).name, "Alto");
    assert_eq!(classify_score(4, &config).name, "Medio");
    assert_eq!(classify_score(3, &config).name, "Medio");
    assert_eq!(classify_score(2, &config).name, "Baixo");
}

#[test]
fn builtin_results_carry_palette_colors() {
    let config = common::builtin(MatrixType::FiveByFive);
    let result = classify_score(25, &config);
    assert_eq!(result.level, Some(RiskLevel::VeryHigh));
    assert_eq!(result.background_color, RiskLevel::VeryHigh.background_color());
    assert_eq!(result.text_color, RiskLevel::VeryHigh.text_color());
}

#[test]
fn custom_bands_are_inclusive_on_both_ends() {
    let config = common::two_band_config();
    assert_eq!(classify_score(1, &config).name, "Baixo");
    assert_eq!(classify_score(4, &config).name, "Baixo");
    assert_eq!(classify_score(5, &config).name, "Alto");
    assert_eq!(classify_score(25, &config).name, "Alto");
}

#[test]
fn custom_band_color_is_used_verbatim() {
    let config = common::two_band_config();
    let result = classify_score(5, &config);
    assert_eq!(result.background_color, "#ff0000");
    assert_eq!(result.level, Some(RiskLevel::High));
}

#[test]
fn custom_bands_override_builtin_table() {
    // Built-in 5x5 would say "Muito Alto" for 20.
    let config = common::two_band_config();
    assert_eq!(classify_score(20, &config).name, "Alto");
}

#[test]
fn first_matching_band_wins_on_overlap() {
    let config = MatrixConfig::builtin(MatrixType::ThreeByThree).with_custom_bands(vec![
        CustomBand::range("Primeiro", None, 1, 6),
        CustomBand::range("Segundo", None, 4, 9),
    ]);
    assert_eq!(classify_score(5, &config).name, "Primeiro");
    assert_eq!(classify_score(7, &config).name, "Segundo");
}

#[test]
fn score_in_gap_defaults_to_baixo() {
    let config = MatrixConfig::builtin(MatrixType::FiveByFive).with_custom_bands(vec![
        CustomBand::range("Medio", None, 1, 10),
        CustomBand::range("Muito Alto", None, 15, 25),
    ]);
    let result = classify_score(12, &config);
    assert_eq!(result.name, "Baixo");
    assert_eq!(result.background_color, RiskLevel::Low.background_color());
}

#[test]
fn out_of_range_scores_never_fail() {
    let custom = common::two_band_config();
    assert_eq!(classify_score(0, &custom).name, "Baixo");
    assert_eq!(classify_score(u32::MAX, &custom).name, "Baixo");

    for matrix_type in MatrixType::ALL {
        let config = common::builtin(matrix_type);
        assert!(!classify_score(0, &config).name.is_empty());
        assert!(!classify_score(u32::MAX, &config).name.is_empty());
    }
}

#[test]
fn ordinal_only_bands_classify_every_score_as_default() {
    let config = MatrixConfig::builtin(MatrixType::ThreeByThree)
        .with_custom_bands(vec![CustomBand::ordinal("Alto", 3)]);
    assert_eq!(classify_score(9, &config).name, "Baixo");
}

#[test]
fn classification_is_deterministic() {
    let config = common::two_band_config();
    for score in 0..=30 {
        assert_eq!(classify_score(score, &config), classify_score(score, &config));
    }
}

#[test]
fn four_by_four_pair_end_to_end() {
    let config = common::builtin(MatrixType::FourByFour);
    let risk = classify_pair(4.0, 3.0, &config);
    assert_eq!(risk.score, 12.0);
    assert_eq!(risk.level.name, "Muito Alto");
}
