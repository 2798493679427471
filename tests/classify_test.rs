use liver_panel::{
    Indicator, IndicatorLevel, PanelError, Sex, classify, classify_named, warning_threshold,
};

#[test]
fn test_ast_sex_specific_warning() {
    // Male warning breakpoint is 40, female is 32; danger is 50 for both
    let male = classify(Indicator::Ast, 41.0, Sex::Male);
    assert_eq!(male.level, IndicatorLevel::Warning);

    let female = classify(Indicator::Ast, 41.0, Sex::Female);
    assert_eq!(female.level, IndicatorLevel::Warning);

    let below_female = classify(Indicator::Ast, 31.0, Sex::Female);
    assert_eq!(below_female.level, IndicatorLevel::Normal);
    assert!(below_female.message.is_none());

    let danger = classify(Indicator::Ast, 55.0, Sex::Male);
    assert_eq!(danger.level, IndicatorLevel::Danger);
}

#[test]
fn test_equality_meets_threshold() {
    assert_eq!(
        classify(Indicator::Ast, 40.0, Sex::Male).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Ast, 32.0, Sex::Female).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Ast, 50.0, Sex::Female).level,
        IndicatorLevel::Danger
    );
    assert_eq!(
        classify(Indicator::Pt, 13.0, Sex::Male).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Platelet, 150.0, Sex::Male).level,
        IndicatorLevel::Warning
    );
}

#[test]
fn test_afp_tier_ladder() {
    assert_eq!(
        classify(Indicator::Afp, 400.0, Sex::Male).level,
        IndicatorLevel::Critical
    );
    assert_eq!(
        classify(Indicator::Afp, 399.0, Sex::Male).level,
        IndicatorLevel::Danger
    );
    assert_eq!(
        classify(Indicator::Afp, 100.0, Sex::Female).level,
        IndicatorLevel::Danger
    );
    assert_eq!(
        classify(Indicator::Afp, 10.0, Sex::Male).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Afp, 9.9, Sex::Male).level,
        IndicatorLevel::Normal
    );
}

#[test]
fn test_albumin_reversed_direction() {
    assert_eq!(
        classify(Indicator::Albumin, 1.9, Sex::Male).level,
        IndicatorLevel::Critical
    );
    assert_eq!(
        classify(Indicator::Albumin, 2.0, Sex::Male).level,
        IndicatorLevel::Critical
    );
    assert_eq!(
        classify(Indicator::Albumin, 2.4, Sex::Female).level,
        IndicatorLevel::Danger
    );
    assert_eq!(
        classify(Indicator::Albumin, 3.4, Sex::Male).level,
        IndicatorLevel::Warning
    );
    // Present but unremarkable: Normal, never None
    let normal = classify(Indicator::Albumin, 3.6, Sex::Male);
    assert_eq!(normal.level, IndicatorLevel::Normal);
    assert_eq!(normal.value, Some(3.6));
    assert!(normal.message.is_none());
}

#[test]
fn test_warning_only_indicators() {
    assert_eq!(
        classify(Indicator::Inr, 1.5, Sex::Male).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Inr, 1.0, Sex::Male).level,
        IndicatorLevel::Normal
    );
    assert_eq!(
        classify(Indicator::TotalProtein, 5.4, Sex::Female).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::TotalProtein, 7.0, Sex::Female).level,
        IndicatorLevel::Normal
    );
    assert_eq!(
        classify(Indicator::Platelet, 90.0, Sex::Male).level,
        IndicatorLevel::Warning
    );
    assert_eq!(
        classify(Indicator::Pt, 11.5, Sex::Male).level,
        IndicatorLevel::Normal
    );
}

#[test]
fn test_implausible_values_still_classify() {
    // No plausibility validation: the tables apply as-is
    assert_eq!(
        classify(Indicator::Ast, -5.0, Sex::Male).level,
        IndicatorLevel::Normal
    );
    assert_eq!(
        classify(Indicator::Albumin, 0.0, Sex::Female).level,
        IndicatorLevel::Critical
    );
    assert_eq!(
        classify(Indicator::Bilirubin, 0.0, Sex::Male).level,
        IndicatorLevel::Normal
    );
}

#[test]
fn test_breach_messages_name_level_and_threshold() {
    let danger = classify(Indicator::Ast, 55.0, Sex::Male);
    let message = danger.message.unwrap();
    assert!(message.contains("danger"));
    assert!(message.contains("50"));
    assert!(message.contains("U/L"));

    let critical = classify(Indicator::Albumin, 1.9, Sex::Male);
    let message = critical.message.unwrap();
    assert!(message.contains("critical"));
    assert!(message.contains("2"));
    assert!(message.contains("at or below"));

    // INR is dimensionless, the message carries no unit
    let warning = classify(Indicator::Inr, 1.5, Sex::Female);
    let message = warning.message.unwrap();
    assert!(message.contains("warning"));
    assert!(message.contains("1.2"));
}

#[test]
fn test_classify_named() {
    let assessment = classify_named("ast", 41.0, "male").unwrap();
    assert_eq!(assessment.level, IndicatorLevel::Warning);

    let assessment = classify_named("r_gtp", 64.0, " Male ").unwrap();
    assert_eq!(assessment.level, IndicatorLevel::Warning);

    // Unknown sex is fatal only where the breakpoints are split
    let err = classify_named("ast", 41.0, "unknown").unwrap_err();
    assert!(matches!(err, PanelError::UnknownSex(_)));

    let assessment = classify_named("afp", 20.0, "unknown").unwrap();
    assert_eq!(assessment.level, IndicatorLevel::Warning);

    let err = classify_named("hemoglobin", 12.0, "male").unwrap_err();
    assert!(matches!(err, PanelError::UnknownIndicator(_)));
}

#[test]
fn test_warning_threshold_per_sex() {
    assert_eq!(warning_threshold(Indicator::Alt, Sex::Male), 40.0);
    assert_eq!(warning_threshold(Indicator::Alt, Sex::Female), 35.0);
    assert_eq!(warning_threshold(Indicator::RGtp, Sex::Male), 63.0);
    assert_eq!(warning_threshold(Indicator::RGtp, Sex::Female), 35.0);
    assert_eq!(warning_threshold(Indicator::Bilirubin, Sex::Female), 1.2);
}
