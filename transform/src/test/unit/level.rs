use strum::{EnumCount, IntoEnumIterator, VariantArray};
use test_case::test_case;

use crate::error::Error;
use crate::level::{OptimizationLevel, TransformerLevel};

#[test]
fn test_transformer_level_order() {
    assert!(TransformerLevel::Level1 < TransformerLevel::Level2);
    assert!(TransformerLevel::Level2 < TransformerLevel::Level3);
    assert_eq!(TransformerLevel::MAX, TransformerLevel::Level3);
    assert_eq!(TransformerLevel::COUNT, 3);
    assert_eq!(TransformerLevel::VARIANTS.len(), TransformerLevel::COUNT);

    let indices: Vec<usize> = TransformerLevel::iter().map(TransformerLevel::index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_up_to() {
    assert_eq!(TransformerLevel::Level1.up_to().collect::<Vec<_>>(), vec![TransformerLevel::Level1]);
    assert_eq!(
        TransformerLevel::Level3.up_to().collect::<Vec<_>>(),
        vec![TransformerLevel::Level1, TransformerLevel::Level2, TransformerLevel::Level3]
    );
}

#[test]
fn test_transformer_level_display() {
    assert_eq!(TransformerLevel::Level2.to_string(), "Level2");
    assert_eq!(OptimizationLevel::DisableAll.to_string(), "DisableAll");
}

#[test_case("1", TransformerLevel::Level1; "digit_1")]
#[test_case("3", TransformerLevel::Level3; "digit_3")]
#[test_case("level2", TransformerLevel::Level2; "lowercase")]
#[test_case("Level3", TransformerLevel::Level3; "display_form")]
#[test_case(" LEVEL1 ", TransformerLevel::Level1; "padded_uppercase")]
fn test_parse_transformer_level(input: &str, expected: TransformerLevel) {
    assert_eq!(input.parse::<TransformerLevel>().unwrap(), expected);
}

#[test_case("0"; "zero")]
#[test_case("4"; "past_max")]
#[test_case("level"; "no_digit")]
#[test_case(""; "empty")]
fn test_parse_transformer_level_invalid(input: &str) {
    let err = input.parse::<TransformerLevel>().unwrap_err();
    assert!(matches!(err, Error::InvalidLevel { ref value } if value == input));
}

#[test_case(OptimizationLevel::DisableAll, None; "disable_all")]
#[test_case(OptimizationLevel::Basic, Some(TransformerLevel::Level1); "basic")]
#[test_case(OptimizationLevel::Extended, Some(TransformerLevel::Level2); "extended")]
#[test_case(OptimizationLevel::All, Some(TransformerLevel::Level3); "all")]
fn test_max_transformer_level(level: OptimizationLevel, expected: Option<TransformerLevel>) {
    assert_eq!(level.max_transformer_level(), expected);
    assert_eq!(level.transformer_levels().last(), expected);
}

#[test]
fn test_optimization_level_defaults_to_all() {
    assert_eq!(OptimizationLevel::default(), OptimizationLevel::All);
    assert_eq!(OptimizationLevel::All as u8, 99);
}

#[test]
fn test_optimization_levels_are_monotonic() {
    let levels: Vec<_> = OptimizationLevel::iter().collect();
    for pair in levels.windows(2) {
        let lower: Vec<_> = pair[0].transformer_levels().collect();
        let higher: Vec<_> = pair[1].transformer_levels().collect();
        assert!(higher.starts_with(&lower), "{:?} must extend {:?}", pair[1], pair[0]);
    }
}

#[test_case("0", OptimizationLevel::DisableAll; "numeric_0")]
#[test_case("2", OptimizationLevel::Extended; "numeric_2")]
#[test_case("99", OptimizationLevel::All; "numeric_99")]
#[test_case("disable_all", OptimizationLevel::DisableAll; "disable_all")]
#[test_case("disable-all", OptimizationLevel::DisableAll; "dashed")]
#[test_case("Basic", OptimizationLevel::Basic; "capitalized")]
#[test_case("EXTENDED", OptimizationLevel::Extended; "uppercase")]
#[test_case("all", OptimizationLevel::All; "all")]
fn test_parse_optimization_level(input: &str, expected: OptimizationLevel) {
    assert_eq!(input.parse::<OptimizationLevel>().unwrap(), expected);
}

#[test_case("3"; "unmapped_number")]
#[test_case("256"; "overflow")]
#[test_case("max"; "unknown_name")]
fn test_parse_optimization_level_invalid(input: &str) {
    assert!(matches!(input.parse::<OptimizationLevel>(), Err(Error::InvalidLevel { .. })));
}
