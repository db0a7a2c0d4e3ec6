use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

// =============================================================
// ChoiceGroup
// =============================================================

#[test]
fn unchecked_group_reports_fallback() {
    let group = ChoiceGroup::new("color", strings(&["Navy", "Olive"]), "Sand");
    assert_eq!(group.selected(), "Sand");
}

#[test]
fn check_selects_exactly_one() {
    let mut group = ChoiceGroup::new("size", strings(&["S", "M", "L"]), "M");
    assert!(group.check("L"));
    assert_eq!(group.selected(), "L");
    assert!(group.check("S"));
    assert!(group.is_checked("S"));
    assert!(!group.is_checked("L"));
}

#[test]
fn check_unknown_value_is_ignored() {
    let mut group = ChoiceGroup::new("size", strings(&["S", "M"]), "M");
    group.check("S");
    assert!(!group.check("XXL"));
    assert_eq!(group.selected(), "S");
}

// =============================================================
// VariantSelector
// =============================================================

#[test]
fn defaults_are_prechecked_when_offered() {
    let selector = VariantSelector::new(strings(&["Sand", "Navy"]), strings(&["S", "M", "L"]));
    assert_eq!(selector.color(), "Sand");
    assert_eq!(selector.size(), "M");
    assert!(selector.color.is_checked("Sand"));
}

#[test]
fn malformed_markup_falls_back_to_defaults() {
    let selector = VariantSelector::new(Vec::new(), Vec::new());
    assert_eq!(selector.color(), "Sand");
    assert_eq!(selector.size(), "M");
}

#[test]
fn reads_current_choice() {
    let mut selector = VariantSelector::new(strings(&["Sand", "Navy"]), strings(&["S", "M", "L"]));
    selector.color.check("Navy");
    selector.size.check("L");
    assert_eq!(selector.color(), "Navy");
    assert_eq!(selector.size(), "L");
}

#[test]
fn groups_expose_radio_name_and_options_in_order() {
    let selector = VariantSelector::new(strings(&["Sand", "Navy"]), strings(&["S", "M", "L"]));
    assert_eq!(selector.color.name(), "color");
    assert_eq!(selector.size.name(), "size");
    assert_eq!(selector.color.options(), ["Sand", "Navy"]);
    assert_eq!(selector.size.options(), ["S", "M", "L"]);
}
