//! Variant editing flow: axes are edited one step at a time and variants are
//! regenerated after each step, keeping merchant edits.

use merchkit_variants::{
    OptionAxis, OptionValue, VariantDescriptor, VariantField, VariantLimits, expand, find_variant,
};

fn key(pairs: &[(&str, &str)]) -> Vec<OptionValue> {
    pairs.iter().map(|(a, v)| OptionValue::new(*a, *v)).collect()
}

#[test]
fn edits_survive_a_sequence_of_axis_changes() {
    merchkit_observability::init_for_tests();
    let limits = VariantLimits::default();

    let mut axes = vec![
        OptionAxis::new("Taglia", ["S", "M", "L"]),
        OptionAxis::new("Colore", ["Rosso", "Blu"]),
    ];
    limits.check(&axes).unwrap();
    let mut variants = expand(&axes, &[], "MAGLIA", "24.90");
    assert_eq!(variants.len(), 6);

    let m_blu = key(&[("Taglia", "M"), ("Colore", "Blu")]);
    let edited = variants.iter_mut().find(|v| v.key == m_blu).unwrap();
    edited.set_field(VariantField::Price, "29.90");
    edited.set_field(VariantField::Quantity, "12");

    // Add a colour.
    axes[1] = axes[1].with_value("Verde");
    variants = expand(&axes, &variants, "MAGLIA", "24.90");
    assert_eq!(variants.len(), 9);
    let kept = find_variant(&variants, &m_blu).unwrap();
    assert_eq!(kept.price, "29.90");
    assert_eq!(kept.quantity, "12");
    let fresh = find_variant(&variants, &key(&[("Taglia", "S"), ("Colore", "Verde")])).unwrap();
    assert_eq!(fresh.price, "24.90");
    assert_eq!(fresh.sku, "MAGLIA-S-VE");

    // Drop a size.
    axes[0] = axes[0].without_value("L");
    variants = expand(&axes, &variants, "MAGLIA", "24.90");
    assert_eq!(variants.len(), 6);
    assert!(variants.iter().all(|v| v.key[0].value != "L"));
    assert_eq!(find_variant(&variants, &m_blu).unwrap().price, "29.90");

    // Add a material axis: every key changes, so every variant is fresh.
    axes.push(OptionAxis::new("Materiale", ["Cotone"]));
    limits.check(&axes).unwrap();
    variants = expand(&axes, &variants, "MAGLIA", "24.90");
    assert_eq!(variants.len(), 6);
    assert!(variants.iter().all(|v| v.price == "24.90"));
    assert_eq!(variants[0].title, "S / Rosso / Cotone");
}

#[test]
fn variants_round_trip_through_json() {
    let axes = vec![OptionAxis::new("Taglia", ["S", "M"])];
    let variants = expand(&axes, &[], "", "10");

    let json = serde_json::to_string(&variants).unwrap();
    let restored: Vec<VariantDescriptor> = serde_json::from_str(&json).unwrap();
    assert_eq!(expand(&axes, &restored, "", "99"), variants);
}
