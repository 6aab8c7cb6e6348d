//! Cartesian expansion of option axes into variants.
//!
//! Cost is O(∏ |values_i|) in both time and output size. Bounding the number of
//! axes and values is the caller's job (see [`crate::VariantLimits`]).

use std::collections::HashMap;

use tracing::debug;

use crate::axis::OptionAxis;
use crate::variant::{OptionValue, VariantDescriptor};

/// Generate one variant per combination of axis values.
///
/// - Axes without values are skipped; with no axes left the result is empty.
/// - Enumeration is odometer order: the first axis varies slowest, the last fastest.
/// - A combination already present in `previous` is returned unchanged, so merchant
///   edits (price, SKU, quantity, barcode) survive; new combinations get defaults
///   derived from `base_sku` and `base_price`; combinations that no longer exist
///   are dropped.
pub fn expand(
    axes: &[OptionAxis],
    previous: &[VariantDescriptor],
    base_sku: &str,
    base_price: &str,
) -> Vec<VariantDescriptor> {
    let axes: Vec<&OptionAxis> = axes.iter().filter(|axis| !axis.is_empty()).collect();
    if axes.is_empty() {
        debug!("no option axis has values; no variants");
        return Vec::new();
    }

    let mut keys = Vec::with_capacity(product_size(&axes));
    let mut current = Vec::with_capacity(axes.len());
    collect_keys(&axes, &mut current, &mut keys);

    let mut existing: HashMap<&[OptionValue], &VariantDescriptor> =
        HashMap::with_capacity(previous.len());
    for variant in previous {
        existing.entry(variant.key.as_slice()).or_insert(variant);
    }

    let mut reused = 0usize;
    let variants: Vec<VariantDescriptor> = keys
        .into_iter()
        .map(|key| match existing.get(key.as_slice()) {
            Some(variant) => {
                reused += 1;
                (*variant).clone()
            }
            None => VariantDescriptor::fresh(key, base_sku, base_price),
        })
        .collect();

    debug!(
        axes = axes.len(),
        combinations = variants.len(),
        reused,
        dropped = previous.len().saturating_sub(reused),
        "expanded option axes into variants"
    );

    variants
}

/// Number of variants `expand` would produce for `axes`.
pub fn combination_count(axes: &[OptionAxis]) -> usize {
    let axes: Vec<&OptionAxis> = axes.iter().filter(|axis| !axis.is_empty()).collect();
    if axes.is_empty() {
        return 0;
    }
    product_size(&axes)
}

fn product_size(axes: &[&OptionAxis]) -> usize {
    axes.iter()
        .fold(1usize, |acc, axis| acc.saturating_mul(axis.values().len()))
}

/// Depth-first: fix a value of the first axis, recurse on the rest.
fn collect_keys(
    axes: &[&OptionAxis],
    current: &mut Vec<OptionValue>,
    out: &mut Vec<Vec<OptionValue>>,
) {
    let Some((axis, rest)) = axes.split_first() else {
        out.push(current.clone());
        return;
    };

    for value in axis.values() {
        current.push(OptionValue::new(axis.name.as_str(), value.as_str()));
        collect_keys(rest, current, out);
        current.pop();
    }
}
