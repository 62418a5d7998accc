//! Adoption-scenario comparisons
//!
//! A scenario asks: if a consumer imports only these components on demand,
//! how does the shipped size compare to importing the full bundle?

use std::collections::BTreeSet;

use super::sizes::ComponentSize;

/// One adoption scenario, compared against the full bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioComparison {
    /// Scenario label, e.g. "only button"
    pub name: String,
    /// Sum of the selected components' bundle sizes
    pub on_demand_bytes: u64,
    /// Size of the combined main bundle
    pub full_bundle_bytes: u64,
}

/// Classification of a scenario comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioOutcome {
    /// On-demand import ships less than the full bundle
    Saving {
        /// Percentage saved relative to the full bundle
        percent: f64,
    },
    /// On-demand import ships at least as much as the full bundle
    Increase {
        /// Absolute extra bytes shipped on demand
        delta_bytes: u64,
    },
    /// The main bundle is empty; a percentage would divide by zero
    NoBaseline,
}

impl ScenarioComparison {
    /// Classify this comparison as a saving, an increase, or no baseline
    ///
    /// An on-demand total equal to the full bundle counts as an increase of
    /// zero bytes, never as a negative saving.
    pub fn outcome(&self) -> ScenarioOutcome {
        if self.full_bundle_bytes == 0 {
            return ScenarioOutcome::NoBaseline;
        }
        if self.on_demand_bytes < self.full_bundle_bytes {
            let ratio = self.on_demand_bytes as f64 / self.full_bundle_bytes as f64;
            ScenarioOutcome::Saving {
                percent: (1.0 - ratio) * 100.0,
            }
        } else {
            ScenarioOutcome::Increase {
                delta_bytes: self.on_demand_bytes - self.full_bundle_bytes,
            }
        }
    }
}

/// Compare a selected component set against the full bundle
///
/// Components outside `selected` contribute nothing; the sum is monotonic in
/// the selected set.
pub fn compute_scenario(
    name: &str,
    selected: &BTreeSet<String>,
    components: &[ComponentSize],
    full_bundle_bytes: u64,
) -> ScenarioComparison {
    let on_demand_bytes = components
        .iter()
        .filter(|c| selected.contains(&c.name))
        .map(|c| c.total_bytes())
        .sum();

    ScenarioComparison {
        name: name.to_string(),
        on_demand_bytes,
        full_bundle_bytes,
    }
}

/// The report's standard scenarios: first component only, first two
/// components, all components (in sorted discovery order)
///
/// Degrades gracefully: with one component the pairwise scenario is skipped;
/// with none only the "all components" scenario (an empty selection) remains.
pub fn standard_scenarios(
    components: &[ComponentSize],
    full_bundle_bytes: u64,
) -> Vec<ScenarioComparison> {
    let mut scenarios = Vec::new();

    if let Some(first) = components.first() {
        let selected: BTreeSet<String> = [first.name.clone()].into();
        scenarios.push(compute_scenario(
            &format!("only {}", first.name),
            &selected,
            components,
            full_bundle_bytes,
        ));
    }

    if components.len() >= 2 {
        let selected: BTreeSet<String> =
            [components[0].name.clone(), components[1].name.clone()].into();
        scenarios.push(compute_scenario(
            &format!("{} + {}", components[0].name, components[1].name),
            &selected,
            components,
            full_bundle_bytes,
        ));
    }

    let all: BTreeSet<String> = components.iter().map(|c| c.name.clone()).collect();
    scenarios.push(compute_scenario(
        "all components",
        &all,
        components,
        full_bundle_bytes,
    ));

    scenarios
}
