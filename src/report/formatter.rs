//! Size report formatting and display

use console::style;

use crate::fmt::{format_kb, BULB, CHART, PACKAGE, TARGET};

use super::scenario::ScenarioOutcome;
use super::SizeReport;

const RULE_WIDTH: usize = 72;

/// Formats and displays size reports
pub struct ReportFormatter;

impl ReportFormatter {
    /// Print the full textual report
    pub fn print(report: &SizeReport) {
        println!("\n{} {} Bundle Size Report", PACKAGE, style("bundle-split").bold());
        println!("{}", "=".repeat(RULE_WIDTH));

        Self::print_full_import(report);
        Self::print_components(report);
        Self::print_scenarios(report);
        Self::print_recommendation(report);
        Self::print_inventory(report);
    }

    fn print_full_import(report: &SizeReport) {
        println!("\n{} Full import", TARGET);
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("   Main script:  {}", format_kb(report.main.script_bytes));
        println!("   Global style: {}", format_kb(report.main.style_bytes));
        println!(
            "   Total:        {}",
            style(format_kb(report.main.total_bytes())).yellow()
        );
    }

    fn print_components(report: &SizeReport) {
        println!("\n{} On-demand import", TARGET);
        println!("{}", "-".repeat(RULE_WIDTH));
        if report.components.is_empty() {
            println!("   (no per-component bundles found)");
            return;
        }
        for component in &report.components {
            println!("\n   {} {}", PACKAGE, style(&component.name).bold());
            println!("      JS:    {}", format_kb(component.script_bytes));
            println!("      CSS:   {}", format_kb(component.style_bytes));
            println!(
                "      Total: {}",
                style(format_kb(component.total_bytes())).yellow()
            );
        }
    }

    fn print_scenarios(report: &SizeReport) {
        println!("\n\n{} Size comparison", CHART);
        println!("{}", "=".repeat(RULE_WIDTH));
        for scenario in &report.scenarios {
            println!("\n   Scenario: {}", style(&scenario.name).bold());
            println!("   On-demand:   {}", format_kb(scenario.on_demand_bytes));
            println!("   Full import: {}", format_kb(scenario.full_bundle_bytes));
            match scenario.outcome() {
                ScenarioOutcome::Saving { percent } => {
                    println!(
                        "   Saving:      {}",
                        style(format!("{:.1}%", percent)).green().bold()
                    );
                }
                ScenarioOutcome::Increase { delta_bytes } => {
                    println!(
                        "   Increase:    {} (isolated bundles duplicate shared code)",
                        style(format!("+{}", format_kb(delta_bytes))).red()
                    );
                }
                ScenarioOutcome::NoBaseline => {
                    println!("   Saving:      n/a (empty main bundle)");
                }
            }
        }
    }

    fn print_recommendation(report: &SizeReport) {
        println!("\n\n{} Recommendation", BULB);
        println!("{}", "=".repeat(RULE_WIDTH));
        match report.scenarios.first().map(|s| s.outcome()) {
            Some(ScenarioOutcome::Saving { percent }) => {
                println!(
                    "   Using 1-2 components: import on demand (saves {:.1}% or more)",
                    percent
                );
                println!("   Using every component: import the full bundle");
            }
            _ => {
                println!("   Import the full bundle; on-demand import has no size advantage here");
            }
        }
    }

    fn print_inventory(report: &SizeReport) {
        println!("\n\n{} File inventory ({} files)", PACKAGE, report.inventory.len());
        println!("{}", "=".repeat(RULE_WIDTH));
        for record in &report.inventory {
            // Path's Display ignores width flags, so pad a String instead
            println!(
                "   {:<44} {:>12}",
                record.relative_path.display().to_string(),
                format_kb(record.size_bytes)
            );
        }
        println!("\n{}", "=".repeat(RULE_WIDTH));
    }

    /// Build the machine-readable report document
    pub fn to_json(report: &SizeReport) -> serde_json::Value {
        let scenarios: Vec<serde_json::Value> = report
            .scenarios
            .iter()
            .map(|scenario| {
                let outcome = match scenario.outcome() {
                    ScenarioOutcome::Saving { percent } => serde_json::json!({
                        "kind": "saving",
                        "percent": percent,
                    }),
                    ScenarioOutcome::Increase { delta_bytes } => serde_json::json!({
                        "kind": "increase",
                        "delta_bytes": delta_bytes,
                    }),
                    ScenarioOutcome::NoBaseline => serde_json::json!({
                        "kind": "no-baseline",
                    }),
                };
                serde_json::json!({
                    "name": scenario.name,
                    "on_demand_bytes": scenario.on_demand_bytes,
                    "full_bundle_bytes": scenario.full_bundle_bytes,
                    "outcome": outcome,
                })
            })
            .collect();

        serde_json::json!({
            "full_bundle": {
                "script_bytes": report.main.script_bytes,
                "style_bytes": report.main.style_bytes,
                "total_bytes": report.main.total_bytes(),
            },
            "components": report.components.iter().map(|c| serde_json::json!({
                "name": c.name,
                "script_bytes": c.script_bytes,
                "style_bytes": c.style_bytes,
                "total_bytes": c.total_bytes(),
            })).collect::<Vec<_>>(),
            "scenarios": scenarios,
            "files": report.inventory.iter().map(|f| serde_json::json!({
                "path": f.relative_path.to_string_lossy(),
                "size_bytes": f.size_bytes,
            })).collect::<Vec<_>>(),
        })
    }
}
