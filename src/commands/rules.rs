//! Rules command handler

use anyhow::Result;

use termclean::CleaningRule;

/// Render the rule catalog as an aligned, numbered list.
pub fn format_rules(rules: &[CleaningRule]) -> String {
    let width = rules.iter().map(|r| r.name.len()).max().unwrap_or(0);
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            format!(
                "{:>2}. {:<width$}  {}",
                i + 1,
                rule.name,
                rule.description,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List the cleaning rules in execution order.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    println!("{}", format_rules(termclean::rules()));
    Ok(())
}
