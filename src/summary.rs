//! Human-readable snapshot of a configuration.

use crate::model::{Catalog, CategoryId, SelectionState};
use crate::pricing::{price, PriceBreakdown};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryGroup {
    pub category: CategoryId,
    pub items: Vec<SummaryLine>,
}

/// Read-only rendering of a selection, suitable for export or submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationSummary {
    pub chassis: Option<SummaryLine>,
    pub model: Option<SummaryLine>,
    pub groups: Vec<SummaryGroup>,
    pub owns_van: bool,
    pub has_bed: bool,
    pub has_seats: bool,
    pub price: PriceBreakdown,
}

impl ConfigurationSummary {
    /// Builds the summary. Ids the catalog does not know are left out.
    #[must_use]
    pub fn new(state: &SelectionState, catalog: &Catalog) -> Self {
        let line = |id: &str| {
            catalog.lookup(id).map(|item| SummaryLine {
                name: item.name.clone(),
                price: item.price,
            })
        };

        let groups = CategoryId::ALL
            .into_iter()
            .filter_map(|category| {
                let items: Vec<SummaryLine> = match category.slot() {
                    Some(slot) => state
                        .slot(slot)
                        .into_iter()
                        .chain(state.toggles_in(catalog, category))
                        .filter_map(line)
                        .collect(),
                    None if category.is_toggle() => state
                        .toggles_in(catalog, category)
                        .filter_map(line)
                        .collect(),
                    None => Vec::new(),
                };
                (!items.is_empty()).then_some(SummaryGroup { category, items })
            })
            .collect();

        Self {
            chassis: state.chassis_id.as_deref().and_then(line),
            model: state.model_id.as_deref().and_then(line),
            groups,
            owns_van: state.owns_van,
            has_bed: state.has_bed,
            has_seats: state.has_seats,
            price: price(state, catalog),
        }
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.name.as_str())
    }
}

impl fmt::Display for ConfigurationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Van Configuration Summary")?;
        writeln!(f, "------------------------")?;
        match &self.chassis {
            Some(c) if self.owns_van => writeln!(f, "Base Van: {} - customer supplied", c.name)?,
            Some(c) => writeln!(f, "Base Van: {} - {}", c.name, format_usd(c.price))?,
            None => writeln!(f, "Base Van: Not Selected")?,
        }
        match &self.model {
            Some(m) => writeln!(f, "Package: {} - {}", m.name, format_usd(m.price))?,
            None => writeln!(f, "Package: Not Selected")?,
        }
        writeln!(
            f,
            "Bed: {} | Front seats: {}",
            yes_no(self.has_bed),
            yes_no(self.has_seats)
        )?;

        writeln!(f)?;
        writeln!(f, "Selected Options")?;
        writeln!(f, "---------------")?;
        if self.groups.is_empty() {
            writeln!(f, "No options selected")?;
        }
        for group in &self.groups {
            let names: Vec<&str> = group.items.iter().map(|i| i.name.as_str()).collect();
            writeln!(f, "• {}: {}", group.category, names.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Price Summary")?;
        writeln!(f, "------------")?;
        writeln!(f, "Base Van:     {}", format_usd(self.price.chassis))?;
        writeln!(f, "Package:      {}", format_usd(self.price.model))?;
        writeln!(f, "Options:      {}", format_usd(self.price.upgrades))?;
        write!(f, "Total Price:  {}", format_usd(self.price.total))
    }
}

/// Formats whole dollars with thousands separators, e.g. `$155,900`.
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
