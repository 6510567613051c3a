//! Fee component aggregation.
//!
//! A fee structure is edited as a list of components, each with an amount and
//! a billing frequency. The annualized total is always re-summed from the
//! complete current list so that adding, removing or editing a row can never
//! leave a stale contribution behind.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::currency::parse_amount;

/// Billing frequency of a fee component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    PerSemester,
    PerYear,
    OneTime,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::PerSemester, Frequency::PerYear, Frequency::OneTime];

    /// Parse a `<select>` value; unrecognized values yield `None`
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "per_semester" => Some(Frequency::PerSemester),
            "per_year" => Some(Frequency::PerYear),
            "one_time" => Some(Frequency::OneTime),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Frequency::PerSemester => "per_semester",
            Frequency::PerYear => "per_year",
            Frequency::OneTime => "one_time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::PerSemester => "Per Semester",
            Frequency::PerYear => "Per Year",
            Frequency::OneTime => "One Time",
        }
    }

    /// How many times per academic year this component is charged
    pub fn multiplier(&self) -> f64 {
        match self {
            Frequency::PerSemester => 2.0,
            Frequency::PerYear => 1.0,
            Frequency::OneTime => 1.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Multiplier for an optional frequency; a missing frequency contributes nothing
pub fn multiplier(frequency: Option<Frequency>) -> f64 {
    frequency.map(|f| f.multiplier()).unwrap_or(0.0)
}

/// One amount's yearly contribution; non-finite or negative amounts count as zero
pub fn annualize(amount: f64, frequency: Option<Frequency>) -> f64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0.0;
    }
    amount * multiplier(frequency)
}

/// Sum of `amount × multiplier(frequency)` over `(amount, frequency)` pairs
pub fn annualized_sum<I>(entries: I) -> f64
where
    I: IntoIterator<Item = (f64, Option<Frequency>)>,
{
    entries
        .into_iter()
        .map(|(amount, frequency)| annualize(amount, frequency))
        .sum()
}

/// Deserialize a frequency, mapping unknown strings to `None` instead of failing
pub fn lenient_frequency<'de, D>(deserializer: D) -> Result<Option<Frequency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Frequency::from_value))
}

/// One editable fee component row
#[derive(Debug, Clone, PartialEq)]
pub struct FeeComponent {
    pub id: Uuid,
    pub name: String,
    /// Raw text from the amount input
    pub amount_input: String,
    pub frequency: Option<Frequency>,
}

impl FeeComponent {
    /// A blank row, defaulting to the first option of the frequency select
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            amount_input: String::new(),
            frequency: Some(Frequency::PerSemester),
        }
    }

    pub fn with_values(name: &str, amount: f64, frequency: Option<Frequency>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            amount_input: amount.to_string(),
            frequency,
        }
    }

    /// Parsed amount; anything unparseable counts as zero
    pub fn amount(&self) -> f64 {
        parse_amount(&self.amount_input)
    }

    /// This row's contribution to the annual total
    pub fn annualized(&self) -> f64 {
        annualize(self.amount(), self.frequency)
    }
}

impl Default for FeeComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Annual total of every component row
pub fn annual_total(components: &[FeeComponent]) -> f64 {
    annualized_sum(components.iter().map(|c| (c.amount(), c.frequency)))
}

/// The ordered set of component rows in the fee structure form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeeComponentList {
    components: Vec<FeeComponent>,
}

impl FeeComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<FeeComponent>) -> Self {
        Self { components }
    }

    /// Append a blank row and return its id
    pub fn add(&mut self) -> Uuid {
        let component = FeeComponent::new();
        let id = component.id;
        self.components.push(component);
        tracing::debug!(%id, rows = self.components.len(), "fee component added");
        id
    }

    pub fn push(&mut self, component: FeeComponent) {
        self.components.push(component);
    }

    /// Remove a row; returns false if no row has this id
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        let removed = self.components.len() != before;
        if removed {
            tracing::debug!(%id, rows = self.components.len(), "fee component removed");
        }
        removed
    }

    pub fn set_name(&mut self, id: Uuid, name: &str) {
        if let Some(component) = self.get_mut(id) {
            component.name = name.to_string();
        }
    }

    pub fn set_amount(&mut self, id: Uuid, amount_input: &str) {
        if let Some(component) = self.get_mut(id) {
            component.amount_input = amount_input.to_string();
        }
    }

    /// Set the frequency from a raw `<select>` value
    pub fn set_frequency(&mut self, id: Uuid, value: &str) {
        if let Some(component) = self.get_mut(id) {
            component.frequency = Frequency::from_value(value);
        }
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn annual_total(&self) -> f64 {
        annual_total(&self.components)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeeComponent> {
        self.components.iter()
    }

    pub fn as_slice(&self) -> &[FeeComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut FeeComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_total_mixed_frequencies() {
        let components = vec![
            FeeComponent::with_values("Tuition", 1000.0, Some(Frequency::PerSemester)),
            FeeComponent::with_values("Library", 500.0, Some(Frequency::PerYear)),
        ];
        assert_eq!(annual_total(&components), 2500.0);
    }

    #[test]
    fn test_annual_total_empty() {
        assert_eq!(annual_total(&[]), 0.0);
        assert_eq!(FeeComponentList::new().annual_total(), 0.0);
    }

    #[test]
    fn test_one_time_counts_once() {
        let components = vec![FeeComponent::with_values("Admission", 7500.0, Some(Frequency::OneTime))];
        assert_eq!(annual_total(&components), 7500.0);
    }

    #[test]
    fn test_unknown_frequency_contributes_nothing() {
        let mut list = FeeComponentList::new();
        let id = list.add();
        list.set_amount(id, "1200");
        list.set_frequency(id, "per_decade");
        assert_eq!(list.annual_total(), 0.0);

        list.set_frequency(id, "per_year");
        assert_eq!(list.annual_total(), 1200.0);
    }

    #[test]
    fn test_non_numeric_amount_is_zero() {
        let mut list = FeeComponentList::new();
        let bad = list.add();
        list.set_amount(bad, "abc");
        let empty = list.add();
        list.set_amount(empty, "");
        let good = list.add();
        list.set_amount(good, "300");
        list.set_frequency(good, "per_semester");
        assert_eq!(list.annual_total(), 600.0);
    }

    #[test]
    fn test_remove_all_then_readd_uses_current_set_only() {
        let mut list = FeeComponentList::new();
        let first = list.add();
        list.set_amount(first, "1000");
        let second = list.add();
        list.set_amount(second, "2000");
        list.set_frequency(second, "per_year");
        assert_eq!(list.annual_total(), 4000.0);

        assert!(list.remove(first));
        assert!(list.remove(second));
        assert_eq!(list.annual_total(), 0.0);

        let third = list.add();
        list.set_amount(third, "250");
        list.set_frequency(third, "one_time");
        assert_eq!(list.annual_total(), 250.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = FeeComponentList::new();
        list.add();
        assert!(!list.remove(Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_edit_reflects_in_total() {
        let mut list = FeeComponentList::new();
        let id = list.add();
        list.set_amount(id, "100");
        assert_eq!(list.annual_total(), 200.0);
        list.set_amount(id, "150");
        assert_eq!(list.annual_total(), 300.0);
        list.set_frequency(id, "one_time");
        assert_eq!(list.annual_total(), 150.0);
    }

    #[test]
    fn test_frequency_values_round_trip_through_select() {
        for frequency in Frequency::ALL {
            assert_eq!(Frequency::from_value(frequency.value()), Some(frequency));
        }
        assert_eq!(Frequency::from_value(""), None);
    }

    #[test]
    fn test_lenient_frequency_deserialization() {
        let item: crate::FeeItem =
            serde_json::from_str(r#"{"name":"Bus","amount":10.0,"frequency":"monthly"}"#).unwrap();
        assert_eq!(item.frequency, None);

        let item: crate::FeeItem = serde_json::from_str(r#"{"name":"Bus","amount":10.0}"#).unwrap();
        assert_eq!(item.frequency, None);
    }
}
