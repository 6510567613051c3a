//! Fee structure drafting, validation and listing filters.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::currency::parse_amount;
use crate::fees::FeeComponentList;
use crate::{CreateFeeStructureRequest, FeeItem, FeeStructureSummary, InstallmentRequest};

/// One row of a fee structure's payment schedule
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    pub id: Uuid,
    pub name: String,
    pub amount_input: String,
    /// Raw `YYYY-MM-DD` value of the date input
    pub due_date_input: String,
}

impl Installment {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            amount_input: String::new(),
            due_date_input: String::new(),
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date_input.trim(), "%Y-%m-%d").ok()
    }
}

impl Default for Installment {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of validating a draft; every failing field is flagged at once
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeeStructureValidation {
    pub missing_name: bool,
    pub missing_academic_year: bool,
    pub missing_branch: bool,
    pub no_components: bool,
    pub invalid_component_names: Vec<Uuid>,
    pub invalid_component_amounts: Vec<Uuid>,
}

impl FeeStructureValidation {
    pub fn is_valid(&self) -> bool {
        !self.missing_name
            && !self.missing_academic_year
            && !self.missing_branch
            && !self.no_components
            && self.invalid_component_names.is_empty()
            && self.invalid_component_amounts.is_empty()
    }

    pub fn component_name_invalid(&self, id: Uuid) -> bool {
        self.invalid_component_names.contains(&id)
    }

    pub fn component_amount_invalid(&self, id: Uuid) -> bool {
        self.invalid_component_amounts.contains(&id)
    }
}

/// The "Add Fee Structure" form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeeStructureDraft {
    pub name: String,
    pub academic_year: String,
    pub branch: String,
    pub components: FeeComponentList,
    pub schedule: Vec<Installment>,
}

impl FeeStructureDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_installment(&mut self) -> Uuid {
        let installment = Installment::new();
        let id = installment.id;
        self.schedule.push(installment);
        id
    }

    pub fn remove_installment(&mut self, id: Uuid) -> bool {
        let before = self.schedule.len();
        self.schedule.retain(|i| i.id != id);
        self.schedule.len() != before
    }

    pub fn installment_mut(&mut self, id: Uuid) -> Option<&mut Installment> {
        self.schedule.iter_mut().find(|i| i.id == id)
    }

    pub fn validate(&self) -> FeeStructureValidation {
        let mut validation = FeeStructureValidation {
            missing_name: self.name.trim().is_empty(),
            missing_academic_year: self.academic_year.trim().is_empty(),
            missing_branch: self.branch.trim().is_empty(),
            no_components: self.components.is_empty(),
            ..FeeStructureValidation::default()
        };

        for component in self.components.iter() {
            if component.name.trim().is_empty() {
                validation.invalid_component_names.push(component.id);
            }
            if component.amount() <= 0.0 {
                validation.invalid_component_amounts.push(component.id);
            }
        }

        validation
    }

    /// Build the backend request, or the validation that blocks it
    pub fn to_request(&self) -> Result<CreateFeeStructureRequest, FeeStructureValidation> {
        let validation = self.validate();
        if !validation.is_valid() {
            return Err(validation);
        }

        Ok(CreateFeeStructureRequest {
            name: self.name.trim().to_string(),
            academic_year: self.academic_year.trim().to_string(),
            branch: self.branch.trim().to_string(),
            components: self
                .components
                .iter()
                .map(|c| FeeItem {
                    name: c.name.trim().to_string(),
                    amount: c.amount(),
                    frequency: c.frequency,
                })
                .collect(),
            schedule: self
                .schedule
                .iter()
                .map(|i| InstallmentRequest {
                    name: i.name.trim().to_string(),
                    amount: parse_amount(&i.amount_input),
                    due_date: i.due_date(),
                })
                .collect(),
            annual_total: self.components.annual_total(),
        })
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Academic year / branch filter of the listing page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeeStructureFilter {
    pub academic_year: String,
    pub branch: String,
}

fn matches_filter(filter_value: &str, value: &str) -> bool {
    let filter_value = filter_value.trim();
    filter_value.is_empty() || filter_value == "all" || filter_value == value
}

impl FeeStructureFilter {
    pub fn new(academic_year: &str, branch: &str) -> Self {
        Self {
            academic_year: academic_year.to_string(),
            branch: branch.to_string(),
        }
    }

    pub fn matches(&self, summary: &FeeStructureSummary) -> bool {
        matches_filter(&self.academic_year, &summary.academic_year)
            && matches_filter(&self.branch, &summary.branch)
    }

    pub fn apply<'a>(&self, structures: &'a [FeeStructureSummary]) -> Vec<&'a FeeStructureSummary> {
        structures.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Distinct values of a field, in first-seen order, for filter dropdowns
pub fn distinct_values<F>(structures: &[FeeStructureSummary], field: F) -> Vec<String>
where
    F: Fn(&FeeStructureSummary) -> &str,
{
    let mut values: Vec<String> = Vec::new();
    for structure in structures {
        let value = field(structure);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_fee_structures;

    fn complete_draft() -> FeeStructureDraft {
        let mut draft = FeeStructureDraft::new();
        draft.name = "CSE Department Fee Structure".to_string();
        draft.academic_year = "2024-2025".to_string();
        draft.branch = "CSE".to_string();
        let id = draft.components.add();
        draft.components.set_name(id, "Tuition Fee");
        draft.components.set_amount(id, "42500");
        draft
    }

    #[test]
    fn test_complete_draft_is_valid() {
        let draft = complete_draft();
        assert!(draft.validate().is_valid());

        let request = draft.to_request().unwrap();
        assert_eq!(request.components.len(), 1);
        assert_eq!(request.annual_total, 85000.0);
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let validation = FeeStructureDraft::new().validate();
        assert!(validation.missing_name);
        assert!(validation.missing_academic_year);
        assert!(validation.missing_branch);
        assert!(validation.no_components);
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_component_rows_flagged_individually() {
        let mut draft = complete_draft();
        let unnamed = draft.components.add();
        draft.components.set_amount(unnamed, "100");
        let zero = draft.components.add();
        draft.components.set_name(zero, "Library");
        draft.components.set_amount(zero, "0");

        let validation = draft.validate();
        assert!(validation.component_name_invalid(unnamed));
        assert!(!validation.component_amount_invalid(unnamed));
        assert!(validation.component_amount_invalid(zero));
        assert!(!validation.component_name_invalid(zero));
        assert!(draft.to_request().is_err());
    }

    #[test]
    fn test_schedule_rows_carried_into_request() {
        let mut draft = complete_draft();
        let id = draft.add_installment();
        if let Some(row) = draft.installment_mut(id) {
            row.name = "First Installment".to_string();
            row.amount_input = "42500".to_string();
            row.due_date_input = "2024-08-15".to_string();
        }
        let bad_date = draft.add_installment();
        if let Some(row) = draft.installment_mut(bad_date) {
            row.due_date_input = "15/08/2024".to_string();
        }

        let request = draft.to_request().unwrap();
        assert_eq!(request.schedule.len(), 2);
        assert_eq!(request.schedule[0].due_date, NaiveDate::from_ymd_opt(2024, 8, 15));
        assert_eq!(request.schedule[1].due_date, None);

        assert!(draft.remove_installment(bad_date));
        assert_eq!(draft.schedule.len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = complete_draft();
        draft.add_installment();
        draft.reset();
        assert_eq!(draft, FeeStructureDraft::default());
        assert_eq!(draft.components.annual_total(), 0.0);
    }

    #[test]
    fn test_filter_all_shows_every_structure() {
        let structures = sample_fee_structures();
        let filter = FeeStructureFilter::new("all", "all");
        assert_eq!(filter.apply(&structures).len(), structures.len());
        assert_eq!(FeeStructureFilter::default().apply(&structures).len(), structures.len());
    }

    #[test]
    fn test_filter_by_branch_and_year() {
        let structures = sample_fee_structures();
        let ece = FeeStructureFilter::new("all", "ECE").apply(&structures);
        assert_eq!(ece.len(), 1);
        assert_eq!(ece[0].branch, "ECE");

        let none = FeeStructureFilter::new("1999-2000", "all").apply(&structures);
        assert!(none.is_empty());
    }

    #[test]
    fn test_distinct_values_preserve_order() {
        let structures = sample_fee_structures();
        let years = distinct_values(&structures, |s| s.academic_year.as_str());
        assert_eq!(years, vec!["2023-2024".to_string()]);
        let branches = distinct_values(&structures, |s| s.branch.as_str());
        assert_eq!(branches, vec!["CSE".to_string(), "ECE".to_string()]);
    }
}
