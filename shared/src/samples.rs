//! Built-in data shown when the listing endpoints cannot be reached.

use crate::fees::Frequency;
use crate::{FeeItem, FeeRecord, FeeStructureSummary, PaymentStatus};

fn item(name: &str, amount: f64, frequency: Frequency) -> FeeItem {
    FeeItem {
        name: name.to_string(),
        amount,
        frequency: Some(frequency),
    }
}

pub fn sample_fee_structures() -> Vec<FeeStructureSummary> {
    vec![
        FeeStructureSummary {
            id: 1,
            name: "CSE Department Fee Structure".to_string(),
            description: "Fee structure for Computer Science and Engineering students".to_string(),
            academic_year: "2023-2024".to_string(),
            branch: "CSE".to_string(),
            items: vec![
                item("Tuition Fee", 42500.0, Frequency::PerSemester),
                item("Laboratory Fee", 15000.0, Frequency::PerYear),
                item("Hostel Fee", 60000.0, Frequency::PerYear),
            ],
        },
        FeeStructureSummary {
            id: 2,
            name: "ECE Department Fee Structure".to_string(),
            description: "Fee structure for Electronics and Communication Engineering students".to_string(),
            academic_year: "2023-2024".to_string(),
            branch: "ECE".to_string(),
            items: vec![
                item("Tuition Fee", 40000.0, Frequency::PerSemester),
                item("Laboratory Fee", 20000.0, Frequency::PerYear),
            ],
        },
    ]
}

pub fn sample_fee_records() -> Vec<FeeRecord> {
    vec![
        FeeRecord {
            id: 1,
            student_id: "CSE2023001".to_string(),
            student_name: "Sahana Patel".to_string(),
            fee_type: "Tuition Fee".to_string(),
            academic_year: "2023-2024".to_string(),
            term: "Fall".to_string(),
            total_amount: 100000.0,
            paid_amount: 50000.0,
            balance: 50000.0,
            status: PaymentStatus::PartiallyPaid,
        },
        FeeRecord {
            id: 2,
            student_id: "ECE2022042".to_string(),
            student_name: "Rahul Kumar".to_string(),
            fee_type: "Tuition Fee".to_string(),
            academic_year: "2023-2024".to_string(),
            term: "Fall".to_string(),
            total_amount: 100000.0,
            paid_amount: 100000.0,
            balance: 0.0,
            status: PaymentStatus::Paid,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_totals() {
        let structures = sample_fee_structures();
        assert_eq!(structures[0].total(), 160000.0);
        assert_eq!(structures[1].total(), 100000.0);
    }

    #[test]
    fn test_sample_record_settlement() {
        let records = sample_fee_records();
        assert!(!records[0].is_settled());
        assert!(records[1].is_settled());
    }
}
