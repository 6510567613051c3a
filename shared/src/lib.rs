use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod currency;
pub mod error;
pub mod fee_structure;
pub mod fees;
pub mod payment;
pub mod samples;
pub mod session;

pub use config::AppConfig;
pub use currency::{digits_only, format_currency, format_inr, parse_amount};
pub use error::{StoreError, SubmitError};
pub use fee_structure::{FeeStructureDraft, FeeStructureFilter, FeeStructureValidation, Installment};
pub use fees::{annual_total, FeeComponent, FeeComponentList, Frequency};
pub use payment::{
    DetailGroup, PaymentContext, PaymentController, PaymentField, PaymentForm, PaymentMethod,
    PaymentModalState, SubmitOutcome,
};
pub use session::{ClientStore, MemoryStore, UserSession, USER_DATA_KEY};

/// User profile as returned by `GET /api/users/{id}` and cached under `userData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub role: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl User {
    /// Hard-coded profile used when the profile endpoint cannot be reached
    pub fn fallback_admin() -> Self {
        Self {
            id: 1,
            email: "admin@example.com".to_string(),
            full_name: Some("Admin User".to_string()),
            is_active: true,
            is_superuser: true,
            role: Some("admin".to_string()),
        }
    }

    /// Name shown in the navigation toggle: full name, else email
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Full name or the generic "User" label
    pub fn name_or_default(&self) -> &str {
        self.full_name_or("User")
    }

    pub fn role_or_default(&self) -> &str {
        non_blank(self.role.as_deref()).unwrap_or("User")
    }

    /// Full name for the personal information block
    pub fn full_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(self.full_name.as_deref()).unwrap_or(fallback)
    }

    pub fn email_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(Some(self.email.as_str())).unwrap_or(fallback)
    }

    /// Generated avatar image for this user at the given pixel size
    pub fn avatar_url(&self, size: u32) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}&background=0D8ABC&color=fff&size={}",
            urlencoding::encode(self.name_or_default()),
            size
        )
    }
}

/// One line item of a published fee structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeItem {
    pub name: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "fees::lenient_frequency")]
    pub frequency: Option<Frequency>,
}

/// A fee structure card on the listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeStructureSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub academic_year: String,
    pub branch: String,
    pub items: Vec<FeeItem>,
}

impl FeeStructureSummary {
    /// Annualized total of all items on the card
    pub fn total(&self) -> f64 {
        fees::annualized_sum(self.items.iter().map(|item| (item.amount, item.frequency)))
    }
}

/// Payment status of a student's fee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    PartiallyPaid,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
        }
    }

    /// Bootstrap badge colour for the status
    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "badge bg-secondary",
            PaymentStatus::PartiallyPaid => "badge bg-warning text-dark",
            PaymentStatus::Paid => "badge bg-success",
            PaymentStatus::Overdue => "badge bg-danger",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A student's fee record row on the payments page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub fee_type: String,
    pub academic_year: String,
    pub term: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub balance: f64,
    pub status: PaymentStatus,
}

impl FeeRecord {
    pub fn is_settled(&self) -> bool {
        self.status == PaymentStatus::Paid || self.balance <= 0.0
    }
}

/// Body of `POST /api/payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub student_id: String,
    pub fee_type: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
}

/// Body of `POST /api/fee-structures`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFeeStructureRequest {
    pub name: String,
    pub academic_year: String,
    pub branch: String,
    pub components: Vec<FeeItem>,
    pub schedule: Vec<InstallmentRequest>,
    pub annual_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRequest {
    pub name: String,
    pub amount: f64,
    pub due_date: Option<chrono::NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_backend_shape() {
        let json = r#"{"id":1,"email":"admin@example.com","full_name":"Admin User","is_active":true,"is_superuser":true,"role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::fallback_admin());
    }

    #[test]
    fn test_user_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":7,"email":"t@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "t@example.com");
        assert_eq!(user.name_or_default(), "User");
        assert_eq!(user.role_or_default(), "User");
        assert!(!user.is_active);
    }

    #[test]
    fn test_profile_fallbacks_for_blank_fields() {
        let user = User {
            id: 3,
            email: "  ".to_string(),
            full_name: None,
            is_active: true,
            is_superuser: false,
            role: Some(String::new()),
        };
        assert_eq!(user.role_or_default(), "User");
        assert_eq!(user.full_name_or("Not provided"), "Not provided");
        assert_eq!(user.email_or("Not provided"), "Not provided");
        assert_eq!(user.email_or("No email provided"), "No email provided");

        let admin = User::fallback_admin();
        assert_eq!(admin.full_name_or("Not provided"), "Admin User");
        assert_eq!(admin.email_or("Not provided"), "admin@example.com");
    }

    #[test]
    fn test_summary_total_matches_component_total() {
        let items = vec![
            FeeItem { name: "Tuition".to_string(), amount: 40000.0, frequency: Some(Frequency::PerSemester) },
            FeeItem { name: "Refund".to_string(), amount: -500.0, frequency: Some(Frequency::OneTime) },
            FeeItem { name: "Bus".to_string(), amount: 1200.0, frequency: None },
        ];
        let components: Vec<FeeComponent> = items
            .iter()
            .map(|item| FeeComponent::with_values(&item.name, item.amount, item.frequency))
            .collect();
        let summary = FeeStructureSummary {
            id: 2,
            name: "ECE".to_string(),
            description: String::new(),
            academic_year: "2023-2024".to_string(),
            branch: "ECE".to_string(),
            items,
        };
        assert_eq!(summary.total(), 80000.0);
        assert_eq!(summary.total(), annual_total(&components));
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        let user = User::fallback_admin();
        assert_eq!(
            user.avatar_url(32),
            "https://ui-avatars.com/api/?name=Admin%20User&background=0D8ABC&color=fff&size=32"
        );
    }

    #[test]
    fn test_fee_structure_summary_total() {
        let summary = FeeStructureSummary {
            id: 1,
            name: "CSE".to_string(),
            description: String::new(),
            academic_year: "2023-2024".to_string(),
            branch: "CSE".to_string(),
            items: vec![
                FeeItem { name: "Tuition".to_string(), amount: 42500.0, frequency: Some(Frequency::PerSemester) },
                FeeItem { name: "Lab".to_string(), amount: 15000.0, frequency: Some(Frequency::PerYear) },
                FeeItem { name: "Legacy".to_string(), amount: 999.0, frequency: None },
            ],
        };
        assert_eq!(summary.total(), 100000.0);
    }

    #[test]
    fn test_payment_status_wire_names() {
        let status: PaymentStatus = serde_json::from_str("\"partially_paid\"").unwrap();
        assert_eq!(status, PaymentStatus::PartiallyPaid);
        assert_eq!(status.to_string(), "Partially Paid");
    }
}
