//! # Payment Modal Controller
//!
//! Explicit state for the payment modal:
//!
//! ```text
//! Closed ──open(context)──▶ Open ──close / successful submit──▶ Closed
//! ```
//!
//! While open, exactly one [`DetailGroup`] is visible. It is derived from the
//! selected [`PaymentMethod`] in [`DetailGroup::for_method`] and nowhere else,
//! so the rendered containers can never disagree with the selected method.
//!
//! Submission is gated twice: every required field must validate, and only
//! one submission may be in flight at a time. While it is in flight the modal
//! is locked: open, close and field edits are ignored until it settles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::{format_currency, parse_amount};
use crate::error::SubmitError;
use crate::PaymentRequest;

/// How the payer intends to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::BankTransfer,
    ];

    /// Parse a `<select>` value; the empty placeholder yields `None`
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "credit_card" => Some(PaymentMethod::CreditCard),
            "debit_card" => Some(PaymentMethod::DebitCard),
            "upi" => Some(PaymentMethod::Upi),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The payment-detail field group currently shown in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailGroup {
    #[default]
    None,
    Card,
    Upi,
    Bank,
}

impl DetailGroup {
    /// Total mapping from the selected method to the visible group
    pub fn for_method(method: Option<PaymentMethod>) -> Self {
        match method {
            Some(PaymentMethod::CreditCard) | Some(PaymentMethod::DebitCard) => DetailGroup::Card,
            Some(PaymentMethod::Upi) => DetailGroup::Upi,
            Some(PaymentMethod::BankTransfer) => DetailGroup::Bank,
            None => DetailGroup::None,
        }
    }

    /// DOM id of the container for this group
    pub fn container_id(&self) -> Option<&'static str> {
        match self {
            DetailGroup::None => None,
            DetailGroup::Card => Some("cardDetailsContainer"),
            DetailGroup::Upi => Some("upiDetailsContainer"),
            DetailGroup::Bank => Some("bankDetailsContainer"),
        }
    }

    /// `display` style for `group` when `self` is the visible one
    pub fn display_for(&self, group: DetailGroup) -> &'static str {
        if group != DetailGroup::None && *self == group {
            "display: block"
        } else {
            "display: none"
        }
    }
}

/// Data needed to render the confirmation modal for one payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentContext {
    pub fee_type: String,
    pub amount: f64,
    /// Branch for fee-structure payments, student for individual records
    pub branch_or_student: String,
}

impl PaymentContext {
    pub fn new(fee_type: impl Into<String>, amount: f64, branch_or_student: impl Into<String>) -> Self {
        Self {
            fee_type: fee_type.into(),
            amount,
            branch_or_student: branch_or_student.into(),
        }
    }

    pub fn title(&self) -> String {
        format!("Pay {}", self.fee_type)
    }

    pub fn formatted_amount(&self, currency: &str) -> String {
        format_currency(self.amount, currency)
    }
}

/// Required fields of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    Identifier,
    FeeType,
    Amount,
    PaymentMethod,
}

impl PaymentField {
    pub const ALL: [PaymentField; 4] = [
        PaymentField::Identifier,
        PaymentField::FeeType,
        PaymentField::Amount,
        PaymentField::PaymentMethod,
    ];

    pub fn input_id(&self) -> &'static str {
        match self {
            PaymentField::Identifier => "studentId",
            PaymentField::FeeType => "feeType",
            PaymentField::Amount => "amount",
            PaymentField::PaymentMethod => "paymentMethod",
        }
    }

    pub fn feedback_id(&self) -> &'static str {
        match self {
            PaymentField::Identifier => "studentIdFeedback",
            PaymentField::FeeType => "feeTypeFeedback",
            PaymentField::Amount => "amountFeedback",
            PaymentField::PaymentMethod => "paymentMethodFeedback",
        }
    }

    /// Inline message revealed when the field is invalid
    pub fn message(&self) -> &'static str {
        match self {
            PaymentField::Identifier => "Please select a student.",
            PaymentField::FeeType => "Please select a fee type.",
            PaymentField::Amount => "Please enter an amount greater than zero.",
            PaymentField::PaymentMethod => "Please select a payment method.",
        }
    }
}

/// Editable contents of the payment form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentForm {
    pub student_id: String,
    pub student_name: String,
    pub fee_type: String,
    pub amount_input: String,
    pub method: Option<PaymentMethod>,
}

impl PaymentForm {
    /// Every failing required field, in form order
    pub fn validate(&self) -> Vec<PaymentField> {
        let mut invalid = Vec::new();

        if self.student_id.trim().is_empty() {
            invalid.push(PaymentField::Identifier);
        }
        if self.fee_type.trim().is_empty() {
            invalid.push(PaymentField::FeeType);
        }
        if parse_amount(&self.amount_input) <= 0.0 {
            invalid.push(PaymentField::Amount);
        }
        if self.method.is_none() {
            invalid.push(PaymentField::PaymentMethod);
        }

        invalid
    }

    /// Build the backend request, or every field that blocks it
    pub fn to_request(&self) -> Result<PaymentRequest, Vec<PaymentField>> {
        let invalid = self.validate();
        match self.method {
            Some(method) if invalid.is_empty() => Ok(PaymentRequest {
                student_id: self.student_id.trim().to_string(),
                fee_type: self.fee_type.trim().to_string(),
                amount: parse_amount(&self.amount_input),
                payment_method: method,
            }),
            _ => Err(invalid),
        }
    }
}

/// State held while the modal is open
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenPayment {
    pub context: Option<PaymentContext>,
    pub form: PaymentForm,
    pub detail: DetailGroup,
    pub invalid: Vec<PaymentField>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaymentModalState {
    #[default]
    Closed,
    Open(OpenPayment),
}

/// Result of settling an in-flight submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The modal closed; the page should reload to show server state
    Succeeded { reload: bool },
    /// The modal stays open for another attempt
    Failed(String),
    /// No submission was in flight
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentController {
    state: PaymentModalState,
}

impl PaymentController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PaymentModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PaymentModalState::Open(_))
    }

    /// Open for a "Pay" action, populating fee type and amount from the context.
    ///
    /// Open and close requests are ignored while a submission is in flight, so
    /// its result always settles against the form that sent it.
    pub fn open(&mut self, context: PaymentContext) {
        if self.is_submitting() {
            tracing::debug!("payment modal locked while submitting");
            return;
        }
        tracing::debug!(fee_type = %context.fee_type, amount = context.amount, "payment modal opened");
        let form = PaymentForm {
            student_id: String::new(),
            student_name: String::new(),
            fee_type: context.fee_type.clone(),
            amount_input: context.amount.to_string(),
            method: None,
        };
        self.state = PaymentModalState::Open(OpenPayment {
            context: Some(context),
            form,
            ..OpenPayment::default()
        });
    }

    /// Open for a specific student's outstanding fee
    pub fn open_for_record(&mut self, student_id: &str, student_name: &str, context: PaymentContext) {
        if self.is_submitting() {
            return;
        }
        self.open(context);
        if let PaymentModalState::Open(open) = &mut self.state {
            open.form.student_id = student_id.to_string();
            open.form.student_name = student_name.to_string();
        }
    }

    /// Open with only the student pre-selected
    pub fn open_for_student(&mut self, student_id: &str, student_name: &str) {
        if self.is_submitting() {
            return;
        }
        tracing::debug!(student_id, "payment modal opened for student");
        self.state = PaymentModalState::Open(OpenPayment {
            form: PaymentForm {
                student_id: student_id.to_string(),
                student_name: student_name.to_string(),
                ..PaymentForm::default()
            },
            ..OpenPayment::default()
        });
    }

    /// Open an empty form
    pub fn open_blank(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.state = PaymentModalState::Open(OpenPayment::default());
    }

    /// Close and discard the context; no-op while submitting
    pub fn close(&mut self) {
        if self.is_submitting() {
            tracing::debug!("ignored close while payment is in flight");
            return;
        }
        if self.is_open() {
            tracing::debug!("payment modal closed");
        }
        self.state = PaymentModalState::Closed;
    }

    /// Select a method from a raw `<select>` value and re-derive the detail group
    pub fn select_method(&mut self, value: &str) {
        if let Some(open) = self.open_mut().filter(|open| !open.submitting) {
            open.form.method = PaymentMethod::from_value(value);
            open.detail = DetailGroup::for_method(open.form.method);
        }
    }

    /// Update a text field of the form
    pub fn set_field(&mut self, field: PaymentField, value: &str) {
        if field == PaymentField::PaymentMethod {
            self.select_method(value);
            return;
        }
        if let Some(open) = self.open_mut().filter(|open| !open.submitting) {
            match field {
                PaymentField::Identifier => open.form.student_id = value.to_string(),
                PaymentField::FeeType => open.form.fee_type = value.to_string(),
                PaymentField::Amount => open.form.amount_input = value.to_string(),
                PaymentField::PaymentMethod => {}
            }
        }
    }

    /// Validate and mark the submission as in flight.
    ///
    /// On success the caller must issue exactly one backend call and report
    /// its result through [`PaymentController::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<PaymentRequest, SubmitError> {
        let open = self.open_mut().ok_or(SubmitError::NotOpen)?;
        if open.submitting {
            tracing::warn!("ignored payment submit while another is in flight");
            return Err(SubmitError::AlreadySubmitting);
        }

        match open.form.to_request() {
            Ok(request) => {
                open.invalid.clear();
                open.submitting = true;
                Ok(request)
            }
            Err(invalid) => {
                tracing::debug!(?invalid, "payment form rejected");
                open.invalid = invalid.clone();
                Err(SubmitError::Validation(invalid))
            }
        }
    }

    /// Settle the in-flight submission with the backend's answer
    pub fn finish_submit(&mut self, result: Result<(), String>) -> SubmitOutcome {
        if !self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                tracing::debug!("payment submitted, closing modal");
                self.state = PaymentModalState::Closed;
                SubmitOutcome::Succeeded { reload: true }
            }
            Err(message) => {
                tracing::warn!(%message, "payment submission failed");
                if let Some(open) = self.open_mut() {
                    open.submitting = false;
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn context(&self) -> Option<&PaymentContext> {
        self.open_ref().and_then(|open| open.context.as_ref())
    }

    pub fn form(&self) -> Option<&PaymentForm> {
        self.open_ref().map(|open| &open.form)
    }

    pub fn detail_group(&self) -> DetailGroup {
        self.open_ref().map(|open| open.detail).unwrap_or_default()
    }

    pub fn is_submitting(&self) -> bool {
        self.open_ref().map(|open| open.submitting).unwrap_or(false)
    }

    pub fn is_invalid(&self, field: PaymentField) -> bool {
        self.open_ref()
            .map(|open| open.invalid.contains(&field))
            .unwrap_or(false)
    }

    fn open_ref(&self) -> Option<&OpenPayment> {
        match &self.state {
            PaymentModalState::Open(open) => Some(open),
            PaymentModalState::Closed => None,
        }
    }

    fn open_mut(&mut self) -> Option<&mut OpenPayment> {
        match &mut self.state {
            PaymentModalState::Open(open) => Some(open),
            PaymentModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_controller() -> PaymentController {
        let mut controller = PaymentController::new();
        controller.open_for_record(
            "STU001",
            "Aarav Sharma",
            PaymentContext::new("Tuition Fee", 50000.0, "Aarav Sharma"),
        );
        controller.select_method("upi");
        controller
    }

    #[test]
    fn test_method_to_detail_group_is_total() {
        assert_eq!(DetailGroup::for_method(Some(PaymentMethod::CreditCard)), DetailGroup::Card);
        assert_eq!(DetailGroup::for_method(Some(PaymentMethod::DebitCard)), DetailGroup::Card);
        assert_eq!(DetailGroup::for_method(Some(PaymentMethod::Upi)), DetailGroup::Upi);
        assert_eq!(DetailGroup::for_method(Some(PaymentMethod::BankTransfer)), DetailGroup::Bank);
        assert_eq!(DetailGroup::for_method(None), DetailGroup::None);
    }

    #[test]
    fn test_selecting_upi_shows_only_upi_group() {
        let controller = filled_controller();
        let visible = controller.detail_group();
        assert_eq!(visible, DetailGroup::Upi);
        assert_eq!(visible.display_for(DetailGroup::Upi), "display: block");
        assert_eq!(visible.display_for(DetailGroup::Card), "display: none");
        assert_eq!(visible.display_for(DetailGroup::Bank), "display: none");
    }

    #[test]
    fn test_credit_and_debit_share_card_group() {
        let mut controller = filled_controller();
        controller.select_method("credit_card");
        assert_eq!(controller.detail_group(), DetailGroup::Card);
        controller.select_method("debit_card");
        assert_eq!(controller.detail_group(), DetailGroup::Card);
        controller.select_method("");
        assert_eq!(controller.detail_group(), DetailGroup::None);
    }

    #[test]
    fn test_open_populates_from_context() {
        let mut controller = PaymentController::new();
        assert!(!controller.is_open());
        controller.open(PaymentContext::new("CSE Department Fee Structure", 100000.0, "CSE"));

        let context = controller.context().unwrap();
        assert_eq!(context.title(), "Pay CSE Department Fee Structure");
        assert_eq!(context.formatted_amount("INR"), "₹1,00,000");

        let form = controller.form().unwrap();
        assert_eq!(form.fee_type, "CSE Department Fee Structure");
        assert_eq!(form.amount_input, "100000");
        assert_eq!(controller.detail_group(), DetailGroup::None);
    }

    #[test]
    fn test_close_discards_context() {
        let mut controller = filled_controller();
        controller.close();
        assert!(!controller.is_open());
        assert!(controller.context().is_none());
        assert_eq!(controller.detail_group(), DetailGroup::None);
    }

    #[test]
    fn test_zero_or_empty_amount_blocks_submission() {
        for amount in ["0", "", "abc", "-5"] {
            let mut controller = filled_controller();
            controller.set_field(PaymentField::Amount, amount);
            let result = controller.begin_submit();
            assert_eq!(result, Err(SubmitError::Validation(vec![PaymentField::Amount])));
            assert!(controller.is_open());
            assert!(!controller.is_submitting());
            assert!(controller.is_invalid(PaymentField::Amount));
        }
    }

    #[test]
    fn test_all_invalid_fields_reported_together() {
        let mut controller = PaymentController::new();
        controller.open_blank();
        let result = controller.begin_submit();
        assert_eq!(result, Err(SubmitError::Validation(PaymentField::ALL.to_vec())));
        for field in PaymentField::ALL {
            assert!(controller.is_invalid(field));
        }
    }

    #[test]
    fn test_record_payment_preselects_student_only() {
        let mut controller = PaymentController::new();
        controller.open_for_student("STU002", "Priya Patel");
        let form = controller.form().unwrap();
        assert_eq!(form.student_id, "STU002");
        assert!(form.fee_type.is_empty());
        assert!(controller.context().is_none());

        let result = controller.begin_submit();
        assert_eq!(
            result,
            Err(SubmitError::Validation(vec![
                PaymentField::FeeType,
                PaymentField::Amount,
                PaymentField::PaymentMethod,
            ]))
        );
        assert!(!controller.is_invalid(PaymentField::Identifier));
    }

    #[test]
    fn test_valid_submission_builds_request() {
        let mut controller = filled_controller();
        let request = controller.begin_submit().unwrap();
        assert_eq!(request.student_id, "STU001");
        assert_eq!(request.fee_type, "Tuition Fee");
        assert_eq!(request.amount, 50000.0);
        assert_eq!(request.payment_method, PaymentMethod::Upi);
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_double_submit_rejected_while_in_flight() {
        let mut controller = filled_controller();
        assert!(controller.begin_submit().is_ok());
        assert_eq!(controller.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn test_close_and_reopen_cannot_bypass_in_flight_guard() {
        let mut controller = filled_controller();
        let first = controller.begin_submit().unwrap();

        controller.close();
        assert!(controller.is_open());
        controller.open_for_record(
            "STU002",
            "Priya Patel",
            PaymentContext::new("Hostel Fee", 60000.0, "Priya Patel"),
        );
        controller.open_blank();
        controller.select_method("credit_card");

        assert_eq!(controller.begin_submit(), Err(SubmitError::AlreadySubmitting));
        let form = controller.form().unwrap();
        assert_eq!(form.student_id, first.student_id);
        assert_eq!(form.fee_type, "Tuition Fee");
        assert_eq!(form.method, Some(PaymentMethod::Upi));
    }

    #[test]
    fn test_success_after_close_attempt_still_reported() {
        let mut controller = filled_controller();
        controller.begin_submit().unwrap();
        controller.close();
        assert_eq!(controller.finish_submit(Ok(())), SubmitOutcome::Succeeded { reload: true });
        assert!(!controller.is_open());

        controller.open_blank();
        assert!(controller.is_open());
    }

    #[test]
    fn test_failure_after_close_attempt_still_reported() {
        let mut controller = filled_controller();
        controller.begin_submit().unwrap();
        controller.close();
        assert_eq!(
            controller.finish_submit(Err("declined".to_string())),
            SubmitOutcome::Failed("declined".to_string())
        );
        controller.close();
        assert!(!controller.is_open());
    }

    #[test]
    fn test_success_closes_and_requests_reload() {
        let mut controller = filled_controller();
        controller.begin_submit().unwrap();
        assert_eq!(controller.finish_submit(Ok(())), SubmitOutcome::Succeeded { reload: true });
        assert!(!controller.is_open());
    }

    #[test]
    fn test_failure_keeps_modal_open_for_retry() {
        let mut controller = filled_controller();
        controller.begin_submit().unwrap();
        assert_eq!(
            controller.finish_submit(Err("gateway timeout".to_string())),
            SubmitOutcome::Failed("gateway timeout".to_string())
        );
        assert!(controller.is_open());
        assert!(!controller.is_submitting());
        assert!(controller.begin_submit().is_ok());
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut controller = filled_controller();
        assert_eq!(controller.finish_submit(Ok(())), SubmitOutcome::Ignored);
        assert!(controller.is_open());

        let mut closed = PaymentController::new();
        assert_eq!(closed.finish_submit(Ok(())), SubmitOutcome::Ignored);
        assert_eq!(closed.begin_submit(), Err(SubmitError::NotOpen));
    }

    #[test]
    fn test_method_wire_names() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.value()));
        }
    }
}
