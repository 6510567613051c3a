use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{PaymentContext, PaymentController, PaymentField, SubmitError, SubmitOutcome};
use crate::hooks::use_toasts::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::page;

/// Student-specific "Pay Now" action
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPayment {
    pub student_id: String,
    pub student_name: String,
    pub context: PaymentContext,
}

pub struct UsePaymentModalResult {
    /// Snapshot of the controller for rendering
    pub controller: PaymentController,
    pub actions: UsePaymentModalActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePaymentModalActions {
    pub open: Callback<PaymentContext>,
    pub open_for_record: Callback<RecordPayment>,
    pub open_for_student: Callback<(String, String)>,
    pub open_blank: Callback<()>,
    pub close: Callback<()>,
    pub set_field: Callback<(PaymentField, String)>,
    pub submit: Callback<()>,
}

/// Payment modal state shared by every "Pay" entry point.
///
/// The controller lives in a `RefCell` rather than a state handle so that a
/// second click is checked against the live in-flight flag, not against the
/// snapshot captured by the last render.
#[hook]
pub fn use_payment_modal(
    api_client: &ApiClient,
    notify: Callback<Notice>,
    reload_delay_ms: u32,
) -> UsePaymentModalResult {
    let controller: Rc<RefCell<PaymentController>> = use_mut_ref(PaymentController::new);
    let force_update = use_force_update();

    let apply = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        Rc::new(move |f: &dyn Fn(&mut PaymentController)| {
            f(&mut controller.borrow_mut());
            force_update.force_update();
        })
    };

    let open = {
        let apply = apply.clone();
        Callback::from(move |context: PaymentContext| {
            apply(&|c| c.open(context.clone()));
        })
    };

    let open_for_record = {
        let apply = apply.clone();
        Callback::from(move |record: RecordPayment| {
            apply(&|c| c.open_for_record(&record.student_id, &record.student_name, record.context.clone()));
        })
    };

    let open_for_student = {
        let apply = apply.clone();
        Callback::from(move |(student_id, student_name): (String, String)| {
            apply(&|c| c.open_for_student(&student_id, &student_name));
        })
    };

    let open_blank = {
        let apply = apply.clone();
        Callback::from(move |_| apply(&|c| c.open_blank()))
    };

    let close = {
        let apply = apply.clone();
        Callback::from(move |_| apply(&|c| c.close()))
    };

    let set_field = {
        let apply = apply.clone();
        Callback::from(move |(field, value): (PaymentField, String)| {
            apply(&|c| c.set_field(field, &value));
        })
    };

    let submit = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        let api_client = api_client.clone();

        Callback::from(move |_| {
            let started = controller.borrow_mut().begin_submit();
            force_update.force_update();

            let request = match started {
                Ok(request) => request,
                Err(SubmitError::Validation(fields)) => {
                    Logger::debug_with_component("payments", &format!("Payment form invalid: {:?}", fields));
                    return;
                }
                Err(e) => {
                    Logger::warn_with_component("payments", &e.to_string());
                    return;
                }
            };

            let controller = controller.clone();
            let force_update = force_update.clone();
            let api_client = api_client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let result = api_client
                    .submit_payment(&request)
                    .await
                    .map_err(|e| e.to_string());
                if let Err(message) = &result {
                    Logger::error_with_component("payments", &format!("Payment submission failed: {}", message));
                }

                let outcome = controller.borrow_mut().finish_submit(result);
                force_update.force_update();

                match outcome {
                    SubmitOutcome::Succeeded { reload } => {
                        notify.emit(Notice::success(
                            "Payment Successful",
                            "Your payment has been processed successfully. A receipt has been sent to your email.",
                        ));
                        if reload {
                            page::reload_after(reload_delay_ms);
                        }
                    }
                    SubmitOutcome::Failed(message) => {
                        notify.emit(Notice::error("Payment Failed", &message));
                    }
                    SubmitOutcome::Ignored => {}
                }
            });
        })
    };

    let snapshot = controller.borrow().clone();

    UsePaymentModalResult {
        controller: snapshot,
        actions: UsePaymentModalActions {
            open,
            open_for_record,
            open_for_student,
            open_blank,
            close,
            set_field,
            submit,
        },
    }
}
