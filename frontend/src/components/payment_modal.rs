use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::{DetailGroup, PaymentController, PaymentField, PaymentMethod};
use crate::hooks::use_payment_modal::UsePaymentModalActions;

pub const FEE_TYPES: [&str; 6] = [
    "Tuition Fee",
    "Laboratory Fee",
    "Hostel Fee",
    "Library Fee",
    "Examination Fee",
    "Transport Fee",
];

#[derive(Properties, PartialEq)]
pub struct PaymentModalProps {
    pub controller: PaymentController,
    pub currency: String,
    pub actions: UsePaymentModalActions,
}

fn control_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} is-invalid", base)
    } else {
        base.to_string()
    }
}

fn feedback(controller: &PaymentController, field: PaymentField) -> Html {
    let style = if controller.is_invalid(field) { "display: block" } else { "display: none" };
    html! {
        <div id={field.feedback_id()} class="invalid-feedback" style={style}>
            {field.message()}
        </div>
    }
}

#[function_component(PaymentModal)]
pub fn payment_modal(props: &PaymentModalProps) -> Html {
    let controller = &props.controller;
    let Some(form) = controller.form() else {
        return html! {};
    };

    let submitting = controller.is_submitting();

    let on_backdrop_click = {
        let close = props.actions.close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !submitting {
                close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let close = props.actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_input = |field: PaymentField| {
        let set_field = props.actions.set_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit((field, input.value()));
        })
    };

    let on_select = |field: PaymentField| {
        let set_field = props.actions.set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field.emit((field, select.value()));
        })
    };

    let on_submit = {
        let submit = props.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let detail = controller.detail_group();
    let context = controller.context();
    let modal_id = if context.is_some() { "payFeeModal" } else { "makePaymentModal" };
    let title = context
        .map(|c| c.title())
        .unwrap_or_else(|| "Make Payment".to_string());

    let custom_fee_type = !form.fee_type.is_empty() && !FEE_TYPES.contains(&form.fee_type.as_str());

    html! {
        <div class="modal-backdrop-custom" onclick={on_backdrop_click}>
            <div id={modal_id} class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered" onclick={on_modal_click}>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 id="paymentModalTitle" class="modal-title">{title}</h5>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close_click.clone()} disabled={submitting}></button>
                        </div>
                        <form id="paymentForm" novalidate={true} onsubmit={on_submit}>
                            <div class="modal-body">
                                {if let Some(context) = context {
                                    html! {
                                        <div class="alert alert-light border mb-3">
                                            <div class="d-flex justify-content-between">
                                                <span>{"Amount"}</span>
                                                <strong id="paymentModalAmount">{context.formatted_amount(&props.currency)}</strong>
                                            </div>
                                            <div class="d-flex justify-content-between">
                                                <span>{"Branch"}</span>
                                                <span id="paymentModalBranch">{&context.branch_or_student}</span>
                                            </div>
                                        </div>
                                    }
                                } else { html! {} }}

                                <div class="mb-3">
                                    <label for="studentId" class="form-label">{"Student ID"}</label>
                                    <input
                                        type="text"
                                        id="studentId"
                                        class={control_class("form-control", controller.is_invalid(PaymentField::Identifier))}
                                        value={form.student_id.clone()}
                                        oninput={on_input(PaymentField::Identifier)}
                                        disabled={submitting}
                                    />
                                    {feedback(controller, PaymentField::Identifier)}
                                    {if !form.student_name.is_empty() {
                                        html! { <div id="paymentStudentName" class="form-text">{&form.student_name}</div> }
                                    } else { html! {} }}
                                </div>

                                <div class="mb-3">
                                    <label for="feeType" class="form-label">{"Fee Type"}</label>
                                    <select
                                        id="feeType"
                                        class={control_class("form-select", controller.is_invalid(PaymentField::FeeType))}
                                        onchange={on_select(PaymentField::FeeType)}
                                        disabled={submitting}
                                    >
                                        <option value="" selected={form.fee_type.is_empty()}>{"Select fee type"}</option>
                                        {if custom_fee_type {
                                            html! { <option value={form.fee_type.clone()} selected={true}>{&form.fee_type}</option> }
                                        } else { html! {} }}
                                        {for FEE_TYPES.iter().map(|fee_type| html! {
                                            <option value={*fee_type} selected={form.fee_type == *fee_type}>{*fee_type}</option>
                                        })}
                                    </select>
                                    {feedback(controller, PaymentField::FeeType)}
                                </div>

                                <div class="mb-3">
                                    <label for="amount" class="form-label">{"Amount (₹)"}</label>
                                    <input
                                        type="number"
                                        id="amount"
                                        min="1"
                                        step="1"
                                        class={control_class("form-control", controller.is_invalid(PaymentField::Amount))}
                                        value={form.amount_input.clone()}
                                        oninput={on_input(PaymentField::Amount)}
                                        disabled={submitting}
                                    />
                                    {feedback(controller, PaymentField::Amount)}
                                </div>

                                <div class="mb-3">
                                    <label for="paymentMethod" class="form-label">{"Payment Method"}</label>
                                    <select
                                        id="paymentMethod"
                                        class={control_class("form-select", controller.is_invalid(PaymentField::PaymentMethod))}
                                        onchange={on_select(PaymentField::PaymentMethod)}
                                        disabled={submitting}
                                    >
                                        <option value="" selected={form.method.is_none()}>{"Select payment method"}</option>
                                        {for PaymentMethod::ALL.iter().map(|method| html! {
                                            <option value={method.value()} selected={form.method == Some(*method)}>{method.label()}</option>
                                        })}
                                    </select>
                                    {feedback(controller, PaymentField::PaymentMethod)}
                                </div>

                                <div id="cardDetailsContainer" style={detail.display_for(DetailGroup::Card)}>
                                    <div class="mb-3">
                                        <label for="cardNumber" class="form-label">{"Card Number"}</label>
                                        <input type="text" id="cardNumber" class="form-control" placeholder="1234 5678 9012 3456" autocomplete="cc-number" />
                                    </div>
                                    <div class="row">
                                        <div class="col-md-6 mb-3">
                                            <label for="cardExpiry" class="form-label">{"Expiry Date"}</label>
                                            <input type="text" id="cardExpiry" class="form-control" placeholder="MM/YY" autocomplete="cc-exp" />
                                        </div>
                                        <div class="col-md-6 mb-3">
                                            <label for="cardCvv" class="form-label">{"CVV"}</label>
                                            <input type="password" id="cardCvv" class="form-control" placeholder="123" autocomplete="cc-csc" />
                                        </div>
                                    </div>
                                </div>

                                <div id="upiDetailsContainer" style={detail.display_for(DetailGroup::Upi)}>
                                    <div class="mb-3">
                                        <label for="upiId" class="form-label">{"UPI ID"}</label>
                                        <input type="text" id="upiId" class="form-control" placeholder="name@bank" />
                                    </div>
                                </div>

                                <div id="bankDetailsContainer" style={detail.display_for(DetailGroup::Bank)}>
                                    <div class="mb-3">
                                        <label for="accountHolder" class="form-label">{"Account Holder Name"}</label>
                                        <input type="text" id="accountHolder" class="form-control" />
                                    </div>
                                    <div class="mb-3">
                                        <label for="transactionReference" class="form-label">{"Transaction Reference"}</label>
                                        <input type="text" id="transactionReference" class="form-control" />
                                    </div>
                                </div>
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" onclick={on_close_click} disabled={submitting}>
                                    {"Cancel"}
                                </button>
                                <button type="submit" id="payButton" class="btn btn-success" disabled={submitting}>
                                    {if submitting {
                                        html! {
                                            <>
                                                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                                                {" Processing..."}
                                            </>
                                        }
                                    } else {
                                        html! { {"Pay Now"} }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
