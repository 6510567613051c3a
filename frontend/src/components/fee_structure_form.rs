use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use shared::{format_currency, FeeStructureDraft, FeeStructureValidation, Frequency};
use crate::hooks::use_toasts::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::page;

/// Edits applied to the fee structure draft
pub enum DraftAction {
    SetName(String),
    SetAcademicYear(String),
    SetBranch(String),
    AddComponent,
    RemoveComponent(Uuid),
    ComponentName(Uuid, String),
    ComponentAmount(Uuid, String),
    ComponentFrequency(Uuid, String),
    AddInstallment,
    RemoveInstallment(Uuid),
    InstallmentName(Uuid, String),
    InstallmentAmount(Uuid, String),
    InstallmentDueDate(Uuid, String),
    Reset,
}

#[derive(Clone, PartialEq, Default)]
pub struct DraftState {
    pub draft: FeeStructureDraft,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = self.draft.clone();
        match action {
            DraftAction::SetName(value) => draft.name = value,
            DraftAction::SetAcademicYear(value) => draft.academic_year = value,
            DraftAction::SetBranch(value) => draft.branch = value,
            DraftAction::AddComponent => {
                draft.components.add();
            }
            DraftAction::RemoveComponent(id) => {
                draft.components.remove(id);
            }
            DraftAction::ComponentName(id, value) => draft.components.set_name(id, &value),
            DraftAction::ComponentAmount(id, value) => draft.components.set_amount(id, &value),
            DraftAction::ComponentFrequency(id, value) => draft.components.set_frequency(id, &value),
            DraftAction::AddInstallment => {
                draft.add_installment();
            }
            DraftAction::RemoveInstallment(id) => {
                draft.remove_installment(id);
            }
            DraftAction::InstallmentName(id, value) => {
                if let Some(row) = draft.installment_mut(id) {
                    row.name = value;
                }
            }
            DraftAction::InstallmentAmount(id, value) => {
                if let Some(row) = draft.installment_mut(id) {
                    row.amount_input = value;
                }
            }
            DraftAction::InstallmentDueDate(id, value) => {
                if let Some(row) = draft.installment_mut(id) {
                    row.due_date_input = value;
                }
            }
            DraftAction::Reset => draft.reset(),
        }
        Rc::new(DraftState { draft })
    }
}

#[derive(Properties, PartialEq)]
pub struct FeeStructureFormProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub currency: String,
    pub reload_delay_ms: u32,
    pub notify: Callback<Notice>,
    pub on_close: Callback<()>,
}

fn control_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} is-invalid", base)
    } else {
        base.to_string()
    }
}

fn feedback_style(invalid: bool) -> &'static str {
    if invalid { "display: block" } else { "display: none" }
}

#[function_component(FeeStructureForm)]
pub fn fee_structure_form(props: &FeeStructureFormProps) -> Html {
    let state = use_reducer(DraftState::default);
    let validation = use_state(|| Option::<FeeStructureValidation>::None);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(|| false);

    let text_input = |make: fn(String) -> DraftAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(make(input.value()));
        })
    };

    let row_input = |id: Uuid, make: fn(Uuid, String) -> DraftAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(make(id, input.value()));
        })
    };

    let on_add_component = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DraftAction::AddComponent))
    };

    let on_add_installment = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DraftAction::AddInstallment))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_submit = {
        let draft = state.draft.clone();
        let dispatcher = state.dispatcher();
        let validation = validation.clone();
        let submitting = submitting.clone();
        let in_flight = in_flight.clone();
        let api_client = props.api_client.clone();
        let notify = props.notify.clone();
        let on_close = props.on_close.clone();
        let reload_delay_ms = props.reload_delay_ms;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match draft.to_request() {
                Ok(request) => request,
                Err(failed) => {
                    validation.set(Some(failed));
                    return;
                }
            };
            validation.set(None);

            if *in_flight.borrow() {
                Logger::warn_with_component("fee-structures", "Ignored submit while another is in flight");
                return;
            }
            *in_flight.borrow_mut() = true;
            submitting.set(true);

            let dispatcher = dispatcher.clone();
            let submitting = submitting.clone();
            let in_flight = in_flight.clone();
            let api_client = api_client.clone();
            let notify = notify.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match api_client.create_fee_structure(&request).await {
                    Ok(()) => {
                        notify.emit(Notice::success("Success", "Fee structure created successfully!"));
                        dispatcher.dispatch(DraftAction::Reset);
                        on_close.emit(());
                        page::reload_after(reload_delay_ms);
                    }
                    Err(e) => {
                        Logger::error_with_component("fee-structures", &format!("Failed to create fee structure: {}", e));
                        notify.emit(Notice::error("Error", &e.to_string()));
                    }
                }
                *in_flight.borrow_mut() = false;
                submitting.set(false);
            });
        })
    };

    if !props.is_open {
        return html! {};
    }

    let draft = &state.draft;
    let checked = (*validation).clone().unwrap_or_default();
    let total = format_currency(draft.components.annual_total(), &props.currency);

    html! {
        <div class="modal-backdrop-custom">
            <div id="addFeeStructureModal" class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-lg modal-dialog-scrollable" onclick={on_modal_click}>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{"Add Fee Structure"}</h5>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close_click.clone()}></button>
                        </div>
                        <form id="feeStructureForm" novalidate={true} onsubmit={on_submit}>
                            <div class="modal-body">
                                <div class="row">
                                    <div class="col-md-6 mb-3">
                                        <label for="structureName" class="form-label">{"Structure Name"}</label>
                                        <input
                                            type="text"
                                            id="structureName"
                                            class={control_class("form-control", checked.missing_name)}
                                            value={draft.name.clone()}
                                            oninput={text_input(DraftAction::SetName)}
                                        />
                                        <div id="structureNameFeedback" class="invalid-feedback" style={feedback_style(checked.missing_name)}>
                                            {"Please enter a structure name."}
                                        </div>
                                    </div>
                                    <div class="col-md-3 mb-3">
                                        <label for="academicYear" class="form-label">{"Academic Year"}</label>
                                        <input
                                            type="text"
                                            id="academicYear"
                                            placeholder="2024-2025"
                                            class={control_class("form-control", checked.missing_academic_year)}
                                            value={draft.academic_year.clone()}
                                            oninput={text_input(DraftAction::SetAcademicYear)}
                                        />
                                        <div id="academicYearFeedback" class="invalid-feedback" style={feedback_style(checked.missing_academic_year)}>
                                            {"Please enter an academic year."}
                                        </div>
                                    </div>
                                    <div class="col-md-3 mb-3">
                                        <label for="branch" class="form-label">{"Branch"}</label>
                                        <input
                                            type="text"
                                            id="branch"
                                            placeholder="CSE"
                                            class={control_class("form-control", checked.missing_branch)}
                                            value={draft.branch.clone()}
                                            oninput={text_input(DraftAction::SetBranch)}
                                        />
                                        <div id="branchFeedback" class="invalid-feedback" style={feedback_style(checked.missing_branch)}>
                                            {"Please enter a branch."}
                                        </div>
                                    </div>
                                </div>

                                <h6 class="mt-2">{"Fee Components"}</h6>
                                <div id="feeComponents">
                                    {for draft.components.iter().enumerate().map(|(index, component)| {
                                        let id = component.id;
                                        let n = index + 1;
                                        let on_remove = {
                                            let dispatcher = state.dispatcher();
                                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(DraftAction::RemoveComponent(id)))
                                        };
                                        let on_frequency = {
                                            let dispatcher = state.dispatcher();
                                            Callback::from(move |e: Event| {
                                                let select: HtmlSelectElement = e.target_unchecked_into();
                                                dispatcher.dispatch(DraftAction::ComponentFrequency(id, select.value()));
                                            })
                                        };
                                        html! {
                                            <div key={id.to_string()} class="row mb-3 fee-component">
                                                <div class="col-md-4">
                                                    <label for={format!("componentName{}", n)} class="form-label">{"Component Name"}</label>
                                                    <input
                                                        type="text"
                                                        id={format!("componentName{}", n)}
                                                        placeholder="e.g., Tuition Fee"
                                                        class={control_class("form-control", checked.component_name_invalid(id))}
                                                        value={component.name.clone()}
                                                        oninput={row_input(id, DraftAction::ComponentName)}
                                                    />
                                                </div>
                                                <div class="col-md-3">
                                                    <label for={format!("componentAmount{}", n)} class="form-label">{"Amount (₹)"}</label>
                                                    <input
                                                        type="number"
                                                        id={format!("componentAmount{}", n)}
                                                        class={control_class("form-control", checked.component_amount_invalid(id))}
                                                        value={component.amount_input.clone()}
                                                        oninput={row_input(id, DraftAction::ComponentAmount)}
                                                    />
                                                </div>
                                                <div class="col-md-3">
                                                    <label for={format!("componentFrequency{}", n)} class="form-label">{"Frequency"}</label>
                                                    <select id={format!("componentFrequency{}", n)} class="form-select" onchange={on_frequency}>
                                                        {for Frequency::ALL.iter().map(|frequency| html! {
                                                            <option value={frequency.value()} selected={component.frequency == Some(*frequency)}>
                                                                {frequency.label()}
                                                            </option>
                                                        })}
                                                    </select>
                                                </div>
                                                <div class="col-md-2 d-flex align-items-end">
                                                    <button type="button" class="btn btn-outline-danger w-100 remove-component-btn" onclick={on_remove}>
                                                        <i class="fas fa-trash"></i>
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                                <div id="feeComponentsFeedback" class="invalid-feedback" style={feedback_style(checked.no_components)}>
                                    {"Please add at least one fee component."}
                                </div>
                                <button type="button" id="addComponentBtn" class="btn btn-outline-primary btn-sm mb-3" onclick={on_add_component}>
                                    <i class="fas fa-plus me-1"></i>{" Add Component"}
                                </button>

                                <div class="d-flex justify-content-between align-items-center border-top pt-2 mb-3">
                                    <span class="fw-bold">{"Annual Total"}</span>
                                    <strong id="totalAmount">{total}</strong>
                                </div>

                                <h6>{"Payment Schedule"}</h6>
                                <div id="paymentSchedule">
                                    {for draft.schedule.iter().enumerate().map(|(index, installment)| {
                                        let id = installment.id;
                                        let n = index + 1;
                                        let on_remove = {
                                            let dispatcher = state.dispatcher();
                                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(DraftAction::RemoveInstallment(id)))
                                        };
                                        html! {
                                            <div key={id.to_string()} class="row mb-3 payment-schedule-item">
                                                <div class="col-md-5">
                                                    <label for={format!("installmentName{}", n)} class="form-label">{"Installment Name"}</label>
                                                    <input
                                                        type="text"
                                                        id={format!("installmentName{}", n)}
                                                        placeholder="e.g., First Installment"
                                                        class="form-control"
                                                        value={installment.name.clone()}
                                                        oninput={row_input(id, DraftAction::InstallmentName)}
                                                    />
                                                </div>
                                                <div class="col-md-3">
                                                    <label for={format!("installmentAmount{}", n)} class="form-label">{"Amount (₹)"}</label>
                                                    <input
                                                        type="number"
                                                        id={format!("installmentAmount{}", n)}
                                                        class="form-control"
                                                        value={installment.amount_input.clone()}
                                                        oninput={row_input(id, DraftAction::InstallmentAmount)}
                                                    />
                                                </div>
                                                <div class="col-md-3">
                                                    <label for={format!("installmentDueDate{}", n)} class="form-label">{"Due Date"}</label>
                                                    <input
                                                        type="date"
                                                        id={format!("installmentDueDate{}", n)}
                                                        class="form-control"
                                                        value={installment.due_date_input.clone()}
                                                        oninput={row_input(id, DraftAction::InstallmentDueDate)}
                                                    />
                                                </div>
                                                <div class="col-md-1 d-flex align-items-end">
                                                    <button type="button" class="btn btn-outline-danger w-100 remove-installment-btn" onclick={on_remove}>
                                                        <i class="fas fa-trash"></i>
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                                <button type="button" id="addInstallmentBtn" class="btn btn-outline-primary btn-sm" onclick={on_add_installment}>
                                    <i class="fas fa-plus me-1"></i>{" Add Installment"}
                                </button>
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" onclick={on_close_click} disabled={*submitting}>
                                    {"Cancel"}
                                </button>
                                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                                    {if *submitting {
                                        html! {
                                            <>
                                                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                                                {" Processing..."}
                                            </>
                                        }
                                    } else {
                                        html! { {"Create Fee Structure"} }
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
