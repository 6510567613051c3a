use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen_futures::spawn_local;
use shared::{format_currency, samples::sample_fee_records, FeeRecord, PaymentContext};
use crate::hooks::use_payment_modal::{RecordPayment, UsePaymentModalActions};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PaymentsPageProps {
    pub api_client: ApiClient,
    pub currency: String,
    pub payment_actions: UsePaymentModalActions,
}

#[function_component(PaymentsPage)]
pub fn payments_page(props: &PaymentsPageProps) -> Html {
    let records = use_state(Vec::<FeeRecord>::new);
    let loading = use_state(|| true);

    {
        let records = records.clone();
        let loading = loading.clone();
        let api_client = props.api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_fee_records().await {
                    Ok(list) => records.set(list),
                    Err(e) => {
                        Logger::warn_with_component("payments", &format!("Using sample fee records: {}", e));
                        records.set(sample_fee_records());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_make_payment = {
        let open_blank = props.payment_actions.open_blank.clone();
        Callback::from(move |_: MouseEvent| open_blank.emit(()))
    };

    let currency = props.currency.clone();
    let render_row = |record: &FeeRecord| {
        let on_pay_now = {
            let open_for_record = props.payment_actions.open_for_record.clone();
            let payment = RecordPayment {
                student_id: record.student_id.clone(),
                student_name: record.student_name.clone(),
                context: PaymentContext::new(record.fee_type.clone(), record.balance, record.student_name.clone()),
            };
            Callback::from(move |_: MouseEvent| open_for_record.emit(payment.clone()))
        };
        let on_record_payment = {
            let open_for_student = props.payment_actions.open_for_student.clone();
            let student = (record.student_id.clone(), record.student_name.clone());
            Callback::from(move |_: MouseEvent| open_for_student.emit(student.clone()))
        };

        html! {
            <tr key={record.id}>
                <td>{&record.student_id}</td>
                <td>{&record.student_name}</td>
                <td>{&record.fee_type}</td>
                <td>{&record.academic_year}{" / "}{&record.term}</td>
                <td class="text-end">{format_currency(record.total_amount, &currency)}</td>
                <td class="text-end">{format_currency(record.paid_amount, &currency)}</td>
                <td class="text-end">{format_currency(record.balance, &currency)}</td>
                <td><span class={record.status.badge_class()}>{record.status.label()}</span></td>
                <td class="text-nowrap">
                    {if !record.is_settled() {
                        html! {
                            <button type="button" class="btn btn-sm btn-success me-1 pay-now-btn" onclick={on_pay_now}>
                                {"Pay Now"}
                            </button>
                        }
                    } else { html! {} }}
                    <button type="button" class="btn btn-sm btn-outline-primary record-payment-btn" onclick={on_record_payment}>
                        {"Record Payment"}
                    </button>
                </td>
            </tr>
        }
    };

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="mb-0">{"Payments"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_make_payment}>
                    <i class="fas fa-money-bill me-1"></i>{" Make Payment"}
                </button>
            </div>

            {if *loading {
                html! {
                    <div class="text-center py-5">
                        <div class="spinner-border" role="status"></div>
                    </div>
                }
            } else if records.is_empty() {
                html! { <div class="alert alert-info">{"No fee records found."}</div> }
            } else {
                html! {
                    <div class="table-responsive">
                        <table class="table table-hover align-middle">
                            <thead>
                                <tr>
                                    <th>{"Student ID"}</th>
                                    <th>{"Name"}</th>
                                    <th>{"Fee Type"}</th>
                                    <th>{"Period"}</th>
                                    <th class="text-end">{"Total"}</th>
                                    <th class="text-end">{"Paid"}</th>
                                    <th class="text-end">{"Balance"}</th>
                                    <th>{"Status"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for records.iter().map(render_row)}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </div>
    }
}
