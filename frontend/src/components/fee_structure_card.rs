use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{format_currency, FeeStructureSummary, PaymentContext};

#[derive(Properties, PartialEq)]
pub struct FeeStructureCardProps {
    pub structure: FeeStructureSummary,
    pub currency: String,
    pub on_pay: Callback<PaymentContext>,
}

#[function_component(FeeStructureCard)]
pub fn fee_structure_card(props: &FeeStructureCardProps) -> Html {
    let structure = &props.structure;
    let total = structure.total();

    let on_pay_click = {
        let on_pay = props.on_pay.clone();
        let context = PaymentContext::new(structure.name.clone(), total, structure.branch.clone());
        Callback::from(move |_: MouseEvent| on_pay.emit(context.clone()))
    };

    html! {
        <div class="col-md-6 mb-4 fee-structure-card" data-academic-year={structure.academic_year.clone()} data-branch={structure.branch.clone()}>
            <div class="card h-100 shadow-sm">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{&structure.name}</h5>
                    <span class="badge bg-primary">{&structure.branch}</span>
                </div>
                <div class="card-body">
                    <p class="text-muted">{&structure.description}</p>
                    <p class="small mb-2">{"Academic Year: "}{&structure.academic_year}</p>
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{"Component"}</th>
                                <th>{"Frequency"}</th>
                                <th class="text-end">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for structure.items.iter().map(|item| html! {
                                <tr>
                                    <td>{&item.name}</td>
                                    <td>{item.frequency.map(|f| f.label()).unwrap_or("-")}</td>
                                    <td class="text-end">{format_currency(item.amount, &props.currency)}</td>
                                </tr>
                            })}
                        </tbody>
                        <tfoot>
                            <tr class="fw-bold">
                                <td colspan="2">{"Annual Total"}</td>
                                <td class="text-end">{format_currency(total, &props.currency)}</td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
                <div class="card-footer text-end">
                    <button type="button" class="btn btn-success pay-now-btn" onclick={on_pay_click}>
                        <i class="fas fa-credit-card me-1"></i>{" Pay Now"}
                    </button>
                </div>
            </div>
        </div>
    }
}
