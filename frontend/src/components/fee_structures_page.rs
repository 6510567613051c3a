use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen_futures::spawn_local;
use shared::{samples::sample_fee_structures, FeeStructureFilter, FeeStructureSummary, PaymentContext};
use crate::components::fee_structure_card::FeeStructureCard;
use crate::components::fee_structure_filters::FeeStructureFilters;
use crate::components::fee_structure_form::FeeStructureForm;
use crate::hooks::use_toasts::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct FeeStructuresPageProps {
    pub api_client: ApiClient,
    pub currency: String,
    pub reload_delay_ms: u32,
    pub notify: Callback<Notice>,
    pub on_pay: Callback<PaymentContext>,
}

#[function_component(FeeStructuresPage)]
pub fn fee_structures_page(props: &FeeStructuresPageProps) -> Html {
    let structures = use_state(Vec::<FeeStructureSummary>::new);
    let loading = use_state(|| true);
    let filter = use_state(FeeStructureFilter::default);
    let show_form = use_state(|| false);

    {
        let structures = structures.clone();
        let loading = loading.clone();
        let api_client = props.api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_fee_structures().await {
                    Ok(list) => structures.set(list),
                    Err(e) => {
                        Logger::warn_with_component(
                            "fee-structures",
                            &format!("Using sample fee structures: {}", e),
                        );
                        structures.set(sample_fee_structures());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_apply = {
        let filter = filter.clone();
        Callback::from(move |next: FeeStructureFilter| filter.set(next))
    };

    let on_add_click = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };

    let on_form_close = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let visible = filter.apply(&structures);

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="mb-0">{"Fee Structures"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_add_click}>
                    <i class="fas fa-plus me-1"></i>{" Add Fee Structure"}
                </button>
            </div>

            <FeeStructureFilters structures={(*structures).clone()} on_apply={on_apply} />

            {if *loading {
                html! {
                    <div class="text-center py-5">
                        <div class="spinner-border" role="status"></div>
                    </div>
                }
            } else {
                html! {
                    <>
                        <div class="row">
                            {for visible.iter().map(|structure| html! {
                                <FeeStructureCard
                                    key={structure.id}
                                    structure={(*structure).clone()}
                                    currency={props.currency.clone()}
                                    on_pay={props.on_pay.clone()}
                                />
                            })}
                        </div>
                        <div id="noResultsMessage" class="alert alert-info" style={if visible.is_empty() { "display: block" } else { "display: none" }}>
                            {"No fee structures match the selected filters."}
                        </div>
                    </>
                }
            }}

            <FeeStructureForm
                is_open={*show_form}
                api_client={props.api_client.clone()}
                currency={props.currency.clone()}
                reload_delay_ms={props.reload_delay_ms}
                notify={props.notify.clone()}
                on_close={on_form_close}
            />
        </div>
    }
}
