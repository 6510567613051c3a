use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::fee_structures_page::FeeStructuresPage;
use components::header::{Header, Page};
use components::payment_modal::PaymentModal;
use components::payments_page::PaymentsPage;
use components::profile_view::ProfileView;
use components::toast_container::ToastContainer;
use hooks::use_payment_modal::use_payment_modal;
use hooks::use_toasts::use_toasts;
use hooks::use_user_profile::use_user_profile;
use services::api::ApiClient;
use services::config::{current_user_id, load_config};
use services::logging::{self, Logger};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = load_config();
        logging::init(config.debug_logging);
        Logger::debug_with_component("app", &format!("Loaded configuration: {:?}", config));
        config
    });
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });
    let active_page = use_state(|| Page::FeeStructures);

    let toasts = use_toasts(config.toast_duration_ms);
    let user_id = current_user_id().unwrap_or(config.default_user_id);
    let profile = use_user_profile(&api_client, user_id, toasts.actions.notify.clone());
    let payment = use_payment_modal(
        &api_client,
        toasts.actions.notify.clone(),
        config.payment_reload_delay_ms,
    );

    let on_navigate = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::FeeStructures => html! {
            <FeeStructuresPage
                api_client={(*api_client).clone()}
                currency={config.currency.clone()}
                reload_delay_ms={config.fee_structure_reload_delay_ms}
                notify={toasts.actions.notify.clone()}
                on_pay={payment.actions.open.clone()}
            />
        },
        Page::Payments => html! {
            <PaymentsPage
                api_client={(*api_client).clone()}
                currency={config.currency.clone()}
                payment_actions={payment.actions.clone()}
            />
        },
        Page::Profile => html! {
            <ProfileView
                user={profile.state.user.clone()}
                loading={profile.state.loading}
            />
        },
    };

    html! {
        <>
            <Header
                active_page={*active_page}
                on_navigate={on_navigate}
                user={profile.state.user.clone()}
                user_loading={profile.state.loading}
                profile_actions={profile.actions.clone()}
            />
            <main>
                {content}
            </main>
            <PaymentModal
                controller={payment.controller.clone()}
                currency={config.currency.clone()}
                actions={payment.actions.clone()}
            />
            <ToastContainer toasts={toasts.toasts.clone()} on_dismiss={toasts.actions.dismiss.clone()} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
