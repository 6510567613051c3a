use yew::prelude::*;
use crate::hooks::use_toasts::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div id="toastContainer" class="toast-container position-fixed bottom-0 end-0 p-3">
            {for props.toasts.iter().map(|toast| {
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id} class="toast show" role="alert" aria-live="assertive" aria-atomic="true">
                        <div class={toast.kind.header_class()}>
                            <strong class="me-auto">{&toast.title}</strong>
                            <button type="button" class="btn-close btn-close-white" aria-label="Close" onclick={on_close}></button>
                        </div>
                        <div class="toast-body">
                            {&toast.message}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
