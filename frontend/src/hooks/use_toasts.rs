use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    /// Bootstrap header colour classes
    pub fn header_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-header bg-success text-white",
            ToastKind::Info => "toast-header bg-info text-white",
            ToastKind::Warning => "toast-header bg-warning text-dark",
            ToastKind::Error => "toast-header bg-danger text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// A toast waiting to be shown
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: &str, message: &str) -> Self {
        Self { kind: ToastKind::Success, title: title.to_string(), message: message.to_string() }
    }

    pub fn info(title: &str, message: &str) -> Self {
        Self { kind: ToastKind::Info, title: title.to_string(), message: message.to_string() }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self { kind: ToastKind::Error, title: title.to_string(), message: message.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

pub struct UseToastsResult {
    pub toasts: Vec<Toast>,
    pub actions: UseToastsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseToastsActions {
    pub notify: Callback<Notice>,
    pub dismiss: Callback<u32>,
}

/// Toast notifications that dismiss themselves after `duration_ms`
#[hook]
pub fn use_toasts(duration_ms: u32) -> UseToastsResult {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let dismiss = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: u32, _| {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    let notify = {
        let dispatcher = list.dispatcher();
        let next_id = next_id.clone();
        use_callback(duration_ms, move |notice: Notice, duration_ms| {
            let id = {
                let mut counter = next_id.borrow_mut();
                let id = *counter;
                *counter = counter.wrapping_add(1);
                id
            };
            dispatcher.dispatch(ToastAction::Push(Toast {
                id,
                kind: notice.kind,
                title: notice.title,
                message: notice.message,
            }));

            let dispatcher = dispatcher.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    UseToastsResult {
        toasts: list.toasts.clone(),
        actions: UseToastsActions { notify, dismiss },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn toast(id: u32, title: &str) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            title: title.to_string(),
            message: String::new(),
        }
    }

    #[wasm_bindgen_test]
    fn test_push_appends_in_order() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(0, "A")))
            .reduce(ToastAction::Push(toast(1, "B")));
        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[wasm_bindgen_test]
    fn test_dismiss_removes_only_matching_toast() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(0, "A")))
            .reduce(ToastAction::Push(toast(1, "B")))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title, "B");
    }

    #[wasm_bindgen_test]
    fn test_header_classes() {
        assert_eq!(ToastKind::Success.header_class(), "toast-header bg-success text-white");
        assert_eq!(ToastKind::Error.header_class(), "toast-header bg-danger text-white");
    }
}
