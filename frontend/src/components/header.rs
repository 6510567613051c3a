use yew::prelude::*;
use web_sys::MouseEvent;
use shared::User;
use crate::hooks::use_user_profile::UseUserProfileActions;

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    FeeStructures,
    Payments,
    Profile,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::FeeStructures, Page::Payments, Page::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Page::FeeStructures => "Fee Structures",
            Page::Payments => "Payments",
            Page::Profile => "Profile",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_page: Page,
    pub on_navigate: Callback<Page>,
    pub user: Option<User>,
    pub user_loading: bool,
    pub profile_actions: UseUserProfileActions,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_logout = {
        let logout = props.profile_actions.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <nav class="navbar navbar-expand navbar-dark bg-primary">
            <div class="container">
                <span class="navbar-brand">{"School Fees"}</span>
                <ul class="navbar-nav me-auto">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let on_click = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(page);
                            })
                        };
                        let class = if page == props.active_page { "nav-link active" } else { "nav-link" };
                        html! {
                            <li class="nav-item">
                                <a href="#" class={class} onclick={on_click}>{page.label()}</a>
                            </li>
                        }
                    })}
                </ul>
                <div class="dropdown">
                    {if props.user_loading {
                        html! { <span class="navbar-text">{"Loading..."}</span> }
                    } else if let Some(user) = &props.user {
                        html! {
                            <>
                                <a href="#" id="userDropdown" class="nav-link dropdown-toggle text-white d-flex align-items-center" onclick={on_toggle_menu}>
                                    <img src={user.avatar_url(32)} alt="" class="rounded-circle me-2" width="32" height="32" />
                                    <span id="userName">{user.display_name()}</span>
                                </a>
                                {if *menu_open {
                                    html! {
                                        <ul class="dropdown-menu dropdown-menu-end show">
                                            <li class="dropdown-item-text">
                                                <div class="fw-bold">{user.display_name()}</div>
                                                <div class="small text-muted">{&user.email}</div>
                                                <div class="small text-muted">{user.role_or_default()}</div>
                                            </li>
                                            <li><hr class="dropdown-divider" /></li>
                                            <li>
                                                <a href="/logout" class="dropdown-item" onclick={on_logout}>{"Logout"}</a>
                                            </li>
                                        </ul>
                                    }
                                } else { html! {} }}
                            </>
                        }
                    } else {
                        html! { <a href="/login" class="btn btn-outline-light btn-sm">{"Login"}</a> }
                    }}
                </div>
            </div>
        </nav>
    }
}
