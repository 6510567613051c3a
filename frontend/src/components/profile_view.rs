use yew::prelude::*;
use shared::User;

#[derive(Properties, PartialEq)]
pub struct ProfileViewProps {
    pub user: Option<User>,
    pub loading: bool,
}

fn info_item(label: &str, value: &str) -> Html {
    html! {
        <div class="profile-info-item d-flex justify-content-between border-bottom py-2">
            <span class="profile-info-label text-muted">{label}</span>
            <span class="profile-info-value">{value}</span>
        </div>
    }
}

#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    if props.loading {
        return html! {
            <div class="container py-5 text-center">
                <div class="spinner-border" role="status"></div>
            </div>
        };
    }

    let Some(user) = &props.user else {
        return html! {
            <div class="container py-4">
                <div class="alert alert-warning">{"No user is signed in."}</div>
            </div>
        };
    };

    html! {
        <div class="container py-4">
            <div class="card shadow-sm mx-auto" style="max-width: 32rem;">
                <div class="card-body text-center profile-header">
                    <img
                        id="profileAvatar"
                        src={user.avatar_url(150)}
                        alt={user.name_or_default().to_string()}
                        class="rounded-circle mb-3 profile-avatar"
                        width="150"
                        height="150"
                    />
                    <h2 id="profileName">{user.name_or_default()}</h2>
                    <p id="profileRole" class="text-muted mb-1">{user.role_or_default()}</p>
                    <p id="profileEmail" class="mb-0">
                        <i class="fas fa-envelope me-2"></i>{user.email_or("No email provided")}
                    </p>
                </div>
                <div class="card-body border-top">
                    <h5 class="mb-3">{"Personal Information"}</h5>
                    {info_item("Full Name", user.full_name_or("Not provided"))}
                    {info_item("Email", user.email_or("Not provided"))}
                </div>
            </div>
        </div>
    }
}
