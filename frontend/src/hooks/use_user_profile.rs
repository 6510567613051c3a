use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{User, UserSession};
use crate::hooks::use_toasts::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::LocalStore;

/// Where the displayed profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Cache,
    Api,
    Fallback,
}

#[derive(Clone, PartialEq)]
pub struct UserProfileState {
    pub user: Option<User>,
    pub loading: bool,
    pub source: Option<ProfileSource>,
}

impl Default for UserProfileState {
    fn default() -> Self {
        Self {
            user: None,
            loading: false,
            source: None,
        }
    }
}

pub struct UseUserProfileResult {
    pub state: UserProfileState,
    pub actions: UseUserProfileActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUserProfileActions {
    pub logout: Callback<()>,
}

fn cache_user(session: &UserSession<LocalStore>, user: &User) {
    if let Err(e) = session.store_user(user) {
        Logger::warn_with_component("profile", &format!("Could not cache user data: {}", e));
    }
}

/// Notification shown once a profile load settles, whatever its source
pub fn loaded_notice() -> Notice {
    Notice::success("Profile", "Profile data loaded successfully")
}

/// Cached user profile, fetched from the API on a cache miss.
///
/// `notify` receives one "loaded" notice per completed load.
#[hook]
pub fn use_user_profile(
    api_client: &ApiClient,
    user_id: i64,
    notify: Callback<Notice>,
) -> UseUserProfileResult {
    let profile_state = use_state(UserProfileState::default);

    use_effect_with(user_id, {
        let profile_state = profile_state.clone();
        let api_client = api_client.clone();

        move |user_id| {
            let session = UserSession::new(LocalStore);
            if let Some(user) = session.current_user() {
                profile_state.set(UserProfileState {
                    user: Some(user),
                    loading: false,
                    source: Some(ProfileSource::Cache),
                });
                notify.emit(loaded_notice());
            } else {
                profile_state.set(UserProfileState {
                    user: None,
                    loading: true,
                    source: None,
                });

                let user_id = *user_id;
                spawn_local(async move {
                    let (user, source) = match api_client.get_user(user_id).await {
                        Ok(user) => (user, ProfileSource::Api),
                        Err(e) => {
                            Logger::error_with_component(
                                "profile",
                                &format!("Error fetching profile data: {}", e),
                            );
                            (User::fallback_admin(), ProfileSource::Fallback)
                        }
                    };
                    cache_user(&session, &user);
                    profile_state.set(UserProfileState {
                        user: Some(user),
                        loading: false,
                        source: Some(source),
                    });
                    notify.emit(loaded_notice());
                });
            }
            || ()
        }
    });

    let logout = {
        let profile_state = profile_state.clone();
        use_callback((), move |_: (), _| {
            UserSession::new(LocalStore).logout();
            Logger::info_with_component("auth", "Cleared cached user data");
            profile_state.set(UserProfileState::default());
        })
    };

    UseUserProfileResult {
        state: (*profile_state).clone(),
        actions: UseUserProfileActions { logout },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_toasts::ToastKind;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_loaded_notice_is_success() {
        let notice = loaded_notice();
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(notice.message, "Profile data loaded successfully");
    }

    #[wasm_bindgen_test]
    fn test_default_state_is_not_loading() {
        let state = UserProfileState::default();
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert_eq!(state.source, None);
    }
}
