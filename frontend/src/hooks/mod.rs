pub mod use_payment_modal;
pub mod use_toasts;
pub mod use_user_profile;
