pub mod fee_structure_card;
pub mod fee_structure_filters;
pub mod fee_structure_form;
pub mod fee_structures_page;
pub mod header;
pub mod payment_modal;
pub mod payments_page;
pub mod profile_view;
pub mod toast_container;
