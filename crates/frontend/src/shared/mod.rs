pub mod api_utils;
pub mod client_log;
pub mod clock;
pub mod components;
pub mod confirm;
pub mod icons;
pub mod mock_data;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod record_form;
