pub mod booking_modal;
pub mod contact_modal;
pub mod faq_modal;
pub mod footer;
pub mod gallery_modal;
pub mod header;
pub mod modal;
pub mod overview_panel;
pub mod photo_section;
pub mod progress_bar;
pub mod weather_widget;
