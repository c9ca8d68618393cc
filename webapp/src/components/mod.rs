pub mod navigation;
pub mod social_modal;
pub mod transition;
