//! Cart view controller

pub mod controller;
pub mod events;

pub use controller::{CartController, CartOutcome};
pub use events::{CartEvent, Notice, NoticeLevel};
