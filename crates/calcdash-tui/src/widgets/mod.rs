//! Small reusable widgets.

pub mod result_card;
