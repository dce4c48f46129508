//! Per-state view rendering

mod form;
mod hero;
mod loading;
mod result;

pub use form::{draw_form, FormFocus};
pub use hero::draw_hero;
pub use loading::{draw_loading, LOADING_MESSAGES, SPINNER_FRAMES};
pub use result::{draw_result, ResultViewState};
