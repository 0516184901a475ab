//! Page state module

mod forms;
mod nav;
mod presenter;
mod skill_bars;
mod theme;

pub use forms::*;
pub use nav::*;
pub use presenter::*;
pub use skill_bars::*;
pub use theme::*;
