pub mod actions;
pub mod panel;

pub use panel::{listen, render, FreeTextComponents, FreeTextPanel};
