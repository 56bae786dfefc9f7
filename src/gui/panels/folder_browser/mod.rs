pub mod actions;
pub mod panel;

pub use panel::{listen, render, FolderBrowserComponents, FolderBrowserPanel};
