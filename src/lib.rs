pub mod config;
pub mod folders;
pub mod gui;
pub mod paths;
pub mod session;
pub mod translator;
