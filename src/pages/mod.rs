//! Page components for Hostboard.

mod dashboard;
mod hosts;

pub use dashboard::Dashboard;
pub use hosts::Hosts;
