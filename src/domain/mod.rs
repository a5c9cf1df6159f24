// Domain layer - Dashboard models with no I/O
pub mod dashboard;
pub mod discharge;
pub mod panel;
pub mod reading;
pub mod weather;
