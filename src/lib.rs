pub mod catalog;
pub mod clock;
pub mod fade;
pub mod motion;
pub mod overlay;
pub mod site;
