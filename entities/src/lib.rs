pub mod display;
pub mod hazards;
pub mod shelters;
pub mod warnings;
