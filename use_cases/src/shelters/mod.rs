pub mod classification;
pub mod collection;
pub mod edit_shelter;
pub mod list_shelters;
pub mod selection;
