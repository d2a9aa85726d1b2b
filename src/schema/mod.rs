pub mod category;
pub mod element;
pub mod feature;
