pub mod items;
pub mod price;
