pub mod field_element;
pub mod ring;
