pub mod binary_codec;
pub mod field_layout;
