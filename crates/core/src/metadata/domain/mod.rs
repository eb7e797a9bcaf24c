pub mod field;
pub mod record;
pub mod tag;
pub mod validation;
pub mod value;
