pub mod byte_reader;
pub mod byte_writer;
pub mod constants;
pub mod fixed_point;
