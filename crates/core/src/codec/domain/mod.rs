pub mod codec_error;
pub mod format_version;
pub mod record_codec;
pub mod tag_table;
