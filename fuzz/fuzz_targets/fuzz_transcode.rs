#![no_main]

use libfuzzer_sys::fuzz_target;
use vmeta_core::{BinaryCodec, RecordCodec};

fuzz_target!(|data: &[u8]| {
    let Some((&target, bytes)) = data.split_first() else {
        return;
    };
    let _ = BinaryCodec::new().transcode(bytes, u16::from(target % 3));
});
