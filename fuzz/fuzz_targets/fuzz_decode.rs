#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any record that decodes must encode again at its own version.
    if let Ok(record) = vmeta_core::decode(data) {
        let version = u16::from_be_bytes([data[0], data[1]]);
        let bytes = vmeta_core::encode(&record, version).expect("decoded record re-encodes");
        assert_eq!(vmeta_core::decode(&bytes).as_ref(), Ok(&record));
    }
});
