//! Fuzz target for column catalog CSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the catalog parser,
//! checking for panics, crashes, or hangs.
//!
//! Run with:
//!   cargo +nightly fuzz run columns_csv_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use morpho::model::io_columns_csv::from_columns_csv_slice;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 10MB is generous for a column catalog.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_columns_csv_slice(data);
});
