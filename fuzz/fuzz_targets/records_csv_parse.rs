//! Fuzz target for records CSV parsing.
//!
//! Record loading is tolerant by design, so any input should come back
//! as rows or a file-level error, never a panic or a hang.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use morpho::model::io_columns_csv::from_columns_csv_str;
use morpho::model::io_records_csv::from_records_csv_slice;
use morpho::model::ColumnCatalog;

fn catalog() -> &'static ColumnCatalog {
    static CATALOG: OnceLock<ColumnCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        from_columns_csv_str(
            "\
column_name,description,units,export,measurement_type,editable,is_metadata
Filename,,text,true,free form,false,true
SN_x,,pixels,false,point,false,false
SN_y,,pixels,false,point,false,false
Flagged,,boolean,true,free form,false,true
Notes,,editable text,true,free form,true,true
",
        )
        .expect("static catalog parses")
    })
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_records_csv_slice(data, catalog());
});
