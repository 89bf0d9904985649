//! Fuzz target for reference cue configuration JSON parsing.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use morpho::calc::reference::from_reference_json_slice;
use morpho::model::io_columns_csv::from_columns_csv_str;
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
DF_x,,pixels,false,point,false,false
DF_y,,pixels,false,point,false,false
",
        )
        .expect("static catalog parses")
    })
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_reference_json_slice(data, catalog());
});
