use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

/// IEC 61966-2-1 decode for one normalized channel value.
fn decode_gamma(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let mut table = String::from(
        "/// Linear light for every 8-bit sRGB channel value, indexed by the byte.\n\
         pub static SRGB8_TO_LINEAR: [f64; 256] = [\n",
    );
    for row in (0u16..256).collect::<Vec<_>>().chunks(4) {
        table.push_str("   ");
        for &byte in row {
            let _ = write!(table, " {:?},", decode_gamma(f64::from(byte) / 255.0));
        }
        table.push('\n');
    }
    table.push_str("];\n");

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    fs::write(out.join("gamma_lut.rs"), table).expect("write gamma_lut.rs");

    println!("cargo::rerun-if-changed=build.rs");
}
