// File: crates/column-render-skia/build.rs
// Summary: Links the Windows system libraries skia-safe's bundled ICU expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // ICU reads time zone data through RegOpenKeyExW / RegQueryInfoKeyW.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
