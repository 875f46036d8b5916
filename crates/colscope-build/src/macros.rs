//! Build-script helper that runs scope codegen for a TOML config file.
//!
//! The path is resolved against `CARGO_MANIFEST_DIR`; output lands in
//! `OUT_DIR/scopes.rs` for `colscope::include_scopes!()`.
#[macro_export]
macro_rules! build {
    ($config:expr) => {{
        use std::{env::var, fs::File, io::Write, path::PathBuf};

        //
        // CARGO
        //

        let manifest_dir = var("CARGO_MANIFEST_DIR")?;
        let config_path = PathBuf::from(manifest_dir).join($config);

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", config_path.display());

        // Get the output directory set by Cargo
        let out_dir = var("OUT_DIR")?;

        //
        // SCOPE CODE
        //

        let output = ::colscope::build::generate_from_path(&config_path)?;

        // write the file
        let scopes_file = PathBuf::from(out_dir).join("scopes.rs");
        let mut file = File::create(scopes_file)?;
        file.write_all(output.as_bytes())?;
    }};
}
