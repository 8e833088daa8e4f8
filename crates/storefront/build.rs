//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so templates can link a file name that
//! changes whenever the stylesheet does.

use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the SHA-256 digest kept in the file name.
const FINGERPRINT_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        std::env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let stylesheet = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", stylesheet.display());

    match fingerprint_stylesheet(&stylesheet, &manifest_dir.join("static/css/derived")) {
        Ok(fingerprint) => println!("cargo:rustc-env=CSS_HASH={fingerprint}"),
        Err(e) => {
            println!("cargo:warning=Stylesheet not fingerprinted: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}

/// Copies the stylesheet to `{out_dir}/main.{fingerprint}.css` and returns
/// the fingerprint.
fn fingerprint_stylesheet(stylesheet: &Path, out_dir: &Path) -> io::Result<String> {
    let content = std::fs::read(stylesheet)?;
    let fingerprint: String = format!("{:x}", Sha256::digest(&content))
        .chars()
        .take(FINGERPRINT_LEN)
        .collect();

    std::fs::create_dir_all(out_dir)?;
    std::fs::write(out_dir.join(format!("main.{fingerprint}.css")), &content)?;
    Ok(fingerprint)
}
