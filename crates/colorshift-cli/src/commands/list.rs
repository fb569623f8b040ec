//! Transform listing.

use anyhow::Result;
use colorshift_color::TransformKind;

/// Prints every transform with its suffix and inverse.
pub fn run() -> Result<()> {
    println!("{:<16} {:<14} INVERSE", "TRANSFORM", "SUFFIX");
    for kind in TransformKind::ALL {
        let inverse = kind.inverse().map_or("-", |k| k.name());
        println!("{:<16} {:<14} {}", kind.name(), kind.suffix(), inverse);
    }
    Ok(())
}
