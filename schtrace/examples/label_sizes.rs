//! Print screen font sizes for every label category at a few zoom levels.
//! Run with: cargo run --example label_sizes

use schtrace::prelude::*;

fn main() {
    for scale in [1.0, 10.0, 50.0, 100.0] {
        let transform = Matrix::scale(scale, -scale);
        println!("scale {}:", scale);
        for category in TextCategory::ALL {
            println!(
                "  {:<22} {:.3}",
                category.as_str(),
                screen_font_size(&transform, category)
            );
        }
    }
}
