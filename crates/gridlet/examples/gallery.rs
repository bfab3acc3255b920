//! Renders one small sample table per registered border style and lays
//! the results out as cells of an outer table.
//!
//! Run with `cargo run --example gallery`.

use gridlet::{glyph_names, GapMode, LayoutError, Options, Table};

fn main() -> Result<(), LayoutError> {
    let sample = vec![vec!["I", "love"], vec!["grid", "lets"]];

    let mut rows = vec![vec!["Name".to_string(), "Demonstration".to_string()]];
    for name in glyph_names() {
        let demo = Table::new(
            sample.clone(),
            &Options::new()
                .size(20)
                .header(true)
                .align("c")
                .border(name),
        )?;
        rows.push(vec![name.to_string(), demo.to_string()]);
    }

    let gallery = Table::new(
        rows,
        &Options::new()
            .size(38)
            .align("c,l")
            .border("none")
            .ratios("40")
            .gap(GapMode::Small),
    )?;
    println!("{}", gallery);
    Ok(())
}
