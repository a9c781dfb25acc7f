//! Exports the sample `Animals` snapshot in every format and prints a summary.
//!
//! Run with: `cargo run --example dump_snapshot -p eidos-export`

fn main() {
    let snapshot = eidos_export::fixtures::animals();

    println!("{} ({})", snapshot.name, snapshot.namespace);
    println!("  Concepts:       {}", snapshot.concepts.len());
    println!("  Relationships:  {}", snapshot.relationships.len());
    println!("  Restrictions:   {}", snapshot.restriction_count());
    println!("  Individuals:    {}", snapshot.individuals.len());
    println!();

    let outputs = match eidos_export::export_all(&snapshot) {
        Ok(outputs) => outputs,
        Err(e) => {
            eprintln!("export failed: {e}");
            std::process::exit(1);
        }
    };

    for (format, text) in &outputs {
        println!(
            "  {:10} {:22} {:>6} bytes",
            format.to_string(),
            format.media_type(),
            text.len()
        );
    }

    // Show the Turtle output in full; it is the most readable.
    if let Some((_, turtle)) = outputs.first() {
        println!();
        println!("{turtle}");
    }
}
