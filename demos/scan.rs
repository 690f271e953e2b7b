//! Scans a small document and prints every token, one per line.
//!
//! Run with: `cargo run --example scan`

use jsonlex::Scanner;

fn main() {
    let input = r#"{"name": "Ada", "scores": [10, -2.5e3], "ok": true, "note": null}"#;

    println!("input:\n{input}\n");
    println!("tokens:");
    for token in Scanner::new(input) {
        println!("  {:<10} {:?}", token.kind.to_string(), token.text);
    }
}
