// ============================================================================
// Basic Usage Example
// ============================================================================

use rmb_uppercase::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== RMB Uppercase Example ===\n");

    // Converter that logs every event through tracing
    let converter = RmbConverter::new(ConverterConfig::standard(), Arc::new(LoggingEventHandler));

    // Selections as a host would hand them over; command-line arguments win
    let args: Vec<String> = std::env::args().skip(1).collect();
    let selections: Vec<String> = if args.is_empty() {
        ["0", "100", "1001", "10000", " 123.45 ", "5.06", "12.", "1e5"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        args
    };

    println!("Selections:");
    for text in &selections {
        match converter.populate_action(text) {
            Some(action) => println!(
                "  {:>14} -> {} ({})",
                format!("{:?}", text),
                action.title,
                action.after.as_str()
            ),
            None => println!("  {:>14} -> no action", format!("{:?}", text)),
        }
    }

    // Float entry point
    println!("\n=== number_to_chinese ===");
    for value in [0.5, 100_010_000.0, 987_654_321.09] {
        println!("  {} -> {}", value, number_to_chinese(value));
    }

    // Cheque preset
    println!("\n=== Cheque Style ===");
    let cheque = RmbConverterBuilder::cheque_style().build_silent();
    if let Some(action) = cheque.populate_action("2000") {
        println!("  2000 -> {} ({})", action.title, action.after.as_str());
    }
}
