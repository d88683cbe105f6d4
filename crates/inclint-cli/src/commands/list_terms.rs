//! List terms command implementation.

use inclint_core::TermDictionary;

/// Runs the list-terms command.
pub fn run() {
    let dictionary = TermDictionary::builtin();

    println!("Built-in term dictionary ({} entries):\n", dictionary.len());
    println!("{:<16} Suggested replacement", "Term");
    println!("{}", "-".repeat(50));

    for entry in dictionary.entries() {
        println!("{:<16} {}", entry.term, entry.suggestion);
    }

    println!("\nTerms are matched case-insensitively as substrings,");
    println!("in the order listed (first match wins per unit).");
    println!("\nOverride the table with [[terms]] entries in inclint.toml.");
}
