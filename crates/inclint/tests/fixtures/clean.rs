// A fixture file with only inclusive terminology.

fn resolve_allowlist() -> Vec<String> {
    Vec::new()
}

fn main() {
    let entries = resolve_allowlist();
    println!("{} allowlist entries", entries.len());
}
