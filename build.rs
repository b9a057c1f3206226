//! Build script to generate the embedded lyrics corpus
//!
//! Reads the lyrics file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_lyric_list(
        "data/lyrics.txt",
        &Path::new(&out_dir).join("lyrics.rs"),
        "LYRICS",
        "Default lyrics corpus",
    );

    // Rebuild if the corpus changes
    println!("cargo:rerun-if-changed=data/lyrics.txt");
}

fn generate_lyric_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated lyrics corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} lines)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} lines)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        // Debug formatting escapes quotes and backslashes
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
