// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and $x^2$ content.\n\n- Bullet point\n- [x] Done item\n1. Numbered\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| A | B |\n| --- | --- |\n| 1 | 2 |\n\n@youtube[https://youtu.be/dQw4w9WgXcQ]\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_quiz_markup(quizzes: usize, questions: usize) -> String {
    let mut content = String::new();

    for quiz in 0..quizzes {
        content.push_str(&format!("## Quiz {}\n\n@quiz[Topic {}]{{[\n", quiz, quiz));
        for q in 0..questions {
            let sep = if q + 1 == questions { "" } else { "," };
            // Raw LaTeX backslashes force the repair path.
            content.push_str(&format!(
                "  {{\"question\": \"What is \\sqrt{{{}}}?\", \"type\": \"single\", \"options\": [\"a\", \"b\"], \"correctAnswers\": [0]}}{}\n",
                q * q,
                sep
            ));
        }
        content.push_str("]}\n\n");
    }

    content
}
