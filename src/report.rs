use crate::compare::Comparison;

/// Human-readable report: conclusion first, then each pair with both excerpts
pub fn render_text(comparison: &Comparison) -> String {
    let mut out = String::from("\n=== CONSOLIDATED TECHNICAL CONCLUSION ===\n\n");
    if comparison.conclusion.is_empty() {
        out.push_str("(generation skipped)");
    } else {
        out.push_str(&comparison.conclusion);
    }
    out.push('\n');

    out.push_str("\n=== TOP SIMILAR PAIRS ===\n\n");
    for (i, pair) in comparison.pairs.iter().enumerate() {
        out.push_str(&format!(
            "\n--- PAIR {} | Score: {:.4} ---\n",
            i + 1,
            pair.score
        ));
        out.push_str(&format!("\n[File A]\n{}\n", pair.excerpt_a));
        out.push_str(&format!("\n[File B]\n{}\n", pair.excerpt_b));
    }

    out
}

pub fn render_json(comparison: &Comparison) -> serde_json::Result<String> {
    serde_json::to_string_pretty(comparison)
}
