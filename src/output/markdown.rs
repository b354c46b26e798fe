//! Markdown report generation

use crate::analyzer::AnalysisResult;

/// Formats an analysis result as markdown
///
/// # Arguments
///
/// * `result` - The analysis result
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(result: &AnalysisResult) -> String {
    let mut md = String::new();

    md.push_str("# Web-Lens Page Report\n\n");

    // Page metadata
    md.push_str("## Page Information\n\n");
    md.push_str(&format!("- **URL**: {}\n", result.url));
    if result.title.is_empty() {
        md.push_str("- **Title**: _(none)_\n");
    } else {
        md.push_str(&format!("- **Title**: {}\n", escape_inline(&result.title)));
    }
    md.push_str(&format!("- **HTML Version**: {}\n", result.html_version));
    md.push_str(&format!(
        "- **Login Form**: {}\n",
        if result.has_login_form { "yes" } else { "no" }
    ));
    md.push_str(&format!(
        "- **Analyzed At**: {}\n\n",
        result.analyzed_at.to_rfc3339()
    ));

    // Headings table
    md.push_str("## Headings\n\n");
    if result.headings.is_empty() {
        md.push_str("_No headings found._\n\n");
    } else {
        md.push_str("| Tag | Count |\n");
        md.push_str("|-----|-------|\n");
        for (tag, count) in &result.headings {
            md.push_str(&format!("| {} | {} |\n", tag, count));
        }
        md.push('\n');
    }

    // Links
    md.push_str("## Links\n\n");
    md.push_str(&format!("- **Internal**: {}\n", result.internal_links));
    md.push_str(&format!("- **External**: {}\n", result.external_links));
    md.push_str(&format!(
        "- **Inaccessible**: {}\n",
        result.inaccessible_links
    ));

    md
}

/// Escapes characters that markdown would treat as formatting
fn escape_inline(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
