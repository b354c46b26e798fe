//! Plain text report for terminals

use crate::analyzer::AnalysisResult;

/// Formats an analysis result as aligned plain text
pub fn format_text_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("URL:            {}\n", result.url));
    out.push_str(&format!("Title:          {}\n", result.title));
    out.push_str(&format!("HTML version:   {}\n", result.html_version));

    let headings = if result.headings.is_empty() {
        "none".to_string()
    } else {
        result
            .headings
            .iter()
            .map(|(tag, count)| format!("{}={}", tag, count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("Headings:       {}\n", headings));

    out.push_str(&format!("Internal links: {}\n", result.internal_links));
    out.push_str(&format!("External links: {}\n", result.external_links));
    out.push_str(&format!("Inaccessible:   {}\n", result.inaccessible_links));
    out.push_str(&format!(
        "Login form:     {}\n",
        if result.has_login_form { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "Analyzed at:    {}\n",
        result.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out
}
