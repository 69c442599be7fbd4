use crate::models::RichText;

/// Concatenate styled text runs into inline Markdown.
///
/// Markup is applied innermost first: code, bold, italic, strikethrough, and
/// finally the link around everything else. Bold plus italic therefore comes
/// out as `***text***`. Plain text is not escaped.
pub fn format_rich_text(runs: &[RichText]) -> String {
    let mut result = String::new();
    for run in runs {
        result.push_str(&format_run(run));
    }
    result
}

fn format_run(run: &RichText) -> String {
    let mut text = run.plain_text.clone();

    if let Some(annotations) = run.annotations {
        if annotations.code {
            text = format!("`{text}`");
        }
        if annotations.bold {
            text = format!("**{text}**");
        }
        if annotations.italic {
            text = format!("*{text}*");
        }
        if annotations.strikethrough {
            text = format!("~~{text}~~");
        }
    }

    match run.href.as_deref() {
        Some(href) if !href.is_empty() => format!("[{text}]({href})"),
        _ => text,
    }
}
