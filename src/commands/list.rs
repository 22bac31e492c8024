use crate::cli::ListArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;

/// Matches the digest defaults so `list` previews what `digest` will process.
pub const DEFAULT_QUERY: &str = "is:unread newer_than:1d -category:promotions -category:social";

pub async fn run(ctx: &AppContext, args: ListArgs) -> AppResult<()> {
    if args.limit == 0 {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }

    let access_token = ctx.access_token().await?;
    let query = resolve_query(args.q.as_deref());
    let threads = ctx
        .gmail_client
        .list_threads(&access_token, args.limit, Some(&query))
        .await?;

    if ctx.output.mode() == OutputMode::Text {
        if threads.is_empty() {
            println!("0 threads");
            return Ok(());
        }

        for (index, thread) in threads.iter().enumerate() {
            println!("{}. {}", index + 1, thread.id);
            println!("   {}", format_preview(thread.snippet.as_deref()));

            if index + 1 < threads.len() {
                println!();
            }
        }

        return Ok(());
    }

    let text = format!("{} threads", threads.len());
    ctx.output.emit(&text, &threads)
}

fn resolve_query(user_query: Option<&str>) -> String {
    user_query
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string())
}

fn format_preview(snippet: Option<&str>) -> String {
    let snippet = snippet.unwrap_or("(no preview)");
    let decoded = html_escape::decode_html_entities(snippet).to_string();
    let compact = decoded.split_whitespace().collect::<Vec<_>>().join(" ");

    if compact.len() <= 120 {
        return compact;
    }

    let mut end = 120;
    while !compact.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &compact[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unread_last_day_query() {
        assert_eq!(resolve_query(None), DEFAULT_QUERY);
        assert_eq!(resolve_query(Some("  ")), DEFAULT_QUERY);
    }

    #[test]
    fn keeps_explicit_user_query() {
        assert_eq!(
            resolve_query(Some("from:alice@example.com")),
            "from:alice@example.com"
        );
    }

    #[test]
    fn formats_preview_with_truncation() {
        let input = Some(
            "this is a very long preview string that should be truncated at one hundred and twenty characters to keep list output compact and readable",
        );
        let preview = format_preview(input);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 123);
    }

    #[test]
    fn decodes_common_html_entities_in_preview() {
        let preview = format_preview(Some("I&#39;ve &amp; you&#x27;ve &lt;done&gt; this"));
        assert_eq!(preview, "I've & you've <done> this");
    }
}
