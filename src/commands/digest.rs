use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::cli::DigestArgs;
use crate::context::AppContext;
use crate::digest::{self, render};
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;
use crate::summarize::Summarizer;

use super::list::DEFAULT_QUERY;

pub async fn run(ctx: &AppContext, args: DigestArgs) -> AppResult<()> {
    if args.limit == 0 {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }

    let access_token = ctx.access_token().await?;
    let query = args
        .q
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .unwrap_or(DEFAULT_QUERY);

    let threads = ctx
        .gmail_client
        .list_threads(&access_token, args.limit, Some(query))
        .await?;

    if threads.is_empty() {
        return ctx.output.emit(
            "no unread emails in the last 24 hours",
            &Vec::<digest::DigestItem>::new(),
        );
    }

    let summarizer = Summarizer::from_settings(&ctx.settings);
    if summarizer.is_none() {
        eprintln!("no groq_api_key configured; digest will use excerpts instead of summaries");
    }

    let mut items = Vec::new();
    for entry in &threads {
        let thread = ctx.gmail_client.get_thread(&entry.id, &access_token).await?;
        let text = digest::thread_text(&thread);
        if text.is_empty() {
            if ctx.verbose > 0 {
                eprintln!("skipping thread {}: no extractable text", thread.id);
            }
            continue;
        }

        let summary = match &summarizer {
            Some(summarizer) => summarizer.summarize(&text).await?,
            None => digest::excerpt(&text),
        };

        items.push(digest::digest_item(&thread, summary));
    }

    if ctx.output.mode() == OutputMode::Text {
        println!("===== DAILY GMAIL DIGEST =====");
        for item in &items {
            println!("{}", render::text_block(item));
        }
    }

    let written = if args.no_file {
        None
    } else {
        Some(write_markdown(&items, args.out)?)
    };

    if ctx.output.mode() == OutputMode::Text {
        if let Some(path) = &written {
            println!("wrote digest to {}", path.display());
        }
        return Ok(());
    }

    let text = format!("{} digest items", items.len());
    ctx.output.emit(&text, &items)
}

fn write_markdown(items: &[digest::DigestItem], out: Option<PathBuf>) -> AppResult<PathBuf> {
    let path = out
        .unwrap_or_else(|| PathBuf::from(render::default_file_name(Local::now().date_naive())));

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, render::markdown(items))?;
    Ok(path)
}
