use chrono::NaiveDate;

use super::DigestItem;

pub fn default_file_name(date: NaiveDate) -> String {
    format!("digest-{}.md", date.format("%Y-%m-%d"))
}

/// Renders the digest as a standalone markdown document.
pub fn markdown(items: &[DigestItem]) -> String {
    let mut out = String::from("# Daily Gmail Digest\n\n");

    for item in items {
        out.push_str(&format!("## {}\n", item.subject));
        out.push_str(&format!("**From:** {} — {}\n\n", item.from, item.date));
        out.push_str(&format!("{}\n\n", item.summary));
        out.push_str(&format!("[Open in Gmail]({})\n\n", item.gmail_link));
    }

    out
}

/// Terminal rendering for one digest entry.
pub fn text_block(item: &DigestItem) -> String {
    format!(
        "Subject: {}\nFrom: {} — Date: {}\nSummary:\n{}\nOpen in Gmail: {}\n",
        item.subject, item.from, item.date, item.summary, item.gmail_link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> DigestItem {
        DigestItem {
            subject: "Quarterly report".to_string(),
            from: "alice@example.com".to_string(),
            date: "2026-08-28 09:15".to_string(),
            summary: "The report is ready for review.".to_string(),
            gmail_link: "https://mail.google.com/mail/u/0/#inbox/t-1".to_string(),
        }
    }

    #[test]
    fn names_file_after_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(default_file_name(date), "digest-2026-08-28.md");
    }

    #[test]
    fn markdown_has_title_and_one_section_per_item() {
        let doc = markdown(&[item(), item()]);
        assert!(doc.starts_with("# Daily Gmail Digest\n\n"));
        assert_eq!(doc.matches("## Quarterly report").count(), 2);
        assert!(doc.contains("**From:** alice@example.com — 2026-08-28 09:15"));
        assert!(doc.contains("[Open in Gmail](https://mail.google.com/mail/u/0/#inbox/t-1)"));
    }

    #[test]
    fn empty_digest_is_just_the_title() {
        assert_eq!(markdown(&[]), "# Daily Gmail Digest\n\n");
    }

    #[test]
    fn text_block_carries_all_fields() {
        let block = text_block(&item());
        assert!(block.contains("Subject: Quarterly report"));
        assert!(block.contains("From: alice@example.com — Date: 2026-08-28 09:15"));
        assert!(block.contains("The report is ready for review."));
    }
}
