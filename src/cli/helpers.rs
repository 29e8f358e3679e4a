//! Shared output helpers for CLI commands.

use console::style;

use letterdesk::extraction::ExtractionResult;
use letterdesk::models::{LetterDraft, Urgency};

/// Truncate a string to `max` characters, appending "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn print_field(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {:<12} {}", label, v),
        None => println!("  {:<12} {}", label, style("-").dim()),
    }
}

fn styled_urgency(urgency: Urgency) -> console::StyledObject<&'static str> {
    let s = style(urgency.as_str());
    match urgency {
        Urgency::Urgent => s.red().bold(),
        Urgency::High => s.yellow(),
        Urgency::Medium => s.cyan(),
        Urgency::Low => s.dim(),
    }
}

pub fn print_extraction(result: &ExtractionResult) {
    println!("\n{}", style("Extracted Fields").bold());
    println!("{}", "-".repeat(50));
    print_field("Date", result.date.as_deref());
    print_field("Title", result.title.as_deref());
    print_field("Sender", result.sender.as_deref());
    print_field("Recipient", result.recipient.as_deref());
    print_field("Contact", result.contact.as_deref());
    println!("  {:<12} {}", "Urgency", styled_urgency(result.urgency));
}

pub fn print_draft(draft: &LetterDraft) {
    let blank = |s: &str| (!s.is_empty()).then(|| s.to_string());

    println!("\n{}", style("Letter Draft").bold());
    println!("{}", "-".repeat(50));
    print_field("Title", blank(&draft.title).as_deref());
    print_field("From", blank(&draft.sender_name).as_deref());
    print_field("Address", blank(&draft.sender_address).as_deref());
    print_field("Email", blank(&draft.sender_email).as_deref());
    print_field("Phone", blank(&draft.sender_phone).as_deref());
    print_field("To", blank(&draft.recipient).as_deref());
    print_field("Copy to", blank(&draft.receiver_email).as_deref());
    let received = draft.date_received.format("%Y-%m-%d").to_string();
    print_field("Received", Some(received.as_str()));
    println!("  {:<12} {}", "Priority", styled_urgency(draft.priority));
    print_field("Category", Some(draft.category.as_str()));
    print_field("Status", Some(draft.status.as_str()));
    print_field("Content", blank(&truncate(&draft.content.replace('\n', " "), 60)).as_deref());

    if let Err(e) = draft.validate() {
        println!("\n  {} {}", style("!").yellow(), style(e).yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 10), "a longe...");
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
