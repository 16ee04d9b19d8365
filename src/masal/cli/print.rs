use chrono::{DateTime, Utc};
use colored::Colorize;
use masal::api::{CmdMessage, MessageLevel};
use masal::library::StoryList;
use masal::model::Story;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PAGE_RULE: &str = "--------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_library(stories: &StoryList, show_summary: bool) {
    if stories.is_empty() {
        println!("No stories yet.");
        return;
    }

    for (i, story) in stories.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let details = format!(
            " [{}, {} {}]",
            story.category,
            story.pages.len(),
            if story.pages.len() == 1 { "page" } else { "pages" }
        );
        let time_ago = format_time_ago(story.created_at);

        let fixed_width = 4 + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&format!("{}{}", story.title, details), available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "    {}{}{}{}",
            idx_str,
            title_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );

        if show_summary && !story.summary.is_empty() {
            let indent = 4 + idx_str.width();
            let summary = truncate_to_width(&story.summary, LINE_WIDTH.saturating_sub(indent));
            println!("{}{}", " ".repeat(indent), summary.dimmed());
        }
    }
}

pub(super) fn print_story(story: &Story) {
    println!("{}", story.title.bold());
    if !story.summary.is_empty() {
        println!("{}", story.summary.italic());
    }
    if let Some(cover) = &story.cover_image {
        println!("{}", format!("Cover: {}", cover).dimmed());
    }

    for (i, page) in story.pages.iter().enumerate() {
        println!("\n{} {}", PAGE_RULE, format!("page {}", i + 1).yellow());
        println!("{}", page.text);
        println!(
            "{}",
            format!("[Illustration: {}]", page.illustration_prompt).dimmed()
        );
        if let Some(image) = &page.image_url {
            println!("{}", format!("Image: {}", image).dimmed());
        }
        if page.audio_data.is_some() {
            println!("{}", "Narration available".dimmed());
        }
    }
}

/// Fits `s` into `max_width` terminal columns, ending in `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    out.push('…');
    out
}

fn format_time_ago(created_at_millis: i64) -> String {
    let created = DateTime::from_timestamp_millis(created_at_millis).unwrap_or_else(Utc::now);
    let duration = Utc::now().signed_duration_since(created);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
