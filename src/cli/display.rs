// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the unerg-search CLI.
//!
//! OneDark colours for dark terminals, One Light for light ones. Detection tries
//! `UNERG_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and prints plain text when stdout is not a TTY.

use std::sync::OnceLock;
use unerg_search::{ScoredItem, SearchItem, SearchPhase, SearchSnapshot};

/// Longest excerpt printed under a result.
const EXCERPT_CHARS: usize = 96;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("UNERG_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Secondary line of a result: author and category when present.
fn byline(item: &SearchItem) -> Option<String> {
    let parts: Vec<&str> = ["author", "category", "period", "status"]
        .iter()
        .filter_map(|field| item.text(field))
        .filter(|text| !text.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

fn excerpt(item: &SearchItem) -> Option<String> {
    ["description", "summary", "content"]
        .iter()
        .find_map(|field| item.text(field).filter(|t| !t.is_empty()))
        .map(|text| truncate(text, EXCERPT_CHARS))
}

fn print_item(rank: usize, item: &SearchItem, score: Option<f64>) {
    let number = themed(GRAY, &[], &format!("{:>3}.", rank));
    let title = themed(CYAN, &[BOLD], &item.title);
    match score {
        Some(score) => {
            let badge = themed(YELLOW, &[], &format!("[{:.2}]", score));
            println!("{} {} {}", number, title, badge);
        }
        None => println!("{} {}", number, title),
    }
    if let Some(byline) = byline(item) {
        println!("     {}", themed(GREEN, &[], &byline));
    }
    if let Some(excerpt) = excerpt(item) {
        println!("     {}", themed(GRAY, &[], &excerpt));
    }
    println!("     {}", themed(GRAY, &[], &format!("id: {}", item.id)));
}

/// Print ranked local results, with scores when `explain` is set.
pub fn print_scored(query: &str, results: &[ScoredItem<'_>], explain: bool) {
    if results.is_empty() {
        print_no_results(query);
        return;
    }
    for (i, scored) in results.iter().enumerate() {
        print_item(i + 1, scored.item, explain.then_some(scored.score));
    }
}

/// Print items in the order given.
pub fn print_items(query: &str, items: &[SearchItem]) {
    if items.is_empty() {
        print_no_results(query);
        return;
    }
    for (i, item) in items.iter().enumerate() {
        print_item(i + 1, item, None);
    }
}

fn print_no_results(query: &str) {
    println!(
        "{}",
        themed(YELLOW, &[], &format!("No results for '{}'", query))
    );
}

/// One line per controller state change.
pub fn print_snapshot(snapshot: &SearchSnapshot) {
    let label = match &snapshot.phase {
        SearchPhase::Idle => themed(GRAY, &[], "idle"),
        SearchPhase::Typing => themed(GRAY, &[], &format!("typing '{}'", snapshot.query)),
        SearchPhase::Searching => themed(YELLOW, &[], &format!("searching '{}'…", snapshot.query)),
        SearchPhase::Success(items) => themed(
            GREEN,
            &[BOLD],
            &format!("{} result(s) for '{}'", items.len(), snapshot.query),
        ),
        SearchPhase::Failed(message) => themed(RED, &[BOLD], message),
    };
    println!("{} {}", themed(GRAY, &[], &format!("#{}", snapshot.generation)), label);

    if let SearchPhase::Success(items) = &snapshot.phase {
        print_items(&snapshot.query, items);
    }
}
