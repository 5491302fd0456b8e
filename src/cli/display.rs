// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for formsift.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FORMSIFT_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout isn't a TTY, so piped
//! output is plain text with the same layout.
//!
//! Rendering is split in two: `*_lines` functions build the lines (testable,
//! no I/O), `print_lines` writes them to stdout.

use formsift::search::paginate::{page_window, Page, DEFAULT_PAGE_BUTTONS};
use formsift::utils::{
    truncate_description, use_case_preview, DESCRIPTION_PREVIEW_CHARS, USE_CASE_PREVIEW_COUNT,
};
use formsift::{MatchResult, Record, SearchStats};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const FORM_COLUMN: usize = 27;
const SCORE_COLUMN: usize = 7;
const INDENT: &str = "   ";

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
    if let Ok(theme) = std::env::var("FORMSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
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
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
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

/// Modifiers only (bold, dim)
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible length, skipping ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Greedy word wrap on char counts. Words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) -> String {
    let (b, r) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}│{}{}{}{}│{}", b, r, content, " ".repeat(pad), b, r)
}

fn labeled_rule(left: char, right: char, label: &str) -> String {
    let (b, r) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("{}{}{}{}{}{}{}{}", b, left, r, label_part, b, "─".repeat(remaining), right, r)
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    labeled_rule('┌', '┐', label)
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) -> String {
    labeled_rule('├', '┤', label)
}

/// └──────────────────┘
pub fn section_bot() -> String {
    let (b, r) = border(GRAY);
    format!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), r)
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by closeness (lower is better).
pub fn score_value(score: f64) -> String {
    let text = format!("{:>width$.3}", score, width = SCORE_COLUMN);
    let color: fn() -> String = if score <= 0.1 {
        GREEN
    } else if score <= 0.25 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// "a · b · c +2"
pub fn use_case_line(use_cases: &[String]) -> String {
    let (shown, hidden) = use_case_preview(use_cases, USE_CASE_PREVIEW_COUNT);
    let mut line = shown.join(" · ");
    if hidden > 0 {
        line.push_str(&themed(GRAY, &[], &format!(" +{}", hidden)));
    }
    line
}

/// "‹ 1 [2] 3 ›", with unreachable arrows dimmed.
pub fn page_nav(current: usize, total_pages: usize) -> String {
    let arrow = |symbol: &str, enabled: bool| {
        if enabled {
            themed(BLUE, &[BOLD], symbol)
        } else {
            styled(&[DIM], symbol)
        }
    };

    let mut parts = vec![arrow("‹", current > 1)];
    for page in page_window(current, total_pages, DEFAULT_PAGE_BUTTONS) {
        if page == current {
            parts.push(themed(BLUE, &[BOLD], &format!("[{}]", page)));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(arrow("›", current < total_pages));
    parts.join(" ")
}

/// "Showing 6–10 of 12", or "No results" for an empty page
pub fn showing(page: &Page<'_, MatchResult>) -> String {
    match page.range() {
        Some((first, last)) => format!("Showing {}–{} of {}", first, last, page.total_items),
        None => "No results".to_string(),
    }
}

pub fn stats_line(stats: &SearchStats) -> String {
    format!(
        "{} of {} forms match ({}%)",
        themed(GREEN, &[BOLD], &stats.found.to_string()),
        stats.total,
        stats.match_rate
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

fn result_lines(result: &MatchResult, show_scores: bool) -> Vec<String> {
    let record = &result.record;
    let title_width = BOX_WIDTH - 1 - FORM_COLUMN - if show_scores { SCORE_COLUMN + 1 } else { 0 };
    let title = truncate_description(&record.title, title_width - 4);

    let mut first = format!(
        " {}{}",
        pad_right(&themed(BRIGHT_CYAN, &[BOLD], &record.form_number), FORM_COLUMN),
        pad_right(&title, title_width)
    );
    if show_scores {
        first.push(' ');
        first.push_str(&score_value(result.score));
    }

    let mut lines = vec![row(&first)];
    let description = truncate_description(&record.description, DESCRIPTION_PREVIEW_CHARS);
    for line in wrap(&description, BOX_WIDTH - INDENT.len() - 1) {
        lines.push(row(&format!("{}{}", INDENT, styled(&[DIM], &line))));
    }
    if !record.use_cases.is_empty() {
        lines.push(row(&format!("{}{}", INDENT, use_case_line(&record.use_cases))));
    }
    lines
}

/// Result table for one page, plus the "Showing" line, page buttons and stats.
pub fn results_lines(
    label: &str,
    page: &Page<'_, MatchResult>,
    stats: &SearchStats,
    show_scores: bool,
) -> Vec<String> {
    let mut lines = vec![section_top(label)];

    if page.items.is_empty() {
        lines.push(row(&themed(YELLOW, &[], " No forms match this search.")));
    } else {
        for (i, result) in page.items.iter().enumerate() {
            if i > 0 {
                lines.push(row(""));
            }
            lines.extend(result_lines(result, show_scores));
        }
    }

    lines.push(section_mid("PAGES"));
    lines.push(row(&format!(
        " {}   {}",
        pad_right(&showing(page), 24),
        page_nav(page.page, page.total_pages)
    )));
    lines.push(row(&format!(" {}", stats_line(stats))));
    lines.push(section_bot());
    lines
}

/// Full detail view: every field, all use cases, the download link.
pub fn detail_lines(record: &Record) -> Vec<String> {
    let text_width = BOX_WIDTH - 2;
    let mut lines = vec![section_top(&record.form_number)];

    for line in wrap(&record.title, text_width) {
        lines.push(row(&format!(" {}", styled(&[BOLD], &line))));
    }
    lines.push(row(""));
    for line in wrap(&record.description, text_width) {
        lines.push(row(&format!(" {}", line)));
    }

    lines.push(section_mid("USE CASES"));
    if record.use_cases.is_empty() {
        lines.push(row(&styled(&[DIM], " (none)")));
    }
    for use_case in &record.use_cases {
        lines.push(row(&format!(" • {}", use_case)));
    }

    lines.push(section_mid("DOWNLOAD"));
    lines.push(row(&format!(" {}", themed(BLUE, &[], record.file_url()))));
    lines.push(section_bot());
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
