use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    #[default]
    Plain,
    Featured,
    Warning,
    Error,
}

/// Bordered block with a title row; long lines are wrapped to the width
#[derive(Debug, Default, Clone)]
pub struct Card {
    title: Option<String>,
    content: Vec<String>,
    max_width: Option<usize>,
    style: CardStyle,
}

impl Card {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap content to at most `width` columns inside the border
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(10));
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            match self.max_width {
                Some(width) => self.content.extend(wrap(part, width)),
                None => self.content.push(part.to_string()),
            }
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = BorderChar::Vertical.render(supports_unicode);
        let border = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::TopRight.render(supports_unicode)
        )));
        out.push('\n');

        for line in &lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&border(v));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&border(v));
            out.push('\n');
        }

        out.push_str(&border(&format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::BottomRight.render(supports_unicode)
        )));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: CardStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        CardStyle::Plain => theme::colors::DIM,
        CardStyle::Featured => theme::colors::INFO,
        CardStyle::Warning => theme::colors::WARNING,
        CardStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

/// Greedy word wrap on display width; words wider than `width` stay whole
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            visible_width(word)
        } else {
            visible_width(&current) + 1 + visible_width(word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}
