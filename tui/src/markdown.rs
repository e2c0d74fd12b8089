use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Converts model output (markdown) to styled lines
pub fn parse_markdown(text: &str) -> Vec<Line<'static>> {
    let mut out = MarkdownLines::default();

    for event in Parser::new(text) {
        match event {
            Event::Start(tag) => out.start(tag),
            Event::End(tag) => out.end(tag),
            Event::Text(text) => out.text(&text),
            Event::Code(code) => out.push_span(Span::styled(code.to_string(), code_style())),
            Event::SoftBreak => out.push_span(Span::raw(" ")),
            Event::HardBreak => out.flush(),
            Event::Rule => {
                out.flush();
                out.lines.push(Line::from(Span::styled("─".repeat(40), Style::default().fg(Color::DarkGray))));
            }
            _ => {}
        }
    }
    out.flush();

    while out.lines.len() > 1 && out.lines.last().map_or(false, is_blank) {
        out.lines.pop();
    }
    out.lines
}

#[derive(Default)]
struct MarkdownLines {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    list_depth: usize,
    in_code_block: bool,
}

impl MarkdownLines {
    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                let color = if level == HeadingLevel::H1 { Color::Magenta } else { Color::Yellow };
                self.styles.push(Style::default().fg(color).add_modifier(Modifier::BOLD));
            }
            Tag::Emphasis => self.styles.push(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.styles.push(Style::default().add_modifier(Modifier::BOLD)),
            Tag::BlockQuote(_) => {
                self.styles.push(Style::default().fg(Color::DarkGray));
                self.push_span(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::List(_) => self.list_depth += 1,
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.push_span(Span::styled(format!("{}• ", indent), Style::default().fg(Color::Cyan)));
            }
            Tag::Paragraph => self.flush(),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.styles.pop();
                self.flush();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::BlockQuote => {
                self.styles.pop();
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.lines.push(Line::from(""));
            }
            TagEnd::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.flush();
                    self.lines.push(Line::from(""));
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::Paragraph => {
                self.flush();
                self.lines.push(Line::from(""));
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                self.lines.push(Line::from(Span::styled(format!("  {}", line), code_style())));
            }
            return;
        }

        let style = self.styles.last().copied().unwrap_or_default();
        for (i, line) in text.lines().enumerate() {
            if i > 0 {
                self.flush();
            }
            if !line.is_empty() {
                self.push_span(Span::styled(line.to_string(), style));
            }
        }
    }

    fn push_span(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Green)
}

fn is_blank(line: &Line) -> bool {
    line.spans.iter().all(|span| span.content.trim().is_empty())
}

/// Soft-wraps styled lines at word boundaries to `width` columns
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    let mut wrapped = Vec::new();
    for line in lines {
        let len: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        if len <= width {
            wrapped.push(line);
            continue;
        }

        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_len = 0;
        for span in line.spans {
            for word in span.content.split_inclusive(' ') {
                let word_len = word.chars().count();
                if row_len + word_len > width && row_len > 0 {
                    wrapped.push(Line::from(std::mem::take(&mut row)));
                    row_len = 0;
                }
                row.push(Span::styled(word.to_string(), span.style));
                row_len += word_len;
            }
        }
        if !row.is_empty() {
            wrapped.push(Line::from(row));
        }
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_summary_markdown() {
        let markdown = "## Overview\n\nA short **summary**.\n\n- first point\n- second point";
        let lines = parse_markdown(markdown);
        let text = plain(&lines);

        assert!(text.contains("Overview"));
        assert!(text.contains("A short summary."));
        assert!(text.contains("• first point"));
        assert!(text.contains("• second point"));
    }

    #[test]
    fn test_heading_is_styled() {
        let lines = parse_markdown("# Title");
        let span = &lines[0].spans[0];
        assert_eq!(span.content, "Title");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_code_block_kept_verbatim() {
        let lines = parse_markdown("```\nlet x = 1;\n```");
        assert!(plain(&lines).contains("let x = 1;"));
    }

    #[test]
    fn test_wrapping() {
        let lines = vec![Line::from(Span::raw(
            "This is a very long line that should be wrapped when the width is too small",
        ))];
        let wrapped = wrap_lines(lines, 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            let len: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            assert!(len <= 20);
        }
    }
}
