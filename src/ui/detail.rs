use crate::app::{App, Focus};
use crate::detail::{DetailModel, Media};
use crate::markup::Segment;
use crate::theme::ColorPalette;
use crate::util::strip_control_chars;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(super) const EMPTY_SELECTION: &str = "Select a question from the left to view its details.";
const FEEDBACK_PROMPT: &str = "Was this article helpful?";

/// Render the detail pane for the selected topic.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let border_style = if app.focus == Focus::Detail {
        app.palette.panel_border_focused
    } else {
        app.palette.panel_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Article ");

    let inner_width = area.width.saturating_sub(2);
    app.detail_visible_lines = area.height.saturating_sub(2) as usize;

    let lines = match app.detail_model() {
        Some(model) => detail_lines(&model, &app.palette),
        None => {
            let text = if app.loading {
                "Loading help topics..."
            } else {
                EMPTY_SELECTION
            };
            vec![Line::from(Span::styled(text, app.palette.detail_placeholder))]
        }
    };

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });

    // Clamp before drawing so a resize never renders past the end
    app.detail_line_count = paragraph.line_count(inner_width);
    app.clamp_scroll();

    let paragraph = paragraph
        .block(block)
        .scroll((app.detail_scroll as u16, 0));
    f.render_widget(paragraph, area);
}

/// Styled lines for a topic: title, body, media links, feedback footer.
pub(super) fn detail_lines(model: &DetailModel, palette: &ColorPalette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(model.paragraphs.len() + 8);

    lines.push(segments_line(
        &model.title,
        palette.detail_title,
        palette.detail_title,
    ));
    lines.push(Line::default());

    for paragraph in &model.paragraphs {
        lines.push(segments_line(
            paragraph,
            palette.detail_body,
            palette.detail_strong,
        ));
    }

    match &model.media {
        Media::None => {}
        Media::Video(link) => {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Video: ", palette.detail_strong),
                Span::styled(strip_control_chars(link).into_owned(), palette.detail_media),
            ]));
        }
        Media::Images(links) => {
            lines.push(Line::default());
            let label = if links.len() == 1 { "Image" } else { "Images" };
            lines.push(Line::from(Span::styled(label, palette.detail_strong)));
            lines.extend(links.iter().map(|link| {
                Line::from(Span::styled(
                    format!("  {}", strip_control_chars(link)),
                    palette.detail_media,
                ))
            }));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(FEEDBACK_PROMPT, palette.detail_footer),
        Span::styled("  Yes  /  No", palette.detail_footer),
    ]));

    lines
}

fn segments_line(segments: &[Segment], plain: Style, strong: Style) -> Line<'static> {
    Line::from(
        segments
            .iter()
            .map(|segment| {
                let style = if segment.is_strong() {
                    plain.patch(strong)
                } else {
                    plain
                };
                Span::styled(strip_control_chars(segment.text()).into_owned(), style)
            })
            .collect::<Vec<_>>(),
    )
}
