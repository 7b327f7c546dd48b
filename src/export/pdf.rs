use crate::core::layout::{Geometry, Layout, PageFrame};
use crate::errors::{AppError, AppResult};
use crate::models::color::Rgb;
use crate::models::options::{FOOTER_CAPTION, ScheduleOptions};
use crate::models::time::CanonicalTime;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const GRID_GRAY: Rgb = Rgb::new(0xd3, 0xd3, 0xd3);
const BORDER_GRAY: Rgb = Rgb::new(0xa9, 0xa9, 0xa9);
const CAPTION_GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);
const HEADER_FILL: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Rough Helvetica advance per character, in ems.
const GLYPH_EM: f32 = 0.52;
const BOLD_GLYPH_EM: f32 = 0.57;
const LEADING: f32 = 1.2;

const TITLE_SIZE: f32 = 18.0;
const DAY_LABEL_SIZE: f32 = 11.0;
const HOUR_LABEL_SIZE: f32 = 9.0;
const BLOCK_TITLE_SIZE: f32 = 9.0;
const BLOCK_DETAIL_SIZE: f32 = 7.5;
const FOOTER_SIZE: f32 = 10.0;

const BLOCK_INSET: f32 = 1.5;
const BLOCK_PAD: f32 = 3.0;

/// One line of text inside an event block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
    pub bold: bool,
}

/// Single-page PDF writer for a laid-out weekly schedule.
pub struct SchedulePdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    frame: PageFrame,
}

impl SchedulePdf {
    pub fn new(frame: PageFrame) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let font_id = Ref::new(5);
        let bold_font_id = Ref::new(6);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
            font_id,
            bold_font_id,
            frame,
        }
    }

    /// Converts a top-down layout coordinate into PDF user space.
    fn flip(&self, y: f32) -> f32 {
        self.frame.page_h - y
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Rgb,
        text: &str,
    ) {
        let (r, g, b) = color.to_unit();
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        let bytes = encode_win_ansi(text);

        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
        content.restore_state();
    }

    fn draw_centered(
        &self,
        content: &mut Content,
        center_x: f32,
        y: f32,
        line: &TextLine,
        color: Rgb,
    ) {
        let w = text_width(&line.text, line.size, line.bold);
        self.draw_text(
            content,
            center_x - w / 2.0,
            y,
            line.size,
            line.bold,
            color,
            &line.text,
        );
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32), color: Rgb) {
        let (r, g, b) = color.to_unit();
        content.save_state();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(0.5);
        content.move_to(from.0, self.flip(from.1));
        content.line_to(to.0, self.flip(to.1));
        content.stroke();
        content.restore_state();
    }

    fn draw_header(&self, content: &mut Content, options: &ScheduleOptions) {
        let line = TextLine {
            text: options.title(),
            size: TITLE_SIZE,
            bold: true,
        };
        let baseline = self.frame.margin + self.frame.title_h / 2.0 + TITLE_SIZE / 3.0;
        self.draw_centered(
            content,
            self.frame.page_w / 2.0,
            self.flip(baseline),
            &line,
            BLACK,
        );
    }

    fn draw_day_columns(&self, content: &mut Content, layout: &Layout) {
        let col_w = self.frame.column_width(layout.days.len());
        let header_top = self.frame.grid_top() - self.frame.day_header_h;
        let (r, g, b) = HEADER_FILL.to_unit();

        for (i, day) in layout.days.iter().enumerate() {
            let x = self.frame.grid_left() + i as f32 * col_w;

            content.save_state();
            content.set_fill_rgb(r, g, b);
            content.rect(
                x,
                self.flip(self.frame.grid_top()),
                col_w,
                self.frame.day_header_h,
            );
            content.fill_nonzero();
            content.restore_state();

            let label = TextLine {
                text: day.full_name().to_uppercase(),
                size: DAY_LABEL_SIZE,
                bold: true,
            };
            let baseline = header_top + self.frame.day_header_h / 2.0 + DAY_LABEL_SIZE / 3.0;
            self.draw_centered(content, x + col_w / 2.0, self.flip(baseline), &label, WHITE);
        }

        for i in 0..=layout.days.len() {
            let x = self.frame.grid_left() + i as f32 * col_w;
            self.draw_line(
                content,
                (x, self.frame.grid_top()),
                (x, self.frame.grid_bottom()),
                GRID_GRAY,
            );
        }
    }

    fn draw_hour_grid(&self, content: &mut Content, layout: &Layout) {
        let right = self.frame.grid_left() + self.frame.grid_width();

        for hour in layout.day_start.hour()..=layout.day_end.hour() {
            let Some(t) = CanonicalTime::from_hm(hour, 0) else {
                continue;
            };
            let y = layout.y_of(t);
            self.draw_line(content, (self.frame.grid_left(), y), (right, y), GRID_GRAY);

            let label = t.to_12h();
            let w = text_width(&label, HOUR_LABEL_SIZE, false);
            self.draw_text(
                content,
                self.frame.grid_left() - 6.0 - w,
                self.flip(y + HOUR_LABEL_SIZE / 3.0),
                HOUR_LABEL_SIZE,
                false,
                BLACK,
                &label,
            );
        }
    }

    fn draw_block(&self, content: &mut Content, block: &Geometry) {
        let fill = block.event.color.resolve();
        let (r, g, b) = fill.to_unit();
        let (sr, sg, sb) = BORDER_GRAY.to_unit();

        let w = (block.width - 2.0 * BLOCK_INSET).max(0.0);
        let h = (block.height - 2.0 * BLOCK_INSET).max(0.0);

        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.set_stroke_rgb(sr, sg, sb);
        content.set_line_width(1.0);
        content.rect(
            block.x + BLOCK_INSET,
            self.flip(block.y + BLOCK_INSET + h),
            w,
            h,
        );
        content.fill_nonzero_and_stroke();
        content.restore_state();

        let lines = block_lines(block);
        if lines.is_empty() {
            return;
        }

        let total: f32 = lines.iter().map(|l| l.size * LEADING).sum();
        let center_x = block.x + block.width / 2.0;
        let mut y = block.y + (block.height - total) / 2.0;
        let ink = fill.contrast_text();

        for line in &lines {
            y += line.size * LEADING;
            // baseline sits a little above the bottom of the line box
            let baseline = y - line.size * (LEADING - 1.0) - line.size * 0.1;
            self.draw_centered(content, center_x, self.flip(baseline), line, ink);
        }
    }

    fn draw_footer(&self, content: &mut Content) {
        let line = TextLine {
            text: FOOTER_CAPTION.to_string(),
            size: FOOTER_SIZE,
            bold: false,
        };
        let baseline = self.frame.page_h - self.frame.margin - self.frame.footer_h / 3.0;
        self.draw_centered(
            content,
            self.frame.page_w / 2.0,
            self.flip(baseline),
            &line,
            CAPTION_GRAY,
        );
    }

    /// Draw the whole page and return the finished document.
    pub fn finish(mut self, layout: &Layout, options: &ScheduleOptions) -> Vec<u8> {
        let mut content = Content::new();

        self.draw_header(&mut content, options);
        self.draw_day_columns(&mut content, layout);
        self.draw_hour_grid(&mut content, layout);
        for block in &layout.blocks {
            self.draw_block(&mut content, block);
        }
        self.draw_footer(&mut content);

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .kids([self.page_id])
            .count(1);

        {
            let mut page = self.pdf.page(self.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.frame.page_w, self.frame.page_h))
                .contents(self.content_id);
            page.resources()
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
        }

        self.pdf.stream(self.content_id, &content.finish());
        self.pdf.finish()
    }
}

/// Render the layout into `out`. Only a failing writer can make this fail.
pub fn render_to<W: Write>(
    layout: &Layout,
    options: &ScheduleOptions,
    out: &mut W,
) -> AppResult<()> {
    let bytes = SchedulePdf::new(layout.frame).finish(layout, options);
    out.write_all(&bytes)
        .and_then(|_| out.flush())
        .map_err(|e| AppError::Render(e.to_string()))
}

/// Render the layout into an in-memory PDF.
pub fn render(layout: &Layout, options: &ScheduleOptions) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    render_to(layout, options, &mut bytes)?;
    Ok(bytes)
}

pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let em = if bold { BOLD_GLYPH_EM } else { GLYPH_EM };
    text.width() as f32 * size * em
}

fn chars_that_fit(width: f32, size: f32, bold: bool) -> usize {
    let em = if bold { BOLD_GLYPH_EM } else { GLYPH_EM };
    (width / (size * em)).floor().max(0.0) as usize
}

fn truncate(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = line.chars().take(max_chars - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Title, time range and location wrapped to the block width, cut to its height.
pub fn block_lines(block: &Geometry) -> Vec<TextLine> {
    let inner_w = block.width - 2.0 * (BLOCK_INSET + BLOCK_PAD);
    let inner_h = block.height - 2.0 * (BLOCK_INSET + BLOCK_PAD);

    let mut parts = vec![
        (block.event.title.clone(), BLOCK_TITLE_SIZE, true),
        (block.event.time_range_12h(), BLOCK_DETAIL_SIZE, false),
    ];
    if let Some(loc) = &block.event.location {
        parts.push((loc.clone(), BLOCK_DETAIL_SIZE, false));
    }

    let mut lines: Vec<TextLine> = Vec::new();
    let mut used = 0.0;

    for (text, size, bold) in parts {
        let max_chars = chars_that_fit(inner_w, size, bold);
        if max_chars == 0 {
            break;
        }

        for wrapped in textwrap::wrap(&text, max_chars) {
            let line_h = size * LEADING;
            if used + line_h > inner_h {
                if let Some(last) = lines.last_mut() {
                    let limit = chars_that_fit(inner_w, last.size, last.bold);
                    let marked = format!("{}...", last.text);
                    last.text = if marked.chars().count() <= limit {
                        marked
                    } else {
                        truncate(&marked, limit)
                    };
                }
                return lines;
            }
            used += line_h;
            lines.push(TextLine {
                text: wrapped.into_owned(),
                size,
                bold,
            });
        }
    }

    lines
}

/// Standard PDF fonts only know single-byte text; WinAnsi matches Latin-1
/// for printable characters, anything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7e | 0xa0..=0xff => c as u8,
            _ => b'?',
        })
        .collect()
}
