use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use crate::config::constants::{FOOTER_ATTRIBUTION, REPORT_TITLE};
use crate::enums::document_element::DocumentElement;
use crate::enums::paragraph_style::ParagraphStyle;
use crate::enums::pdf_font::PdfFont;
use crate::errors::{ReportError, ReportResult};
use crate::helpers::inline_markup::{self, InlineItem, RunStyle};
use crate::helpers::text_metrics::{char_width, text_width};
use crate::helpers::win_ansi;
use crate::structs::rgb::Rgb;
use crate::structs::style_spec::{Alignment, StyleSpec};

const CODE_FONT_SIZE: f32 = 8.5;
const CODE_LEADING: f32 = 12.0;
const CODE_PADDING: f32 = 12.0;
const TABLE_FONT_SIZE: f32 = 10.0;
const TABLE_HEADER_FONT_SIZE: f32 = 12.0;
const TABLE_PADDING: f32 = 6.0;
const FOOTER_FONT_SIZE: f32 = 9.0;
const FOOTER_BASELINE: f32 = 30.0;

/// Landscape letter with the report's margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 792.0,
            height: 612.0,
            left_margin: 36.0,
            right_margin: 36.0,
            top_margin: 50.0,
            bottom_margin: 50.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.left_margin - self.right_margin
    }

    fn top(&self) -> f32 {
        self.height - self.top_margin
    }
}

/// Drawing operations and the plain text placed on one page.
#[derive(Debug, Clone, Default)]
pub struct LaidOutPage {
    pub operations: Vec<Operation>,
    pub text_lines: Vec<String>,
}

impl LaidOutPage {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_lines.iter().any(|line| line.contains(needle))
    }
}

#[derive(Debug, Clone)]
struct Piece {
    text: String,
    font: PdfFont,
    size: f32,
    color: Rgb,
    space_before: bool,
}

#[derive(Debug, Clone, Default)]
struct Line {
    pieces: Vec<Piece>,
}

struct Layout {
    geometry: PageGeometry,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    cursor: f32,
    dirty: bool,
}

impl Layout {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            cursor: geometry.top(),
            dirty: false,
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.cursor = self.geometry.top();
        self.dirty = false;
    }

    fn page_break(&mut self) {
        if self.dirty {
            self.new_page();
        }
    }

    fn ensure_room(&mut self, height: f32) {
        if self.cursor - height < self.geometry.bottom_margin && self.dirty {
            self.new_page();
        }
    }

    fn space(&mut self, height: f32) {
        if !self.dirty {
            return;
        }
        self.cursor -= height;
        if self.cursor < self.geometry.bottom_margin {
            self.new_page();
        }
    }

    fn draw_text(&mut self, text: &str, font: PdfFont, size: f32, color: Rgb, x: f32, y: f32) {
        self.current.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(font.resource_name().as_bytes().to_vec()), real(size)]),
            fill_color(color),
            Operation::new("Td", vec![real(x), real(y)]),
            Operation::new("Tj", vec![Object::String(win_ansi::encode(text), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
        self.dirty = true;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.current.operations.extend([
            Operation::new("q", vec![]),
            fill_color(color),
            Operation::new("re", vec![real(x), real(y), real(width), real(height)]),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb, line_width: f32) {
        self.current.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("RG", vec![real(color.r), real(color.g), real(color.b)]),
            Operation::new("w", vec![real(line_width)]),
            Operation::new("re", vec![real(x), real(y), real(width), real(height)]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        if self.dirty || self.pages.is_empty() {
            let last = std::mem::take(&mut self.current);
            self.pages.push(last);
        }
        self.pages
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter {
    geometry: PageGeometry,
}

impl PdfWriter {
    pub const fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Writes to a sibling temporary file first so a failed run never leaves a partial report behind.
    pub fn write(&self, elements: &[DocumentElement], output_path: &Path) -> ReportResult<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ReportError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        let pages = self.layout(elements);
        let mut document = self.build_document(&pages)?;

        let temp_path = Self::temp_path(output_path);
        let result = Self::save(&mut document, &temp_path).and_then(|()| {
            fs::rename(&temp_path, output_path)
                .map_err(|e| ReportError::file_error(&output_path.display().to_string(), "rename", &e.to_string()))
        });
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        log::info!("📄 Wrote {} pages to {}", pages.len(), output_path.display());
        Ok(())
    }

    /// Paginates the elements and stamps the running footer on every page.
    pub fn layout(&self, elements: &[DocumentElement]) -> Vec<LaidOutPage> {
        let mut layout = Layout::new(self.geometry);

        for element in elements {
            match element {
                DocumentElement::Paragraph { markup, style } => self.layout_paragraph(&mut layout, markup, *style),
                DocumentElement::Table { rows, column_widths } => self.layout_table(&mut layout, rows, column_widths),
                DocumentElement::Spacer(height) => layout.space(*height),
                DocumentElement::PageBreak => layout.page_break(),
                DocumentElement::Preformatted { text } => self.layout_preformatted(&mut layout, text),
            }
        }

        let mut pages = layout.finish();
        for (index, page) in pages.iter_mut().enumerate() {
            self.stamp_footer(page, index + 1);
        }
        pages
    }

    fn layout_paragraph(&self, layout: &mut Layout, markup: &str, style: ParagraphStyle) {
        let spec = style.spec();
        let base_color = Rgb::hex(spec.color);
        let items = inline_markup::parse(markup);
        let available = self.geometry.content_width() - spec.left_indent;
        let lines = Self::wrap(&items, &spec, base_color, available);

        layout.space(spec.space_before);
        for (index, line) in lines.iter().enumerate() {
            let max_size = line.pieces.iter().map(|p| p.size).fold(spec.font_size, f32::max);
            let line_height = spec.leading.max(max_size * 1.2);
            layout.ensure_room(line_height);

            let baseline = layout.cursor - max_size;
            let indent = if index == 0 { spec.first_line_indent } else { 0.0 };
            let line_width = Self::line_width(line);
            let mut x = match spec.alignment {
                Alignment::Left => self.geometry.left_margin + spec.left_indent + indent,
                Alignment::Center => self.geometry.left_margin + (self.geometry.content_width() - line_width) / 2.0,
            };

            let mut plain = String::new();
            for piece in &line.pieces {
                if piece.space_before && !plain.is_empty() {
                    x += char_width(' ', piece.font, piece.size);
                    plain.push(' ');
                }
                layout.draw_text(&piece.text, piece.font, piece.size, piece.color, x, baseline);
                x += text_width(&piece.text, piece.font, piece.size);
                plain.push_str(&piece.text);
            }
            layout.current.text_lines.push(plain);
            layout.cursor -= line_height;
        }
        layout.space(spec.space_after);
    }

    /// Greedy word wrap over styled runs; a word may span several runs.
    fn wrap(items: &[InlineItem], spec: &StyleSpec, base_color: Rgb, available: f32) -> Vec<Line> {
        let mut lines = vec![Line::default()];
        let mut width = 0.0_f32;
        let mut pending_space = false;

        for item in items {
            let (text, style) = match item {
                InlineItem::LineBreak => {
                    lines.push(Line::default());
                    width = 0.0;
                    pending_space = false;
                    continue;
                }
                InlineItem::Text { text, style } => (text, style),
            };

            let (font, size, color) = Self::resolve(style, spec, base_color);
            let mut chars = text.chars().peekable();
            while chars.peek().is_some() {
                let mut word = String::new();
                while let Some(c) = chars.peek().copied() {
                    if c.is_whitespace() {
                        pending_space = true;
                        chars.next();
                    } else {
                        break;
                    }
                }
                while let Some(c) = chars.peek().copied() {
                    if c.is_whitespace() {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                if word.is_empty() {
                    continue;
                }

                let word_width = text_width(&word, font, size);
                if word_width > available {
                    if lines.last().is_some_and(|l| !l.pieces.is_empty()) {
                        lines.push(Line::default());
                    }
                    for (index, segment) in Self::split_to_width(&word, font, size, available).into_iter().enumerate() {
                        if index > 0 {
                            lines.push(Line::default());
                        }
                        width = text_width(&segment, font, size);
                        if let Some(current) = lines.last_mut() {
                            current.pieces.push(Piece { text: segment, font, size, color, space_before: false });
                        }
                    }
                    pending_space = false;
                    continue;
                }

                let space_width = if pending_space { char_width(' ', font, size) } else { 0.0 };
                let occupied = lines.last().is_some_and(|l| !l.pieces.is_empty());
                if occupied && pending_space && width + space_width + word_width > available {
                    lines.push(Line::default());
                    width = 0.0;
                }

                let Some(current) = lines.last_mut() else { continue };
                let space_before = pending_space && !current.pieces.is_empty();
                width += word_width + if space_before { space_width } else { 0.0 };
                current.pieces.push(Piece { text: word, font, size, color, space_before });
                pending_space = false;
            }
        }

        lines.retain(|l| !l.pieces.is_empty());
        lines
    }

    /// Character-level break for a single word that cannot fit on any line.
    fn split_to_width(word: &str, font: PdfFont, size: f32, available: f32) -> Vec<String> {
        let mut segments = Vec::new();
        let mut segment = String::new();
        let mut width = 0.0_f32;

        for c in word.chars() {
            let advance = char_width(c, font, size);
            if !segment.is_empty() && width + advance > available {
                segments.push(std::mem::take(&mut segment));
                width = 0.0;
            }
            segment.push(c);
            width += advance;
        }
        if !segment.is_empty() {
            segments.push(segment);
        }
        segments
    }

    fn resolve(style: &RunStyle, spec: &StyleSpec, base_color: Rgb) -> (PdfFont, f32, Rgb) {
        let font = PdfFont::select(style.bold || spec.bold, style.italic, style.monospace);
        (font, style.size.unwrap_or(spec.font_size), style.color.unwrap_or(base_color))
    }

    fn line_width(line: &Line) -> f32 {
        line.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let space = if p.space_before && i > 0 { char_width(' ', p.font, p.size) } else { 0.0 };
                space + text_width(&p.text, p.font, p.size)
            })
            .sum()
    }

    fn layout_table(&self, layout: &mut Layout, rows: &[Vec<String>], column_widths: &[f32]) {
        let row_height = |index: usize| {
            if index == 0 {
                TABLE_HEADER_FONT_SIZE + TABLE_PADDING * 2.0 + 6.0
            } else {
                TABLE_FONT_SIZE + TABLE_PADDING * 2.0
            }
        };
        let grid = Rgb::BLACK;

        for (index, row) in rows.iter().enumerate() {
            let height = row_height(index);
            layout.ensure_room(height);
            let top = layout.cursor;
            let bottom = top - height;
            let mut x = self.geometry.left_margin;

            if index == 0 {
                let total: f32 = column_widths.iter().sum();
                layout.fill_rect(x, bottom, total, height, Rgb::hex("#2B547E"));
            }

            for (column, cell) in row.iter().enumerate() {
                let width = column_widths.get(column).copied().unwrap_or(72.0);
                let (font, size, color) = if index == 0 {
                    (PdfFont::HelveticaBold, TABLE_HEADER_FONT_SIZE, Rgb::hex("whitesmoke"))
                } else {
                    (PdfFont::Helvetica, TABLE_FONT_SIZE, Rgb::BLACK)
                };
                let text_x = if column == 0 {
                    x + TABLE_PADDING
                } else {
                    x + (width - text_width(cell, font, size)) / 2.0
                };
                let baseline = bottom + (height - size) / 2.0 + size * 0.2;
                layout.draw_text(cell, font, size, color, text_x, baseline);
                layout.stroke_rect(x, bottom, width, height, grid, 1.0);
                x += width;
            }

            layout.current.text_lines.push(row.join(" | "));
            layout.cursor = bottom;
        }
    }

    fn layout_preformatted(&self, layout: &mut Layout, text: &str) {
        let lines: Vec<&str> = text.split('\n').collect();
        let box_width = self.geometry.content_width();
        let mut remaining = lines.as_slice();

        layout.space(10.0);
        while !remaining.is_empty() {
            let room = layout.cursor - self.geometry.bottom_margin - CODE_PADDING * 2.0;
            let fits = ((room / CODE_LEADING).floor().max(0.0) as usize).min(remaining.len());
            if fits == 0 {
                if layout.dirty {
                    layout.new_page();
                    continue;
                }
                // A page cannot hold even one line; draw it anyway rather than loop.
            }
            let take = fits.max(1);
            let (chunk, rest) = remaining.split_at(take);

            let height = chunk.len() as f32 * CODE_LEADING + CODE_PADDING * 2.0;
            let bottom = layout.cursor - height;
            let x = self.geometry.left_margin;
            layout.fill_rect(x, bottom, box_width, height, Rgb::hex("#F5F5F5"));
            layout.stroke_rect(x, bottom, box_width, height, Rgb::hex("#DDDDDD"), 1.0);

            let mut baseline = layout.cursor - CODE_PADDING - CODE_FONT_SIZE;
            for line in chunk {
                layout.draw_text(line, PdfFont::Courier, CODE_FONT_SIZE, Rgb::hex("#333333"), x + CODE_PADDING, baseline);
                layout.current.text_lines.push((*line).to_string());
                baseline -= CODE_LEADING;
            }

            layout.cursor = bottom;
            remaining = rest;
            if !remaining.is_empty() {
                layout.new_page();
            }
        }
        layout.space(15.0);
    }

    fn stamp_footer(&self, page: &mut LaidOutPage, number: usize) {
        let footer = format!("Page {number} | {FOOTER_ATTRIBUTION}");
        let width = text_width(&footer, PdfFont::Helvetica, FOOTER_FONT_SIZE);
        let x = (self.geometry.width - width) / 2.0;
        page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(PdfFont::Helvetica.resource_name().as_bytes().to_vec()), real(FOOTER_FONT_SIZE)]),
            fill_color(Rgb::hex("#999999")),
            Operation::new("Td", vec![real(x), real(FOOTER_BASELINE)]),
            Operation::new("Tj", vec![Object::String(win_ansi::encode(&footer), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
            Operation::new("Q", vec![]),
        ]);
        page.text_lines.push(footer);
    }

    fn build_document(&self, pages: &[LaidOutPage]) -> ReportResult<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in PdfFont::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content { operations: page.operations.clone() };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = i64::try_from(kids.len())
            .map_err(|e| ReportError::render_error("page tree", &e.to_string()))?;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(page_count),
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    real(self.geometry.width),
                    real(self.geometry.height),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(REPORT_TITLE),
            "Producer" => Object::string_literal(concat!("sonar-report ", env!("CARGO_PKG_VERSION"))),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        Ok(doc)
    }

    fn save(document: &mut Document, path: &Path) -> ReportResult<()> {
        let file = File::create(path)
            .map_err(|e| ReportError::file_error(&path.display().to_string(), "create", &e.to_string()))?;
        let mut writer = BufWriter::new(file);
        document
            .save_to(&mut writer)
            .map_err(|e| ReportError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        writer
            .flush()
            .map_err(|e| ReportError::file_error(&path.display().to_string(), "flush", &e.to_string()))
    }

    fn temp_path(output_path: &Path) -> PathBuf {
        let mut name = output_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".partial");
        output_path.with_file_name(name)
    }
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn fill_color(color: Rgb) -> Operation {
    Operation::new("rg", vec![real(color.r), real(color.g), real(color.b)])
}
