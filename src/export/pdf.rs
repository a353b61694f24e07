//! Flowing page canvas on top of `pdf-writer`.
//!
//! Coordinates are millimetres from the top-left corner of the page, like a
//! pen moving down the sheet; conversion to PDF user space happens only when
//! drawing.

use crate::export::metrics::{FontStyle, encode_latin1, text_width_pt};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current: Option<(Ref, Content)>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    bottom_margin: f32,
    cell_margin: f32,

    x: f32,
    y: f32,
    style: FontStyle,
    font_size: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl PdfManager {
    /// A4 in landscape orientation, 10 mm margins.
    pub fn landscape_a4() -> Self {
        let mut pdf = Pdf::new();

        // object ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        for (id, style) in [(font_id, FontStyle::Regular), (bold_font_id, FontStyle::Bold)] {
            pdf.type1_font(id)
                .base_font(Name(style.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current: None,

            page_w: 297.0,
            page_h: 210.0,
            margin: 10.0,
            bottom_margin: 10.0,
            cell_margin: 1.0,

            x: 10.0,
            y: 10.0,
            style: FontStyle::Regular,
            font_size: 10.0,

            next_id,
            font_id,
            bold_font_id,
        }
    }

    /// Next unused object id.
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_width(&self) -> f32 {
        self.page_w
    }

    pub fn left_margin(&self) -> f32 {
        self.margin
    }

    /// Usable width between the left and right margins.
    pub fn effective_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn cell_margin(&self) -> f32 {
        self.cell_margin
    }

    /// Height between the top and bottom margins of a page.
    pub fn body_height(&self) -> f32 {
        self.page_h - self.margin - self.bottom_margin
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.font_size = size;
    }

    /// Width in millimetres of `text` in the current font.
    pub fn text_width(&self, text: &str) -> f32 {
        text_width_pt(text, self.style, self.font_size) / PT_PER_MM
    }

    /// Close the current page (if any) and start a fresh one.
    pub fn add_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(
                0.0,
                0.0,
                mm_to_pt(self.page_w),
                mm_to_pt(self.page_h),
            ))
            .contents(content_id);
        page.resources()
            .fonts()
            .pair(Name(FontStyle::Regular.resource()), self.font_id)
            .pair(Name(FontStyle::Bold.resource()), self.bold_font_id);
        drop(page);

        self.current = Some((content_id, Content::new()));
        self.x = self.margin;
        self.y = self.margin;
    }

    /// Write the content stream of the open page.
    fn finalize_page(&mut self) {
        if let Some((id, content)) = self.current.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Start a new page when `h` more millimetres do not fit above the
    /// bottom margin. Returns whether a break happened.
    pub fn break_if_needed(&mut self, h: f32) -> bool {
        if self.current.is_none() || self.y + h > self.page_h - self.bottom_margin {
            self.add_page();
            return true;
        }
        false
    }

    /// Move to the left margin, `h` millimetres lower.
    pub fn ln(&mut self, h: f32) {
        self.x = self.margin;
        self.y += h;
    }

    fn content(&mut self) -> &mut Content {
        if self.current.is_none() {
            self.add_page();
        }
        match self.current.as_mut() {
            Some((_, content)) => content,
            None => unreachable!("add_page always opens a content stream"),
        }
    }

    fn draw_text(&mut self, x: f32, baseline: f32, text: &str) {
        let x_pt = mm_to_pt(x);
        let y_pt = mm_to_pt(self.page_h - baseline);
        let size = self.font_size;
        let font = Name(self.style.resource());
        let bytes = encode_latin1(text);

        let content = self.content();
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x_pt, y_pt]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let rect = (
            mm_to_pt(x),
            mm_to_pt(self.page_h - y - h),
            mm_to_pt(w),
            mm_to_pt(h),
        );
        let content = self.content();
        content.save_state();
        content.set_line_width(0.57);
        content.rect(rect.0, rect.1, rect.2, rect.3);
        content.stroke();
        content.restore_state();
    }

    /// Horizontal rule at height `y` between `x1` and `x2`.
    pub fn hline(&mut self, x1: f32, x2: f32, y: f32) {
        let y_pt = mm_to_pt(self.page_h - y);
        let (x1, x2) = (mm_to_pt(x1), mm_to_pt(x2));
        let content = self.content();
        content.save_state();
        content.set_line_width(0.57);
        content.move_to(x1, y_pt);
        content.line_to(x2, y_pt);
        content.stroke();
        content.restore_state();
    }

    /// Text written inside a box starting at the cursor. `w == 0` extends the
    /// box to the right margin. The cursor moves right by `w`, or to the start
    /// of the next line when `ln` is set.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, border: bool, ln: bool, align: Align) {
        let w = if w == 0.0 {
            self.page_w - self.margin - self.x
        } else {
            w
        };
        let (x, y) = (self.x, self.y);

        if border {
            self.draw_rect(x, y, w, h);
        }

        if !text.is_empty() {
            let tw = self.text_width(text);
            let tx = match align {
                Align::Left => x + self.cell_margin,
                Align::Center => x + (w - tw) / 2.0,
                Align::Right => x + w - self.cell_margin - tw,
            };
            // baseline sits a little below the vertical centre
            let baseline = y + h / 2.0 + 0.3 * self.font_size / PT_PER_MM;
            self.draw_text(tx, baseline, text);
        }

        if ln {
            self.ln(h);
        } else {
            self.x = x + w;
        }
    }

    /// Already wrapped lines stacked in one bordered box of `w` by `box_h`,
    /// one line every `line_h`. The cursor is left untouched.
    pub fn text_block(
        &mut self,
        w: f32,
        line_h: f32,
        box_h: f32,
        lines: &[String],
        border: bool,
        align: Align,
    ) {
        let (x, y) = (self.x, self.y);
        if border {
            self.draw_rect(x, y, w, box_h);
        }
        for (i, line) in lines.iter().enumerate() {
            self.set_xy(x, y + i as f32 * line_h);
            self.cell(w, line_h, line, false, false, align);
        }
        self.set_xy(x, y);
    }

    /// Close everything and return the document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.add_page();
        }
        self.finalize_page();

        // catalog and page tree are written once, at the end
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }
}
