use leafprint_render_core::{Document, DrawCommand, Page};
use leafprint_types::{Color, FontStyle, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, dictionary};

/// Fill opacities below 1.0 used anywhere in the document, each mapped to an
/// `ExtGState` resource named `GS1`, `GS2`, ...
#[derive(Debug, Default)]
pub(crate) struct OpacityStates {
    /// Opacity in thousandths, sorted.
    keys: Vec<u32>,
}

fn opacity_key(opacity: f32) -> u32 {
    (opacity.clamp(0.0, 1.0) * 1000.0).round() as u32
}

impl OpacityStates {
    pub(crate) fn collect(document: &Document) -> Self {
        let mut keys: Vec<u32> = document
            .pages()
            .iter()
            .flat_map(|page| page.commands())
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { opacity, .. } => Some(opacity_key(*opacity)),
                _ => None,
            })
            .filter(|&key| key < 1000)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn resource_name(&self, opacity: f32) -> Option<String> {
        let key = opacity_key(opacity);
        self.keys
            .binary_search(&key)
            .ok()
            .map(|index| format!("GS{}", index + 1))
    }

    pub(crate) fn to_dictionary(&self) -> Dictionary {
        let mut states = Dictionary::new();
        for (index, key) in self.keys.iter().enumerate() {
            let alpha = *key as f32 / 1000.0;
            states.set(
                format!("GS{}", index + 1),
                Object::Dictionary(dictionary! {
                    "Type" => "ExtGState",
                    "ca" => alpha,
                    "CA" => alpha,
                }),
            );
        }
        states
    }
}

#[derive(Default, Clone)]
struct PageRenderState {
    font: Option<(FontStyle, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit().into_iter().map(Object::from).collect()
}

/// Translates one page's draw commands into a content stream, skipping
/// redundant font and color operators.
pub(crate) struct PageContext<'a> {
    document: &'a Document,
    opacity: &'a OpacityStates,
    content: Content,
    state: PageRenderState,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(document: &'a Document, opacity: &'a OpacityStates) -> Self {
        Self {
            document,
            opacity,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn render(mut self, page: &Page) -> Content {
        for command in page.commands() {
            match command {
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    style,
                    size,
                    color,
                } => self.draw_text(text, *x, *y, *style, *size, *color),
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => self.draw_line(*from, *to, *width, *color),
                DrawCommand::Rect {
                    rect,
                    color,
                    opacity,
                } => self.draw_rect(rect, *color, *opacity),
            }
        }
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, style: FontStyle, size: f32) {
        if self.state.font != Some((style, size)) {
            let name = self.document.font(style).resource_name;
            self.push("Tf", vec![name.into(), size.into()]);
            self.state.font = Some((style, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        if self.state.stroke_color != Some(color) {
            self.push("RG", color_operands(color));
            self.state.stroke_color = Some(color);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: FontStyle, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(style, size);
        self.set_fill_color(color);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(text)]);
        self.push("ET", vec![]);
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.set_stroke(color, width);
        self.push("m", vec![from.0.into(), from.1.into()]);
        self.push("l", vec![to.0.into(), to.1.into()]);
        self.push("S", vec![]);
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color, opacity: f32) {
        let bounds = vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ];
        match self.opacity.resource_name(opacity) {
            // Translucent fills are isolated in q/Q so the tracked state
            // stays valid after the restore.
            Some(gs) => {
                self.push("q", vec![]);
                self.push("gs", vec![gs.as_str().into()]);
                self.push("rg", color_operands(color));
                self.push("re", bounds);
                self.push("f", vec![]);
                self.push("Q", vec![]);
            }
            None => {
                self.set_fill_color(color);
                self.push("re", bounds);
                self.push("f", vec![]);
            }
        }
    }
}
