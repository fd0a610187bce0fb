//! Render command output.
//!
//! Widgets push [`RenderCommand`]s; the host either draws them directly or
//! takes the tessellated [`UIVertex`] quads for filled rects.

use crate::layout::Rect;
use crate::style::Color;

/// Horizontal anchoring of a text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `x` is the left edge of the text.
    #[default]
    Left,
    /// `x` is the horizontal center of the text.
    Center,
}

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Single line of text, vertically centered on `y`.
    Text {
        /// Text content.
        text: String,
        /// X anchor, see `align`.
        x: f32,
        /// Vertical center.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// How `x` anchors the text.
        align: TextAlign,
    },
}

impl RenderCommand {
    /// Returns the text of a [`RenderCommand::Text`].
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// All commands of one frame.
#[derive(Debug, Clone, Default)]
pub struct UIBatch {
    /// Commands in submission order.
    pub commands: Vec<RenderCommand>,
}

impl UIBatch {
    /// Iterates over the text of every text command.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(RenderCommand::text)
    }

    /// Tessellates every filled rect into two triangles.
    ///
    /// Outlines and text are left to the host's text and line renderers.
    #[must_use]
    pub fn vertices(&self) -> Vec<UIVertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            if let RenderCommand::Rect { bounds, color, .. } = command {
                let color = color.to_array();
                let (x0, y0, x1, y1) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
                vertices.extend_from_slice(&[
                    UIVertex::new(x0, y0, 0.0, 0.0, color),
                    UIVertex::new(x1, y0, 1.0, 0.0, color),
                    UIVertex::new(x1, y1, 1.0, 1.0, color),
                    UIVertex::new(x0, y0, 0.0, 0.0, color),
                    UIVertex::new(x1, y1, 1.0, 1.0, color),
                    UIVertex::new(x0, y1, 0.0, 1.0, color),
                ]);
            }
        }
        vertices
    }
}

/// Collects the commands of one frame.
#[derive(Debug, Default)]
pub struct UIRenderer {
    /// Commands pushed since `begin_frame`.
    commands: Vec<RenderCommand>,
    /// Last finished frame.
    batch: UIBatch,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            batch: UIBatch::default(),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Mutable access to the pending command list, for `Widget::render`.
    pub fn commands_mut(&mut self) -> &mut Vec<RenderCommand> {
        &mut self.commands
    }

    /// Returns the number of pending commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Ends the frame and returns its batch.
    pub fn end_frame(&mut self) -> &UIBatch {
        self.batch.commands = std::mem::take(&mut self.commands);
        &self.batch
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}
