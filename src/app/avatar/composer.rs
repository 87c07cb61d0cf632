use std::fmt;

use super::color::{Color, Palette};

/// Pixel size of one grid cell.
pub const CELL: i32 = 16;
/// Cells per side.
pub const GRID: i32 = 32;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Face,
    Hair,
    Sclera,
    Pupil,
    Mouth,
    Beard,
    Mustache,
}

/// An opaque filled square, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub part: Part,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub width: i32,
    pub height: i32,
    pub palette: Palette,
    /// Painted in order over the background, last write wins.
    pub commands: Vec<DrawCommand>,
}

impl Avatar {
    pub fn compose(name: &str) -> Self {
        Self::compose_bytes(name.as_bytes())
    }

    /// Composes from the raw bytes of a name, which need not be UTF-8.
    pub fn compose_bytes(name: &[u8]) -> Self {
        let palette = Palette::for_name_bytes(name);
        let mut canvas = Canvas::default();

        let (cx, cy) = (GRID / 2, GRID / 2);
        let radius = GRID / 3;

        // Face
        for y in 0..GRID {
            for x in 0..GRID {
                let (dx, dy) = (x - cx, y - cy);
                if f64::from(dx * dx + dy * dy).sqrt() < f64::from(radius) {
                    canvas.cell(Part::Face, x, y, palette.skin);
                }
            }
        }

        // Hair
        let hair_span = (cx - radius / 2)..=(cx + radius / 2);
        for y in (cy - radius)..(cy - radius / 2) {
            for x in hair_span.clone() {
                canvas.cell(Part::Hair, x, y, palette.hair);
            }
        }
        for x in hair_span {
            canvas.cell(Part::Hair, x, cy - radius - 1, palette.hair);
        }

        // Eyes, left one sits a row higher
        for (x, y) in [(cx - 4, cy - 1), (cx + 2, cy)] {
            canvas.cell(Part::Sclera, x, y, Color::WHITE);
            canvas.pupil(x, y);
        }

        // Mouth
        for x in (cx - 1)..=(cx + 1) {
            canvas.cell(Part::Mouth, x, cy + 4, Color::CRIMSON);
        }

        // Beard
        for x in (cx - 3)..=(cx + 3) {
            canvas.cell(Part::Beard, x, cy + 5, palette.beard);
        }

        // Mustache with curled tips
        for x in (cx - 2)..=(cx + 2) {
            canvas.cell(Part::Mustache, x, cy + 2, palette.beard);
        }
        canvas.cell(Part::Mustache, cx - 3, cy + 1, palette.beard);
        canvas.cell(Part::Mustache, cx + 3, cy + 1, palette.beard);

        Avatar {
            width: GRID * CELL,
            height: GRID * CELL,
            palette,
            commands: canvas.commands,
        }
    }

    pub fn parts(&self, part: Part) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |cmd| cmd.part == part)
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NS, self.width, self.height
        )?;
        write!(
            f,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.palette.background
        )?;

        for cmd in &self.commands {
            write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                cmd.x, cmd.y, cmd.size, cmd.size, cmd.fill
            )?;
        }

        f.write_str("</svg>")
    }
}

/// Renders the avatar for `name` as an SVG document.
///
/// Performs no validation; an empty name is a valid seed.
pub fn compose_avatar(name: &str) -> String {
    Avatar::compose(name).to_string()
}

#[derive(Default)]
struct Canvas {
    commands: Vec<DrawCommand>,
}

impl Canvas {
    fn cell(&mut self, part: Part, x: i32, y: i32, fill: Color) {
        self.commands.push(DrawCommand {
            part,
            x: x * CELL,
            y: y * CELL,
            size: CELL,
            fill,
        });
    }

    /// Half-cell black square anchored at the cell's top-left corner.
    fn pupil(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand {
            part: Part::Pupil,
            x: x * CELL,
            y: y * CELL,
            size: CELL / 2,
            fill: Color::BLACK,
        });
    }
}
