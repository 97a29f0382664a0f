//! Scene mini-language.
//!
//! A scene is a list of records separated by `;` and/or newlines:
//!
//! ```text
//! v,x,y,r,g,b   - declare a vertex (index = declaration order, from 0)
//! l,i,j         - line between vertices i and j
//! t,i,j,k       - triangle among vertices i, j, k (order sets the winding)
//! ```
//!
//! Blank records are ignored and whitespace around fields is trimmed. Draw
//! records may only refer to vertices declared before them.
//!
//! # Example
//!
//! ```rust
//! use trirast::scene::{Command, Scene};
//!
//! let scene = Scene::parse("v,0,0,1,0,0; v,8,0,0,0,1; l,0,1;").unwrap();
//! assert_eq!(scene.vertices().len(), 2);
//! assert_eq!(scene.commands(), &[Command::Line(0, 1)]);
//! ```

use std::str::FromStr;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Vertex;
use crate::render::{draw_line, draw_triangle, PixelSink};

/// Canvas size the built-in scene is laid out for.
pub const DEFAULT_SIZE: u32 = 64;

/// Built-in demo scene: a gradient background, a red panel with the letters
/// F, U and S drawn as lines, and a gray butterfly made of two triangles.
pub const DEFAULT_SCENE: &str = "\
v,0,0,0.5,0.0,0.5;
v,64,0,0.0,0.5,0.0;
v,64,64,0.0,0.0,0.5;
v,0,64,0.0,0.5,0.5;
t,0,1,2;
t,2,3,0;
v,11,11,0.8,0.0,0.1;
v,55,11,0.8,0.0,0.1;
v,55,39,0.8,0.0,0.1;
v,11,39,0.8,0.0,0.1;
t,4,5,6;
t,4,6,7;
v,28,15,1.0,1.0,1.0;
v,38,15,1.0,1.0,1.0;
v,28,25,1.0,1.0,1.0;
v,38,25,1.0,1.0,1.0;
v,28,35,1.0,1.0,1.0;
l,8,9;
l,8,12;
l,10,11;
v,41,15,1.0,1.0,1.0;
v,51,15,1.0,1.0,1.0;
v,41,35,1.0,1.0,1.0;
v,51,35,1.0,1.0,1.0;
l,13,15;
l,14,16;
l,15,16;
v,15,15,1.0,1.0,1.0;
v,25,15,1.0,1.0,1.0;
v,15,25,1.0,1.0,1.0;
v,25,25,1.0,1.0,1.0;
v,15,35,1.0,1.0,1.0;
v,25,35,1.0,1.0,1.0;
l,17,18;
l,19,20;
l,17,19;
l,21,22;
l,20,22;
v,11,45,0.0,0.0,0.0;
v,11,55,0.0,0.0,0.0;
v,33,50,1.0,1.0,1.0;
v,55,45,0.0,0.0,0.0;
v,55,55,0.0,0.0,0.0;
t,23,24,25;
t,27,25,26;
";

/// A draw command referring to vertices by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Line between two vertices.
    Line(usize, usize),
    /// Triangle among three vertices, in winding order.
    Triangle(usize, usize, usize),
}

/// A parsed scene: declared vertices and the draw commands in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    vertices: Vec<Vertex>,
    commands: Vec<Command>,
}

impl Scene {
    /// Parse scene source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for an unknown record kind, a wrong field
    /// count or an unparsable number, and [`Error::VertexIndex`] for a draw
    /// record naming a vertex that has not been declared yet.
    pub fn parse(source: &str) -> Result<Self> {
        let mut scene = Self::default();

        let records = source
            .split([';', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty());

        for (n, record) in records.enumerate() {
            scene.push_record(n + 1, record)?;
        }

        log::debug!(
            "parsed scene: {} vertices, {} commands",
            scene.vertices.len(),
            scene.commands.len()
        );
        Ok(scene)
    }

    fn push_record(&mut self, record: usize, text: &str) -> Result<()> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let (kind, args) = (fields[0], &fields[1..]);

        match kind {
            "v" => {
                let [x, y, r, g, b] = parse_numbers::<f32, 5>(record, args)?;
                self.vertices.push(Vertex::from_parts(x, y, r, g, b));
            }
            "l" => {
                let [i, j] = parse_numbers::<usize, 2>(record, args)?;
                self.check_indices(record, &[i, j])?;
                self.commands.push(Command::Line(i, j));
            }
            "t" => {
                let [i, j, k] = parse_numbers::<usize, 3>(record, args)?;
                self.check_indices(record, &[i, j, k])?;
                self.commands.push(Command::Triangle(i, j, k));
            }
            other => {
                return Err(Error::parse(record, format!("unknown record kind '{other}'")));
            }
        }

        Ok(())
    }

    fn check_indices(&self, record: usize, indices: &[usize]) -> Result<()> {
        let declared = self.vertices.len();
        match indices.iter().find(|&&index| index >= declared) {
            Some(&index) => Err(Error::VertexIndex {
                record,
                index,
                declared,
            }),
            None => Ok(()),
        }
    }

    /// Declared vertices, in declaration order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Draw commands, in source order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Issue every draw command against `sink`, in order.
    pub fn render<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        let v = &self.vertices;
        for command in &self.commands {
            match *command {
                Command::Line(i, j) => draw_line(sink, v[i], v[j]),
                Command::Triangle(i, j, k) => draw_triangle(sink, v[i], v[j], v[k]),
            }
        }
    }
}

impl FromStr for Scene {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse exactly `N` comma-separated fields as numbers.
fn parse_numbers<T: FromStr, const N: usize>(record: usize, args: &[&str]) -> Result<[T; N]> {
    if args.len() != N {
        return Err(Error::parse(
            record,
            format!("expected {N} fields, found {}", args.len()),
        ));
    }

    let parsed = args
        .iter()
        .map(|field| {
            field
                .parse::<T>()
                .map_err(|_| Error::parse(record, format!("invalid number: '{field}'")))
        })
        .collect::<Result<Vec<T>>>()?;

    parsed
        .try_into()
        .map_err(|_| Error::parse(record, format!("expected {N} fields")))
}

/// Parse a scene and render it onto a fresh black `width`×`height` canvas.
///
/// # Errors
///
/// Returns an error if parsing fails or the dimensions are zero.
///
/// # Example
///
/// ```rust
/// use trirast::scene::{from_scene, DEFAULT_SCENE, DEFAULT_SIZE};
///
/// let fb = from_scene(DEFAULT_SCENE, DEFAULT_SIZE, DEFAULT_SIZE).unwrap();
/// assert_eq!(fb.width(), 64);
/// ```
pub fn from_scene(source: &str, width: u32, height: u32) -> Result<Framebuffer> {
    let scene = Scene::parse(source)?;
    let mut fb = Framebuffer::new(width, height)?;
    fb.clear(Rgba::BLACK);
    scene.render(&mut fb);
    Ok(fb)
}
