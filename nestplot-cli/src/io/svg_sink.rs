use std::mem;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::debug;
use nestplot::geometry::primitives::Point;
use nestplot::render::{Color, DrawingSink, ShapeStyle};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path as SvgPath};

use crate::io::write_svg;

/// Collects one SVG document per page and writes them to `<folder>/<stem>_<number>.svg`
pub struct SvgPageSink {
    folder: PathBuf,
    stem: String,
    current: Option<OpenPage>,
    pages: Vec<(usize, Document)>,
}

struct OpenPage {
    number: usize,
    document: Document,
    /// Flips the y-axis, so layout coordinates (y pointing up) render upright
    content: Group,
}

impl SvgPageSink {
    pub fn new(folder: &Path, stem: &str) -> Self {
        Self {
            folder: folder.to_path_buf(),
            stem: stem.to_owned(),
            current: None,
            pages: vec![],
        }
    }

    pub fn page_path(&self, number: usize) -> PathBuf {
        self.folder.join(format!("{}_{}.svg", self.stem, number))
    }

    /// Finished pages, in the order they were drawn
    pub fn pages(&self) -> &[(usize, Document)] {
        &self.pages
    }

    fn open_page(&mut self) -> Result<&mut OpenPage> {
        self.current
            .as_mut()
            .context("draw call outside of begin_page/end_page")
    }

    fn add_to_page(&mut self, path: SvgPath) -> Result<()> {
        let page = self.open_page()?;
        let content = mem::replace(&mut page.content, Group::new());
        page.content = content.add(path);
        Ok(())
    }
}

impl DrawingSink for SvgPageSink {
    fn begin_page(&mut self, number: usize, width: f64, height: f64) -> Result<()> {
        if let Some(open) = &self.current {
            bail!("page {} is still open, cannot begin page {number}", open.number);
        }
        let document = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", format!("{width}"))
            .set("height", format!("{height}"));
        let content = Group::new()
            .set("id", format!("bin_{number}"))
            .set("transform", format!("translate(0 {height}) scale(1 -1)"));
        self.current = Some(OpenPage {
            number,
            document,
            content,
        });
        Ok(())
    }

    fn draw_polygon(&mut self, vertices: &[Point], style: &ShapeStyle) -> Result<()> {
        let Some(data) = polyline_data(vertices) else {
            return Ok(());
        };
        let fill = style.fill.map_or("none".to_owned(), |c| c.to_string());
        let path = data_to_path(
            data.close(),
            &[
                ("fill", &*fill),
                ("fill-opacity", &*format!("{}", style.fill_opacity)),
                ("stroke", &*style.stroke.to_string()),
                ("stroke-width", &*format!("{}", style.stroke_width)),
            ],
        );
        self.add_to_page(path)
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f64) -> Result<()> {
        let Some(data) = polyline_data(points) else {
            return Ok(());
        };
        let path = data_to_path(
            data,
            &[
                ("fill", "none"),
                ("stroke", &*color.to_string()),
                ("stroke-width", &*format!("{width}")),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ],
        );
        self.add_to_page(path)
    }

    fn end_page(&mut self) -> Result<()> {
        let page = self.current.take().context("no page to end")?;
        debug!("[SVG] page {} complete", page.number);
        self.pages
            .push((page.number, page.document.add(page.content)));
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if let Some(open) = &self.current {
            bail!("page {} was never ended", open.number);
        }
        for (number, document) in &self.pages {
            write_svg(document, &self.page_path(*number))?;
        }
        Ok(())
    }
}

fn polyline_data(points: &[Point]) -> Option<Data> {
    let (first, rest) = points.split_first()?;
    let data = Data::new().move_to(svg_coords(*first));
    Some(rest.iter().fold(data, |data, p| data.line_to(svg_coords(*p))))
}

fn svg_coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

fn data_to_path(data: Data, params: &[(&str, &str)]) -> SvgPath {
    params
        .iter()
        .fold(SvgPath::new(), |path, (key, value)| path.set(*key, *value))
        .set("d", data)
}
