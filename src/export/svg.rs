//! Standalone SVG documents for saving to disk.

use crate::cubes::CubePattern;
use crate::layout::cell_bounds;
use crate::model::{Module, MosaicState, Orientation, Position, Site};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="no"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const MASK_ID: &str = "site-mask";

/// Renders every cell of the mosaic as two triangles, with the site's masked
/// regions blanked out.
pub fn mosaic_svg(state: &MosaicState, site: &Site, default_color: &str) -> String {
    let config = &state.config;
    let width = fmt_num(config.width());
    let height = fmt_num(config.height());
    let tile = config.tile_width();
    let spacing = config.spacing();

    let mut out = String::with_capacity(config.n_rows() * config.n_cols() * 256);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!(
        "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    ));

    out.push_str(&format!("<mask id=\"{MASK_ID}\">"));
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#fff\"/>"
    ));
    for region in &site.masked {
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"black\"/>",
            fmt_num(region.x0),
            fmt_num(region.y0),
            fmt_num(region.width()),
            fmt_num(region.height()),
        ));
    }
    out.push_str("</mask>");

    out.push_str(&format!("<g mask=\"url(#{MASK_ID})\">"));
    let blank = Module::new(default_color, default_color, Orientation::Nw);
    for row in 0..config.n_rows() {
        for col in 0..config.n_cols() {
            let position = Position::new(row, col);
            let module = state.grid.get(position).unwrap_or(&blank);
            let bounds = cell_bounds(config, state.offset, position);
            let (first, second) =
                triangles(bounds.x0, bounds.y0, tile, spacing, module.orientation);

            out.push_str(&format!("<g data-position=\"{}, {}\">", col, row));
            for (points, color) in [(first, &module.colors[0]), (second, &module.colors[1])] {
                let fill = state.fill_for(color, default_color);
                out.push_str(&format!(
                    "<polygon points=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"0\"/>",
                    points_attr(&points),
                    escape_attr(&fill),
                ));
            }
            out.push_str("</g>");
        }
    }
    out.push_str("</g></svg>");
    out
}

/// Renders a cube pattern; each face is rotated about its own origin.
pub fn cube_svg(pattern: &CubePattern) -> String {
    let width = fmt_num(pattern.width);
    let height = fmt_num(pattern.height);

    let mut out = String::with_capacity(pattern.cubes.len() * 3 * 160);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!(
        "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    ));
    for face in pattern.cubes.iter().flat_map(|cube| cube.faces.iter()) {
        let points: Vec<(f64, f64)> = face.points().iter().map(|p| (p.x, p.y)).collect();
        out.push_str(&format!(
            "<polygon fill=\"{}\" points=\"{}\" transform=\"rotate({},{},{})\"/>",
            escape_attr(&face.fill),
            points_attr(&points),
            fmt_num(face.rotation),
            fmt_num(face.origin.x),
            fmt_num(face.origin.y),
        ));
    }
    out.push_str("</svg>");
    out
}

/// Corners of the two triangles of a module whose top-left is `(x, y)`.
///
/// The second triangle is shifted right by one grout width, which leaves the
/// diagonal grout line between them.
fn triangles(
    x: f64,
    y: f64,
    tile: f64,
    spacing: f64,
    orientation: Orientation,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    match orientation {
        Orientation::Sw => (
            vec![(x, y), (x + tile, y), (x, y + tile)],
            vec![
                (x + tile + spacing, y),
                (x + tile + spacing, y + tile),
                (x + spacing, y + tile),
            ],
        ),
        Orientation::Nw => (
            vec![(x, y), (x, y + tile), (x + tile, y + tile)],
            vec![
                (x + spacing, y),
                (x + tile + spacing, y),
                (x + tile + spacing, y + tile),
            ],
        ),
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rounds to thousandths and drops trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubes::CubeSettings;
    use crate::layout::{compute_grid, compute_offset};
    use crate::model::{AnchorX, AnchorY, Grid, LayoutConfig, Palette};

    fn state() -> MosaicState {
        let config = LayoutConfig {
            width_in: 12.0,
            height_in: 4.0,
            tile_width_in: 4.0,
            spacing_in: 0.125,
            anchor_x: AnchorX::Left,
            anchor_y: AnchorY::Top,
        };
        let grid = compute_grid(&config).unwrap();
        MosaicState {
            offset: compute_offset(&config),
            config,
            grid,
            palette: Palette::mosaic(),
            selected_color: "ember".to_string(),
        }
    }

    #[test]
    fn test_document_structure() {
        let state = state();
        let svg = mosaic_svg(&state, &Site::open(&state.config), "tusk");
        assert!(svg.starts_with(
            "<?xml version=\"1.0\" standalone=\"no\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\""
        ));
        assert!(svg.ends_with("</g></svg>"));
        assert!(svg.contains("viewBox=\"0 0 864 288\""));
        assert_eq!(svg.matches("<polygon").count(), 6);
        assert_eq!(svg.matches("fill=\"#d1d1d1\"").count(), 6);
    }

    #[test]
    fn test_triangle_coordinates() {
        let mut state = state();
        state.grid = Grid::from_rows(vec![vec![
            Module::new("ember", "tidewater", Orientation::Nw),
            Module::new("tusk", "tusk", Orientation::Sw),
        ]]);
        let svg = mosaic_svg(&state, &Site::open(&state.config), "tusk");
        // nw at the origin: tile 288, grout 9
        assert!(svg.contains("<polygon points=\"0,0 0,288 288,288\" fill=\"#e06f67\""));
        assert!(svg.contains("<polygon points=\"9,0 297,0 297,288\" fill=\"#688b83\""));
        // sw in the second column, which starts at 306
        assert!(svg.contains("<polygon points=\"306,0 594,0 306,288\""));
        assert!(svg.contains("<polygon points=\"603,0 603,288 315,288\""));
        // third column has no module and falls back to the default color
        assert!(svg.contains("data-position=\"2, 0\""));
    }

    #[test]
    fn test_mask_from_site() {
        let state = state();
        let site = Site {
            visible: vec![],
            masked: vec![crate::model::Rect::from_inches(0.0, 0.0, 2.0, 1.0)],
        };
        let svg = mosaic_svg(&state, &site, "tusk");
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"144\" height=\"72\" fill=\"black\"/>"));
        assert!(svg.contains("<g mask=\"url(#site-mask)\">"));
    }

    #[test]
    fn test_unknown_color_falls_back_to_default() {
        let mut state = state();
        state.grid = Grid::from_rows(vec![vec![Module::new(
            "chartreuse",
            "tusk",
            Orientation::Nw,
        )]]);
        let svg = mosaic_svg(&state, &Site::open(&state.config), "tusk");
        assert!(!svg.contains("chartreuse"));
        assert_eq!(svg.matches("fill=\"#d1d1d1\"").count(), 6);
    }

    #[test]
    fn test_cube_svg() {
        let settings = CubeSettings {
            columns: 2,
            rows: 2,
            ..CubeSettings::default()
        };
        let pattern = CubePattern::generate(3, &settings, &Palette::cubes());
        let svg = cube_svg(&pattern);
        assert!(svg.contains("viewBox=\"0 0 800 300\""));
        assert_eq!(svg.matches("<polygon").count(), 12);
        assert!(svg.contains("transform=\"rotate(60,"));
        assert!(svg.contains("transform=\"rotate(-60,"));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(261.0), "261");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(17.320508), "17.321");
        assert_eq!(fmt_num(-45.0), "-45");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a<\"b\"&c>"), "a&lt;&quot;b&quot;&amp;c&gt;");
    }
}
