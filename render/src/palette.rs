//! Colors and point markers.
use strum::{Display, EnumCount, VariantArray};

use mmreport_types::Series;

//---------------------------------------------------------------------------------------------------- Color
/// A named color, with the same RGB values as the CSS color of that name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Brown,
    Black,
}

impl Color {
    /// `(red, green, blue)`.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0, 0, 255),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 128, 0),
            Self::Orange => (255, 165, 0),
            Self::Purple => (128, 0, 128),
            Self::Brown => (165, 42, 42),
            Self::Black => (0, 0, 0),
        }
    }
}

/// The color a [`Series`] is drawn in on single-group charts.
pub const fn series_color(series: Series) -> Color {
    match series {
        Series::Threaded => Color::Blue,
        Series::Async => Color::Red,
    }
}

//---------------------------------------------------------------------------------------------------- Marker
/// The shape drawn at every data point of a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumCount, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    TriangleDown,
    TriangleLeft,
}

impl Marker {
    /// The polygon outlining this marker, relative to the data point.
    ///
    /// `radius` is the distance from the center to the farthest vertex.
    /// Coordinates are in backend space: `y` grows downwards.
    pub fn vertices(self, radius: f64) -> Vec<(f64, f64)> {
        let r = radius;
        let sin_60 = 3.0_f64.sqrt() / 2.0;
        match self {
            Self::Circle => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = std::f64::consts::TAU * f64::from(i) / f64::from(CIRCLE_SEGMENTS);
                    (r * angle.cos(), r * angle.sin())
                })
                .collect(),
            Self::Square => {
                let h = r * std::f64::consts::FRAC_1_SQRT_2;
                vec![(-h, -h), (h, -h), (h, h), (-h, h)]
            }
            Self::TriangleUp => vec![(0.0, -r), (r * sin_60, r / 2.0), (-r * sin_60, r / 2.0)],
            Self::Diamond => vec![(0.0, -r), (r * 0.7, 0.0), (0.0, r), (-r * 0.7, 0.0)],
            Self::TriangleDown => vec![(0.0, r), (-r * sin_60, -r / 2.0), (r * sin_60, -r / 2.0)],
            Self::TriangleLeft => vec![(-r, 0.0), (r / 2.0, -r * sin_60), (r / 2.0, r * sin_60)],
        }
    }
}

/// Number of polygon sides used to draw a [`Marker::Circle`].
const CIRCLE_SEGMENTS: u32 = 24;

//---------------------------------------------------------------------------------------------------- Palette
/// The (color, marker) combinations cycled through on comparison charts.
pub const PALETTE: [(Color, Marker); Marker::COUNT] = [
    (Color::Blue, Marker::Circle),
    (Color::Red, Marker::Square),
    (Color::Green, Marker::TriangleUp),
    (Color::Orange, Marker::Diamond),
    (Color::Purple, Marker::TriangleDown),
    (Color::Brown, Marker::TriangleLeft),
];

/// The style of the `index`th line on a comparison chart.
///
/// ```rust
/// # use mmreport_render::palette::{cycle, Color, Marker, PALETTE};
/// assert_eq!(cycle(0), (Color::Blue, Marker::Circle));
/// assert_eq!(cycle(PALETTE.len() + 2), cycle(2));
/// ```
pub const fn cycle(index: usize) -> (Color, Marker) {
    PALETTE[index % PALETTE.len()]
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_uses_every_marker_once() {
        for marker in Marker::VARIANTS {
            assert_eq!(PALETTE.iter().filter(|(_, m)| m == marker).count(), 1);
        }
    }

    #[test]
    fn vertices_stay_inside_radius() {
        for marker in Marker::VARIANTS {
            let vertices = marker.vertices(5.0);
            assert!(vertices.len() >= 3, "{marker}");
            for (x, y) in vertices {
                assert!(x.hypot(y) <= 5.0 + 1e-9, "{marker}: ({x}, {y})");
            }
        }
    }

    #[test]
    fn series_colors_differ() {
        assert_eq!(series_color(Series::Threaded), Color::Blue);
        assert_eq!(series_color(Series::Async), Color::Red);
    }
}
