use std::collections::{BTreeMap, BTreeSet};

/// Kenneth Kelly's high contrast colors, minus white and black.
/// From http://eleanormaclure.files.wordpress.com/2011/03/colour-coding.pdf
pub const KELLY_COLORS: [&str; 20] = [
    "#FFB300", // Vivid Yellow
    "#803E75", // Strong Purple
    "#FF6800", // Vivid Orange
    "#A6BDD7", // Very Light Blue
    "#C10020", // Vivid Red
    "#CEA262", // Grayish Yellow
    "#817066", // Medium Gray
    "#007D34", // Vivid Green
    "#F6768E", // Strong Purplish Pink
    "#00538A", // Strong Blue
    "#FF7A5C", // Strong Yellowish Pink
    "#53377A", // Strong Violet
    "#FF8E00", // Vivid Orange Yellow
    "#B32851", // Strong Purplish Red
    "#F4C800", // Vivid Greenish Yellow
    "#7F180D", // Strong Reddish Brown
    "#93AA00", // Vivid Yellowish Green
    "#593315", // Deep Yellowish Brown
    "#F13A13", // Vivid Reddish Orange
    "#232C16", // Dark Olive Green
];

const AUTO_SATURATION: f64 = 0.3;
const AUTO_VALUE: f64 = 1.0;

/// How colors are picked for resource types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteStrategy {
    /// Spread hues evenly around the color wheel.
    #[default]
    Auto,
    /// Cycle through [`KELLY_COLORS`].
    Kelly,
}

/// Resource type -> `#RRGGBB` color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Assign a color to each distinct resource type. Types are handled in sorted
    /// order, so the same set of types always gets the same colors.
    pub fn assign<'a, I>(types: I, strategy: PaletteStrategy) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let types: BTreeSet<&str> = types.into_iter().collect();
        let colors = match strategy {
            PaletteStrategy::Auto => {
                log::info!("using automatically generated color palette");
                let n = types.len();
                types
                    .into_iter()
                    .enumerate()
                    .map(|(i, ty)| {
                        let hue = i as f64 / n as f64;
                        (ty.to_owned(), hex(hsv_to_rgb(hue, AUTO_SATURATION, AUTO_VALUE)))
                    })
                    .collect()
            }
            PaletteStrategy::Kelly => {
                log::info!("using kelly color palette");
                types
                    .into_iter()
                    .zip(KELLY_COLORS.iter().cycle())
                    .map(|(ty, color)| (ty.to_owned(), (*color).to_owned()))
                    .collect()
            }
        };
        Self { colors }
    }

    /// Color for `resource_type`, if it was in the set the palette was built from.
    pub fn get(&self, resource_type: &str) -> Option<&str> {
        self.colors.get(resource_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Convert hue, saturation, and value in `[0, 1]` to red, green, and blue in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Format a `[0, 1]` rgb triple as `#RRGGBB`, truncating each channel.
fn hex((r, g, b): (f64, f64, f64)) -> String {
    let channel = |x: f64| (255.0 * x) as u8;
    format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
}
