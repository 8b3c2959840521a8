use palette::Srgb;

pub type Color = Srgb<u8>;

/// State outlines
pub const BOUNDARY_OUTLINE: Color = Srgb::new(0x80, 0x8B, 0x96);
/// Station markers and route lines
pub const STATION: Color = Srgb::new(0x85, 0xC1, 0xE9);
pub const ROUTE: Color = STATION;
pub const DESTINATION: Color = Srgb::new(0xD3, 0x54, 0x00);
pub const ORIGIN: Color = Srgb::new(0x7D, 0x3C, 0x98);

/// `#RRGGBB`, the form plotly accepts
pub fn to_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Marker size in screen pixels, plotly's default when unset
    pub size: Option<f64>,
    pub opacity: Option<f64>,
}

impl Style {
    pub fn solid_color(color: Color) -> Self {
        Self {
            color,
            size: None,
            opacity: None,
        }
    }

    pub fn with_size(mut self, pixels: f64) -> Self {
        self.size = Some(pixels);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}
