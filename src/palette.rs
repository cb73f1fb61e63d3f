use egui::ecolor::rgb_from_hsv;
use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Shape and tint of the palette grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub hue_cells: usize,
    pub brightness_cells: usize,
    pub saturation: f32,
    pub opacity: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            hue_cells: 40,
            brightness_cells: 10,
            saturation: 1.0,
            opacity: 0.75,
        }
    }
}

/// The band spans the middle third of the viewport height.
const BAND_DIVISOR: f32 = 3.0;

/// A hue x brightness grid of precomputed colors, laid out across the full
/// viewport width in the middle third of its height. Rows go from black
/// (top) to full brightness (bottom), columns sweep the hue circle.
#[derive(Debug, Clone)]
pub struct Palette {
    hue_cells: usize,
    brightness_cells: usize,
    colors: Vec<Color32>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl Palette {
    pub fn new(config: PaletteConfig) -> Self {
        let hue_cells = config.hue_cells.max(1);
        let brightness_cells = config.brightness_cells.max(1);
        let alpha = (config.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let hue_step = 1.0 / (hue_cells.max(2) - 1) as f32;
        let brightness_step = 1.0 / (brightness_cells.max(2) - 1) as f32;

        let mut colors = Vec::with_capacity(hue_cells * brightness_cells);
        for row in 0..brightness_cells {
            let brightness = brightness_step * row as f32;
            for col in 0..hue_cells {
                let hue = hue_step * col as f32;
                let [r, g, b] = hsb_to_rgb(hue, config.saturation, brightness);
                colors.push(Color32::from_rgba_unmultiplied(r, g, b, alpha));
            }
        }

        Self {
            hue_cells,
            brightness_cells,
            colors,
        }
    }

    pub fn hue_cells(&self) -> usize {
        self.hue_cells
    }

    pub fn brightness_cells(&self) -> usize {
        self.brightness_cells
    }

    pub fn color(&self, row: usize, col: usize) -> Option<Color32> {
        if row >= self.brightness_cells || col >= self.hue_cells {
            return None;
        }
        self.colors.get(row * self.hue_cells + col).copied()
    }

    /// The band of the viewport covered by the grid.
    pub fn band(viewport: Vec2) -> Rect {
        Rect::from_min_max(
            Pos2::new(0.0, viewport.y / BAND_DIVISOR),
            Pos2::new(viewport.x, 2.0 * viewport.y / BAND_DIVISOR),
        )
    }

    fn cell_size(&self, viewport: Vec2) -> Vec2 {
        let band = Self::band(viewport);
        Vec2::new(
            band.width() / self.hue_cells as f32,
            band.height() / self.brightness_cells as f32,
        )
    }

    /// Screen rectangle of one cell, for painting.
    pub fn cell_rect(&self, row: usize, col: usize, viewport: Vec2) -> Rect {
        let band = Self::band(viewport);
        let cell = self.cell_size(viewport);
        Rect::from_min_size(
            Pos2::new(cell.x * col as f32, band.min.y + cell.y * row as f32),
            cell,
        )
    }

    /// Looks up the cell under `pt` for a viewport of `width` x `height`.
    /// Points outside the band (or the viewport width) give `None`.
    pub fn color_at(&self, pt: Pos2, width: f32, height: f32) -> Option<Color32> {
        let viewport = Vec2::new(width, height);
        let band = Self::band(viewport);
        let cell = self.cell_size(viewport);
        if cell.x <= 0.0 || cell.y <= 0.0 {
            return None;
        }

        let row = ((pt.y - band.min.y) / cell.y).floor();
        let col = (pt.x / cell.x).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        self.color(row as usize, col as usize)
    }
}

/// HSB (aka HSV) to 8-bit RGB, all inputs in `0..=1`; hue wraps.
///
/// Plain HSV math on gamma-space values, no linear-light round trip.
fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    let to_u8 = |v: f32| (v * 255.0 + 0.5) as u8;
    let [r, g, b] = rgb_from_hsv((hue, saturation, brightness));
    [to_u8(r), to_u8(g), to_u8(b)]
}
