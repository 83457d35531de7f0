use std::collections::HashMap;

/// Pixel size of the square painting sheet.
const SHEET_PIXELS: f32 = 256.0;
/// Pixels per block edge on the painting sheet.
const BLOCK_PIXELS: f32 = 16.0;

/// Geometry and sheet rectangle for one painting motive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintingInfo {
    /// Width in blocks.
    pub size_x: f32,
    /// Height in blocks.
    pub size_y: f32,
    /// Normalized left edge on the painting sheet.
    pub offset_x: f32,
    /// Normalized top edge on the painting sheet.
    pub offset_y: f32,
    /// Normalized width on the painting sheet.
    pub tex_width: f32,
    /// Normalized height on the painting sheet.
    pub tex_height: f32,
    /// Blocks between the anchor tile and the painting's leading edge.
    pub center_x: f32,
    /// Blocks between the anchor tile and the painting's top edge.
    pub center_y: f32,
}

impl PaintingInfo {
    /// Describe a motive by its pixel rectangle on the painting sheet.
    pub fn from_pixels(x: u16, y: u16, width: u16, height: u16) -> Self {
        let blocks_x = width / 16;
        let blocks_y = height / 16;
        Self {
            size_x: f32::from(width) / BLOCK_PIXELS,
            size_y: f32::from(height) / BLOCK_PIXELS,
            offset_x: f32::from(x) / SHEET_PIXELS,
            offset_y: f32::from(y) / SHEET_PIXELS,
            tex_width: f32::from(width) / SHEET_PIXELS,
            tex_height: f32::from(height) / SHEET_PIXELS,
            center_x: f32::from(blocks_x / 2),
            center_y: f32::from(blocks_y / 2),
        }
    }
}

/// Painting motives keyed by lower-cased name, plus the shared back panel.
#[derive(Debug, Clone)]
pub struct PaintingTable {
    motives: HashMap<String, PaintingInfo>,
    back: PaintingInfo,
}

impl PaintingTable {
    /// Build a table from explicit entries.
    pub fn new(
        motives: impl IntoIterator<Item = (String, PaintingInfo)>,
        back: PaintingInfo,
    ) -> Self {
        Self {
            motives: motives
                .into_iter()
                .map(|(name, info)| (name.to_ascii_lowercase(), info))
                .collect(),
            back,
        }
    }

    /// The classic motive set laid out on a 256x256 sheet.
    pub fn classic() -> Self {
        const MOTIVES: [(&str, u16, u16, u16, u16); 25] = [
            ("kebab", 0, 0, 16, 16),
            ("aztec", 16, 0, 16, 16),
            ("alban", 32, 0, 16, 16),
            ("aztec2", 48, 0, 16, 16),
            ("bomb", 64, 0, 16, 16),
            ("plant", 80, 0, 16, 16),
            ("wasteland", 96, 0, 16, 16),
            ("pool", 0, 32, 32, 16),
            ("courbet", 32, 32, 32, 16),
            ("sea", 64, 32, 32, 16),
            ("sunset", 96, 32, 32, 16),
            ("creebet", 128, 32, 32, 16),
            ("wanderer", 0, 64, 16, 32),
            ("graham", 16, 64, 16, 32),
            ("match", 0, 128, 32, 32),
            ("bust", 32, 128, 32, 32),
            ("stage", 64, 128, 32, 32),
            ("void", 96, 128, 32, 32),
            ("skullandroses", 128, 128, 32, 32),
            ("fighters", 0, 96, 64, 32),
            ("pointer", 0, 192, 64, 64),
            ("pigscene", 64, 192, 64, 64),
            ("burningskull", 128, 192, 64, 64),
            ("skeleton", 192, 64, 64, 48),
            ("donkeykong", 192, 112, 64, 48),
        ];
        Self::new(
            MOTIVES.iter().map(|&(name, x, y, w, h)| {
                (name.to_string(), PaintingInfo::from_pixels(x, y, w, h))
            }),
            PaintingInfo::from_pixels(192, 0, 16, 16),
        )
    }

    /// Look up a motive, ignoring case.
    pub fn get(&self, name: &str) -> Option<&PaintingInfo> {
        self.motives.get(&name.to_ascii_lowercase())
    }

    /// Sheet rectangle used for the back and edges of every painting.
    pub fn back(&self) -> &PaintingInfo {
        &self.back
    }

    /// Number of known motives.
    pub fn len(&self) -> usize {
        self.motives.len()
    }

    /// True when no motives are known.
    pub fn is_empty(&self) -> bool {
        self.motives.is_empty()
    }
}

impl Default for PaintingTable {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let table = PaintingTable::classic();
        assert_eq!(table.len(), 25);
        assert!(table.get("SkullAndRoses").is_some());
        assert!(table.get("DonkeyKong").is_some());
        assert!(table.get("Mona Lisa").is_none());
    }

    #[test]
    fn sizes_follow_pixel_rects() {
        let table = PaintingTable::classic();
        let fighters = table.get("Fighters").expect("known motive");
        assert_eq!((fighters.size_x, fighters.size_y), (4.0, 2.0));
        assert_eq!((fighters.center_x, fighters.center_y), (2.0, 1.0));
        assert_eq!(fighters.tex_width, 0.25);
        let kebab = table.get("kebab").expect("known motive");
        assert_eq!((kebab.center_x, kebab.center_y), (0.0, 0.0));
        assert_eq!(table.back().offset_x, 0.75);
    }
}
