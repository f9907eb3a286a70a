use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Color {
    Purple,
    Blue,
    Orange,
    Teal,
    Black,
    Green,
    Pink,
    Yellow,
    Red,
    Khaki,
    PaleRed,
    PaleBlue,
}

impl Color {
    pub fn rgb(self) -> Rgb {
        match self {
            Color::Purple => Rgb(0x81, 0x4E, 0xD1),
            Color::Blue => Rgb(0x13, 0x83, 0xC6),
            Color::Orange => Rgb(0xE1, 0x6A, 0x2C),
            Color::Teal => Rgb(0x00, 0x9C, 0xA2),
            Color::Black => Rgb(0x00, 0x00, 0x00),
            Color::Pink => Rgb(0xED, 0x39, 0x81),
            Color::Yellow => Rgb(0xEF, 0xCD, 0x17),
            Color::Green => Rgb(0x00, 0x9D, 0x4E),
            Color::Red => Rgb(0xE3, 0x37, 0x1E),
            Color::Khaki => Rgb(0xF0, 0xE6, 0x8C),
            Color::PaleRed => Rgb(0xFF, 0x48, 0x58),
            Color::PaleBlue => Rgb(0x46, 0xB2, 0xE8),
        }
    }
}

pub const INTRON_COLOR: Color = Color::Black;
pub const EXON_COLOR: Color = Color::Teal;

const MOTIF_COLORS: [Color; 10] = [
    Color::Blue,
    Color::Purple,
    Color::Orange,
    Color::Pink,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Khaki,
    Color::PaleRed,
    Color::PaleBlue,
];

/// Returns `count` distinct motif colors. Small sets use the named colors;
/// larger ones are spread evenly around the hue wheel. Entry `i` depends
/// only on `i` and `count`.
pub fn motif_palette(count: usize) -> Vec<Rgb> {
    if count <= MOTIF_COLORS.len() {
        return MOTIF_COLORS[..count].iter().map(|c| c.rgb()).collect();
    }
    (0..count)
        .map(|index| hsv_to_rgb(360.0 * index as f64 / count as f64, 0.75, 0.85))
        .collect()
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let offset = value - chroma;
    let to_byte = |channel: f64| ((channel + offset) * 255.0).round() as u8;
    Rgb(to_byte(r), to_byte(g), to_byte(b))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Intron,
    Exon,
    Motif(String),
}

impl fmt::Display for ColorKey {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorKey::Intron => write!(formatter, "intron"),
            ColorKey::Exon => write!(formatter, "exon"),
            ColorKey::Motif(motif) => write!(formatter, "{}", motif),
        }
    }
}

/// Index into a [`ColorTable`].
pub type ColorRef = usize;

/// Ordered color assignment: intron, exon, then one entry per motif in
/// the order the motifs were given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorTable {
    entries: Vec<(ColorKey, Rgb)>,
}

impl ColorTable {
    pub const INTRON: ColorRef = 0;
    pub const EXON: ColorRef = 1;

    pub fn new(motifs: &[String]) -> Self {
        let mut entries = vec![
            (ColorKey::Intron, INTRON_COLOR.rgb()),
            (ColorKey::Exon, EXON_COLOR.rgb()),
        ];
        for (motif, rgb) in motifs.iter().zip(motif_palette(motifs.len())) {
            entries.push((ColorKey::Motif(motif.clone()), rgb));
        }
        Self { entries }
    }

    pub fn motif_ref(motif_index: usize) -> ColorRef {
        Self::EXON + 1 + motif_index
    }

    pub fn get(&self, color: ColorRef) -> Option<&(ColorKey, Rgb)> {
        self.entries.get(color)
    }

    pub fn rgb(&self, color: ColorRef) -> Option<Rgb> {
        self.entries.get(color).map(|(_, rgb)| *rgb)
    }

    pub fn entries(&self) -> &[(ColorKey, Rgb)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
