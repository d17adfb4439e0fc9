//! Paper sizes, pixel/mm dimensions, and per-size section configuration

/// A named region of the letter
///
/// Each section has its own width budget and is active or inactive
/// depending on the selected paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    TopLeft,
    TopRight,
    Body,
}

impl Section {
    /// All sections in layout order
    pub const ALL: [Section; 3] = [Section::TopLeft, Section::TopRight, Section::Body];

    /// The `id` attribute used for this section's SVG group
    pub fn g_id(self) -> &'static str {
        match self {
            Section::TopLeft => "top-left",
            Section::TopRight => "top-right",
            Section::Body => "body",
        }
    }
}

/// Supported paper formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperSize {
    A4,
    A5Portrait,
    A5Landscape,
    A6Portrait,
    A6Landscape,
}

/// Physical dimensions of a paper size
///
/// Pixel values are on a 96 DPI basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperDimensions {
    pub width: f32,
    pub height: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    pub label: &'static str,
}

/// Per-section character caps for a paper size
///
/// A cap of 0 means the section is inactive for that paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCaps {
    pub top_left: usize,
    pub top_right: usize,
    pub body: usize,
}

impl SectionCaps {
    /// Cap for a single section
    pub fn get(self, section: Section) -> usize {
        match section {
            Section::TopLeft => self.top_left,
            Section::TopRight => self.top_right,
            Section::Body => self.body,
        }
    }
}

/// Layout configuration for a paper size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperTypeConfig {
    /// Active sections, in render order. Drives both which editor fields
    /// are live and which SVG groups are emitted.
    pub fields: &'static [Section],
    /// Vertical start offset of the body section in pixels
    pub body_start_y: f32,
    pub description: &'static str,
    pub max_characters: SectionCaps,
}

impl PaperTypeConfig {
    /// Whether a section is rendered for this paper size
    pub fn is_active(&self, section: Section) -> bool {
        self.fields.contains(&section)
    }
}

impl PaperSize {
    /// All paper sizes, in menu order
    pub const ALL: [PaperSize; 5] = [
        PaperSize::A4,
        PaperSize::A5Portrait,
        PaperSize::A5Landscape,
        PaperSize::A6Portrait,
        PaperSize::A6Landscape,
    ];

    /// Canonical key used in export filenames
    pub fn key(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5Portrait => "A5Portrait",
            PaperSize::A5Landscape => "A5Landscape",
            PaperSize::A6Portrait => "A6Portrait",
            PaperSize::A6Landscape => "A6Landscape",
        }
    }

    /// Pixel and millimeter dimensions for this paper size
    pub fn dimensions(self) -> &'static PaperDimensions {
        match self {
            PaperSize::A4 => &A4_DIMENSIONS,
            PaperSize::A5Portrait => &A5_PORTRAIT_DIMENSIONS,
            PaperSize::A5Landscape => &A5_LANDSCAPE_DIMENSIONS,
            PaperSize::A6Portrait => &A6_PORTRAIT_DIMENSIONS,
            PaperSize::A6Landscape => &A6_LANDSCAPE_DIMENSIONS,
        }
    }

    /// Section activation, body start offset, and character caps
    pub fn config(self) -> &'static PaperTypeConfig {
        match self {
            PaperSize::A4 => &A4_CONFIG,
            PaperSize::A5Portrait => &A5_PORTRAIT_CONFIG,
            PaperSize::A5Landscape => &A5_LANDSCAPE_CONFIG,
            PaperSize::A6Portrait => &A6_PORTRAIT_CONFIG,
            PaperSize::A6Landscape => &A6_LANDSCAPE_CONFIG,
        }
    }
}

// Read-only process-wide tables, initialized once.

static A4_DIMENSIONS: PaperDimensions = PaperDimensions {
    width: 794.0,
    height: 1123.0,
    width_mm: 210.0,
    height_mm: 297.0,
    label: "A4",
};

static A5_PORTRAIT_DIMENSIONS: PaperDimensions = PaperDimensions {
    width: 559.0,
    height: 794.0,
    width_mm: 148.0,
    height_mm: 210.0,
    label: "A5 Portrait",
};

static A5_LANDSCAPE_DIMENSIONS: PaperDimensions = PaperDimensions {
    width: 794.0,
    height: 559.0,
    width_mm: 210.0,
    height_mm: 148.0,
    label: "A5 Landscape",
};

static A6_PORTRAIT_DIMENSIONS: PaperDimensions = PaperDimensions {
    width: 397.0,
    height: 559.0,
    width_mm: 105.0,
    height_mm: 148.0,
    label: "A6 Portrait",
};

static A6_LANDSCAPE_DIMENSIONS: PaperDimensions = PaperDimensions {
    width: 559.0,
    height: 397.0,
    width_mm: 148.0,
    height_mm: 105.0,
    label: "A6 Landscape",
};

static A4_CONFIG: PaperTypeConfig = PaperTypeConfig {
    fields: &[Section::TopLeft, Section::TopRight, Section::Body],
    body_start_y: 250.0,
    description: "Full letter format with header and body",
    max_characters: SectionCaps {
        top_left: 300,
        top_right: 150,
        body: 2500,
    },
};

static A5_PORTRAIT_CONFIG: PaperTypeConfig = PaperTypeConfig {
    fields: &[Section::Body],
    body_start_y: 80.0,
    description: "Body text only format",
    max_characters: SectionCaps {
        top_left: 0,
        top_right: 0,
        body: 1800,
    },
};

static A5_LANDSCAPE_CONFIG: PaperTypeConfig = PaperTypeConfig {
    fields: &[Section::Body],
    body_start_y: 80.0,
    description: "Body text only format",
    max_characters: SectionCaps {
        top_left: 0,
        top_right: 0,
        body: 1200,
    },
};

static A6_PORTRAIT_CONFIG: PaperTypeConfig = PaperTypeConfig {
    fields: &[Section::Body],
    body_start_y: 80.0,
    description: "Body text only format",
    max_characters: SectionCaps {
        top_left: 0,
        top_right: 0,
        body: 1000,
    },
};

static A6_LANDSCAPE_CONFIG: PaperTypeConfig = PaperTypeConfig {
    fields: &[Section::Body],
    body_start_y: 80.0,
    description: "Body text only format",
    max_characters: SectionCaps {
        top_left: 0,
        top_right: 0,
        body: 600,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let dims = PaperSize::A4.dimensions();
        assert_eq!(dims.width, 794.0);
        assert_eq!(dims.height, 1123.0);
        assert_eq!(dims.width_mm, 210.0);
        assert_eq!(dims.height_mm, 297.0);
        assert_eq!(dims.label, "A4");
    }

    #[test]
    fn test_a4_activates_all_sections() {
        let config = PaperSize::A4.config();
        assert_eq!(config.fields, &Section::ALL);
        assert_eq!(config.body_start_y, 250.0);
    }

    #[test]
    fn test_small_formats_are_body_only() {
        for size in [
            PaperSize::A5Portrait,
            PaperSize::A5Landscape,
            PaperSize::A6Portrait,
            PaperSize::A6Landscape,
        ] {
            let config = size.config();
            assert_eq!(config.fields, &[Section::Body]);
            assert_eq!(config.body_start_y, 80.0);
        }
    }

    #[test]
    fn test_zero_cap_matches_inactive_section() {
        // A cap of 0 and absence from the active field list must agree
        for size in PaperSize::ALL {
            let config = size.config();
            for section in Section::ALL {
                let cap = config.max_characters.get(section);
                assert_eq!(
                    config.is_active(section),
                    cap > 0,
                    "{:?}/{:?}: cap {} disagrees with activation",
                    size,
                    section,
                    cap
                );
            }
        }
    }

    #[test]
    fn test_body_caps_decrease_with_page_area() {
        let caps: Vec<usize> = [
            PaperSize::A4,
            PaperSize::A5Portrait,
            PaperSize::A5Landscape,
            PaperSize::A6Portrait,
            PaperSize::A6Landscape,
        ]
        .iter()
        .map(|s| s.config().max_characters.body)
        .collect();
        assert_eq!(caps, vec![2500, 1800, 1200, 1000, 600]);
    }

    #[test]
    fn test_filename_keys() {
        assert_eq!(PaperSize::A4.key(), "A4");
        assert_eq!(PaperSize::A5Landscape.key(), "A5Landscape");
    }
}
