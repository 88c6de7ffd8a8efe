/// The standard Type1 faces the writer registers on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
}

impl PdfFont {
    pub const ALL: [Self; 6] = [
        Self::Helvetica,
        Self::HelveticaBold,
        Self::HelveticaOblique,
        Self::HelveticaBoldOblique,
        Self::Courier,
        Self::CourierBold,
    ];

    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
            Self::HelveticaOblique => "F3",
            Self::HelveticaBoldOblique => "F4",
            Self::Courier => "F5",
            Self::CourierBold => "F6",
        }
    }

    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
        }
    }

    pub const fn select(bold: bool, italic: bool, monospace: bool) -> Self {
        match (monospace, bold, italic) {
            (true, true, _) => Self::CourierBold,
            (true, false, _) => Self::Courier,
            (false, true, true) => Self::HelveticaBoldOblique,
            (false, true, false) => Self::HelveticaBold,
            (false, false, true) => Self::HelveticaOblique,
            (false, false, false) => Self::Helvetica,
        }
    }

    pub const fn is_monospace(self) -> bool {
        matches!(self, Self::Courier | Self::CourierBold)
    }

    pub const fn is_bold(self) -> bool {
        matches!(self, Self::HelveticaBold | Self::HelveticaBoldOblique | Self::CourierBold)
    }
}
