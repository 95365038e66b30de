//! Color identities for actors.
//!
//! Each actor owns one [BaseColor] from a fixed pool. A base color derives three
//! markers, one per [MarkerKind], which are what the grid actually stores. Markers
//! also carry a stable numeric code (`base code + 1/2/3`) so compact renderers can
//! store a cell in a byte and still recover the owning base color.
use serde::{Deserialize, Serialize};

/// An RGB triple for display
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The base colors an actor can be assigned, in pool order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseColor {
    #[allow(missing_docs)]
    Red,
    #[allow(missing_docs)]
    Yellow,
    #[allow(missing_docs)]
    Green,
    #[allow(missing_docs)]
    Brown,
    #[allow(missing_docs)]
    Purple,
    #[allow(missing_docs)]
    Blue,
}

/// Number of base colors, and so the maximum number of registered actors
pub const POOL_SIZE: usize = 6;

const POOL: [BaseColor; POOL_SIZE] = [
    BaseColor::Red,
    BaseColor::Yellow,
    BaseColor::Green,
    BaseColor::Brown,
    BaseColor::Purple,
    BaseColor::Blue,
];

/// the pool of base colors, in the order they are handed out
pub fn pool() -> &'static [BaseColor; POOL_SIZE] {
    &POOL
}

/// first-come, first-served: the first pool entry not in `already_used`
pub fn assign(already_used: &[BaseColor]) -> Option<BaseColor> {
    pool()
        .iter()
        .find(|color| !already_used.contains(color))
        .copied()
}

impl BaseColor {
    /// the numeric code of the base color itself. base codes have no display color
    pub fn code(self) -> u8 {
        match self {
            BaseColor::Red => 10,
            BaseColor::Yellow => 20,
            BaseColor::Green => 30,
            BaseColor::Brown => 40,
            BaseColor::Purple => 50,
            BaseColor::Blue => 60,
        }
    }

    #[allow(missing_docs)]
    pub fn from_code(code: u8) -> Option<BaseColor> {
        pool().iter().find(|c| c.code() == code).copied()
    }

    /// the marker of the given kind for this base color
    pub fn derive(self, kind: MarkerKind) -> Marker {
        Marker { base: self, kind }
    }
}

/// Which of the three sub-identities of a base color a marker is
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// the actor's current position
    Head,
    /// a cell laid in the current run
    Trail,
    /// owned ground
    Territory,
}

impl MarkerKind {
    fn offset(self) -> u8 {
        match self {
            MarkerKind::Head => 1,
            MarkerKind::Trail => 2,
            MarkerKind::Territory => 3,
        }
    }

    fn from_offset(offset: u8) -> Option<MarkerKind> {
        match offset {
            1 => Some(MarkerKind::Head),
            2 => Some(MarkerKind::Trail),
            3 => Some(MarkerKind::Territory),
            _ => None,
        }
    }
}

/// A derived sub-identity: a base color plus the kind of marker
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    /// the owning base color
    pub base: BaseColor,
    #[allow(missing_docs)]
    pub kind: MarkerKind,
}

impl Marker {
    /// numeric code of this marker, `base.code() + 1..=3`
    pub fn code(self) -> u8 {
        self.base.code() + self.kind.offset()
    }

    /// recovers a marker, and so its base color, from its code
    pub fn from_code(code: u8) -> Option<Marker> {
        let base = BaseColor::from_code(code - code % 10)?;
        let kind = MarkerKind::from_offset(code % 10)?;
        Some(Marker { base, kind })
    }
}

/// The three markers of one base color, computed together on assignment
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    #[allow(missing_docs)]
    pub base: BaseColor,
    #[allow(missing_docs)]
    pub head: Marker,
    #[allow(missing_docs)]
    pub trail: Marker,
    #[allow(missing_docs)]
    pub territory: Marker,
}

impl Palette {
    #[allow(missing_docs)]
    pub fn new(base: BaseColor) -> Self {
        Palette {
            base,
            head: base.derive(MarkerKind::Head),
            trail: base.derive(MarkerKind::Trail),
            territory: base.derive(MarkerKind::Territory),
        }
    }
}

/// display color lookup, one entry per marker
pub fn to_display_color(marker: Marker) -> Rgb {
    use BaseColor::*;
    use MarkerKind::*;
    match (marker.kind, marker.base) {
        (Head, Red) => Rgb(128, 0, 0),
        (Head, Yellow) => Rgb(128, 128, 0),
        (Head, Green) => Rgb(0, 128, 0),
        (Head, Blue) => Rgb(0, 0, 128),
        (Head, Purple) => Rgb(128, 0, 128),
        (Head, Brown) => Rgb(80, 21, 21),

        (Territory, Red) => Rgb(255, 0, 0),
        (Territory, Yellow) => Rgb(255, 255, 0),
        (Territory, Green) => Rgb(0, 255, 0),
        (Territory, Blue) => Rgb(0, 0, 255),
        (Territory, Purple) => Rgb(255, 0, 255),
        (Territory, Brown) => Rgb(165, 42, 42),

        (Trail, Red) => Rgb(255, 153, 153),
        (Trail, Yellow) => Rgb(255, 255, 153),
        (Trail, Green) => Rgb(153, 255, 153),
        (Trail, Blue) => Rgb(153, 153, 255),
        (Trail, Purple) => Rgb(255, 153, 255),
        (Trail, Brown) => Rgb(255, 84, 84),
    }
}

/// display color for a raw marker code.
///
/// # Panics
/// on codes that are not marker codes; those only come from a corrupted cell store
pub fn display_color_for_code(code: u8) -> Rgb {
    match Marker::from_code(code) {
        Some(marker) => to_display_color(marker),
        None => unreachable!("code {} has no display color", code),
    }
}
