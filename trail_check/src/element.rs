use std::fmt;

/// Kind of a horizontal alignment element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    /// Tangent between two curves.
    Straight,
    /// Transition spiral.
    Clothoid,
    /// Circular arc with a signed radius.
    Radius,
}

impl ElementKind {
    /// Maps the type token used in alignment listings (`Gerade`, `Klothoide`,
    /// `Radius`) to an element kind.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Gerade" => Some(ElementKind::Straight),
            "Klothoide" => Some(ElementKind::Clothoid),
            "Radius" => Some(ElementKind::Radius),
            _ => None,
        }
    }

    /// Name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Straight => "Straight",
            ElementKind::Clothoid => "Clothoid",
            ElementKind::Radius => "Radius",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of validation findings attached to an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    pub const NONE: ErrorFlags = ErrorFlags(0);
    /// Vp jumps too much between this element and a neighbour.
    pub const VP_DIFFERENCE: ErrorFlags = ErrorFlags(1);
    /// Element is shorter than its minimum length.
    pub const BELOW_MIN_LENGTH: ErrorFlags = ErrorFlags(1 << 1);
    /// Clothoid is longer than its maximum length.
    pub const ABOVE_MAX_LENGTH: ErrorFlags = ErrorFlags(1 << 2);

    const NAMES: [(ErrorFlags, &'static str); 3] = [
        (ErrorFlags::VP_DIFFERENCE, "VpDiff"),
        (ErrorFlags::BELOW_MIN_LENGTH, "MinLength"),
        (ErrorFlags::ABOVE_MAX_LENGTH, "MaxLength"),
    ];

    pub fn insert(&mut self, other: ErrorFlags) {
        self.0 |= other.0;
    }

    pub fn contains(self, other: ErrorFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the set flags in a fixed order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for ErrorFlags {
    type Output = ErrorFlags;
    fn bitor(self, rhs: ErrorFlags) -> ErrorFlags {
        ErrorFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for ErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

/// One element of the alignment together with the values derived for it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub id: i64,
    pub kind: ElementKind,
    /// Measured length in meters.
    pub length: f64,
    /// Signed radius in meters, the sign gives the curve direction. Zero for
    /// straights and clothoids.
    pub radius: f64,
    /// Design speed in km/h, zero until assigned.
    pub vp: u32,
    pub min_length: f64,
    /// Upper length bound, only set for clothoids.
    pub max_length: Option<f64>,
    /// Minimum clothoid parameter, cached on radius elements.
    pub a_min: f64,
    /// Maximum clothoid parameter, cached on radius elements.
    pub a_max: f64,
    pub errors: ErrorFlags,
}

impl Element {
    /// Creates an element as read from input, with nothing derived yet.
    pub fn new(id: i64, kind: ElementKind, length: f64, radius: f64) -> Self {
        Self {
            id,
            kind,
            length,
            radius,
            vp: 0,
            min_length: 0.0,
            max_length: None,
            a_min: 0.0,
            a_max: 0.0,
            errors: ErrorFlags::NONE,
        }
    }

    pub fn straight(id: i64, length: f64) -> Self {
        Self::new(id, ElementKind::Straight, length, 0.0)
    }

    pub fn clothoid(id: i64, length: f64) -> Self {
        Self::new(id, ElementKind::Clothoid, length, 0.0)
    }

    pub fn arc(id: i64, length: f64, radius: f64) -> Self {
        Self::new(id, ElementKind::Radius, length, radius)
    }

    pub fn is_radius(&self) -> bool {
        self.kind == ElementKind::Radius
    }
}
