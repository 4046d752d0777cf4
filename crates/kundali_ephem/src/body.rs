//! Bodies an ephemeris can be queried for.

/// A body with its own ephemeris entry.
///
/// Ketu has no entry: it is always the mean node plus 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean ascending lunar node (Rahu).
    MeanNode,
}

/// All queryable bodies in chart order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }

    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
