//! Bodies the ephemeris oracle can be asked about.

use std::fmt::{Display, Formatter};

/// Physical bodies and computed lunar nodes queried from the oracle.
///
/// Ketu is not a separate body; callers derive it as Rahu + 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean ascending lunar node.
    MeanNode,
    /// True (osculating) ascending lunar node.
    TrueNode,
}

/// All bodies in enum order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
    Body::TrueNode,
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
            Self::TrueNode => "True Node",
        }
    }

    /// Whether this is a computed lunar node rather than a physical body.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::MeanNode | Self::TrueNode)
    }

    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
