use std::fmt;

/// The seven measurement units of an ISO 8601 duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// Canonical lowercase name, as used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Single-character designator used in duration text.
    #[must_use]
    pub fn designator(self) -> char {
        match self {
            Self::Years => 'Y',
            Self::Months | Self::Minutes => 'M',
            Self::Weeks => 'W',
            Self::Days => 'D',
            Self::Hours => 'H',
            Self::Seconds => 'S',
        }
    }

    /// The grammar segment this unit belongs to.
    #[must_use]
    pub fn segment(self) -> Segment {
        match self {
            Self::Years | Self::Months | Self::Days => Segment::Date,
            Self::Weeks => Segment::Week,
            Self::Hours | Self::Minutes | Self::Seconds => Segment::Time,
        }
    }
}

/// Grammar segment of a duration string.
///
/// Date designators sit between `P` and `T`, time designators after `T`.
/// Weeks are classified apart from the other date units: ISO 8601
/// defines `P1W` as its own form, though the sweep grammar orders `W`
/// with the date designators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Date,
    Time,
    Week,
}

/// Upper range limit applied to a measurement at a given parse site.
///
/// Limits are a property of the parse site, not the unit: days are
/// bounded by 366 in the ordinal-day form and 31 in the calendar form,
/// and are unbounded in designator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Unbounded,
    Inclusive(u32),
    Exclusive(u32),
}

impl Bound {
    /// Whether a quantity satisfies `0 <= quantity (<|<=) limit`.
    pub(crate) fn contains(self, quantity: f64) -> bool {
        match self {
            Self::Unbounded => quantity >= 0.0,
            Self::Inclusive(limit) => quantity >= 0.0 && quantity <= f64::from(limit),
            Self::Exclusive(limit) => quantity >= 0.0 && quantity < f64::from(limit),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "[0..+∞)"),
            Self::Inclusive(limit) => write!(f, "[0..{limit}]"),
            Self::Exclusive(limit) => write!(f, "[0..{limit})"),
        }
    }
}

/// Ordered designator tables driving the left-to-right sweep parser.
/// Designators must appear in table order within their segment. Weeks
/// sit between months and days in the date table; earlier revisions of
/// the grammar made weeks exclusive of all other units, but the current
/// grammar orders them (`P1W1D` and `P1WT1H` are valid, `P1W2W` and
/// `P1DT5S2W` are not).
pub(crate) const DATE_DESIGNATORS: [(char, Unit); 4] = [
    ('Y', Unit::Years),
    ('M', Unit::Months),
    ('W', Unit::Weeks),
    ('D', Unit::Days),
];

pub(crate) const TIME_DESIGNATORS: [(char, Unit); 3] = [
    ('H', Unit::Hours),
    ('M', Unit::Minutes),
    ('S', Unit::Seconds),
];
