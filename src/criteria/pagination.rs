/// Pagination mode of a [`Criteria`](super::Criteria).
///
/// Offset mode takes precedence when a criteria carries both a page number
/// and a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Unpaginated,
    /// `LIMIT limit OFFSET offset`
    Offset { limit: u64, offset: u64 },
    /// `LIMIT limit`, with the cursor bound expressed as a filter
    Cursor { limit: u64 },
}

impl Pagination {
    #[must_use]
    pub const fn limit(self) -> Option<u64> {
        match self {
            Self::Unpaginated => None,
            Self::Offset { limit, .. } | Self::Cursor { limit } => Some(limit),
        }
    }

    #[must_use]
    pub const fn offset(self) -> Option<u64> {
        match self {
            Self::Offset { offset, .. } => Some(offset),
            Self::Unpaginated | Self::Cursor { .. } => None,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Unpaginated => "none",
            Self::Offset { .. } => "offset",
            Self::Cursor { .. } => "cursor",
        }
    }
}
