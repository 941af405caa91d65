//! List-query vocabulary shared by the entity repositories
//!
//! Search, sort and pagination inputs are normalized at this boundary:
//! unknown sort fields fall back to `id`, unknown directions to
//! ascending, and limit/offset are clamped before they reach SQL.

/// Hard cap on page size; larger requests are silently truncated
pub const MAX_LIMIT: i64 = 500;

/// Page size used when callers do not ask for one
pub const DEFAULT_LIMIT: i64 = 10;

/// Columns the list query may sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
    CreatedAt,
}

impl SortField {
    /// Parse a caller-supplied field name; anything outside the
    /// allow-list falls back to `Id`
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "created_at" => Self::CreatedAt,
            _ => Self::Id,
        }
    }

    /// Column token used in ORDER BY
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction; ascending unless explicitly `desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse_or_default(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// SQL keyword for ORDER BY
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Parameters for filtered, sorted, paginated listing
///
/// `search` matches case-insensitively as a substring against `name`
/// or `description`. Ties between equal `order_by` values keep the
/// database's order; there is no secondary sort key.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub search: Option<String>,
    pub order_by: SortField,
    pub direction: SortDirection,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search: None,
            order_by: SortField::Id,
            direction: SortDirection::Asc,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListParams {
    /// Clamp limit and offset to their allowed ranges
    pub fn normalize(mut self) -> Self {
        self.limit = self.limit.clamp(0, MAX_LIMIT);
        self.offset = self.offset.max(0);
        self
    }
}
