use crate::stmt::RecordSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Query result, header first
    Rows(RecordSet),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn rows(rows: RecordSet) -> Self {
        Self::Rows(rows)
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    #[track_caller]
    pub fn into_count(self) -> u64 {
        match self {
            Self::Count(count) => count,
            _ => panic!("expected row count; response={self:#?}"),
        }
    }

    #[track_caller]
    pub fn into_rows(self) -> RecordSet {
        match self {
            Self::Rows(rows) => rows,
            _ => panic!("expected rows; response={self:#?}"),
        }
    }
}
