pub mod insight_access;
pub mod pagination;
