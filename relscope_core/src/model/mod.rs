pub mod column;
pub mod constraint;
pub mod table;

// Re-export main types for convenience
pub use column::Column;
pub use constraint::{Constraint, ForeignKey, PrimaryKey};
pub use table::{Schema, Table};
