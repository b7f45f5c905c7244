//! The standard FAIR indicator rule set
//!
//! One module per principle. Every rule is a pure function; every grade
//! comes with a justification trail explaining the judgment.

pub mod accessible;
pub mod findable;
pub mod interoperable;
pub mod reusable;
