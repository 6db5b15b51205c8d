//! Rule implementations for glossa.
//!
//! Each rule is a pure function over the loaded locales that compares every
//! non-primary locale with the primary one and returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `missing`: keys missing in non-primary locales
//! - `orphan`: keys in non-primary locales but not in primary
//! - `untranslated`: values identical to the primary locale
//! - `placeholder`: `{placeholder}` sets that differ from the primary locale

pub mod missing;
pub mod orphan;
pub mod placeholder;
pub mod untranslated;
