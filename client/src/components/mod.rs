//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels render one slice of the product aggregate each and are pure
//! functions of their props, apart from local toggle state and the shared
//! cart context.

pub mod faqs;
pub mod footer;
pub mod header;
pub mod product_info;
pub mod reviews;
pub mod salt_content;
pub mod substitutes;
