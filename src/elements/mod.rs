//! Structural descriptors consumed by the connection assemblers

mod laminate;
mod panel;

pub use laminate::Laminate;
pub use panel::{EdgeRestraints, FieldRestraints, Panel};
