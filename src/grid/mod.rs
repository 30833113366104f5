//! Region distribution grid
//!
//! [`GridLayout`] decides columns, rows, widths and cell roles once;
//! [`Renderer`] turns it into terminal lines and the export module turns it
//! into sheet cells.

pub mod layout;
pub mod render;
pub mod width;

pub use layout::{Cell, ColumnWidths, GridLayout, GridRow};
pub use render::Renderer;
pub use width::display_width;
