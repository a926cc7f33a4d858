//! Client-side state models.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by their owners: `PaletteState` is
//! local to the palette, `PageState` is provided as context by the app root.

pub mod page;
pub mod palette;
