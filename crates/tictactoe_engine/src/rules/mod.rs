//! Line and fullness rules for the board engine.
//!
//! Pure functions over a board's current contents. They are kept apart from
//! board storage so the engine can compose them in a fixed priority order.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{anti_diagonal_uniform, column_uniform, main_diagonal_uniform, row_uniform};
