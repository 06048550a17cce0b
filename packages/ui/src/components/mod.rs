//! Small presentational building blocks.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};
