pub mod alert;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod progress;
pub mod range;
pub mod select;
pub mod textarea;

pub use alert::Alert;
pub use badge::{Badge, status_color};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use progress::Progress;
pub use range::Range;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
