mod progress;
mod spinner;
mod style;

pub use progress::LineProgress;
pub use spinner::Spinner;
pub use style::Style;
