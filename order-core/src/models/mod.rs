mod payment_method;
mod product_line;
mod progress;
mod screen;

pub use payment_method::{ParseMethodError, PaymentMethod};
pub use product_line::ProductLine;
pub use progress::{Progress, STEP_LABELS, TOTAL_STEPS};
pub use screen::Screen;
