pub mod description;
pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod templates;

pub use description::{DescriptionService, ProductInput};
pub use metrics::{get_metrics, init_metrics};
pub use providers::{OpenRouterProvider, TextProvider};
pub use templates::{RandomSelector, TemplateSelector};
