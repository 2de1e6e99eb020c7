pub mod description;

pub use description::{
    DescriptionSource, GenerationRequest, GenerationResult, TITLE_REQUIRED_MESSAGE,
};
