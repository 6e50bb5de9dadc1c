mod artifact;
mod linear;
pub mod ols;

pub use artifact::{load_model, save_model, ModelArtifact, FORMAT_VERSION};
pub use linear::LinearModel;
