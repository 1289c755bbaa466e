pub mod gallery;
pub mod upload;

pub use gallery::list_paintings;
pub use upload::upload_painting;
