mod delete;
mod post;

pub use delete::delete_feeding;
pub use post::log_feeding;
