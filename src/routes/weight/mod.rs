mod post;

pub use post::save_weight;
