mod post;

pub use post::submit_passcode;
