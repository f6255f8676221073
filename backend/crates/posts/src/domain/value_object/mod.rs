//! Value Objects

pub mod post_content;
pub mod post_title;

pub use post_content::PostContent;
pub use post_title::PostTitle;
