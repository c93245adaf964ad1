//! Blog entities: categories, tags, posts, comments, bookmark lists.

pub mod bookmark;
pub mod category;
pub mod comment;
pub mod post;
pub mod profile;

pub use bookmark::{BookmarkList, CreateBookmarkList};
pub use category::{slugify, Category, CreateCategory, Tag};
pub use comment::{Comment, CreateComment};
pub use post::{CreatePost, Post, PostStatus};
pub use profile::BlogProfile;
