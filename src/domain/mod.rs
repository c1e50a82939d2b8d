pub mod attachment;
pub mod author;
pub mod feed;
pub mod hub;
pub mod item;
pub mod version;

pub use attachment::Attachment;
pub use author::Author;
pub use feed::Feed;
pub use hub::Hub;
pub use item::Item;
pub use version::{Version, VERSION_1, VERSION_1_1};
