pub mod blocking_adapter;
pub mod blocking_item_repo;
pub mod item_repo;
pub mod models;

pub use blocking_adapter::BlockingAdapter;
pub use blocking_item_repo::BlockingMongoItemRepository;
pub use item_repo::MongoItemRepository;
