pub use super::app_item::Entity as AppItem;
pub use super::blog_post::Entity as BlogPost;
pub use super::category::Entity as Category;
pub use super::contact_message::Entity as ContactMessage;
