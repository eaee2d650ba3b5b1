mod create_item;
mod delete_item;
mod form;
mod get_about;
mod get_upload;
mod list_items;
mod login;
mod not_found;
mod put_about;
mod register;
mod update_item;

pub use create_item::create_item;
pub use delete_item::delete_item;
pub use get_about::get_about;
pub use get_upload::get_upload;
pub use list_items::list_items;
pub use login::login;
pub use not_found::not_found;
pub use put_about::put_about;
pub use register::register;
pub use update_item::update_item;
