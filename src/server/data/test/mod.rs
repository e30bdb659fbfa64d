mod blog;
mod category;
mod contact;
mod item;
mod schema;
