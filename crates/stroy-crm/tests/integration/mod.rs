mod admin_users;
mod chat_room;
mod list_screens;
