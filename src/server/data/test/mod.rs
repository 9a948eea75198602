mod booking;
mod comment;
mod item;
mod item_request;
mod user;
