mod admin;
mod booking;
mod complaint;
mod hotel;
mod user;
