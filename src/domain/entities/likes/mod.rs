pub mod user_like;
