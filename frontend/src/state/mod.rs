pub mod demo;
pub mod notifications;
pub mod portal;
pub mod tracker;
