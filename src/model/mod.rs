pub mod auth;
pub mod catalog;
pub mod election;
pub mod format;
pub mod notice;
pub mod results;
pub mod validation;
pub mod view;
