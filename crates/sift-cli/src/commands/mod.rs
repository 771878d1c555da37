pub mod article;
pub mod criteria;
pub mod dispatch;
pub mod extraction;
pub mod keyword;
pub mod quality;
pub mod question;
pub mod review;
pub mod session;
pub mod shared;
pub mod source;
pub mod user;
