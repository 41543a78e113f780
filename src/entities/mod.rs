//! sea-orm entities backing the admin console.

pub mod contact_message;
pub mod designer;
pub mod designer_hire_request;
pub mod designer_rating;
pub mod designer_work;
pub mod order;
pub mod order_item;
pub mod return_request;
pub mod seller;
pub mod seller_bank_details;
pub mod seller_business;
pub mod seller_delivery_details;
pub mod user;
