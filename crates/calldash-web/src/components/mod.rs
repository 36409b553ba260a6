//! Server-rendered dashboard components

pub mod call_details;
pub mod call_list;
pub mod composer;

pub use call_details::CallDetails;
pub use call_list::CallList;
pub use composer::Composer;
