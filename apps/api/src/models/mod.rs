pub mod assessment;
pub mod chat;
pub mod entry;
pub mod reference;
pub mod work_example;
