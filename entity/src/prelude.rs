pub use super::admin::Entity as Admin;
pub use super::booking::Entity as Booking;
pub use super::complaint::Entity as Complaint;
pub use super::hotel::Entity as Hotel;
pub use super::user::Entity as User;
