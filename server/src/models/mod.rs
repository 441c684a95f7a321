pub mod campaign;
pub mod creator;
pub mod inquiry;
pub mod waitlist;

pub use campaign::Campaign;
pub use creator::{Creator, CreatorFilter};
pub use inquiry::{Inquiry, InquiryPayload, NewInquiry, UserType};
pub use waitlist::{WaitlistEntry, WaitlistPayload, WaitlistSignup, WaitlistSummary};
